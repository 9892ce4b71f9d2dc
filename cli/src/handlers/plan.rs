use clap::ValueEnum;
use comfy_table::{CellAlignment, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use console::Style;
use fsv_reorder::{BlockedToPlanarKernel, KernelData, ReorderCore};

use crate::request::RequestFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Kernel data as pretty-printed JSON
    Json,
    /// Specialization constants as preprocessor definitions
    Defines,
    /// Dispatch and constants as tables
    Table,
}

pub fn handle_plan(
    request_path: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = RequestFile::load(request_path)?;
    let kernel = BlockedToPlanarKernel::new(request.config);

    let kernels = kernel.kernels_data(&request.arguments)?;
    let Some(data) = kernels.first() else {
        return Err(format!("{} cannot service this request", kernel.name()).into());
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        },
        OutputFormat::Defines => {
            for define in data.jit_constants.to_defines() {
                println!("{define}");
            }
        },
        OutputFormat::Table => print_tables(data),
    }
    Ok(())
}

fn print_tables(data: &KernelData) {
    let style_title = Style::new().bold();
    println!("{}", style_title.apply_to(format!("{} (priority {})", data.entry_point, data.priority.value())));

    let mut dispatch_table = Table::new();
    dispatch_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "x", "y", "z"]);
    let global = data.dispatch.global_work_size;
    let local = data.dispatch.local_work_size;
    dispatch_table.add_row(vec!["global".to_string(), global.x.to_string(), global.y.to_string(), global.z.to_string()]);
    dispatch_table.add_row(vec!["local".to_string(), local.x.to_string(), local.y.to_string(), local.z.to_string()]);
    for column in dispatch_table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{dispatch_table}");

    let mut constants_table = Table::new();
    constants_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["constant", "value"]);
    for (name, value) in data.jit_constants.iter() {
        constants_table.add_row(vec![name.to_string(), value.to_string()]);
    }
    println!("{constants_table}");
}
