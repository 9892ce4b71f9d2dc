use console::Style;
use fsv_reorder::{BlockedToPlanarKernel, ReorderCore};

use crate::request::RequestFile;

pub fn handle_validate(request_path: String) -> Result<bool, Box<dyn std::error::Error>> {
    let request = RequestFile::load(request_path)?;
    let kernel = BlockedToPlanarKernel::new(request.config);
    let is_valid = kernel.validate(&request.arguments);

    let style = if is_valid {
        Style::new().green().bold()
    } else {
        Style::new().red().bold()
    };
    println!("{}: {}", kernel.name(), style.apply_to(if is_valid { "supported" } else { "unsupported" }));
    Ok(is_valid)
}
