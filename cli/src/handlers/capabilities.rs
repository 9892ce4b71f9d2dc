use fsv_reorder::{BlockedToPlanarKernel, ReorderCore};

pub fn handle_capabilities() -> Result<(), Box<dyn std::error::Error>> {
    let kernel = BlockedToPlanarKernel::default();
    let key_data = serde_json::to_string_pretty(kernel.supported_key())?;
    println!("{key_data}");
    Ok(())
}
