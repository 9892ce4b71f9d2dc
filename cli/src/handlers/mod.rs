mod capabilities;
mod plan;
mod validate;

pub use capabilities::handle_capabilities;
pub use plan::{OutputFormat, handle_plan};
pub use validate::handle_validate;
