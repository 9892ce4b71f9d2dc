mod config;
mod dispatch_descriptor;
mod kernel;
mod specialization;
mod tile_configuration;

pub use config::{BlockedToPlanarConfig, ChannelAlignmentPolicy};
pub use dispatch_descriptor::{global_work_size, select_local_work_size, work_item_budget};
pub use kernel::BlockedToPlanarKernel;
pub use specialization::{Specialization, X_REMAINDER_CONDITION, tiled_output_order};
pub use tile_configuration::{DEFAULT_TILE_SIZE, MIN_TILE_SIZE, TileConfiguration, fsv_alignment, tile_size};
