use super::BlockedToPlanarConfig;
use crate::{DataLayout, ReorderArguments, ReorderError, ReorderResult};

pub const DEFAULT_TILE_SIZE: usize = 8;
pub const MIN_TILE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileConfiguration {
    /// Edge of the square tile moved per work-item.
    pub tile_size: usize,
    /// Features per block of the input layout.
    pub fsv_alignment: usize,
}

impl TileConfiguration {
    pub fn select(
        config: &BlockedToPlanarConfig,
        arguments: &ReorderArguments,
    ) -> ReorderResult<Self> {
        Ok(Self {
            tile_size: tile_size(config, arguments),
            fsv_alignment: fsv_alignment(arguments)?,
        })
    }
}

pub fn tile_size(
    config: &BlockedToPlanarConfig,
    arguments: &ReorderArguments,
) -> usize {
    let has_64_bit = arguments.input.data_type.is_64_bit() || arguments.output.data_type.is_64_bit();
    if config.narrow_tile_for_64_bit && has_64_bit {
        MIN_TILE_SIZE
    } else {
        DEFAULT_TILE_SIZE
    }
}

pub fn fsv_alignment(arguments: &ReorderArguments) -> ReorderResult<usize> {
    match arguments.input.layout {
        DataLayout::BFsYxFsv16 | DataLayout::BFsZyxFsv16 => Ok(16),
        DataLayout::Bfyx | DataLayout::Bfzyx | DataLayout::Bfwzyx => Err(ReorderError::unsupported(format!(
            "no feature alignment for input layout {}",
            arguments.input.layout
        ))),
    }
}
