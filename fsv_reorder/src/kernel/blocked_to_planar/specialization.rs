use super::tile_configuration::TileConfiguration;
use crate::{DispatchDescriptor, JitConstants, ReorderArguments, ReorderError, ReorderResult};

pub const X_REMAINDER_CONDITION: &str = "(x >= (INPUT0_SIZE_X - X_REMAINDER_SIZE)) && (x < INPUT0_SIZE_X)";

/// Compile-time parameters of the blocked-to-planar kernel template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialization {
    pub output_tiled_order: &'static str,
    pub feature_slice_count: usize,
    pub tile_size: usize,
    pub fsv_alignment: usize,
    pub transpose_buffer_size: usize,
    /// Width of the last, partial tile of a row. `None` when rows hold whole tiles only.
    pub x_remainder: Option<usize>,
}

impl Specialization {
    pub fn select(
        arguments: &ReorderArguments,
        tile: &TileConfiguration,
        dispatch: &DispatchDescriptor,
    ) -> ReorderResult<Self> {
        let remainder = arguments.input.x() % tile.tile_size;
        Ok(Self {
            output_tiled_order: tiled_output_order(arguments.output.rank())?,
            feature_slice_count: arguments.input.feature().div_ceil(tile.fsv_alignment),
            tile_size: tile.tile_size,
            fsv_alignment: tile.fsv_alignment,
            transpose_buffer_size: tile.tile_size * dispatch.local_work_size.volume(),
            x_remainder: (remainder != 0).then_some(remainder),
        })
    }

    pub fn jit_constants(&self) -> JitConstants {
        let mut jit = JitConstants::new();
        jit.add_constant("OUTPUT_TILED_ORDER", self.output_tiled_order);
        jit.add_constant("INPUT0_FEATURE_SLICE_NUM", self.feature_slice_count);
        jit.add_constant("TILE_SIZE", self.tile_size);
        jit.add_constant("FSV_ALIGNMENT", self.fsv_alignment);
        jit.add_constant("TRANS_BUF_SIZE", self.transpose_buffer_size);
        if let Some(remainder) = self.x_remainder {
            jit.add_constant("X_REMAINDER_SIZE", remainder);
            jit.add_constant("X_REMAINDER_CONDITION", X_REMAINDER_CONDITION);
        }
        jit
    }
}

/// Output coordinate expression for the element at local feature offset `lh`.
pub fn tiled_output_order(output_rank: usize) -> ReorderResult<&'static str> {
    match output_rank {
        4 => Ok("b, f + lh, y, x"),
        5 => Ok("b, f + lh, z, y, x"),
        rank => Err(ReorderError::unsupported(format!("no tiled output order for rank {rank}"))),
    }
}
