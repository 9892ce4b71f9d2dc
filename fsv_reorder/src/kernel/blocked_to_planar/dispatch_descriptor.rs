use super::tile_configuration::TileConfiguration;
use crate::{
    DataLayout, DeviceLimits, DispatchDescriptor, GridSize, ReorderArguments, ReorderError, ReorderResult,
};

impl DispatchDescriptor {
    /// Grid for moving `tile_size` x `tile_size` tiles out of a feature-blocked input.
    pub fn blocked_to_planar(
        arguments: &ReorderArguments,
        tile: &TileConfiguration,
    ) -> ReorderResult<Self> {
        let global_work_size = global_work_size(arguments, tile)?;
        let budget = work_item_budget(&arguments.device, arguments.input.element_size(), tile.tile_size);
        if budget == 0 {
            return Err(ReorderError::unsupported(format!(
                "{} bytes of local memory cannot hold a {}x{} tile of {}-byte elements",
                arguments.device.max_local_memory_bytes,
                tile.tile_size,
                tile.tile_size,
                arguments.input.element_size()
            )));
        }
        let local_work_size = select_local_work_size(global_work_size, budget);
        let tile_bytes = arguments.input.element_size() * tile.tile_size * tile.tile_size;
        Ok(Self::new(global_work_size, local_work_size).with_local_memory_per_work_item(tile_bytes))
    }
}

/// `x`: tiles across one feature block, `y`: tiles along the spatial axes,
/// `z`: batches times feature slices.
pub fn global_work_size(
    arguments: &ReorderArguments,
    tile: &TileConfiguration,
) -> ReorderResult<GridSize> {
    let input = &arguments.input;
    let x_tiles = input.x().div_ceil(tile.tile_size);
    let spatial = match input.layout {
        DataLayout::BFsYxFsv16 => x_tiles.checked_mul(input.y()),
        DataLayout::BFsZyxFsv16 => x_tiles.checked_mul(input.y()).and_then(|tiles| tiles.checked_mul(input.z())),
        DataLayout::Bfyx | DataLayout::Bfzyx | DataLayout::Bfwzyx => {
            return Err(ReorderError::unsupported(format!("no work size for input layout {}", input.layout)));
        },
    };
    let slices = input.batch().checked_mul(input.feature().div_ceil(tile.fsv_alignment));
    match (spatial, slices) {
        (Some(spatial), Some(slices)) => {
            Ok(GridSize::new(tile.fsv_alignment.div_ceil(tile.tile_size), spatial, slices))
        },
        _ => Err(ReorderError::unsupported(format!(
            "global work size of shape {:?} overflows usize",
            input.shape.dims()
        ))),
    }
}

/// Work-items per group allowed by both the group size limit and the local
/// memory needed for one tile per work-item.
pub fn work_item_budget(
    device: &DeviceLimits,
    element_size: usize,
    tile_size: usize,
) -> usize {
    let tile_bytes = element_size * tile_size * tile_size;
    if tile_bytes == 0 {
        return device.max_work_group_size;
    }
    device.max_work_group_size.min(device.max_local_memory_bytes / tile_bytes)
}

/// Picks, axis by axis, the largest exact divisor of the global extent that
/// fits in what is left of `max_work_items`.
pub fn select_local_work_size(
    global: GridSize,
    max_work_items: usize,
) -> GridSize {
    let mut remaining = max_work_items;
    let mut local = [1usize; 3];
    for (axis, extent) in global.as_array().into_iter().enumerate() {
        local[axis] = largest_divisor_within(extent, remaining);
        log::trace!("axis {axis}: global {extent}, budget {remaining}, local {}", local[axis]);
        remaining /= local[axis];
    }
    GridSize::from(local)
}

fn largest_divisor_within(
    extent: usize,
    budget: usize,
) -> usize {
    let mut best = 1;
    let max_divisor = ((extent as f64).sqrt() + 1.0) as usize;
    for divisor in 1..=max_divisor {
        if extent % divisor != 0 {
            continue;
        }
        let complement = extent / divisor;
        if complement <= budget {
            best = best.max(complement);
        }
        if divisor <= budget {
            best = best.max(divisor);
        }
    }
    best
}
