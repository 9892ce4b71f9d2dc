mod common;

use common::{DEFAULT_DEVICE, blocked_to_planar, blocked_to_planar_f32};
use fsv_reorder::{
    BlockedToPlanarConfig, BlockedToPlanarKernel, DataLayout, DataType, DeviceLimits, GridSize, ReorderCore,
    ReorderError, TensorShape,
    kernel::blocked_to_planar::{TileConfiguration, global_work_size, select_local_work_size, work_item_budget},
};
use proptest::prelude::*;

#[test]
fn test_end_to_end_2d_grid() {
    let kernel = BlockedToPlanarKernel::default();
    let arguments = blocked_to_planar_f32(TensorShape::new_2d(1, 32, 4, 20));

    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size, GridSize::new(2, 12, 2));
    assert_eq!(dispatch.local_work_size, GridSize::new(2, 12, 2));
    assert_eq!(dispatch.work_group_count(), GridSize::new(1, 1, 1));
}

#[test]
fn test_volumetric_grid_includes_depth() {
    let kernel = BlockedToPlanarKernel::default();
    let arguments = blocked_to_planar_f32(TensorShape::new_3d(2, 16, 3, 5, 9));

    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size, GridSize::new(2, 2 * 5 * 3, 2));
    assert!(dispatch.local_work_size.divides(&dispatch.global_work_size));
}

#[test]
fn test_batch_and_feature_slices_share_z_axis() {
    let tile = TileConfiguration {
        tile_size: 8,
        fsv_alignment: 16,
    };
    let arguments = blocked_to_planar_f32(TensorShape::new_2d(3, 48, 2, 8));
    assert_eq!(global_work_size(&arguments, &tile).unwrap(), GridSize::new(2, 2, 9));
}

#[test]
fn test_prime_extent_above_budget_falls_back_to_one() {
    let kernel = BlockedToPlanarKernel::default();
    // 257 rows of a single tile each: prime and larger than what is left after the x axis.
    let arguments = blocked_to_planar_f32(TensorShape::new_2d(1, 16, 257, 8));

    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size.y, 257);
    assert_eq!(dispatch.local_work_size.y, 1);
    assert_eq!(dispatch.local_work_size.x, 2);
}

#[test]
fn test_prime_extent_within_budget_is_taken_whole() {
    assert_eq!(select_local_work_size(GridSize::new(13, 1, 1), 16), GridSize::new(13, 1, 1));
    assert_eq!(select_local_work_size(GridSize::new(17, 1, 1), 16), GridSize::new(1, 1, 1));
}

#[test]
fn test_local_memory_limits_group_size() {
    let kernel = BlockedToPlanarKernel::default();
    let device = DeviceLimits::new(256, 4096);
    let arguments = blocked_to_planar(TensorShape::new_2d(1, 32, 4, 20), DataType::F32, device);

    assert_eq!(work_item_budget(&device, 4, 8), 16);
    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.local_work_size, GridSize::new(2, 6, 1));
    assert!(4 * 8 * 8 * dispatch.local_work_size.volume() <= 4096);
}

#[test]
fn test_work_group_limit_caps_budget() {
    let device = DeviceLimits::new(32, 1 << 20);
    assert_eq!(work_item_budget(&device, 1, 8), 32);

    let kernel = BlockedToPlanarKernel::default();
    let arguments = blocked_to_planar(TensorShape::new_2d(1, 64, 16, 64), DataType::U8, device);
    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size, GridSize::new(2, 128, 4));
    assert_eq!(dispatch.local_work_size, GridSize::new(2, 16, 1));
}

#[test]
fn test_zero_budget_is_unsupported() {
    let kernel = BlockedToPlanarKernel::default();
    let device = DeviceLimits::new(256, 100);
    let arguments = blocked_to_planar(TensorShape::new_2d(1, 16, 8, 8), DataType::F32, device);

    let error = kernel.set_default(&arguments).unwrap_err();
    assert!(matches!(error, ReorderError::UnsupportedConfiguration(_)));
}

#[test]
fn test_overflowing_global_work_size_is_unsupported() {
    let kernel = BlockedToPlanarKernel::default();
    let arguments = blocked_to_planar_f32(TensorShape::new_2d(1usize << 33, 16usize << 33, 1, 8));
    assert!(kernel.validate(&arguments));

    let error = kernel.set_default(&arguments).unwrap_err();
    assert!(matches!(error, ReorderError::UnsupportedConfiguration(_)));
    assert!(kernel.kernels_data(&arguments).is_err());

    let volumetric = blocked_to_planar_f32(TensorShape::new_3d(1, 16, 1usize << 31, 1usize << 31, 1usize << 6));
    assert!(matches!(kernel.set_default(&volumetric), Err(ReorderError::UnsupportedConfiguration(_))));
}

#[test]
fn test_dispatch_records_tile_memory() {
    let kernel = BlockedToPlanarKernel::default();
    let device = DeviceLimits::new(256, 4096);
    let arguments = blocked_to_planar(TensorShape::new_2d(1, 32, 4, 20), DataType::F32, device);

    let dispatch = kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.local_memory_per_work_item, 4 * 8 * 8);
    assert_eq!(dispatch.local_memory_per_group(), Some(4 * 8 * 8 * 12));
    assert!(dispatch.check(&device).is_ok());

    let smaller_device = DeviceLimits::new(256, 2048);
    assert!(matches!(dispatch.check(&smaller_device), Err(ReorderError::UnsupportedConfiguration(_))));
}

#[test]
fn test_narrow_tile_for_64_bit_elements() {
    let shape = TensorShape::new_2d(1, 16, 4, 10);
    let arguments = blocked_to_planar(shape, DataType::I64, DEFAULT_DEVICE);

    let default_kernel = BlockedToPlanarKernel::default();
    assert_eq!(default_kernel.tile_configuration(&arguments).unwrap().tile_size, 8);
    let dispatch = default_kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size, GridSize::new(2, 8, 1));

    let narrow_kernel = BlockedToPlanarKernel::new(BlockedToPlanarConfig {
        narrow_tile_for_64_bit: true,
        ..Default::default()
    });
    assert_eq!(narrow_kernel.tile_configuration(&arguments).unwrap().tile_size, 4);
    let dispatch = narrow_kernel.set_default(&arguments).unwrap();
    assert_eq!(dispatch.global_work_size, GridSize::new(4, 12, 1));

    let f32_arguments = blocked_to_planar(shape, DataType::F32, DEFAULT_DEVICE);
    assert_eq!(narrow_kernel.tile_configuration(&f32_arguments).unwrap().tile_size, 8);
}

#[test]
fn test_planar_input_has_no_plan() {
    let kernel = BlockedToPlanarKernel::default();
    let mut arguments = blocked_to_planar_f32(TensorShape::new_2d(1, 16, 8, 8));
    arguments.input.layout = DataLayout::Bfyx;

    let error = kernel.set_default(&arguments).unwrap_err();
    assert!(matches!(error, ReorderError::UnsupportedConfiguration(_)));
}

const SUPPORTED_DATA_TYPES: [DataType; 9] = [
    DataType::F16,
    DataType::F32,
    DataType::U8,
    DataType::U16,
    DataType::U32,
    DataType::I8,
    DataType::I16,
    DataType::I32,
    DataType::I64,
];

fn shape_strategy() -> impl Strategy<Value = TensorShape> {
    (1usize..=4, 1usize..=8, proptest::option::of(1usize..=6), 1usize..=64, 1usize..=96).prop_map(
        |(batch, slices, depth, height, width)| TensorShape {
            batch,
            feature: slices * 16,
            depth,
            height,
            width,
        },
    )
}

fn device_strategy() -> impl Strategy<Value = DeviceLimits> {
    (1usize..=1024, 1024usize..=(256 * 1024)).prop_map(|(group, memory)| DeviceLimits::new(group, memory))
}

proptest! {
    #[test]
    fn prop_local_work_size_tiles_global_exactly(
        shape in shape_strategy(),
        data_type in proptest::sample::select(SUPPORTED_DATA_TYPES.to_vec()),
        device in device_strategy()
    ) {
        let kernel = BlockedToPlanarKernel::default();
        let arguments = blocked_to_planar(shape, data_type, device);
        let dispatch = kernel.set_default(&arguments).unwrap();

        let global = dispatch.global_work_size.as_array();
        let local = dispatch.local_work_size.as_array();
        for axis in 0..3 {
            prop_assert!(local[axis] >= 1);
            prop_assert_eq!(global[axis] % local[axis], 0);
        }
    }

    #[test]
    fn prop_local_work_size_respects_device_limits(
        shape in shape_strategy(),
        data_type in proptest::sample::select(SUPPORTED_DATA_TYPES.to_vec()),
        device in device_strategy()
    ) {
        let kernel = BlockedToPlanarKernel::default();
        let arguments = blocked_to_planar(shape, data_type, device);
        let tile_size = kernel.tile_configuration(&arguments).unwrap().tile_size;
        let dispatch = kernel.set_default(&arguments).unwrap();

        let work_items = dispatch.local_work_size.volume();
        prop_assert!(work_items <= device.max_work_group_size);
        prop_assert!(data_type.size_in_bytes() * tile_size * tile_size * work_items <= device.max_local_memory_bytes);
        prop_assert!(dispatch.check(&device).is_ok());
    }

    #[test]
    fn prop_plan_is_deterministic(
        shape in shape_strategy(),
        device in device_strategy()
    ) {
        let kernel = BlockedToPlanarKernel::default();
        let arguments = blocked_to_planar(shape, DataType::F16, device);
        prop_assert_eq!(kernel.set_default(&arguments).unwrap(), kernel.set_default(&arguments.clone()).unwrap());
    }
}
