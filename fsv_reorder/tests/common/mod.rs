#![allow(dead_code)]
use fsv_reorder::{DataLayout, DataType, DeviceLimits, ReorderArguments, TensorDescriptor, TensorShape};

pub const DEFAULT_DEVICE: DeviceLimits = DeviceLimits {
    max_work_group_size: 256,
    max_local_memory_bytes: 64 * 1024,
};

pub fn output_layout_for(shape: &TensorShape) -> DataLayout {
    if shape.depth.is_some() {
        DataLayout::Bfzyx
    } else {
        DataLayout::Bfyx
    }
}

pub fn input_layout_for(shape: &TensorShape) -> DataLayout {
    if shape.depth.is_some() {
        DataLayout::BFsZyxFsv16
    } else {
        DataLayout::BFsYxFsv16
    }
}

/// Blocked input reordered into the matching planar layout with the same data type.
pub fn blocked_to_planar(
    shape: TensorShape,
    data_type: DataType,
    device: DeviceLimits,
) -> ReorderArguments {
    ReorderArguments::new(
        TensorDescriptor::new(data_type, input_layout_for(&shape), shape),
        TensorDescriptor::new(data_type, output_layout_for(&shape), shape),
        device,
    )
}

pub fn blocked_to_planar_f32(shape: TensorShape) -> ReorderArguments {
    blocked_to_planar(shape, DataType::F32, DEFAULT_DEVICE)
}
