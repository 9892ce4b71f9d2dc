//! Preconditions and constants shared by every reorder kernel variant.

use super::{DispatchDescriptor, KernelArgument, KernelData, KernelPriority, ParamsKey, ReorderArguments};
use crate::{JitConstants, ReorderError, ReorderResult, TensorDescriptor};

/// Generic reorder preconditions: capability coverage and shape sanity.
pub fn validate(
    key: &ParamsKey,
    arguments: &ReorderArguments,
) -> bool {
    match key.check(arguments).and_then(|_| check_shapes(arguments)) {
        Ok(()) => true,
        Err(error) => {
            log::debug!("reorder rejected: {error}");
            false
        },
    }
}

fn check_shapes(arguments: &ReorderArguments) -> ReorderResult<()> {
    let input = &arguments.input;
    let output = &arguments.output;

    for (name, tensor) in [("input", input), ("output", output)] {
        if tensor.shape.has_zero_extent() {
            return Err(ReorderError::unsupported(format!("{name} tensor {:?} is empty", tensor.shape.dims())));
        }
        if !shape_fits_layout(tensor) {
            return Err(ReorderError::unsupported(format!(
                "{name} shape of rank {} does not fit layout {}",
                tensor.shape.rank(),
                tensor.layout
            )));
        }
        check_representable(name, tensor)?;
        if let Some(pitches) = &tensor.pitches {
            if pitches.len() != tensor.shape.rank() {
                return Err(ReorderError::unsupported(format!(
                    "{name} has {} pitches for {} dimensions",
                    pitches.len(),
                    tensor.shape.rank()
                )));
            }
        }
    }

    if !input.shape.same_extents(&output.shape) {
        return Err(ReorderError::unsupported(format!(
            "input extents {:?} differ from output extents {:?}",
            input.shape.dims(),
            output.shape.dims()
        )));
    }
    Ok(())
}

/// Extents, offset and pitches are emitted as signed 64-bit constants.
fn check_representable(
    name: &str,
    tensor: &TensorDescriptor,
) -> ReorderResult<()> {
    let pitches = tensor.pitches.iter().flatten().copied();
    let mut values = tensor.shape.dims().into_iter().chain([tensor.offset]).chain(pitches);
    match values.find(|&value| i64::try_from(value).is_err()) {
        Some(value) => Err(ReorderError::unsupported(format!(
            "{name} value {value} does not fit a 64-bit kernel constant"
        ))),
        None => Ok(()),
    }
}

fn shape_fits_layout(tensor: &TensorDescriptor) -> bool {
    if tensor.layout.is_blocked() {
        tensor.shape.rank() == tensor.layout.dimension_count()
    } else {
        tensor.shape.rank() <= tensor.layout.dimension_count()
    }
}

/// Type, layout and extent constants for both tensors of the request.
pub fn jit_constants(arguments: &ReorderArguments) -> ReorderResult<JitConstants> {
    check_representable("input", &arguments.input)?;
    check_representable("output", &arguments.output)?;

    let mut jit = JitConstants::new();
    add_tensor_constants(&mut jit, "INPUT0", &arguments.input);
    add_tensor_constants(&mut jit, "OUTPUT", &arguments.output);
    Ok(jit)
}

fn add_tensor_constants(
    jit: &mut JitConstants,
    prefix: &str,
    tensor: &TensorDescriptor,
) {
    jit.add_constant(format!("{prefix}_TYPE"), tensor.data_type.kernel_type_name());
    jit.add_constant(format!("{prefix}_LAYOUT_{}", tensor.layout.name().to_ascii_uppercase()), 1usize);
    jit.add_constant(format!("{prefix}_DIMS"), tensor.rank());
    jit.add_constant(format!("{prefix}_BATCH_NUM"), tensor.batch());
    jit.add_constant(format!("{prefix}_FEATURE_NUM"), tensor.feature());
    if tensor.rank() > 5 {
        jit.add_constant(format!("{prefix}_SIZE_W"), 1usize);
    }
    if tensor.layout.has_depth() {
        jit.add_constant(format!("{prefix}_SIZE_Z"), tensor.z());
    }
    jit.add_constant(format!("{prefix}_SIZE_Y"), tensor.y());
    jit.add_constant(format!("{prefix}_SIZE_X"), tensor.x());
    jit.add_constant(format!("{prefix}_OFFSET"), tensor.offset);

    if let Some(pitches) = &tensor.pitches {
        for (axis, pitch) in tensor.shape.axis_names().iter().zip(pitches) {
            jit.add_constant(format!("{prefix}_{axis}_PITCH"), *pitch);
        }
    }
}

fn entry_point(
    kernel_name: &str,
    arguments: &ReorderArguments,
) -> String {
    let input = &arguments.input;
    let output = &arguments.output;
    format!(
        "{kernel_name}__{}_{}__{}_{}",
        input.layout.name(),
        input.data_type.kernel_type_name(),
        output.layout.name(),
        output.data_type.kernel_type_name()
    )
}

/// Assembles the kernel data of a variant from its capability key, dispatch,
/// constants and priority.
pub fn common_kernels_data(
    kernel_name: &str,
    key: &ParamsKey,
    arguments: &ReorderArguments,
    dispatch: DispatchDescriptor,
    jit_constants: JitConstants,
    priority: KernelPriority,
) -> ReorderResult<Vec<KernelData>> {
    key.check(arguments)?;
    dispatch.check(&arguments.device)?;

    log::debug!(
        "{kernel_name}: gws={:?} lws={:?} priority={}",
        dispatch.global_work_size.as_array(),
        dispatch.local_work_size.as_array(),
        priority.value()
    );

    Ok(vec![KernelData {
        kernel_name: kernel_name.to_string(),
        entry_point: entry_point(kernel_name, arguments),
        dispatch,
        jit_constants,
        priority,
        arguments: vec![KernelArgument::Input(0), KernelArgument::Output(0)],
    }])
}
