mod arguments;
pub mod base;
pub mod blocked_to_planar;
mod dispatch_descriptor;
mod grid_size;
mod params_key;
mod priority;

pub use arguments::ReorderArguments;
pub use blocked_to_planar::{BlockedToPlanarConfig, BlockedToPlanarKernel, ChannelAlignmentPolicy};
pub use dispatch_descriptor::DispatchDescriptor;
pub use grid_size::GridSize;
pub use params_key::ParamsKey;
pub use priority::KernelPriority;
use serde::{Deserialize, Serialize};

use crate::{JitConstants, ReorderResult};

/// Buffer binding of a kernel parameter.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub enum KernelArgument {
    Input(u32),
    Output(u32),
}

/// Everything the kernel selector needs to compile and launch one kernel.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct KernelData {
    pub kernel_name: String,
    pub entry_point: String,
    pub dispatch: DispatchDescriptor,
    pub jit_constants: JitConstants,
    pub priority: KernelPriority,
    pub arguments: Vec<KernelArgument>,
}

/// Interface a reorder kernel variant exposes to the kernel selector.
pub trait ReorderCore: Send + Sync {
    fn name(&self) -> &'static str;

    fn supported_key(&self) -> &ParamsKey;

    fn validate(
        &self,
        arguments: &ReorderArguments,
    ) -> bool;

    fn set_default(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<DispatchDescriptor>;

    fn jit_constants(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<JitConstants>;

    fn priority(
        &self,
        arguments: &ReorderArguments,
    ) -> KernelPriority;

    /// Empty when the request is rejected by [`ReorderCore::validate`].
    fn kernels_data(
        &self,
        arguments: &ReorderArguments,
    ) -> ReorderResult<Vec<KernelData>> {
        if !self.validate(arguments) {
            return Ok(Vec::new());
        }
        base::common_kernels_data(
            self.name(),
            self.supported_key(),
            arguments,
            self.set_default(arguments)?,
            self.jit_constants(arguments)?,
            self.priority(arguments),
        )
    }
}
