use serde::{Deserialize, Serialize};

use crate::{DeviceLimits, TensorDescriptor};

/// A single reorder request: one input tensor, one output tensor and the
/// limits of the device the kernel will run on.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ReorderArguments {
    pub input: TensorDescriptor,
    pub output: TensorDescriptor,
    #[serde(default)]
    pub device: DeviceLimits,
}

impl ReorderArguments {
    pub fn new(
        input: TensorDescriptor,
        output: TensorDescriptor,
        device: DeviceLimits,
    ) -> Self {
        Self {
            input,
            output,
            device,
        }
    }
}
