pub mod data_type;
pub use data_type::DataType;

pub mod device;
pub use device::DeviceLimits;

pub mod env_utils;

pub mod error;
pub use error::{ReorderError, ReorderResult};

pub mod jit;
pub use jit::{JitConstants, JitValue};

pub mod kernel;
pub use kernel::{
    BlockedToPlanarConfig, BlockedToPlanarKernel, ChannelAlignmentPolicy, DispatchDescriptor, GridSize, KernelData,
    KernelPriority, ParamsKey, ReorderArguments, ReorderCore,
};

pub mod layout;
pub use layout::DataLayout;

pub mod tensor;
pub use tensor::{TensorDescriptor, TensorShape};
