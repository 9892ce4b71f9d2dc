use serde::{Deserialize, Serialize};

use crate::env_utils::ReorderEnvVar;

pub const DEFAULT_MAX_WORK_GROUP_SIZE: usize = 256;
pub const DEFAULT_MAX_LOCAL_MEMORY_BYTES: usize = 64 * 1024;

/// Hardware ceilings the dispatch has to respect on the target device.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub struct DeviceLimits {
    pub max_work_group_size: usize,
    pub max_local_memory_bytes: usize,
}

impl DeviceLimits {
    pub fn new(
        max_work_group_size: usize,
        max_local_memory_bytes: usize,
    ) -> Self {
        Self {
            max_work_group_size,
            max_local_memory_bytes,
        }
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|var| Some(var.value()))
    }

    /// Replaces each limit whose variable `lookup` resolves to an unsigned integer.
    pub fn with_overrides_from(
        self,
        lookup: impl Fn(ReorderEnvVar) -> Option<String>,
    ) -> Self {
        let resolve = |var: ReorderEnvVar, current: usize| {
            lookup(var).and_then(|value| var.parse_usize(&value)).unwrap_or(current)
        };
        Self {
            max_work_group_size: resolve(ReorderEnvVar::MaxWorkGroupSize, self.max_work_group_size),
            max_local_memory_bytes: resolve(ReorderEnvVar::MaxLocalMemoryBytes, self.max_local_memory_bytes),
        }
    }
}

impl Default for DeviceLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORK_GROUP_SIZE, DEFAULT_MAX_LOCAL_MEMORY_BYTES)
    }
}
