use serde::{Deserialize, Serialize};

use super::GridSize;
use crate::{DeviceLimits, ReorderError, ReorderResult};

/// Execution grid of a single kernel launch.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone)]
pub struct DispatchDescriptor {
    pub global_work_size: GridSize,
    pub local_work_size: GridSize,
    /// Local memory each work-item of a group claims, in bytes.
    #[serde(default)]
    pub local_memory_per_work_item: usize,
}

impl DispatchDescriptor {
    pub fn new(
        global_work_size: GridSize,
        local_work_size: GridSize,
    ) -> Self {
        Self {
            global_work_size,
            local_work_size,
            local_memory_per_work_item: 0,
        }
    }

    pub fn with_local_memory_per_work_item(
        mut self,
        bytes: usize,
    ) -> Self {
        self.local_memory_per_work_item = bytes;
        self
    }

    /// Local memory claimed by one work group, `None` on overflow.
    pub fn local_memory_per_group(&self) -> Option<usize> {
        self.local_memory_per_work_item.checked_mul(self.local_work_size.volume())
    }

    pub fn work_group_count(&self) -> GridSize {
        GridSize::new(
            self.global_work_size.x / self.local_work_size.x,
            self.global_work_size.y / self.local_work_size.y,
            self.global_work_size.z / self.local_work_size.z,
        )
    }

    /// Checks that the grid is non-empty and tiles exactly, and that one work
    /// group fits the group size and local memory of `device`.
    pub fn check(
        &self,
        device: &DeviceLimits,
    ) -> ReorderResult<()> {
        if self.global_work_size.as_array().contains(&0) {
            return Err(ReorderError::unsupported(format!(
                "global work size {:?} has an empty axis",
                self.global_work_size.as_array()
            )));
        }
        if !self.local_work_size.divides(&self.global_work_size) {
            return Err(ReorderError::unsupported(format!(
                "local work size {:?} does not evenly divide global work size {:?}",
                self.local_work_size.as_array(),
                self.global_work_size.as_array()
            )));
        }
        let work_group_size = self.local_work_size.volume();
        if work_group_size > device.max_work_group_size {
            return Err(ReorderError::unsupported(format!(
                "work group of {work_group_size} items exceeds the device maximum of {}",
                device.max_work_group_size
            )));
        }
        match self.local_memory_per_group() {
            Some(bytes) if bytes <= device.max_local_memory_bytes => Ok(()),
            bytes => Err(ReorderError::unsupported(format!(
                "work group needs {} bytes of local memory, the device has {}",
                bytes.map_or_else(|| "more than usize::MAX".to_string(), |bytes| bytes.to_string()),
                device.max_local_memory_bytes
            ))),
        }
    }
}
