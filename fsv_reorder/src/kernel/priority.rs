use serde::{Deserialize, Serialize};

/// Preference reported to the kernel selector. Lower values win.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(transparent)]
pub struct KernelPriority(u8);

impl KernelPriority {
    pub const FORCE_PRIORITY_1: Self = Self(1);
    pub const FORCE_PRIORITY_2: Self = Self(2);
    pub const FORCE_PRIORITY_3: Self = Self(3);
    pub const FORCE_PRIORITY_4: Self = Self(4);
    pub const FORCE_PRIORITY_5: Self = Self(5);
    pub const FORCE_PRIORITY_6: Self = Self(6);
    pub const FORCE_PRIORITY_7: Self = Self(7);
    pub const FORCE_PRIORITY_8: Self = Self(8);
    pub const FORCE_PRIORITY_9: Self = Self(9);
    pub const DONT_USE_IF_HAVE_SOMETHING_ELSE: Self = Self(u8::MAX);

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_preferred_over(
        &self,
        other: &KernelPriority,
    ) -> bool {
        self < other
    }
}
