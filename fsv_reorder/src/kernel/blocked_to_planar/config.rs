use serde::{Deserialize, Serialize};

/// How requests whose feature count is not a multiple of the feature block are treated.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelAlignmentPolicy {
    /// Reject such requests in validation.
    #[default]
    Strict,
    /// Accept them; the last feature slice is partial and the kernel template
    /// has to bound its feature writes.
    Permissive,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct BlockedToPlanarConfig {
    #[serde(default)]
    pub channel_alignment: ChannelAlignmentPolicy,
    /// Use 4x4 tiles when either tensor holds 64-bit elements.
    #[serde(default)]
    pub narrow_tile_for_64_bit: bool,
}
