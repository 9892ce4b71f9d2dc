use serde::{Deserialize, Serialize};

/// Memory layout of a tensor.
///
/// Planar layouts store every feature in its own contiguous region. Blocked
/// layouts interleave a fixed block of features (`fsv`, feature slice
/// vector) per spatial position.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub enum DataLayout {
    #[serde(rename = "bfyx")]
    Bfyx,
    #[serde(rename = "bfzyx")]
    Bfzyx,
    #[serde(rename = "bfwzyx")]
    Bfwzyx,
    #[serde(rename = "b_fs_yx_fsv16")]
    BFsYxFsv16,
    #[serde(rename = "b_fs_zyx_fsv16")]
    BFsZyxFsv16,
}

impl DataLayout {
    pub fn name(&self) -> &'static str {
        match self {
            DataLayout::Bfyx => "bfyx",
            DataLayout::Bfzyx => "bfzyx",
            DataLayout::Bfwzyx => "bfwzyx",
            DataLayout::BFsYxFsv16 => "b_fs_yx_fsv16",
            DataLayout::BFsZyxFsv16 => "b_fs_zyx_fsv16",
        }
    }

    pub fn dimension_count(&self) -> usize {
        match self {
            DataLayout::Bfyx | DataLayout::BFsYxFsv16 => 4,
            DataLayout::Bfzyx | DataLayout::BFsZyxFsv16 => 5,
            DataLayout::Bfwzyx => 6,
        }
    }

    /// Number of features stored contiguously per block, if the layout is blocked.
    pub fn feature_block_size(&self) -> Option<usize> {
        match self {
            DataLayout::BFsYxFsv16 | DataLayout::BFsZyxFsv16 => Some(16),
            DataLayout::Bfyx | DataLayout::Bfzyx | DataLayout::Bfwzyx => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.feature_block_size().is_some()
    }

    pub fn has_depth(&self) -> bool {
        self.dimension_count() >= 5
    }
}

impl std::fmt::Display for DataLayout {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_layouts() {
        assert_eq!(DataLayout::BFsYxFsv16.feature_block_size(), Some(16));
        assert_eq!(DataLayout::BFsZyxFsv16.feature_block_size(), Some(16));
        assert!(!DataLayout::Bfyx.is_blocked());
        assert!(DataLayout::BFsZyxFsv16.has_depth());
        assert!(!DataLayout::BFsYxFsv16.has_depth());
    }

    #[test]
    fn test_serde_names_match_display() {
        for layout in [
            DataLayout::Bfyx,
            DataLayout::Bfzyx,
            DataLayout::Bfwzyx,
            DataLayout::BFsYxFsv16,
            DataLayout::BFsZyxFsv16,
        ] {
            let encoded = serde_json::to_string(&layout).unwrap();
            assert_eq!(encoded, format!("\"{layout}\""));
        }
    }
}
