#[derive(Copy, Clone, Debug)]
pub enum ReorderEnvVar {
    MaxWorkGroupSize,
    MaxLocalMemoryBytes,
}

impl ReorderEnvVar {
    pub fn key(&self) -> &'static str {
        match self {
            ReorderEnvVar::MaxWorkGroupSize => "FSV_REORDER_MAX_WORK_GROUP_SIZE",
            ReorderEnvVar::MaxLocalMemoryBytes => "FSV_REORDER_MAX_LOCAL_MEMORY_BYTES",
        }
    }

    pub fn value(&self) -> String {
        std::env::var(self.key()).unwrap_or_default()
    }

    /// Parses a raw value of this variable, `None` when empty or not a non-negative integer.
    pub fn parse_usize(
        &self,
        value: &str,
    ) -> Option<usize> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                log::warn!("ignoring {}={trimmed:?}: not an unsigned integer", self.key());
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usize() {
        let var = ReorderEnvVar::MaxWorkGroupSize;
        assert_eq!(var.parse_usize(" 512 "), Some(512));
        assert_eq!(var.parse_usize(""), None);
        assert_eq!(var.parse_usize("-1"), None);
        assert_eq!(var.parse_usize("lots"), None);
    }
}
