use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),
}

impl ReorderError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        ReorderError::UnsupportedConfiguration(message.into())
    }
}

pub type ReorderResult<T> = Result<T, ReorderError>;
