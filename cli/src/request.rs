use std::{fs, path::Path};

use fsv_reorder::{BlockedToPlanarConfig, ReorderArguments};
use serde::{Deserialize, Serialize};

/// Contents of a request file passed to the CLI.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RequestFile {
    pub arguments: ReorderArguments,
    #[serde(default)]
    pub config: BlockedToPlanarConfig,
}

impl RequestFile {
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Reads the request and applies device limit overrides from the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|error| format!("failed to read {}: {error}", path.display()))?;
        let mut request = Self::from_json_str(&data).map_err(|error| format!("invalid request {}: {error}", path.display()))?;
        request.arguments.device = request.arguments.device.with_env_overrides();
        log::debug!("loaded request from {}: {:?}", path.display(), request.arguments);
        Ok(request)
    }
}
