use crate::error::{ReqvetError, Result};
use crate::models::Request;
use std::fs;
use std::path::Path;

/// Load a request descriptor from a JSON file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<Request> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        ReqvetError::RequestLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        ReqvetError::RequestLoadError(format!("Failed to parse request JSON: {}", e))
    })
}
