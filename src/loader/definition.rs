use crate::error::{ReqvetError, Result};
use crate::models::Definition;
use std::fs;
use std::path::Path;

/// Load an OpenAPI definition from a YAML or JSON file.
pub fn load_definition<P: AsRef<Path>>(path: P) -> Result<Definition> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        ReqvetError::DefinitionLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let definition: Definition = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            ReqvetError::DefinitionLoadError(format!("Failed to parse OpenAPI JSON: {}", e))
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            ReqvetError::DefinitionLoadError(format!("Failed to parse OpenAPI YAML: {}", e))
        })?
    };

    validate_definition(&definition)?;

    Ok(definition)
}

/// Basic document checks before the definition is handed to the engine
fn validate_definition(definition: &Definition) -> Result<()> {
    if !definition.openapi.starts_with("3.0") && !definition.openapi.starts_with("3.1") {
        return Err(ReqvetError::InvalidDefinition(format!(
            "Unsupported OpenAPI version: {}. Only 3.0.x and 3.1.x are supported.",
            definition.openapi
        )));
    }

    if definition.paths.is_empty() {
        return Err(ReqvetError::InvalidDefinition(
            "OpenAPI definition must have at least one path".to_string(),
        ));
    }

    Ok(())
}
