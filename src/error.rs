use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReqvetError {
    #[error("Initialization error: {0}")]
    Initialization(String),

    #[error("Invalid OpenAPI definition: {0}")]
    InvalidDefinition(String),

    #[error("Failed to load definition file: {0}")]
    DefinitionLoadError(String),

    #[error("Failed to load request file: {0}")]
    RequestLoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ReqvetError {
    /// Stable machine-readable code for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ReqvetError::Initialization(_) => "INITIALIZATION_EXCEPTION",
            ReqvetError::InvalidDefinition(_) => "INVALID_DEFINITION_EXCEPTION",
            ReqvetError::DefinitionLoadError(_) | ReqvetError::YamlError(_) => {
                "DEFINITION_LOAD_ERROR"
            }
            ReqvetError::RequestLoadError(_) => "REQUEST_LOAD_ERROR",
            ReqvetError::IoError(_) => "IO_ERROR",
            ReqvetError::JsonError(_) => "JSON_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReqvetError>;
