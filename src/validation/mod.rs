mod engine;
mod operations;
mod parameters;
mod resolver;
mod schemas;

pub use engine::RequestValidator;
pub use engine::ValidationOptions;
pub use engine::validate;
pub use operations::{resolve_method, resolve_operation, resolve_path_item};
pub use parameters::ParameterValidator;
pub use resolver::SchemaResolver;
pub use schemas::SchemaValidator;

/// Code of a collected validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Data-shape checks
    BadDataType,
    MissingRequiredParameter,
    MissingRequiredField,

    // Definition problems discovered during traversal
    InvalidParameterLocation,
    UnresolvableRef,
    CircularRef,
    InvalidDefinition,
}

impl ErrorCode {
    /// Stable machine-readable code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadDataType => "BAD_DATA_TYPE",
            ErrorCode::MissingRequiredParameter => "MISSING_REQUIRED_PARAMETER",
            ErrorCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorCode::InvalidParameterLocation => "INVALID_PARAMETER_LOCATION",
            ErrorCode::UnresolvableRef => "UNRESOLVABLE_REF",
            ErrorCode::CircularRef => "CIRCULAR_REF",
            ErrorCode::InvalidDefinition => "INVALID_DEFINITION",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A collected, non-fatal validation error. These are returned in a list,
/// never thrown, so a caller can report every problem in one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    /// Slash-separated pointer into the request, e.g. `/query/limit` or
    /// `/requestBody/user/name`
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Format the error with its location context
    pub fn format(&self) -> String {
        match &self.path {
            Some(path) => format!("[{}] {}: {}", path, self.code, self.message),
            None => format!("{}: {}", self.code, self.message),
        }
    }
}
