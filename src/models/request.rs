use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A request descriptor supplied by the caller. The engine never touches a
/// transport layer; whatever served the request fills this in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (case-insensitive; matched lowercase)
    #[serde(default)]
    pub method: String,

    /// Literal request path, matched exactly against the definition's
    /// path keys
    #[serde(default)]
    pub path: String,

    /// Query string values
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub query: IndexMap<String, ParamValue>,

    /// Header values (names matched case-insensitively)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, ParamValue>,

    /// Cookie values
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub cookies: IndexMap<String, ParamValue>,

    /// Concrete path parameter values. Path matching is literal, so the
    /// caller substitutes template values here before calling the engine.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty", rename = "pathParams")]
    pub path_params: IndexMap<String, ParamValue>,

    /// Decoded JSON request body
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "requestBody")]
    pub request_body: Option<serde_json::Value>,
}

/// A raw transport value: a single string, or a string sequence for
/// parameters that appear more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Many(Vec<String>),
}
