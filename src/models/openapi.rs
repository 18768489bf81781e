use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI definition root object, reduced to the parts the request
/// validation engine interprets.
/// https://spec.openapis.org/oas/latest.html
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    /// The version of the OpenAPI Specification (e.g., "3.0.0")
    #[serde(default)]
    pub openapi: String,

    /// Metadata about the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    /// The available paths and the operations they expose
    #[serde(default)]
    pub paths: Paths,

    /// Reusable components that can be referenced via `$ref`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// The title of the API
    pub title: String,

    /// The version of the API document
    pub version: String,
}

/// The paths object: path templates mapped to their path items, plus an
/// overall parameter list applying to every operation in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paths {
    /// Parameters applying to all paths (overall scope)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Path template -> path item, in document order
    #[serde(flatten)]
    pub items: IndexMap<String, PathItem>,
}

impl Paths {
    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One path template: at most one operation per HTTP method, plus
/// path-level parameters shared by all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,

    /// Parameters applying to every operation on this path (path scope)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl PathItem {
    /// Iterate over the operations declared on this path item, paired with
    /// their lowercase HTTP method.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("patch", &self.patch),
            ("options", &self.options),
            ("head", &self.head),
            ("trace", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// A unique identifier for the operation
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "operationId")]
    pub operation_id: Option<String>,

    /// Parameters applying to this operation only (operation scope)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// The request body the operation accepts
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "requestBody")]
    pub request_body: Option<RequestBody>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether the request body is mandatory (defaults to false)
    #[serde(default)]
    pub required: bool,

    /// Media type -> media type object, in document order
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// The name of the parameter
    pub name: String,

    /// Where the parameter value travels in transport
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    /// Whether the parameter is mandatory. Path parameters are always
    /// required regardless of this flag; see `is_required`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// The schema describing the parameter value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Parameter {
    /// Effective required flag: path parameters are implicitly required,
    /// everything else defaults to optional.
    pub fn is_required(&self) -> bool {
        match self.location {
            ParameterLocation::Path => true,
            _ => self.required.unwrap_or(false),
        }
    }
}

/// The closed set of parameter locations. An unrecognized `in` value is
/// rejected while the definition tree is being built, so the validators
/// can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    /// Schema name -> schema, referenced as `#/components/schemas/<name>`
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}

/// A schema node is exactly one of a `$ref` pointer or an inline schema.
/// A node carrying neither fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Schema),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Field name -> field schema, for `type: object`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    /// Names of fields that must be present, for `type: object`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Element schema, for `type: array`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,
}

/// The OpenAPI subset of JSON Schema types the engine validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    String,
    Number,
    Integer,
    Boolean,
    Array,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Object => write!(f, "object"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Array => write!(f, "array"),
        }
    }
}
