use super::engine::ValidationOptions;
use super::resolver::SchemaResolver;
use super::schemas::SchemaValidator;
use super::{ErrorCode, ValidationError};
use crate::models::{
    Definition, ParamValue, Parameter, ParameterLocation, Request, Schema, SchemaType,
};
use serde_json::Value;

/// Validates one parameter against the request bucket its `in` location
/// names. Transport values are untyped strings, so they are coerced toward
/// the declared schema type before type-checking (unless disabled); a value
/// that fails to coerce stays a string and is flagged as a bad data type.
pub struct ParameterValidator<'a> {
    definition: &'a Definition,
    request: &'a Request,
    options: &'a ValidationOptions,
}

impl<'a> ParameterValidator<'a> {
    pub fn new(definition: &'a Definition, request: &'a Request, options: &'a ValidationOptions) -> Self {
        Self {
            definition,
            request,
            options,
        }
    }

    /// Validate one parameter. All outcomes are collected, never thrown,
    /// so one bad parameter does not abort the rest of the request.
    pub fn validate<'b>(&self, parameter: &'b Parameter) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        let at_path = format!("/{}/{}", parameter.location, parameter.name);

        match self.lookup(parameter) {
            Some(raw) => self.validate_value(parameter, raw, &at_path),
            None => self.report_absent(parameter, &at_path),
        }
    }

    /// Locate the parameter's raw value in the matching request bucket.
    fn lookup(&self, parameter: &Parameter) -> Option<&ParamValue> {
        let name = parameter.name.as_str();
        match parameter.location {
            ParameterLocation::Query => self.request.query.get(name),
            ParameterLocation::Cookie => self.request.cookies.get(name),
            ParameterLocation::Path => self.request.path_params.get(name),
            // Header names are case-insensitive per RFC 9110.
            ParameterLocation::Header => self
                .request
                .headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value),
        }
    }

    fn report_absent(&self, parameter: &Parameter, at_path: &str) -> Vec<ValidationError> {
        if parameter.location == ParameterLocation::Path {
            let token = format!("{{{}}}", parameter.name);
            if !self.request.path.contains(&token) {
                // The document declares a path parameter the path template
                // never mentions; the definition is wrong, not the request.
                return vec![
                    ValidationError::new(
                        ErrorCode::InvalidParameterLocation,
                        format!(
                            "Path parameter `{}` is declared, but path `{}` contains no `{}` token",
                            parameter.name, self.request.path, token
                        ),
                    )
                    .with_path(at_path),
                ];
            }
        }

        if parameter.is_required() {
            return vec![
                ValidationError::new(
                    ErrorCode::MissingRequiredParameter,
                    format!(
                        "Required parameter `{}` (in: {}) is missing",
                        parameter.name, parameter.location
                    ),
                )
                .with_path(at_path),
            ];
        }

        vec![]
    }

    fn validate_value<'b>(
        &self,
        parameter: &'b Parameter,
        raw: &ParamValue,
        at_path: &str,
    ) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        // A parameter with no schema is a presence check only.
        let Some(node) = &parameter.schema else {
            return vec![];
        };

        let resolver = SchemaResolver::new(self.definition);
        let schema = match resolver.resolve(node) {
            Ok(schema) => schema,
            Err(error) => return vec![error.with_path(at_path)],
        };

        let value = match self.to_json(raw, schema) {
            Ok(value) => value,
            Err(error) => return vec![error.with_path(at_path)],
        };

        SchemaValidator::new(self.definition).validate_resolved(&value, schema, at_path)
    }

    /// Turn the raw transport value into a JSON value shaped toward the
    /// schema. A repeated value becomes an array; a single value against an
    /// array schema becomes a one-element array.
    fn to_json(&self, raw: &ParamValue, schema: &Schema) -> Result<Value, ValidationError> {
        match (raw, schema.schema_type) {
            (ParamValue::Single(value), SchemaType::Array) => {
                let item_type = self.item_type(schema)?;
                Ok(Value::Array(vec![self.coerce(value, item_type)]))
            }
            (ParamValue::Many(values), SchemaType::Array) => {
                let item_type = self.item_type(schema)?;
                Ok(Value::Array(
                    values.iter().map(|value| self.coerce(value, item_type)).collect(),
                ))
            }
            (ParamValue::Single(value), target) => Ok(self.coerce(value, Some(target))),
            // A repeated value against a non-array schema stays an array
            // and fails the type check downstream.
            (ParamValue::Many(values), _) => Ok(Value::Array(
                values.iter().map(|value| Value::String(value.clone())).collect(),
            )),
        }
    }

    fn item_type(&self, schema: &Schema) -> Result<Option<SchemaType>, ValidationError> {
        match &schema.items {
            None => Ok(None),
            Some(node) => SchemaResolver::new(self.definition)
                .resolve(node)
                .map(|items| Some(items.schema_type)),
        }
    }

    /// Coerce a raw string toward the target type. A string that does not
    /// parse is passed through unchanged and fails the type check instead.
    fn coerce(&self, raw: &str, target: Option<SchemaType>) -> Value {
        if !self.options.coerce_types {
            return Value::String(raw.to_string());
        }

        match target {
            Some(SchemaType::Integer) => raw
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            Some(SchemaType::Number) => raw
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            Some(SchemaType::Boolean) => match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(raw.to_string()),
            },
            _ => Value::String(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> Definition {
        serde_yaml::from_str("openapi: 3.0.0\npaths:\n  /thing:\n    get: {}\n").unwrap()
    }

    fn parameter(yaml: &str) -> Parameter {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn request(json: serde_json::Value) -> Request {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_missing_required_query_parameter() {
        let definition = definition();
        let request = request(json!({ "method": "get", "path": "/thing" }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let required = parameter("name: limit\nin: query\nrequired: true\nschema:\n  type: integer\n");
        let errors = validator.validate(&required);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::MissingRequiredParameter);
        assert_eq!(errors[0].path.as_deref(), Some("/query/limit"));

        let optional = parameter("name: limit\nin: query\nschema:\n  type: integer\n");
        assert!(validator.validate(&optional).is_empty());
    }

    #[test]
    fn test_query_value_is_coerced_before_type_check() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "limit": "25", "verbose": "true", "ratio": "0.5" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let limit = parameter("name: limit\nin: query\nschema:\n  type: integer\n");
        assert!(validator.validate(&limit).is_empty());

        let verbose = parameter("name: verbose\nin: query\nschema:\n  type: boolean\n");
        assert!(validator.validate(&verbose).is_empty());

        let ratio = parameter("name: ratio\nin: query\nschema:\n  type: number\n");
        assert!(validator.validate(&ratio).is_empty());
    }

    #[test]
    fn test_coercion_failure_is_a_bad_data_type() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "limit": "soon" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let limit = parameter("name: limit\nin: query\nschema:\n  type: integer\n");
        let errors = validator.validate(&limit);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::BadDataType);
        assert_eq!(errors[0].path.as_deref(), Some("/query/limit"));
    }

    #[test]
    fn test_coercion_can_be_disabled() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "limit": "25" }
        }));
        let options = ValidationOptions { coerce_types: false };
        let validator = ParameterValidator::new(&definition, &request, &options);

        let limit = parameter("name: limit\nin: query\nschema:\n  type: integer\n");
        let errors = validator.validate(&limit);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::BadDataType);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "headers": { "X-Trace-Id": "abc123" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let header = parameter("name: x-trace-id\nin: header\nrequired: true\nschema:\n  type: string\n");
        assert!(validator.validate(&header).is_empty());
    }

    #[test]
    fn test_cookie_parameter() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "cookies": { "session": "deadbeef" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let present = parameter("name: session\nin: cookie\nrequired: true\nschema:\n  type: string\n");
        assert!(validator.validate(&present).is_empty());

        let absent = parameter("name: theme\nin: cookie\nrequired: true\nschema:\n  type: string\n");
        let errors = validator.validate(&absent);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::MissingRequiredParameter);
    }

    #[test]
    fn test_repeated_query_value_validates_as_array() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "id": ["1", "2", "oops"], "tag": "solo" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let ids = parameter("name: id\nin: query\nschema:\n  type: array\n  items:\n    type: integer\n");
        let errors = validator.validate(&ids);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_deref(), Some("/query/id/2"));

        // A single occurrence against an array schema counts as one element.
        let tags = parameter("name: tag\nin: query\nschema:\n  type: array\n  items:\n    type: string\n");
        assert!(validator.validate(&tags).is_empty());
    }

    #[test]
    fn test_repeated_value_against_scalar_schema() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "limit": ["1", "2"] }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let limit = parameter("name: limit\nin: query\nschema:\n  type: integer\n");
        let errors = validator.validate(&limit);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::BadDataType);
    }

    #[test]
    fn test_path_parameter_without_substituted_value() {
        let definition = definition();
        let request = request(json!({ "method": "get", "path": "/users/{id}" }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let id = parameter("name: id\nin: path\nschema:\n  type: string\n");
        let errors = validator.validate(&id);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::MissingRequiredParameter);
    }

    #[test]
    fn test_path_parameter_with_no_token_in_path() {
        let definition = definition();
        let request = request(json!({ "method": "get", "path": "/users" }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let id = parameter("name: id\nin: path\nschema:\n  type: string\n");
        let errors = validator.validate(&id);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidParameterLocation);
    }

    #[test]
    fn test_path_parameter_with_substituted_value() {
        let definition = definition();
        let request = request(json!({
            "method": "get",
            "path": "/users/{id}",
            "pathParams": { "id": "42" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let id = parameter("name: id\nin: path\nschema:\n  type: integer\n");
        assert!(validator.validate(&id).is_empty());
    }

    #[test]
    fn test_parameter_schema_ref_is_resolved() {
        let definition: Definition = serde_yaml::from_str(
            r#"
openapi: 3.0.0
paths:
  /thing:
    get: {}
components:
  schemas:
    Limit:
      type: integer
"#,
        )
        .unwrap();
        let request = request(json!({
            "method": "get",
            "path": "/thing",
            "query": { "limit": "25" }
        }));
        let options = ValidationOptions::default();
        let validator = ParameterValidator::new(&definition, &request, &options);

        let limit =
            parameter("name: limit\nin: query\nschema:\n  $ref: '#/components/schemas/Limit'\n");
        assert!(validator.validate(&limit).is_empty());

        let broken =
            parameter("name: limit\nin: query\nschema:\n  $ref: '#/components/schemas/Nope'\n");
        let errors = validator.validate(&broken);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::UnresolvableRef);
        assert_eq!(errors[0].path.as_deref(), Some("/query/limit"));
    }
}
