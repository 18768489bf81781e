use super::resolver::SchemaResolver;
use super::{ErrorCode, ValidationError};
use crate::models::{Definition, Schema, SchemaOrRef, SchemaType};
use serde_json::Value;

/// Validates a JSON value against a schema node, collecting every mismatch.
/// Data-shape problems never abort the walk and never throw; only typed
/// errors come back.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    resolver: SchemaResolver<'a>,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self {
            resolver: SchemaResolver::new(definition),
        }
    }

    /// Validate `value` against a possibly-referenced schema node.
    /// Resolution failures surface as a single collected error at `at_path`.
    pub fn validate<'b>(
        &self,
        value: &Value,
        node: &'b SchemaOrRef,
        at_path: &str,
    ) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        match self.resolver.resolve(node) {
            Ok(schema) => self.validate_resolved(value, schema, at_path),
            Err(error) => vec![error.with_path(at_path)],
        }
    }

    /// Validate `value` against an already-resolved schema.
    pub fn validate_resolved<'b>(
        &self,
        value: &Value,
        schema: &'b Schema,
        at_path: &str,
    ) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        match schema.schema_type {
            SchemaType::String if value.is_string() => vec![],
            SchemaType::Number if value.is_number() => vec![],
            SchemaType::Boolean if value.is_boolean() => vec![],
            SchemaType::Integer if is_whole_number(value) => vec![],
            SchemaType::Object => self.validate_object(value, schema, at_path),
            SchemaType::Array => self.validate_array(value, schema, at_path),
            _ => vec![bad_data_type(schema.schema_type, value, at_path)],
        }
    }

    fn validate_object<'b>(
        &self,
        value: &Value,
        schema: &'b Schema,
        at_path: &str,
    ) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        let Some(map) = value.as_object() else {
            return vec![bad_data_type(SchemaType::Object, value, at_path)];
        };

        let mut errors = vec![];

        for name in &schema.required {
            if !map.contains_key(name) {
                errors.push(
                    ValidationError::new(
                        ErrorCode::MissingRequiredField,
                        format!("Required field `{}` is missing", name),
                    )
                    .with_path(format!("{}/{}", at_path, name)),
                );
            }
        }

        // Keys with no declared property schema are ignored: objects are
        // open by default in OpenAPI's lenient mode.
        for (name, child) in &schema.properties {
            if let Some(field) = map.get(name) {
                errors.extend(self.validate(field, child, &format!("{}/{}", at_path, name)));
            }
        }

        errors
    }

    fn validate_array<'b>(
        &self,
        value: &Value,
        schema: &'b Schema,
        at_path: &str,
    ) -> Vec<ValidationError>
    where
        'a: 'b,
    {
        let Some(elements) = value.as_array() else {
            return vec![bad_data_type(SchemaType::Array, value, at_path)];
        };

        let Some(items) = &schema.items else {
            // No `items` declared: elements are left unvalidated.
            return vec![];
        };

        let mut errors = vec![];
        for (index, element) in elements.iter().enumerate() {
            errors.extend(self.validate(element, items, &format!("{}/{}", at_path, index)));
        }
        errors
    }
}

fn bad_data_type(expected: SchemaType, value: &Value, at_path: &str) -> ValidationError {
    ValidationError::new(
        ErrorCode::BadDataType,
        format!("Expected {}, got {}", expected, json_kind(value)),
    )
    .with_path(at_path)
}

fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.fract() == 0.0),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
