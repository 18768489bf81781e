use super::operations::{resolve_method, resolve_path_item};
use super::parameters::ParameterValidator;
use super::schemas::SchemaValidator;
use super::{ErrorCode, ValidationError};
use crate::error::{ReqvetError, Result};
use crate::models::{Definition, Parameter, ParameterLocation, PathItem, Request, RequestBody};
use indexmap::IndexMap;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Per-call configuration
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Whether string parameter values are coerced toward the declared
    /// schema type before type-checking (defaults to true)
    pub coerce_types: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self { coerce_types: true }
    }
}

/// Validate a request against a definition. Returns the collected
/// validation errors (empty if the request conforms), or fails with an
/// initialization error when the call itself is malformed.
pub fn validate(
    definition: &Definition,
    request: &Request,
    options: &ValidationOptions,
) -> Result<Vec<ValidationError>> {
    RequestValidator::new(definition, request, options).validate()
}

/// The validation orchestrator: locates the operation, merges the three
/// parameter scopes, runs the per-location validators, then validates the
/// request body.
pub struct RequestValidator<'a> {
    definition: &'a Definition,
    request: &'a Request,
    options: &'a ValidationOptions,
}

impl<'a> RequestValidator<'a> {
    pub fn new(definition: &'a Definition, request: &'a Request, options: &'a ValidationOptions) -> Self {
        Self {
            definition,
            request,
            options,
        }
    }

    pub fn validate(&self) -> Result<Vec<ValidationError>> {
        self.assert_initialization()?;

        let method = self.request.method.to_lowercase();
        let path_item = resolve_path_item(self.definition, &self.request.path)?;
        let operation = resolve_method(path_item, &method)?;

        let mut errors = vec![];

        let parameter_validator = ParameterValidator::new(self.definition, self.request, self.options);
        for parameter in self.merged_parameters(path_item, &operation.parameters) {
            errors.extend(parameter_validator.validate(parameter));
        }

        if let Some(request_body) = &operation.request_body {
            errors.extend(self.validate_body(request_body));
        }

        Ok(errors)
    }

    /// Degenerate descriptors are an integration mistake and fail eagerly,
    /// before any parameter or body work.
    fn assert_initialization(&self) -> Result<()> {
        if self.request.method.is_empty() {
            return Err(ReqvetError::Initialization(
                "The parameter `request.method` is missing.".to_string(),
            ));
        }
        if self.request.path.is_empty() {
            return Err(ReqvetError::Initialization(
                "The parameter `request.path` is missing.".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge the overall, path-level, and operation-level parameter lists.
    /// A later scope's entry with the same `(name, in)` pair replaces an
    /// earlier one in place, so reporting order follows first declaration.
    fn merged_parameters<'b>(
        &self,
        path_item: &'b PathItem,
        operation_parameters: &'b [Parameter],
    ) -> impl Iterator<Item = &'b Parameter>
    where
        'a: 'b,
    {
        let mut merged: IndexMap<(&str, ParameterLocation), &Parameter> = IndexMap::new();

        let scopes = [
            self.definition.paths.parameters.as_slice(),
            path_item.parameters.as_slice(),
            operation_parameters,
        ];
        for scope in scopes {
            for parameter in scope {
                merged.insert((parameter.name.as_str(), parameter.location), parameter);
            }
        }

        merged.into_values()
    }

    /// Validate the request body against the operation's application/json
    /// schema. Definition problems found here are collected, not thrown.
    fn validate_body(&self, request_body: &'a RequestBody) -> Vec<ValidationError> {
        let schema = request_body
            .content
            .get(JSON_MEDIA_TYPE)
            .and_then(|media_type| media_type.schema.as_ref());

        let Some(schema) = schema else {
            return vec![
                ValidationError::new(
                    ErrorCode::InvalidDefinition,
                    format!("The requestBody declares no {} schema", JSON_MEDIA_TYPE),
                )
                .with_path("/requestBody"),
            ];
        };

        match &self.request.request_body {
            Some(body) => SchemaValidator::new(self.definition).validate(body, schema, "/requestBody"),
            None if request_body.required => vec![
                ValidationError::new(
                    ErrorCode::MissingRequiredField,
                    "The request body is required but missing",
                )
                .with_path("/requestBody"),
            ],
            None => vec![],
        }
    }
}
