use super::{ErrorCode, ValidationError};
use crate::models::{Definition, Schema, SchemaOrRef};

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Resolves `$ref` schema nodes within one definition. Reference chains are
/// followed with a visited-name set so a circular document terminates with
/// an error instead of recursing unboundedly.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    definition: &'a Definition,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(definition: &'a Definition) -> Self {
        Self { definition }
    }

    /// Resolve a schema node to a concrete schema. Inline schemas are
    /// returned unchanged. Errors carry no path; the caller attaches the
    /// request location it was validating.
    pub fn resolve<'b>(&self, node: &'b SchemaOrRef) -> Result<&'b Schema, ValidationError>
    where
        'a: 'b,
    {
        let mut visited: Vec<&str> = vec![];
        let mut current = node;

        loop {
            let reference = match current {
                SchemaOrRef::Inline(schema) => return Ok(schema),
                SchemaOrRef::Ref { reference } => reference,
            };

            let name = reference.strip_prefix(SCHEMA_REF_PREFIX).ok_or_else(|| {
                ValidationError::new(
                    ErrorCode::UnresolvableRef,
                    format!(
                        "Unsupported reference `{}`: only `{}<name>` references can be resolved",
                        reference, SCHEMA_REF_PREFIX
                    ),
                )
            })?;

            if visited.contains(&name) {
                return Err(ValidationError::new(
                    ErrorCode::CircularRef,
                    format!(
                        "Circular reference detected: {} -> {}",
                        visited.join(" -> "),
                        name
                    ),
                ));
            }
            visited.push(name);

            current = self
                .definition
                .components
                .as_ref()
                .and_then(|components| components.schemas.get(name))
                .ok_or_else(|| {
                    ValidationError::new(
                        ErrorCode::UnresolvableRef,
                        format!("Reference `{}` does not exist in components.schemas", reference),
                    )
                })?;
        }
    }
}
