use crate::error::{ReqvetError, Result};
use crate::models::{Definition, Operation, PathItem};

/// Look up the path item for a literal request path. No templated-path
/// matching is attempted; the request path must equal a definition key.
pub fn resolve_path_item<'a>(definition: &'a Definition, path: &str) -> Result<&'a PathItem> {
    definition.paths.get(path).ok_or_else(|| {
        ReqvetError::Initialization(format!(
            "Could not locate the OpenAPI path object for the request path `{}`.",
            path
        ))
    })
}

/// Look up the operation for a lowercase HTTP method on a path item.
pub fn resolve_method<'a>(path_item: &'a PathItem, method: &str) -> Result<&'a Operation> {
    let operation = match method {
        "get" => &path_item.get,
        "put" => &path_item.put,
        "post" => &path_item.post,
        "delete" => &path_item.delete,
        "patch" => &path_item.patch,
        "options" => &path_item.options,
        "head" => &path_item.head,
        "trace" => &path_item.trace,
        _ => &None,
    };

    operation.as_ref().ok_or_else(|| {
        ReqvetError::Initialization(format!(
            "Could not locate the OpenAPI operation for the request method `{}`.",
            method
        ))
    })
}

/// Locate the operation object at `paths[path][method]`. Fails with an
/// initialization error, not a collected validation error: an unresolvable
/// operation is an integration mistake, not a request-shape problem.
pub fn resolve_operation<'a>(
    definition: &'a Definition,
    method: &str,
    path: &str,
) -> Result<&'a Operation> {
    let path_item = resolve_path_item(definition, path)?;
    resolve_method(path_item, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> Definition {
        serde_yaml::from_str(
            r#"
openapi: 3.0.0
paths:
  /thing:
    get:
      operationId: getThing
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_existing_operation() {
        let definition = definition();
        let operation = resolve_operation(&definition, "get", "/thing").unwrap();
        assert_eq!(operation.operation_id.as_deref(), Some("getThing"));
    }

    #[test]
    fn test_unknown_path_is_an_initialization_error() {
        let definition = definition();
        let error = resolve_operation(&definition, "get", "/other").unwrap_err();
        assert!(matches!(error, ReqvetError::Initialization(_)));
        assert_eq!(error.code(), "INITIALIZATION_EXCEPTION");
    }

    #[test]
    fn test_unknown_method_is_an_initialization_error() {
        let definition = definition();
        let error = resolve_operation(&definition, "put", "/thing").unwrap_err();
        assert!(matches!(error, ReqvetError::Initialization(_)));
    }

    #[test]
    fn test_unrecognized_method_string() {
        let definition = definition();
        let error = resolve_operation(&definition, "fetch", "/thing").unwrap_err();
        assert!(matches!(error, ReqvetError::Initialization(_)));
    }
}
