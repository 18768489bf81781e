use crate::validation::{self, ValidationOptions};
use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_validate(definition_path: &Path, request_path: &Path, no_coerce: bool) -> Result<()> {
    println!("{}", "Loading OpenAPI definition...".bright_blue());
    println!("  Path: {}", definition_path.display());

    let definition = loader::load_definition(definition_path)?;

    println!("{}", "✓ Definition loaded".green());
    if let Some(info) = &definition.info {
        println!("  Title: {}", info.title.bold());
        println!("  Version: {}", info.version);
    }
    println!("  OpenAPI Version: {}", definition.openapi);
    println!("  Paths: {}", definition.paths.items.len());
    println!();

    println!("{}", "Loading request descriptor...".bright_blue());
    println!("  Path: {}", request_path.display());

    let request = loader::load_request(request_path)?;

    println!("{}", "✓ Request loaded".green());
    println!("  Method: {}", request.method.to_uppercase().bold());
    println!("  Request Path: {}", request.path);
    println!();

    println!("{}", "Validating request...".bright_blue());

    let options = ValidationOptions {
        coerce_types: !no_coerce,
    };
    let errors = validation::validate(&definition, &request, &options)?;

    if errors.is_empty() {
        println!("  {}", "✓ Request conforms to the definition".green().bold());
        return Ok(());
    }

    println!(
        "  {}",
        format!("✗ Validation failed ({} errors)", errors.len()).red().bold()
    );
    for error in &errors {
        println!("    - {}", error.format().red());
    }
    std::process::exit(1);
}
