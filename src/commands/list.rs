use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(definition_path: &Path) -> Result<()> {
    println!("{}", "Loading OpenAPI definition...".bright_blue());
    println!("  Path: {}", definition_path.display());

    let definition = loader::load_definition(definition_path)?;

    println!("\n{}", "✓ Definition loaded".green());
    if let Some(info) = &definition.info {
        println!("  Title: {}", info.title.bold());
        println!("  Version: {}", info.version);
    }
    println!("  OpenAPI Version: {}", definition.openapi);
    println!();

    println!(
        "{}",
        format!("Paths ({}):", definition.paths.items.len()).bold()
    );
    for (path, item) in &definition.paths.items {
        println!();
        println!("  {}", path.cyan());

        for (method, operation) in item.operations() {
            match &operation.operation_id {
                Some(operation_id) => println!(
                    "    {} {}",
                    method.to_uppercase().bright_yellow(),
                    operation_id
                ),
                None => println!("    {}", method.to_uppercase().bright_yellow()),
            }

            let parameter_count = operation.parameters.len() + item.parameters.len();
            if parameter_count > 0 {
                println!("      Parameters: {}", parameter_count);
            }
            if operation.request_body.is_some() {
                println!("      Request body: yes");
            }
        }
    }

    Ok(())
}
