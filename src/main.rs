use clap::Parser;
use reqvet::{
    Result,
    cli::{Cli, Commands},
    commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            definition,
            request,
            no_coerce,
        } => {
            commands::execute_validate(&definition, &request, no_coerce)?;
        }
        Commands::List { definition } => {
            commands::execute_list(&definition)?;
        }
    }

    Ok(())
}
