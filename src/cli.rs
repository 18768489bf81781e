use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reqvet")]
#[command(version)]
#[command(about = "Validate HTTP requests against an OpenAPI definition", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a request descriptor against an OpenAPI definition
    Validate {
        /// Path to OpenAPI definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,

        /// Path to request descriptor file (JSON)
        #[arg(short, long)]
        request: PathBuf,

        /// Disable coercion of string parameter values toward their
        /// declared schema type
        #[arg(long)]
        no_coerce: bool,
    },

    /// List the operations a definition exposes
    List {
        /// Path to OpenAPI definition file (YAML or JSON)
        #[arg(short, long)]
        definition: PathBuf,
    },
}
