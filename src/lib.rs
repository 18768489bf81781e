pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::{ReqvetError, Result};
