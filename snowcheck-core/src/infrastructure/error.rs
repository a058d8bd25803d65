// snowcheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum WarehouseError {
    #[error("Connection Error: {0}")]
    #[diagnostic(
        code(snowcheck::infra::warehouse::connection),
        help("Check the account identifier, the credentials and that the service is reachable.")
    )]
    Connection(String),

    #[error("Resource Error: {0}")]
    #[diagnostic(
        code(snowcheck::infra::warehouse::resource),
        help("The handle was used after it was closed.")
    )]
    Resource(String),

    #[error("Query Error on '{query}': {message}")]
    #[diagnostic(
        code(snowcheck::infra::warehouse::query),
        help("Check the SQL syntax and the privileges of the role in use.")
    )]
    Query { query: String, message: String },
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- WAREHOUSE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Warehouse(#[from] WarehouseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(snowcheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(snowcheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(snowcheck::infra::config))]
    ConfigError(String),

    #[error("Profiles file not found at '{0}'")]
    #[diagnostic(
        code(snowcheck::infra::config_missing),
        help("Pass --profiles-file with an existing path, or drop it to use flags and SNOWFLAKE_* variables.")
    )]
    ConfigNotFound(String),
}
