// snowcheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Missing or empty connection parameters: {0}")]
    #[diagnostic(
        code(snowcheck::domain::params),
        help("Set them in the profiles file, through SNOWFLAKE_* variables, or with the matching flags.")
    )]
    InvalidParams(String),

    #[error("Query '{0}' returned no rows")]
    #[diagnostic(code(snowcheck::domain::no_rows))]
    NoRows(String),

    #[error("Column '{0}' holds no version (missing or null)")]
    #[diagnostic(code(snowcheck::domain::empty_version))]
    EmptyVersion(String),
}
