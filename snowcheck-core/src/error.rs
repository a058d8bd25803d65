// snowcheck-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{InfrastructureError, WarehouseError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SnowcheckError {
    // --- DOMAIN ERRORS (parameters, result shape) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (warehouse, IO, parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Shortcut so adapters and ports can `?` a WarehouseError directly.
impl From<WarehouseError> for SnowcheckError {
    fn from(err: WarehouseError) -> Self {
        SnowcheckError::Infrastructure(InfrastructureError::Warehouse(err))
    }
}
