// snowcheck-core/src/domain/connection/params.rs

use serde::Serialize;
use std::time::Duration;
use validator::{Validate, ValidationError};

use super::secret::Secret;
use crate::domain::error::DomainError;

/// Everything needed to open one session against the warehouse.
///
/// Built once, handed to the driver, then dropped. Nothing mutates it after
/// resolution.
#[derive(Debug, Clone, Validate)]
pub struct ConnectionParams {
    #[validate(length(min = 1, message = "user cannot be empty"))]
    pub user: String,

    #[validate(custom(function = "validate_secret"))]
    pub password: Secret,

    /// Account identifier, e.g. `xy12345.us-east-1` or `myorg-myaccount`.
    #[validate(length(min = 1, message = "account cannot be empty"))]
    pub account: String,

    #[validate(length(min = 1, message = "warehouse cannot be empty"))]
    pub warehouse: String,

    #[validate(length(min = 1, message = "database cannot be empty"))]
    pub database: String,

    #[validate(length(min = 1, message = "schema cannot be empty"))]
    pub schema: String,

    pub role: Option<String>,

    /// Request timeout handed to the client library. `None` keeps its default.
    pub timeout: Option<Duration>,
}

/// Printable view of [`ConnectionParams`]: same fields, password masked.
#[derive(Debug, Serialize, PartialEq)]
pub struct RedactedParams {
    pub user: String,
    pub password: Secret,
    pub account: String,
    pub warehouse: String,
    pub database: String,
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConnectionParams {
    /// Rejects the record unless all six addressing fields are non-empty.
    /// The error lists the offending fields in alphabetical order.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            DomainError::InvalidParams(fields.join(", "))
        })
    }

    pub fn redacted(&self) -> RedactedParams {
        RedactedParams {
            user: self.user.clone(),
            password: self.password.clone(),
            account: self.account.clone(),
            warehouse: self.warehouse.clone(),
            database: self.database.clone(),
            schema: self.schema.clone(),
            role: self.role.clone(),
            timeout_secs: self.timeout.map(|t| t.as_secs()),
        }
    }
}

fn validate_secret(secret: &Secret) -> Result<(), ValidationError> {
    if secret.is_empty() {
        return Err(ValidationError::new("empty_secret"));
    }
    Ok(())
}
