// snowcheck-core/src/domain/report.rs

use std::fmt;
use std::time::Duration;

/// Outcome of a successful connectivity probe.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionReport {
    pub version: String,
    pub elapsed: Duration,
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connection successful! Snowflake version: {}", self.version)
    }
}
