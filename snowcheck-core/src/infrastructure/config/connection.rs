// snowcheck-core/src/infrastructure/config/connection.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::connection::{ConnectionParams, Secret};
use crate::infrastructure::error::InfrastructureError;

const SUPPORTED_TYPE: &str = "snowflake";

#[derive(Debug, Deserialize, Clone)]
pub struct ConnectionProfile {
    pub target: String,
    pub outputs: HashMap<String, ConnectionOutput>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectionOutput {
    #[serde(rename = "type")]
    pub output_type: String,
    pub account: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub warehouse: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub role: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Flag / environment layer. Every `Some` wins over the profile value.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub user: Option<String>,
    pub password: Option<String>,
    pub account: Option<String>,
    pub warehouse: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub role: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[instrument]
pub fn load_profiles(path: &Path) -> Result<HashMap<String, ConnectionProfile>, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let profiles: HashMap<String, ConnectionProfile> = serde_yaml::from_str(&content)?;
    info!(count = profiles.len(), "Profiles loaded");

    Ok(profiles)
}

/// Picks `profile.outputs[target]`, `target` defaulting to the profile's own.
pub fn select_output(
    profiles: &HashMap<String, ConnectionProfile>,
    profile: &str,
    target: Option<&str>,
) -> Result<ConnectionOutput, InfrastructureError> {
    let selected = profiles.get(profile).ok_or_else(|| {
        let mut known: Vec<&str> = profiles.keys().map(String::as_str).collect();
        known.sort_unstable();
        InfrastructureError::ConfigError(format!(
            "profile '{}' not found (available: [{}])",
            profile,
            known.join(", ")
        ))
    })?;

    let target = target.unwrap_or(selected.target.as_str());
    let output = selected.outputs.get(target).ok_or_else(|| {
        InfrastructureError::ConfigError(format!(
            "target '{}' not found in profile '{}'",
            target, profile
        ))
    })?;

    if !output.output_type.eq_ignore_ascii_case(SUPPORTED_TYPE) {
        return Err(InfrastructureError::ConfigError(format!(
            "output '{}.{}' has type '{}', only '{}' is supported",
            profile, target, output.output_type, SUPPORTED_TYPE
        )));
    }

    debug!(profile, target, "Output selected");
    Ok(output.clone())
}

/// Merges the profile output (if any) with the override layer.
///
/// Fields missing from both layers come out empty, validation reports them later.
/// A zero timeout means "no timeout set", the client library default applies.
pub fn resolve_params(output: Option<ConnectionOutput>, overrides: ParamOverrides) -> ConnectionParams {
    let base = output.unwrap_or_default();

    ConnectionParams {
        user: overrides.user.or(base.user).unwrap_or_default(),
        password: Secret::new(overrides.password.or(base.password).unwrap_or_default()),
        account: overrides.account.or(base.account).unwrap_or_default(),
        warehouse: overrides.warehouse.or(base.warehouse).unwrap_or_default(),
        database: overrides.database.or(base.database).unwrap_or_default(),
        schema: overrides.schema.or(base.schema).unwrap_or_default(),
        role: overrides.role.or(base.role),
        timeout: overrides
            .timeout_secs
            .or(base.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use std::io::Write;

    const PROFILES: &str = r#"
default:
  target: dev
  outputs:
    dev:
      type: snowflake
      account: xy12345.us-east-1
      user: analyst
      password: from-file
      warehouse: COMPUTE_WH
      database: ANALYTICS
      schema: PUBLIC
    prod:
      type: snowflake
      account: prod-account
      user: svc_smoke
      password: prod-secret
      warehouse: PROD_WH
      database: PROD
      schema: CORE
      role: MONITOR
      timeout_secs: 45
local:
  target: duck
  outputs:
    duck:
      type: duckdb
"#;

    fn write_profiles() -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(PROFILES.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_default_target_is_used() -> Result<()> {
        let file = write_profiles()?;
        let profiles = load_profiles(file.path())?;

        let output = select_output(&profiles, "default", None)?;
        assert_eq!(output.account.as_deref(), Some("xy12345.us-east-1"));
        assert_eq!(output.role, None);
        Ok(())
    }

    #[test]
    fn test_explicit_target() -> Result<()> {
        let file = write_profiles()?;
        let profiles = load_profiles(file.path())?;

        let params = resolve_params(
            Some(select_output(&profiles, "default", Some("prod"))?),
            ParamOverrides::default(),
        );
        assert_eq!(params.user, "svc_smoke");
        assert_eq!(params.role.as_deref(), Some("MONITOR"));
        assert_eq!(params.timeout, Some(Duration::from_secs(45)));
        params.check()?;
        Ok(())
    }

    #[test]
    fn test_overrides_win() -> Result<()> {
        let file = write_profiles()?;
        let profiles = load_profiles(file.path())?;
        let output = select_output(&profiles, "default", None)?;

        let params = resolve_params(
            Some(output),
            ParamOverrides {
                password: Some("from-env".into()),
                schema: Some("STAGING".into()),
                ..Default::default()
            },
        );
        assert_eq!(params.password.expose(), "from-env");
        assert_eq!(params.schema, "STAGING");
        assert_eq!(params.database, "ANALYTICS");
        Ok(())
    }

    #[test]
    fn test_zero_timeout_is_unset() {
        let params = resolve_params(
            Some(ConnectionOutput {
                timeout_secs: Some(45),
                ..Default::default()
            }),
            ParamOverrides {
                timeout_secs: Some(0),
                ..Default::default()
            },
        );
        assert_eq!(params.timeout, None);

        let from_file = resolve_params(
            Some(ConnectionOutput {
                timeout_secs: Some(0),
                ..Default::default()
            }),
            ParamOverrides::default(),
        );
        assert_eq!(from_file.timeout, None);
    }

    #[test]
    fn test_without_profile_missing_fields_are_empty() {
        let params = resolve_params(
            None,
            ParamOverrides {
                user: Some("analyst".into()),
                ..Default::default()
            },
        );
        assert_eq!(params.user, "analyst");
        assert!(params.account.is_empty());
        assert!(params.check().is_err());
    }

    #[test]
    fn test_unknown_profile_lists_available() -> Result<()> {
        let file = write_profiles()?;
        let profiles = load_profiles(file.path())?;

        match select_output(&profiles, "missing", None) {
            Err(InfrastructureError::ConfigError(msg)) => {
                assert!(msg.contains("default, local"), "{msg}");
                Ok(())
            }
            other => bail!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_output_type() -> Result<()> {
        let file = write_profiles()?;
        let profiles = load_profiles(file.path())?;

        match select_output(&profiles, "local", None) {
            Err(InfrastructureError::ConfigError(msg)) => {
                assert!(msg.contains("duckdb"));
                Ok(())
            }
            other => bail!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        match load_profiles(&dir.path().join("connections.yml")) {
            Err(InfrastructureError::ConfigNotFound(path)) => {
                assert!(path.ends_with("connections.yml"));
                Ok(())
            }
            other => bail!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_yaml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"default: [unclosed")?;
        assert!(matches!(
            load_profiles(file.path()),
            Err(InfrastructureError::YamlError(_))
        ));
        Ok(())
    }
}
