use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

const SUCCESS_PREFIX: &str = "Connection successful! Snowflake version:";

const ENV_VARS: [&str; 11] = [
    "SNOWFLAKE_USER",
    "SNOWFLAKE_PASSWORD",
    "SNOWFLAKE_ACCOUNT",
    "SNOWFLAKE_WAREHOUSE",
    "SNOWFLAKE_DATABASE",
    "SNOWFLAKE_SCHEMA",
    "SNOWFLAKE_ROLE",
    "SNOWFLAKE_TIMEOUT_SECS",
    "SNOWCHECK_PROFILES",
    "SNOWCHECK_PROFILE",
    "SNOWCHECK_TARGET",
];

/// Runs the binary from an empty directory with a clean SNOWFLAKE_* environment,
/// so neither a developer's .env nor their shell leaks into the assertions.
struct SnowcheckTestEnv {
    tmp: tempfile::TempDir,
}

impl SnowcheckTestEnv {
    fn new() -> Result<Self> {
        Ok(Self {
            tmp: tempfile::tempdir()?,
        })
    }

    fn write_profiles(&self, content: &str) -> Result<std::path::PathBuf> {
        let path = self.tmp.path().join("connections.yml");
        let mut file = std::fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        Ok(path)
    }

    fn snowcheck(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("snowcheck"));
        cmd.current_dir(self.tmp.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

const PROFILES: &str = r#"
default:
  target: dev
  outputs:
    dev:
      type: snowflake
      account: xy12345.us-east-1
      user: analyst
      password: file-secret
      warehouse: COMPUTE_WH
      database: ANALYTICS
      schema: PUBLIC
"#;

#[test]
fn test_check_rejects_missing_params() -> Result<()> {
    let env = SnowcheckTestEnv::new()?;

    env.snowcheck()
        .args(["check", "--user", "analyst"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(SUCCESS_PREFIX).not())
        .stderr(predicate::str::contains("Missing or empty"));

    Ok(())
}

#[test]
fn test_check_unreachable_account_fails() -> Result<()> {
    let env = SnowcheckTestEnv::new()?;

    env.snowcheck()
        .args([
            "check",
            "--user",
            "nobody",
            "--password",
            "wrong",
            "--account",
            "snowcheck-invalid-account-000",
            "--warehouse",
            "NOPE_WH",
            "--database",
            "NOPE",
            "--schema",
            "NOPE",
            "--timeout-secs",
            "10",
        ])
        .timeout(Duration::from_secs(90))
        .assert()
        .failure()
        .stdout(predicate::str::contains(SUCCESS_PREFIX).not());

    Ok(())
}

#[test]
fn test_config_redacts_password() -> Result<()> {
    let env = SnowcheckTestEnv::new()?;
    let profiles = env.write_profiles(PROFILES)?;

    env.snowcheck()
        .arg("config")
        .arg("--profiles-file")
        .arg(&profiles)
        .env("SNOWFLAKE_SCHEMA", "STAGING")
        .assert()
        .success()
        .stdout(predicate::str::contains("password: '********'"))
        .stdout(predicate::str::contains("schema: STAGING"))
        .stdout(predicate::str::contains("file-secret").not());

    Ok(())
}

#[test]
fn test_flags_override_env() -> Result<()> {
    let env = SnowcheckTestEnv::new()?;
    let profiles = env.write_profiles(PROFILES)?;

    env.snowcheck()
        .arg("config")
        .arg("--profiles-file")
        .arg(&profiles)
        .args(["--warehouse", "FLAG_WH"])
        .env("SNOWFLAKE_WAREHOUSE", "ENV_WH")
        .assert()
        .success()
        .stdout(predicate::str::contains("warehouse: FLAG_WH"));

    Ok(())
}

#[test]
fn test_missing_profiles_file() -> Result<()> {
    let env = SnowcheckTestEnv::new()?;

    env.snowcheck()
        .args(["config", "--profiles-file", "does-not-exist.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profiles file not found"));

    Ok(())
}
