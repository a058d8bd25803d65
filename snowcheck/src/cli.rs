// snowcheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snowcheck")]
#[command(about = "Snowflake connectivity smoke test", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ❄️  Connects, runs SELECT CURRENT_VERSION() and prints the result
    Check {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// 🔍 Prints the resolved connection parameters (password redacted)
    Config {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Flags win over SNOWFLAKE_* variables, which win over the profiles file.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// YAML profiles file (profile -> target -> output)
    #[arg(long, env = "SNOWCHECK_PROFILES")]
    pub profiles_file: Option<PathBuf>,

    /// Profile to read from the profiles file
    #[arg(long, env = "SNOWCHECK_PROFILE", default_value = "default")]
    pub profile: String,

    /// Output inside the profile (defaults to the profile's own target)
    #[arg(long, env = "SNOWCHECK_TARGET")]
    pub target: Option<String>,

    #[arg(long, short, env = "SNOWFLAKE_USER")]
    pub user: Option<String>,

    #[arg(long, env = "SNOWFLAKE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Account identifier (ex: "xy12345.us-east-1")
    #[arg(long, short, env = "SNOWFLAKE_ACCOUNT")]
    pub account: Option<String>,

    #[arg(long, short, env = "SNOWFLAKE_WAREHOUSE")]
    pub warehouse: Option<String>,

    #[arg(long, short, env = "SNOWFLAKE_DATABASE")]
    pub database: Option<String>,

    #[arg(long, short, env = "SNOWFLAKE_SCHEMA")]
    pub schema: Option<String>,

    #[arg(long, short, env = "SNOWFLAKE_ROLE")]
    pub role: Option<String>,

    /// Request timeout in seconds (0 or unset: client library default)
    #[arg(long, env = "SNOWFLAKE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
