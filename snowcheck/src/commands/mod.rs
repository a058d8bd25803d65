// snowcheck/src/commands/mod.rs

pub mod check;
pub mod config;

use snowcheck_core::SnowcheckError;
use snowcheck_core::domain::connection::ConnectionParams;
use snowcheck_core::infrastructure::config::{
    ParamOverrides, load_profiles, resolve_params, select_output,
};

use crate::cli::ConnectionArgs;

/// Profiles file (optional) -> SNOWFLAKE_* variables -> flags.
/// clap already merged the last two layers into `args`.
pub fn resolve(args: ConnectionArgs) -> Result<ConnectionParams, SnowcheckError> {
    let output = match &args.profiles_file {
        Some(path) => {
            let profiles = load_profiles(path)?;
            Some(select_output(&profiles, &args.profile, args.target.as_deref())?)
        }
        None => None,
    };

    let overrides = ParamOverrides {
        user: args.user,
        password: args.password,
        account: args.account,
        warehouse: args.warehouse,
        database: args.database,
        schema: args.schema,
        role: args.role,
        timeout_secs: args.timeout_secs,
    };

    Ok(resolve_params(output, overrides))
}
