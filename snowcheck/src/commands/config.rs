// snowcheck/src/commands/config.rs
//
// USE CASE: Show what `check` would connect with, without connecting.

use snowcheck_core::SnowcheckError;
use snowcheck_core::infrastructure::error::InfrastructureError;

use crate::cli::ConnectionArgs;

pub fn execute(args: ConnectionArgs) -> Result<(), SnowcheckError> {
    let params = super::resolve(args)?;
    params.check()?;

    let rendered =
        serde_yaml::to_string(&params.redacted()).map_err(InfrastructureError::YamlError)?;
    print!("{rendered}");
    Ok(())
}
