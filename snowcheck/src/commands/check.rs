// snowcheck/src/commands/check.rs
//
// USE CASE: Connectivity smoke test against the warehouse.

use snowcheck_core::SnowcheckError;
use snowcheck_core::application::check_connection;
use snowcheck_core::infrastructure::adapters::SnowflakeDriver;
use tracing::info;

use crate::cli::ConnectionArgs;

pub async fn execute(args: ConnectionArgs) -> Result<(), SnowcheckError> {
    let params = super::resolve(args)?;
    info!(account = %params.account, warehouse = %params.warehouse, "❄️  Checking connection");

    let driver = SnowflakeDriver::new();
    let report = check_connection(&driver, &params).await?;
    info!("✨ Probe finished in {:.2?}", report.elapsed);

    // stdout carries this single line only, logs go to stderr.
    println!("{report}");
    Ok(())
}
