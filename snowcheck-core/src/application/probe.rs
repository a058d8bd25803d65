// snowcheck-core/src/application/probe.rs

use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::connection::ConnectionParams;
use crate::domain::error::DomainError;
use crate::domain::report::VersionReport;
use crate::error::SnowcheckError;
use crate::ports::warehouse::{Connection, Cursor, Driver};

pub const PROBE_QUERY: &str = "SELECT CURRENT_VERSION()";

/// Connects, asks the warehouse for its version, and releases everything.
///
/// The cursor and the connection are released in two independent steps: a
/// failing cursor release never skips the connection release. When the probe
/// itself failed, release errors are logged and the probe error is returned.
#[instrument(skip_all, fields(account = %params.account, user = %params.user))]
pub async fn check_connection(
    driver: &dyn Driver,
    params: &ConnectionParams,
) -> Result<VersionReport, SnowcheckError> {
    params.check()?;

    let start = Instant::now();
    let connection = driver.connect(params).await?;
    info!("🔗 Connected in {:.2?}", start.elapsed());

    let fetched = fetch_version(connection.as_ref()).await;
    let released = connection.close().await;

    let version = settle("connection", fetched, released)?;
    Ok(VersionReport {
        version,
        elapsed: start.elapsed(),
    })
}

async fn fetch_version(connection: &dyn Connection) -> Result<String, SnowcheckError> {
    let mut cursor = connection.cursor()?;
    let fetched = first_column(cursor.as_mut(), PROBE_QUERY).await;
    let released = cursor.close().await;
    settle("cursor", fetched, released)
}

async fn first_column(cursor: &mut dyn Cursor, query: &str) -> Result<String, SnowcheckError> {
    run_query(cursor, query).await?;

    let row = cursor
        .fetch_one()
        .await?
        .ok_or_else(|| DomainError::NoRows(query.to_string()))?;

    match row.first() {
        Some(version) => Ok(version.to_string()),
        None => {
            let column = row.first_column_name().unwrap_or("<no columns>");
            Err(DomainError::EmptyVersion(column.to_string()).into())
        }
    }
}

#[instrument(skip(cursor), fields(query.len = query.len()))]
async fn run_query(cursor: &mut dyn Cursor, query: &str) -> Result<(), SnowcheckError> {
    let start = Instant::now();
    debug!("⚡ Executing Query: {}", query);

    match cursor.execute(query).await {
        Ok(()) => {
            debug!("✅ Query finished in {:.2?}", start.elapsed());
            Ok(())
        }
        Err(e) => {
            error!("❌ Query failed after {:.2?}: {}", start.elapsed(), e);
            Err(e)
        }
    }
}

/// Combines the outcome of a scoped step with the result of releasing its handle.
fn settle<T>(
    handle: &str,
    outcome: Result<T, SnowcheckError>,
    released: Result<(), SnowcheckError>,
) -> Result<T, SnowcheckError> {
    match (outcome, released) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(release_err)) => Err(release_err),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(release_err)) => {
            warn!(handle, error = %release_err, "Release failed after an earlier error");
            Err(e)
        }
    }
}
