// snowcheck-core/src/infrastructure/adapters/snowflake.rs

use async_trait::async_trait;
use snowflake_connector_rs::{
    SnowflakeAuthMethod, SnowflakeClient, SnowflakeClientConfig, SnowflakeRow, SnowflakeSession,
};
use std::collections::VecDeque;
use tracing::{debug, instrument};

use crate::domain::connection::ConnectionParams;
use crate::error::SnowcheckError;
use crate::infrastructure::error::WarehouseError;
use crate::ports::warehouse::{Connection, Cursor, Driver, Row};

/// Password-authenticated driver backed by `snowflake-connector-rs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnowflakeDriver;

pub struct SnowflakeConnection {
    session: SnowflakeSession,
}

pub struct SnowflakeCursor<'a> {
    session: &'a SnowflakeSession,
    buffer: RowBuffer<SnowflakeRow>,
}

/// Fetched rows waiting to be handed out, FIFO, plus the cursor's open/closed state.
#[derive(Debug)]
struct RowBuffer<R> {
    rows: VecDeque<R>,
    closed: bool,
}

impl SnowflakeDriver {
    pub fn new() -> Self {
        Self
    }

    fn client(params: &ConnectionParams) -> Result<SnowflakeClient, WarehouseError> {
        SnowflakeClient::new(
            &params.user,
            SnowflakeAuthMethod::Password(params.password.expose().to_string()),
            SnowflakeClientConfig {
                account: params.account.clone(),
                warehouse: Some(params.warehouse.clone()),
                database: Some(params.database.clone()),
                schema: Some(params.schema.clone()),
                role: params.role.clone().filter(|r| !r.is_empty()),
                timeout: params.timeout,
            },
        )
        .map_err(|e| WarehouseError::Connection(e.to_string()))
    }
}

#[async_trait]
impl Driver for SnowflakeDriver {
    #[instrument(skip(self, params), fields(account = %params.account, user = %params.user))]
    async fn connect(
        &self,
        params: &ConnectionParams,
    ) -> Result<Box<dyn Connection>, SnowcheckError> {
        let client = Self::client(params)?;
        let session = client
            .create_session()
            .await
            .map_err(|e| WarehouseError::Connection(e.to_string()))?;
        debug!("❄️  Session established");

        Ok(Box::new(SnowflakeConnection { session }))
    }
}

#[async_trait]
impl Connection for SnowflakeConnection {
    fn cursor(&self) -> Result<Box<dyn Cursor + '_>, SnowcheckError> {
        Ok(Box::new(SnowflakeCursor {
            session: &self.session,
            buffer: RowBuffer::default(),
        }))
    }

    async fn close(self: Box<Self>) -> Result<(), SnowcheckError> {
        // The library exposes no explicit logout: dropping the session releases
        // its HTTP client, the server-side token expires on its own.
        drop(self.session);
        debug!("🔌 Session released");
        Ok(())
    }
}

impl<R> Default for RowBuffer<R> {
    fn default() -> Self {
        Self {
            rows: VecDeque::new(),
            closed: false,
        }
    }
}

impl<R> RowBuffer<R> {
    fn ensure_open(&self) -> Result<(), WarehouseError> {
        if self.closed {
            return Err(WarehouseError::Resource("cursor is already closed".into()));
        }
        Ok(())
    }

    /// Replaces whatever the previous query left behind.
    fn fill(&mut self, rows: Vec<R>) -> Result<(), WarehouseError> {
        self.ensure_open()?;
        self.rows = rows.into();
        Ok(())
    }

    fn pop(&mut self) -> Result<Option<R>, WarehouseError> {
        self.ensure_open()?;
        Ok(self.rows.pop_front())
    }

    fn close(&mut self) {
        self.rows.clear();
        self.closed = true;
    }
}

#[async_trait]
impl Cursor for SnowflakeCursor<'_> {
    #[instrument(skip(self))]
    async fn execute(&mut self, query: &str) -> Result<(), SnowcheckError> {
        self.buffer.ensure_open()?;

        let rows = self
            .session
            .query(query)
            .await
            .map_err(|e| WarehouseError::Query {
                query: query.to_string(),
                message: e.to_string(),
            })?;
        debug!(rows = rows.len(), "Result buffered");

        self.buffer.fill(rows)?;
        Ok(())
    }

    async fn fetch_one(&mut self) -> Result<Option<Row>, SnowcheckError> {
        Ok(self.buffer.pop()?.map(|row| to_row(&row)))
    }

    async fn close(&mut self) -> Result<(), SnowcheckError> {
        self.buffer.close();
        Ok(())
    }
}

fn to_row(row: &SnowflakeRow) -> Row {
    let columns: Vec<String> = row
        .column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    // NULL (or anything the library refuses to render as text) becomes None.
    let values = columns
        .iter()
        .map(|name| row.get::<String>(name).ok())
        .collect();

    Row::new(columns, values)
}
