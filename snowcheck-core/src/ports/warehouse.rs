// snowcheck-core/src/ports/warehouse.rs

// What the probe needs from a warehouse, without knowing which vendor sits behind it.
// Driver opens a Connection, a Connection hands out Cursors that borrow it, so a
// Connection cannot be closed while one of its Cursors is still alive.

use crate::domain::connection::ConnectionParams;
use crate::error::SnowcheckError;
use async_trait::async_trait;

/// One fetched row. Values are kept as text, `None` for SQL NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub columns: Vec<String>,
    pub values: Vec<Option<String>>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Option<String>>) -> Self {
        Self { columns, values }
    }

    /// First column value, `None` if the row is empty or the value is NULL.
    pub fn first(&self) -> Option<&str> {
        self.values.first().and_then(|v| v.as_deref())
    }

    pub fn first_column_name(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }
}

#[async_trait]
pub trait Driver: Send + Sync {
    async fn connect(&self, params: &ConnectionParams)
    -> Result<Box<dyn Connection>, SnowcheckError>;
}

#[async_trait]
pub trait Connection: Send + Sync {
    /// Fails with a resource error once the connection is closed.
    fn cursor(&self) -> Result<Box<dyn Cursor + '_>, SnowcheckError>;

    async fn close(self: Box<Self>) -> Result<(), SnowcheckError>;
}

#[async_trait]
pub trait Cursor: Send {
    async fn execute(&mut self, query: &str) -> Result<(), SnowcheckError>;

    /// Next buffered row, `None` once the result is exhausted.
    async fn fetch_one(&mut self) -> Result<Option<Row>, SnowcheckError>;

    /// Closing an already closed cursor is a no-op.
    async fn close(&mut self) -> Result<(), SnowcheckError>;
}
