//! MySQL connection wrapper.

use mysql_async::prelude::*;
use mysql_async::{Conn, Params, Row};
use tracing::debug;

use crate::config::MysqlConfig;
use crate::error::{MysqlError, MysqlResult};
use crate::row::FromMysqlRow;

/// A wrapper around a single MySQL connection.
///
/// Every query method drains its result set before returning, so no cursor
/// stays open on the connection once a call completes.
pub struct MysqlConnection {
    conn: Conn,
}

impl MysqlConnection {
    /// Create a new connection wrapper.
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    /// Open a connection, bounded by the configured connect timeout.
    pub async fn connect(config: &MysqlConfig) -> MysqlResult<Self> {
        debug!(host = %config.host, port = config.port, "Opening MySQL connection");
        let connecting = Conn::new(config.to_opts());

        let conn = match config.connect_timeout {
            Some(limit) => tokio::time::timeout(limit, connecting)
                .await
                .map_err(|_| {
                    MysqlError::timeout(format!("no connection after {}ms", limit.as_millis()))
                })??,
            None => connecting.await?,
        };

        Ok(Self::new(conn))
    }

    /// Round-trip a ping to check the connection is alive.
    pub async fn ping(&mut self) -> MysqlResult<()> {
        debug!("Pinging MySQL server");
        self.conn.ping().await?;
        Ok(())
    }

    /// Execute a query with parameters and decode all rows.
    pub async fn query_rows<T, P>(&mut self, query: &str, params: P) -> MysqlResult<Vec<T>>
    where
        T: FromMysqlRow,
        P: Into<Params> + Send,
    {
        debug!(sql = %query, "Executing parameterized query");
        let rows: Vec<Row> = self.conn.exec(query, params).await?;
        let decoded = rows
            .iter()
            .map(T::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(decoded)
    }

    /// Execute a query with parameters and decode the first row, if any.
    pub async fn query_optional<T, P>(&mut self, query: &str, params: P) -> MysqlResult<Option<T>>
    where
        T: FromMysqlRow,
        P: Into<Params> + Send,
    {
        debug!(sql = %query, "Executing parameterized query_optional");
        let row: Option<Row> = self.conn.exec_first(query, params).await?;
        match row {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Execute an insert with parameters and return the last insert ID.
    ///
    /// Returns `None` when the server reported no generated identifier.
    pub async fn execute_insert<P>(&mut self, query: &str, params: P) -> MysqlResult<Option<u64>>
    where
        P: Into<Params> + Send,
    {
        debug!(sql = %query, "Executing parameterized insert");
        self.conn.exec_drop(query, params).await?;
        Ok(self.conn.last_insert_id().filter(|id| *id != 0))
    }

    /// Close the connection gracefully.
    pub async fn disconnect(self) -> MysqlResult<()> {
        debug!("Closing MySQL connection");
        self.conn.disconnect().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_connect_refused() {
        // Nothing listens on port 1.
        let config = MysqlConfig::new("recordings")
            .host("127.0.0.1")
            .port(1)
            .connect_timeout(Duration::from_secs(5));

        let result = MysqlConnection::connect(&config).await;
        assert!(matches!(
            result,
            Err(MysqlError::Mysql(_)) | Err(MysqlError::Timeout(_))
        ));
    }
}
