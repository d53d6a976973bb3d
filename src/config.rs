use crate::errors::{ConnectionError, Result};

/// Configuration for a connection driver.
///
/// The stub driver performs no I/O; the connection string is a label carried
/// into log output and `log_queries` controls whether executed queries are
/// logged at debug level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub conn_string: String,
    pub log_queries: bool,
}

impl ConnectionConfig {
    #[must_use]
    pub const fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            conn_string: "stub://local".to_string(),
            log_queries: false,
        }
    }
}

pub struct ConnectionConfigBuilder {
    conn_string: Option<String>,
    log_queries: bool,
}

impl ConnectionConfigBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conn_string: None,
            log_queries: false,
        }
    }

    #[must_use]
    pub const fn verbose() -> Self {
        Self::new().log_queries(true)
    }

    #[must_use]
    pub const fn testing() -> Self {
        Self::new().log_queries(false)
    }

    #[must_use]
    pub fn conn_string<S: Into<String>>(mut self, conn_string: S) -> Self {
        self.conn_string = Some(conn_string.into());
        self
    }

    #[must_use]
    pub const fn log_queries(mut self, log_queries: bool) -> Self {
        self.log_queries = log_queries;
        self
    }

    pub fn build(self) -> Result<ConnectionConfig> {
        let conn_string = self
            .conn_string
            .unwrap_or_else(|| "stub://local".to_string());

        if conn_string.is_empty() {
            return Err(ConnectionError::configuration(
                "conn_string",
                "Connection string must not be empty",
            ));
        }

        Ok(ConnectionConfig {
            conn_string,
            log_queries: self.log_queries,
        })
    }
}

impl Default for ConnectionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
