//! # Database Connection Capability
//!
//! This module defines the connection seam the rest of the crate depends on:
//! the [`DbConnection`] trait describing what a connection can do, and
//! [`NoopConnection`], a driver stand-in that satisfies the contract without
//! performing any I/O.
//!
//! Consumers hold the capability behind `&dyn DbConnection`, so any
//! implementation can be substituted at construction time: a real driver, the
//! no-op stub, or a test double.

use tracing::debug;

use crate::config::ConnectionConfig;

/// Capability contract for a database connection.
///
/// The trait imposes no ordering between `open`, `close`, and `exec_query`;
/// any sequencing guarantee is a property of a particular caller, not of the
/// capability itself.
pub trait DbConnection {
    /// Opens the connection. No preconditions, no failure mode.
    fn open(&self);

    /// Closes the connection. No preconditions, no failure mode.
    fn close(&self);

    /// Executes `query` and returns the driver's result code.
    ///
    /// The query text is accepted as-is; implementations perform no
    /// validation.
    fn exec_query(&self, query: &str) -> i64;
}

/// Driver stand-in that satisfies [`DbConnection`] without touching a real
/// database.
///
/// `open` and `close` have no observable effect and `exec_query` returns `0`
/// for every input. The held [`ConnectionConfig`] only labels log output.
pub struct NoopConnection {
    config: ConnectionConfig,
}

impl NoopConnection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ConnectionConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_config(config: ConnectionConfig) -> Self {
        Self { config }
    }
}

impl Default for NoopConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl DbConnection for NoopConnection {
    fn open(&self) {
        debug!("Opening connection to {}", self.config.conn_string);
    }

    fn close(&self) {
        debug!("Closing connection to {}", self.config.conn_string);
    }

    fn exec_query(&self, query: &str) -> i64 {
        if self.config.log_queries {
            debug!("Executing query: {}", query);
        }
        0
    }
}
