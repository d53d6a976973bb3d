//! # Connection Client
//!
//! [`DbClient`] is the consumer side of the connection seam. It depends only
//! on the [`DbConnection`] capability, never on a concrete driver, and holds
//! the connection as a borrow; the caller keeps ownership for the client's
//! entire lifetime.

use crate::connection::DbConnection;

/// Client that forwards its operations to an injected connection.
///
/// Each method is an independent pass-through: the client keeps no state of
/// its own and enforces no ordering between opening, querying, and closing.
pub struct DbClient<'a> {
    connection: &'a dyn DbConnection,
}

impl<'a> DbClient<'a> {
    /// Creates a client over a borrowed connection.
    #[must_use]
    pub const fn new(connection: &'a dyn DbConnection) -> Self {
        Self { connection }
    }

    /// Opens the underlying connection.
    pub fn open_connection(&self) {
        self.connection.open();
    }

    /// Runs `query` on the underlying connection and returns its result code
    /// unmodified.
    pub fn use_connection(&self, query: &str) -> i64 {
        self.connection.exec_query(query)
    }

    /// Closes the underlying connection.
    pub fn close_connection(&self) {
        self.connection.close();
    }
}
