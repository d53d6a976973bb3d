//! # Mockable DB
//!
//! A small instructional crate demonstrating interface-based dependency
//! injection and mock-object unit testing around a database-connection
//! capability.
//!
//! ## Architecture Overview
//!
//! The crate has three production pieces and a test harness that outweighs
//! them:
//!
//! - [`connection`] - The [`DbConnection`] capability trait and
//!   [`NoopConnection`], a driver stand-in that performs no I/O
//! - [`client`] - [`DbClient`], a consumer that holds the capability as a
//!   borrow and forwards its three operations to it
//! - [`config`] - [`ConnectionConfig`] and its validating builder
//! - [`errors`] - The configuration error type; capability operations
//!   themselves are total and never fail
//!
//! The test harness substitutes recording and expectation-checking doubles for
//! the capability and asserts call occurrence, argument equality, call count,
//! return-value propagation, and relative call order.
//!
//! ## Usage
//!
//! ```rust
//! use mockable_db::{DbClient, NoopConnection};
//!
//! let connection = NoopConnection::new();
//! let client = DbClient::new(&connection);
//!
//! client.open_connection();
//! let code = client.use_connection("SELECT * FROM table");
//! client.close_connection();
//!
//! assert_eq!(code, 0);
//! ```
//!
//! The client never constructs or destroys the connection; ownership stays
//! with the caller for the connection's entire lifetime.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Core public modules
pub mod client;
pub mod config;
pub mod connection;
pub mod errors;

#[cfg(test)]
mod test_utils;

// Public re-exports for simplified API
pub use client::DbClient;
pub use config::{ConnectionConfig, ConnectionConfigBuilder};
pub use connection::{DbConnection, NoopConnection};
pub use errors::{ConnectionError, Result};
