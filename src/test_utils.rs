//! # Test Utilities
//!
//! Hand-rolled test doubles for the connection capability, used where a test
//! wants to inspect the full call history rather than declare expectations up
//! front.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::connection::DbConnection;

/// A single observed capability invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Open,
    Close,
    ExecQuery(String),
}

/// Recording double for the connection capability.
///
/// Records every invocation in order and pops scripted `exec_query` results
/// from a queue, falling back to the stub constant `0` when the queue is
/// empty. Scoped to a single test case.
pub struct RecordingConnection {
    calls: RefCell<Vec<RecordedCall>>,
    query_results: RefCell<VecDeque<i64>>,
}

impl Default for RecordingConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            query_results: RefCell::new(VecDeque::new()),
        }
    }

    pub fn new_with_results(query_results: VecDeque<i64>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            query_results: RefCell::new(query_results),
        }
    }

    /// Snapshot of the calls observed so far, in invocation order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl DbConnection for RecordingConnection {
    fn open(&self) {
        self.calls.borrow_mut().push(RecordedCall::Open);
    }

    fn close(&self) {
        self.calls.borrow_mut().push(RecordedCall::Close);
    }

    fn exec_query(&self, query: &str) -> i64 {
        self.calls
            .borrow_mut()
            .push(RecordedCall::ExecQuery(query.to_owned()));
        self.query_results.borrow_mut().pop_front().unwrap_or(0)
    }
}
