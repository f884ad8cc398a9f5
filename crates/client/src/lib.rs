// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! afx-client: polling status tracker for background autofix runs.
//!
//! The client keeps an eventually-consistent view of one run per issue
//! group by polling the REST status endpoint while the run reports
//! PROCESSING, and exposes commands to trigger a new run (optimistically)
//! and to locally hide a finished one.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod api;
mod client;
mod error;
mod poller;
mod store;
mod watcher;

#[cfg(test)]
mod test_api;

pub use api::{AutofixApi, HttpApi};
pub use client::{AutofixClient, PollConfig, DEFAULT_POLL_INTERVAL};
pub use error::{FetchError, SubmitError};
pub use store::SnapshotStore;
pub use watcher::{Observation, RunWatcher};
