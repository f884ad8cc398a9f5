// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live observation handle returned by `watch`.

use crate::error::FetchError;
use afx_core::AutofixRun;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// What an observer currently sees for one group.
#[derive(Clone, Default)]
pub struct Observation {
    /// Visible run (suppression already applied), or `None` for "no run".
    pub run: Option<AutofixRun>,
    /// True after a failed status fetch, until the next success.
    pub is_errored: bool,
    pub last_error: Option<Arc<FetchError>>,
    /// True while the visible status keeps the poll loop alive.
    pub is_polling: bool,
}

/// Subscription to live updates for one group.
///
/// Dropping the watcher cancels its poll task; an already in-flight fetch
/// may still complete and write to the shared store under the usual
/// ticket ordering.
pub struct RunWatcher {
    rx: watch::Receiver<Observation>,
    token: CancellationToken,
}

impl Observation {
    /// Content equality; errors compare by identity.
    pub(crate) fn same_as(&self, other: &Observation) -> bool {
        self.run == other.run
            && self.is_errored == other.is_errored
            && self.is_polling == other.is_polling
            && match (&self.last_error, &other.last_error) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl RunWatcher {
    pub(crate) fn new(rx: watch::Receiver<Observation>, token: CancellationToken) -> Self {
        Self { rx, token }
    }

    /// The latest observation, without waiting.
    pub fn current(&self) -> Observation {
        self.rx.borrow().clone()
    }

    /// Wait for the next published observation.
    ///
    /// Returns `None` once the poll task has stopped.
    pub async fn next(&mut self) -> Option<Observation> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl Drop for RunWatcher {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
