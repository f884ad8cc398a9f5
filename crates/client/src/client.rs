// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client facade: snapshot reads, live watching, and run lifecycle commands.

use crate::api::AutofixApi;
use crate::error::SubmitError;
use crate::poller::PollTask;
use crate::store::SnapshotStore;
use crate::watcher::{Observation, RunWatcher};
use afx_core::{AutofixRun, Clock, EventId, GroupId, SystemClock};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Delay between status fetches while a run reports processing.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2500);

/// Polling parameters.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL }
    }
}

impl PollConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}

/// Tracks background autofix runs for issue groups.
///
/// Owns the snapshot store; all watchers created from one client share it,
/// so every observer of a group sees the same value.
pub struct AutofixClient<C: Clock = SystemClock> {
    api: Arc<dyn AutofixApi>,
    store: Arc<SnapshotStore>,
    config: PollConfig,
    clock: C,
}

impl AutofixClient<SystemClock> {
    pub fn new(api: Arc<dyn AutofixApi>) -> Self {
        Self::with_clock(api, PollConfig::default(), SystemClock)
    }
}

impl<C: Clock> AutofixClient<C> {
    pub fn with_clock(api: Arc<dyn AutofixApi>, config: PollConfig, clock: C) -> Self {
        Self { api, store: Arc::new(SnapshotStore::new()), config, clock }
    }

    /// Most recent known run for a group, or `None` if never fetched or
    /// locally reset. Reads cached state only; never triggers a fetch.
    pub fn snapshot(&self, group: &GroupId) -> Option<AutofixRun> {
        self.store.get(group)
    }

    /// Subscribe to live updates for a group.
    ///
    /// Spawns a poll task that fetches immediately, then re-fetches after
    /// [`PollConfig::interval`] for as long as the visible status reports
    /// processing. The watcher's initial observation reflects the cached
    /// snapshot before any network response arrives; dropping the watcher
    /// cancels the task.
    pub fn watch(&self, group: &GroupId) -> RunWatcher {
        let run = self.store.get(group);
        let is_polling = run.as_ref().is_some_and(|r| r.is_processing());
        let (tx, rx) = watch::channel(Observation {
            run,
            is_errored: false,
            last_error: None,
            is_polling,
        });
        let token = CancellationToken::new();
        let task = PollTask {
            api: Arc::clone(&self.api),
            store: Arc::clone(&self.store),
            group: group.clone(),
            interval: self.config.interval,
            tx,
            token: token.clone(),
        };
        tokio::spawn(task.run());
        RunWatcher::new(rx, token)
    }

    /// Trigger a new run for a group.
    ///
    /// Clears any local reset, writes the optimistic processing snapshot so
    /// readers see the run before the server acknowledges it, then POSTs
    /// the trigger. A submit failure leaves the optimistic snapshot in
    /// place (no rollback); the next poll reconciles with server truth.
    /// The failure is logged and returned, but never surfaces in watcher
    /// observation state.
    pub async fn start_run(
        &self,
        group: &GroupId,
        event: &EventId,
        instruction: &str,
    ) -> Result<(), SubmitError> {
        self.store.write_optimistic(group, AutofixRun::starting(self.clock.timestamp()));
        match self.api.trigger_run(group, event, instruction).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(group = %group, error = %err, "run trigger failed; awaiting reconcile by poll");
                Err(err)
            }
        }
    }

    /// Locally hide the group's run so [`snapshot`](Self::snapshot) returns
    /// `None`, without contacting the server or discarding its history.
    /// Cleared automatically by the next [`start_run`](Self::start_run).
    pub fn reset_run(&self, group: &GroupId) {
        self.store.suppress(group);
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
