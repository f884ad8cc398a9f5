// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-watcher poll task.
//!
//! Lifecycle: fetch once, then while the visible status says processing,
//! fetch again after a fixed delay. On any other status the task parks on
//! the store's change channel until a later optimistic write (a new
//! `start_run`) makes the group processing again. The task is owned by its
//! watcher and cancelled when the watcher is dropped.

use crate::api::AutofixApi;
use crate::error::FetchError;
use crate::store::SnapshotStore;
use crate::watcher::Observation;
use afx_core::GroupId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

pub(crate) struct PollTask {
    pub(crate) api: Arc<dyn AutofixApi>,
    pub(crate) store: Arc<SnapshotStore>,
    pub(crate) group: GroupId,
    pub(crate) interval: Duration,
    pub(crate) tx: watch::Sender<Observation>,
    pub(crate) token: CancellationToken,
}

impl PollTask {
    pub(crate) async fn run(self) {
        let mut versions = self.store.subscribe(&self.group);
        let mut last_error: Option<Arc<FetchError>> = None;

        // Initial fetch, then poll while processing.
        if !self.fetch_once(&mut last_error).await {
            return;
        }
        loop {
            if !self.visible_processing() {
                if !self.park_until_processing(&mut versions, &last_error).await {
                    return;
                }
            }
            if !self.sleep_one_interval(&mut versions, &last_error).await {
                return;
            }
            if !self.fetch_once(&mut last_error).await {
                return;
            }
        }
    }

    fn visible_processing(&self) -> bool {
        self.store.get(&self.group).is_some_and(|run| run.is_processing())
    }

    fn observation(&self, last_error: &Option<Arc<FetchError>>) -> Observation {
        let run = self.store.get(&self.group);
        let is_polling = run.as_ref().is_some_and(|r| r.is_processing());
        Observation {
            run,
            is_errored: last_error.is_some(),
            last_error: last_error.clone(),
            is_polling,
        }
    }

    /// Every fetch resolution is published so watchers see it land; store
    /// changes noticed while waiting are republished only when the visible
    /// content actually differs.
    fn publish_fetched(&self, last_error: &Option<Arc<FetchError>>) {
        self.tx.send_replace(self.observation(last_error));
    }

    fn publish_if_changed(&self, last_error: &Option<Arc<FetchError>>) {
        let next = self.observation(last_error);
        self.tx.send_if_modified(|current| {
            if next.same_as(current) {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// One de-duplicated fetch. Returns false on cancellation.
    async fn fetch_once(&self, last_error: &mut Option<Arc<FetchError>>) -> bool {
        let Some(ticket) = self.store.try_begin_fetch(&self.group) else {
            // Another observer's fetch is in flight; report current state and
            // let its apply notify us.
            self.publish_fetched(last_error);
            return true;
        };
        let result = tokio::select! {
            _ = self.token.cancelled() => {
                self.store.finish_fetch(&self.group);
                return false;
            }
            result = self.api.fetch_run(&self.group) => result,
        };
        self.store.finish_fetch(&self.group);

        match result {
            Ok(run) => {
                *last_error = None;
                if !self.store.apply(&self.group, ticket, run) {
                    debug!(group = %self.group, "discarded stale fetch result");
                }
            }
            Err(err) => {
                warn!(group = %self.group, error = %err, "run status fetch failed");
                *last_error = Some(Arc::new(err));
            }
        }
        self.publish_fetched(last_error);
        true
    }

    /// Sleep the poll interval, republishing on store changes while asleep.
    /// Returns false on cancellation.
    async fn sleep_one_interval(
        &self,
        versions: &mut watch::Receiver<u64>,
        last_error: &Option<Arc<FetchError>>,
    ) -> bool {
        let deadline = Instant::now() + self.interval;
        loop {
            tokio::select! {
                _ = self.token.cancelled() => return false,
                _ = sleep_until(deadline) => return true,
                changed = versions.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                    versions.borrow_and_update();
                    self.publish_if_changed(last_error);
                }
            }
        }
    }

    /// Park until the visible status is processing again (a new run was
    /// triggered). Returns false on cancellation.
    ///
    /// Terminal statuses and "no run" both land here; nothing but a store
    /// change can wake the task, so an unobserved group costs no timers.
    async fn park_until_processing(
        &self,
        versions: &mut watch::Receiver<u64>,
        last_error: &Option<Arc<FetchError>>,
    ) -> bool {
        loop {
            if self.visible_processing() {
                return true;
            }
            tokio::select! {
                _ = self.token.cancelled() => return false,
                changed = versions.changed() => {
                    if changed.is_err() {
                        return false;
                    }
                    versions.borrow_and_update();
                    self.publish_if_changed(last_error);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
