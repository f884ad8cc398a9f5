// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed snapshot store: one entry per issue group.
//!
//! All snapshot state lives here, owned by the client and injected into
//! consumers. Writes are ordered by per-group tickets taken at issue time;
//! a completion carrying a stale ticket is discarded, so a slow fetch can
//! never overwrite a newer value.

use afx_core::{AutofixRun, GroupId};
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::watch;

/// Per-group write ticket. Monotonic within a group.
pub(crate) type Ticket = u64;

struct GroupEntry {
    run: Option<AutofixRun>,
    /// Ticket of the last applied write.
    applied: Ticket,
    /// Next ticket to hand out.
    next: Ticket,
    /// View-layer filter: readers see `None` until the next optimistic write.
    suppressed: bool,
    /// De-duplication: at most one fetch per group in flight.
    fetch_in_flight: bool,
    /// Bumped on every visible change; pollers park on this.
    version: watch::Sender<u64>,
}

impl Default for GroupEntry {
    fn default() -> Self {
        Self {
            run: None,
            applied: 0,
            next: 0,
            suppressed: false,
            fetch_in_flight: false,
            version: watch::Sender::new(0),
        }
    }
}

impl GroupEntry {
    fn bump(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}

/// Process-wide snapshot cache keyed by group id.
///
/// Reads have no side effects and never trigger a fetch.
#[derive(Default)]
pub struct SnapshotStore {
    groups: Mutex<HashMap<GroupId, GroupEntry>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent known run, or `None` if never fetched or suppressed.
    pub fn get(&self, group: &GroupId) -> Option<AutofixRun> {
        let groups = self.groups.lock();
        let entry = groups.get(group)?;
        if entry.suppressed {
            return None;
        }
        entry.run.clone()
    }

    /// Hide the group's run from readers without touching stored data.
    ///
    /// Cleared by the next optimistic write (a new `start_run`).
    pub fn suppress(&self, group: &GroupId) {
        let mut groups = self.groups.lock();
        let entry = groups.entry(group.clone()).or_default();
        entry.suppressed = true;
        entry.bump();
    }

    /// Write the optimistic placeholder for a newly triggered run.
    ///
    /// Clears suppression and takes its own ticket, so an already in-flight
    /// fetch that was issued earlier cannot overwrite it.
    pub(crate) fn write_optimistic(&self, group: &GroupId, run: AutofixRun) {
        let mut groups = self.groups.lock();
        let entry = groups.entry(group.clone()).or_default();
        entry.suppressed = false;
        entry.next += 1;
        entry.applied = entry.next;
        entry.run = Some(run);
        entry.bump();
    }

    /// Apply a fetch completion taken under `ticket`.
    ///
    /// Returns false (and leaves state untouched) when a newer write has
    /// already been applied.
    pub(crate) fn apply(&self, group: &GroupId, ticket: Ticket, run: Option<AutofixRun>) -> bool {
        let mut groups = self.groups.lock();
        let entry = groups.entry(group.clone()).or_default();
        if ticket <= entry.applied {
            return false;
        }
        entry.applied = ticket;
        entry.run = run;
        entry.bump();
        true
    }

    /// Mark a fetch as in flight and take its ticket.
    ///
    /// Returns `None` when another fetch for the group has not resolved yet;
    /// the caller skips its own fetch.
    pub(crate) fn try_begin_fetch(&self, group: &GroupId) -> Option<Ticket> {
        let mut groups = self.groups.lock();
        let entry = groups.entry(group.clone()).or_default();
        if entry.fetch_in_flight {
            return None;
        }
        entry.fetch_in_flight = true;
        entry.next += 1;
        Some(entry.next)
    }

    /// Clear the in-flight marker after the fetch resolved (or was abandoned).
    pub(crate) fn finish_fetch(&self, group: &GroupId) {
        let mut groups = self.groups.lock();
        if let Some(entry) = groups.get_mut(group) {
            entry.fetch_in_flight = false;
        }
    }

    /// Subscribe to visible-change notifications for a group.
    pub(crate) fn subscribe(&self, group: &GroupId) -> watch::Receiver<u64> {
        let mut groups = self.groups.lock();
        groups.entry(group.clone()).or_default().version.subscribe()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
