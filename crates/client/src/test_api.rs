// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted transport for poller and client tests.

use crate::api::AutofixApi;
use crate::error::{FetchError, SubmitError};
use afx_core::{AutofixRun, EventId, GroupId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// One scripted fetch outcome.
pub(crate) enum Scripted {
    /// Resolve with this run (and repeat it once the script runs dry).
    Run(Option<AutofixRun>),
    /// Fail with this HTTP status.
    Fail(u16),
    /// Never resolve.
    Hang,
}

/// Transport whose fetches pop a script and whose triggers are recorded.
#[derive(Default)]
pub(crate) struct FakeApi {
    script: Mutex<VecDeque<Scripted>>,
    /// Repeated once the script is exhausted (last resolved value).
    fallback: Mutex<Option<AutofixRun>>,
    pub(crate) fetches: AtomicUsize,
    pub(crate) triggers: Mutex<Vec<(GroupId, EventId, String)>>,
    fail_triggers: AtomicBool,
}

impl FakeApi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push(&self, outcome: Scripted) {
        self.script.lock().push_back(outcome);
    }

    pub(crate) fn fail_triggers(&self) {
        self.fail_triggers.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AutofixApi for FakeApi {
    async fn fetch_run(&self, _group: &GroupId) -> Result<Option<AutofixRun>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        match next {
            Some(Scripted::Run(run)) => {
                *self.fallback.lock() = run.clone();
                Ok(run)
            }
            Some(Scripted::Fail(status)) => Err(FetchError::Status {
                status,
                detail: "scripted failure".to_string(),
            }),
            Some(Scripted::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(self.fallback.lock().clone()),
        }
    }

    async fn trigger_run(
        &self,
        group: &GroupId,
        event: &EventId,
        instruction: &str,
    ) -> Result<(), SubmitError> {
        if self.fail_triggers.load(Ordering::SeqCst) {
            return Err(SubmitError::Status {
                status: 503,
                detail: "scripted trigger failure".to_string(),
            });
        }
        self.triggers.lock().push((group.clone(), event.clone(), instruction.to_string()));
        Ok(())
    }
}
