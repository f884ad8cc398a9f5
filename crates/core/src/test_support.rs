// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::run::AutofixRun;
use crate::status::RunStatus;
use crate::step::StepRecord;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core state machine types.
pub mod strategies {
    use crate::status::RunStatus;
    use proptest::prelude::*;

    pub fn arb_run_status() -> impl Strategy<Value = RunStatus> {
        prop_oneof![
            Just(RunStatus::Processing),
            Just(RunStatus::Completed),
            Just(RunStatus::Failed),
        ]
    }
}

// ── Snapshot factory functions ──────────────────────────────────────────

/// A server-shaped run with one step in the given status.
pub fn server_run(run_id: &str, status: RunStatus) -> AutofixRun {
    AutofixRun::builder()
        .run_id(run_id)
        .status(status)
        .steps(vec![StepRecord {
            id: "1".to_string(),
            index: 0,
            status,
            title: "Analyze the issue".to_string(),
            progress: Vec::new(),
        }])
        .build()
}

/// A run the server still reports as executing.
pub fn processing_run(run_id: &str) -> AutofixRun {
    server_run(run_id, RunStatus::Processing)
}

/// A run that reached a terminal status.
pub fn completed_run(run_id: &str) -> AutofixRun {
    server_run(run_id, RunStatus::Completed)
}
