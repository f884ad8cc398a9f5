// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The autofix run snapshot.

use crate::id::RunId;
use crate::status::RunStatus;
use crate::step::StepRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known state of a background analysis run, as observed by the client.
///
/// A snapshot is created locally (optimistically) the instant a new run is
/// triggered and superseded by the next successful fetch, which is
/// authoritative from then on. At most one snapshot is current per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofixRun {
    pub status: RunStatus,
    /// Empty until the server has acknowledged the run.
    pub run_id: RunId,
    /// Job phases in execution order.
    pub steps: Vec<StepRecord>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AutofixRun {
    /// Build the optimistic placeholder written the instant a run is triggered.
    ///
    /// One synthetic step, empty run id; superseded by the first fetch.
    pub fn starting(created_at: DateTime<Utc>) -> Self {
        Self {
            status: RunStatus::Processing,
            run_id: RunId::default(),
            steps: vec![StepRecord {
                id: "1".to_string(),
                index: 0,
                status: RunStatus::Processing,
                title: "Starting Autofix...".to_string(),
                progress: Vec::new(),
            }],
            created_at,
            completed_at: None,
            error_message: None,
        }
    }

    /// Check if the run keeps the poll loop alive.
    pub fn is_processing(&self) -> bool {
        self.status.is_processing()
    }

    /// The step currently executing, if any.
    pub fn current_step(&self) -> Option<&StepRecord> {
        self.steps.iter().rev().find(|s| s.status.is_processing()).or_else(|| self.steps.last())
    }
}

crate::builder! {
    pub struct AutofixRunBuilder => AutofixRun {
        into {
            run_id: RunId = "run-test",
        }
        set {
            status: RunStatus = RunStatus::Processing,
            steps: Vec<StepRecord> = Vec::new(),
        }
        option {
            completed_at: DateTime<Utc> = None,
            error_message: String = None,
        }
        computed {
            created_at: DateTime<Utc> = Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
