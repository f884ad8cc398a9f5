// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step records and their progress log.

use crate::status::RunStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a progress entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressLevel {
    Info,
    Warning,
    Error,
    NeedMoreInformation,
    UserResponse,
}

crate::simple_display! {
    ProgressLevel {
        Info => "info",
        Warning => "warning",
        Error => "error",
        NeedMoreInformation => "need more information",
        UserResponse => "user response",
    }
}

/// One free-form log-like item emitted by a step while it executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(rename = "type")]
    pub level: ProgressLevel,
}

/// Record of one phase of a run.
///
/// Insertion order in [`AutofixRun::steps`](crate::run::AutofixRun) is the
/// execution order of job phases; `index` is the server-assigned ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Opaque step identifier (server-assigned).
    pub id: String,
    /// Ordinal position within the run.
    pub index: usize,
    pub status: RunStatus,
    pub title: String,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

impl StepRecord {
    /// Most recent progress entry, if the step has logged any.
    pub fn latest_progress(&self) -> Option<&ProgressEntry> {
        self.progress.last()
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
