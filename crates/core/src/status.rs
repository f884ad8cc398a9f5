// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run and step status values.

use serde::{Deserialize, Serialize};

/// Status of a run or of one of its steps, as reported by the server.
///
/// The wire form is SCREAMING_SNAKE_CASE to match the REST API. The logical
/// "no run" state is the absence of a snapshot, not a variant here: the
/// server only ever reports on a run that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// The analysis is still executing; the client keeps polling.
    Processing,
    /// The run finished and produced a result.
    Completed,
    /// The run finished without a usable result.
    Failed,
}

impl RunStatus {
    /// Check if this status keeps the poll loop alive.
    pub fn is_processing(&self) -> bool {
        matches!(self, RunStatus::Processing)
    }

    /// Check if this status is terminal from the polling perspective.
    ///
    /// Terminal statuses never resume polling on their own; only a new
    /// `start_run` does.
    pub fn is_terminal(&self) -> bool {
        !self.is_processing()
    }
}

crate::simple_display! {
    RunStatus {
        Processing => "processing",
        Completed => "completed",
        Failed => "failed",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
