// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies sent to the run status resource.

use afx_core::EventId;
use serde::{Deserialize, Serialize};

/// POST body that triggers a new run for a group.
///
/// The response body is not consumed for state; the next poll is the
/// authoritative read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriggerAutofix {
    /// The event the analysis starts from.
    pub event_id: EventId,
    /// Free-text instruction forwarded to the analysis.
    pub instruction: String,
}
