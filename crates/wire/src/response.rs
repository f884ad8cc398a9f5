// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response envelopes from the run status resource.

use afx_core::AutofixRun;
use serde::{Deserialize, Serialize};

/// GET response envelope.
///
/// `autofix` is `null` when no run has ever been started for the group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutofixEnvelope {
    pub autofix: Option<AutofixRun>,
}

/// Error envelope returned on non-2xx responses.
///
/// Used for display only; the poller treats any non-2xx as a fetch error
/// whether or not the body parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub detail: String,
}
