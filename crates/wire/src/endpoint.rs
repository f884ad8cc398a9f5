// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Endpoint paths for the run status resource.

use afx_core::GroupId;

/// Path of the run status resource for one issue group.
///
/// Both the polling GET and the trigger POST use this path.
pub fn autofix_path(group: &GroupId) -> String {
    format!("/issues/{}/ai-autofix/", group)
}
