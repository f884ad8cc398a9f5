// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from the run status endpoint.

use thiserror::Error;

/// Failure of the polling GET.
///
/// Surfaced to observers via [`Observation`](crate::Observation); never
/// auto-retried by this layer. Polling continues only while the visible
/// status still says processing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Failure of the trigger POST.
///
/// Returned to the direct caller of `start_run` and logged, but never
/// reflected into observation state: the optimistic snapshot stays in
/// place and the next poll reconciles with server truth.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
}
