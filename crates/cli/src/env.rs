// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-based client configuration.

use std::sync::Arc;
use std::time::Duration;

use afx_client::{AutofixClient, HttpApi, PollConfig};
use afx_core::SystemClock;
use anyhow::{anyhow, Result};

/// Server base URL, e.g. `https://errors.example.com/api/0`.
pub const ENV_URL: &str = "AFX_URL";
/// Bearer token sent with every request.
pub const ENV_TOKEN: &str = "AFX_TOKEN";

/// Build the client from flags with env fallback.
pub fn build_client(
    url: Option<String>,
    token: Option<String>,
    interval_ms: Option<u64>,
) -> Result<AutofixClient> {
    let url = url
        .or_else(|| std::env::var(ENV_URL).ok())
        .ok_or_else(|| anyhow!("server URL required: pass --url or set {}", ENV_URL))?;
    let token = token.or_else(|| std::env::var(ENV_TOKEN).ok());

    let mut api = HttpApi::new(url);
    if let Some(token) = token {
        api = api.with_token(token);
    }

    let config = match interval_ms {
        Some(ms) => PollConfig::with_interval(Duration::from_millis(ms)),
        None => PollConfig::default(),
    };
    Ok(AutofixClient::with_clock(Arc::new(api), config, SystemClock))
}
