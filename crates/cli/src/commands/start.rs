// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `afx start` - Trigger a new run for an issue group

use anyhow::{Context, Result};

use afx_client::AutofixClient;
use afx_core::{EventId, GroupId};

pub async fn handle(
    client: &AutofixClient,
    group: &str,
    event: &str,
    instruction: Option<&str>,
) -> Result<()> {
    let group = GroupId::from_string(group);
    let event = EventId::from_string(event);

    client
        .start_run(&group, &event, instruction.unwrap_or_default())
        .await
        .context("run trigger failed")?;

    println!("Autofix run started for group {}", group);
    println!("Follow it with: afx watch {}", group);
    Ok(())
}
