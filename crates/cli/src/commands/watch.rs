// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `afx watch` - Follow a run until it reaches a terminal status

use anyhow::{bail, Result};

use afx_client::AutofixClient;
use afx_core::GroupId;

use crate::output::{format_transition, print_run};

pub async fn handle(client: &AutofixClient, group: &str) -> Result<()> {
    let group = GroupId::from_string(group);
    let mut watcher = client.watch(&group);
    let mut last_line = String::new();

    while let Some(observation) = watcher.next().await {
        if let Some(error) = &observation.last_error {
            bail!("status fetch failed: {error}");
        }
        let Some(run) = &observation.run else {
            println!("No autofix run for group {}", group);
            return Ok(());
        };

        let line = format_transition(run);
        if line != last_line {
            println!("{line}");
            last_line = line;
        }

        if run.status.is_terminal() {
            println!();
            print_run(&mut std::io::stdout(), &group, run);
            return Ok(());
        }
    }

    bail!("status watcher stopped unexpectedly");
}
