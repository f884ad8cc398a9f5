// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `afx show` - Print the latest run for an issue group

use anyhow::{bail, Result};

use afx_client::AutofixClient;
use afx_core::GroupId;

use crate::output::{print_run, run_json, OutputFormat};

pub async fn handle(client: &AutofixClient, group: &str, format: OutputFormat) -> Result<()> {
    let group = GroupId::from_string(group);

    // One fetch: take the first observation the watcher publishes, then let
    // the drop cancel its poll task.
    let mut watcher = client.watch(&group);
    let Some(observation) = watcher.next().await else {
        bail!("status watcher stopped before the first fetch");
    };
    if let Some(error) = &observation.last_error {
        bail!("status fetch failed: {error}");
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&run_json(observation.run.as_ref()))?);
        }
        OutputFormat::Text => match &observation.run {
            Some(run) => print_run(&mut std::io::stdout(), &group, run),
            None => println!("No autofix run for group {}", group),
        },
    }

    Ok(())
}
