// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use afx_core::{format_elapsed, AutofixRun, GroupId};
use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a timestamp as relative time (e.g., "5s", "2m", "1h", "3d")
pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(timestamp).num_seconds().max(0) as u64;
    format_elapsed(elapsed)
}

/// Render a run for `afx show` / the `afx watch` summary.
pub fn print_run(out: &mut (impl Write + ?Sized), group: &GroupId, run: &AutofixRun) {
    let _ = writeln!(out, "{}", color::header(&format!("autofix run for group {}", group)));
    let _ = writeln!(out, "  status:  {}", run.status);
    if !run.run_id.is_empty() {
        let _ = writeln!(out, "  run:     {}", run.run_id);
    }
    let _ = writeln!(out, "  started: {} ago", format_time_ago(run.created_at));
    if let Some(completed_at) = run.completed_at {
        let _ = writeln!(out, "  ended:   {} ago", format_time_ago(completed_at));
    }
    if let Some(error) = &run.error_message {
        let _ = writeln!(out, "  error:   {}", error);
    }
    if run.steps.is_empty() {
        return;
    }
    let _ = writeln!(out, "  steps:");
    for step in &run.steps {
        let _ = writeln!(out, "    {}. [{}] {}", step.index + 1, step.status, step.title);
        if let Some(progress) = step.latest_progress() {
            let _ = writeln!(
                out,
                "       {}",
                color::muted(&format!("{} ({})", progress.message, progress.level))
            );
        }
    }
}

/// One-line view of where a run currently is, for `afx watch` transitions.
pub fn format_transition(run: &AutofixRun) -> String {
    match run.current_step() {
        Some(step) => format!("[{}] {}", run.status, step.title),
        None => format!("[{}]", run.status),
    }
}

/// JSON rendering shared by `afx show`.
pub fn run_json(run: Option<&AutofixRun>) -> serde_json::Value {
    serde_json::json!({ "autofix": run })
}
