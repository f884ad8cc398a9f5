// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::stub;
use assert_cmd::Command;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

#[test]
fn watch_follows_run_to_completion() {
    let gets = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route(
            "/issues/42/ai-autofix/",
            get(|State(gets): State<Arc<AtomicUsize>>| async move {
                let run = if gets.fetch_add(1, Ordering::SeqCst) == 0 {
                    stub::run_json("run-1", "PROCESSING")
                } else {
                    stub::run_json("run-1", "COMPLETED")
                };
                Json(serde_json::json!({ "autofix": run }))
            }),
        )
        .with_state(gets.clone());
    let url = stub::serve(app);

    let output = Command::cargo_bin("afx")
        .unwrap()
        .env("AFX_URL", &url)
        .env("NO_COLOR", "1")
        .args(["watch", "42", "--interval-ms", "20"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[processing] Analyze the issue"), "got: {stdout}");
    assert!(stdout.contains("[completed] Analyze the issue"), "got: {stdout}");
    assert!(stdout.contains("autofix run for group 42"), "got: {stdout}");
    assert!(gets.load(Ordering::SeqCst) >= 2, "expected at least two polls");
}

#[test]
fn watch_without_run_exits_immediately() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        get(|| async { Json(serde_json::json!({ "autofix": null })) }),
    );
    let url = stub::serve(app);

    let output = Command::cargo_bin("afx")
        .unwrap()
        .env("AFX_URL", &url)
        .env("NO_COLOR", "1")
        .args(["watch", "42"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No autofix run for group 42"), "got: {stdout}");
}
