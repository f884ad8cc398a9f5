// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::stub;
use assert_cmd::Command;
use axum::routing::get;
use axum::{Json, Router};

fn afx(url: &str) -> Command {
    let mut cmd = Command::cargo_bin("afx").unwrap();
    cmd.env("AFX_URL", url).env("NO_COLOR", "1").env_remove("AFX_TOKEN");
    cmd
}

#[test]
fn show_prints_completed_run() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        get(|| async { Json(serde_json::json!({ "autofix": stub::run_json("run-9", "COMPLETED") })) }),
    );
    let url = stub::serve(app);

    let output = afx(&url).args(["show", "42"]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("autofix run for group 42"), "got: {stdout}");
    assert!(stdout.contains("status:  completed"), "got: {stdout}");
    assert!(stdout.contains("run:     run-9"), "got: {stdout}");
    assert!(stdout.contains("1. [completed] Analyze the issue"), "got: {stdout}");
}

#[test]
fn show_json_emits_envelope() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        get(|| async { Json(serde_json::json!({ "autofix": stub::run_json("run-9", "PROCESSING") })) }),
    );
    let url = stub::serve(app);

    let output = afx(&url).args(["show", "42", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["autofix"]["run_id"], "run-9");
    assert_eq!(json["autofix"]["status"], "PROCESSING");
}

#[test]
fn show_without_run_says_so() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        get(|| async { Json(serde_json::json!({ "autofix": null })) }),
    );
    let url = stub::serve(app);

    let output = afx(&url).args(["show", "42"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No autofix run for group 42"), "got: {stdout}");
}

#[test]
fn show_reports_fetch_failure() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        get(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "backend down" })),
            )
        }),
    );
    let url = stub::serve(app);

    let output = afx(&url).args(["show", "42"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("status fetch failed"), "got: {stderr}");
    assert!(stderr.contains("backend down"), "got: {stderr}");
}

#[test]
fn missing_url_is_an_error() {
    let mut cmd = Command::cargo_bin("afx").unwrap();
    let output =
        cmd.env_remove("AFX_URL").env_remove("AFX_TOKEN").args(["show", "42"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("AFX_URL"), "got: {stderr}");
}
