// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::sync::Mutex;

use super::stub;
use assert_cmd::Command;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

#[test]
fn start_triggers_run_and_prints_followup() {
    let posted: Arc<Mutex<Option<serde_json::Value>>> = Arc::default();
    let app = Router::new()
        .route(
            "/issues/42/ai-autofix/",
            post(
                |State(posted): State<Arc<Mutex<Option<serde_json::Value>>>>,
                 Json(body): Json<serde_json::Value>| async move {
                    *posted.lock().unwrap() = Some(body);
                    Json(serde_json::json!({ "run_id": "run-1" }))
                },
            ),
        )
        .with_state(posted.clone());
    let url = stub::serve(app);

    let output = Command::cargo_bin("afx")
        .unwrap()
        .env("AFX_URL", &url)
        .env("NO_COLOR", "1")
        .args(["start", "42", "--event", "evt-1", "fix please"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Autofix run started for group 42"), "got: {stdout}");
    assert!(stdout.contains("afx watch 42"), "got: {stdout}");

    let body = posted.lock().unwrap().clone().expect("server saw the trigger");
    assert_eq!(body["event_id"], "evt-1");
    assert_eq!(body["instruction"], "fix please");
}

#[test]
fn start_failure_exits_nonzero() {
    let app = Router::new().route(
        "/issues/42/ai-autofix/",
        post(|| async {
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "detail": "queue full" })),
            )
        }),
    );
    let url = stub::serve(app);

    let output = Command::cargo_bin("afx")
        .unwrap()
        .env("AFX_URL", &url)
        .args(["start", "42", "--event", "evt-1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("run trigger failed"), "got: {stderr}");
}
