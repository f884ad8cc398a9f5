// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process stub server for CLI specs.

use axum::Router;

/// Serve the router on an ephemeral port from a background thread and
/// return the base URL. The thread lives for the remainder of the test
/// process.
pub fn serve(app: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            let _ = axum::serve(listener, app).await;
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{addr}")
}

/// A server-shaped run payload with one step.
pub fn run_json(run_id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "status": status,
        "run_id": run_id,
        "steps": [
            {
                "id": "1",
                "index": 0,
                "status": status,
                "title": "Analyze the issue",
                "progress": []
            }
        ],
        "created_at": "2026-01-05T12:00:00Z"
    })
}
