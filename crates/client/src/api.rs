// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport seam for the run status resource.

use crate::error::{FetchError, SubmitError};
use afx_core::{AutofixRun, EventId, GroupId};
use afx_wire::{autofix_path, ApiError, AutofixEnvelope, TriggerAutofix};
use async_trait::async_trait;

/// Access to the run status resource for one deployment.
///
/// The poller and client facade only see this trait; tests substitute a
/// scripted implementation.
#[async_trait]
pub trait AutofixApi: Send + Sync {
    /// GET the latest run for a group. `None` means no run has ever started.
    async fn fetch_run(&self, group: &GroupId) -> Result<Option<AutofixRun>, FetchError>;

    /// POST a trigger for a new run. The response body is not consumed.
    async fn trigger_run(
        &self,
        group: &GroupId,
        event: &EventId,
        instruction: &str,
    ) -> Result<(), SubmitError>;
}

/// HTTP implementation over `reqwest`.
///
/// Timeouts are whatever the underlying client applies; the poller adds
/// none of its own.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, group: &GroupId) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), autofix_path(group))
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Extract the error-envelope detail from a non-2xx response, if it parses.
    async fn error_detail(resp: reqwest::Response) -> String {
        resp.json::<ApiError>()
            .await
            .map(|e| e.detail)
            .unwrap_or_else(|_| "no detail".to_string())
    }
}

#[async_trait]
impl AutofixApi for HttpApi {
    async fn fetch_run(&self, group: &GroupId) -> Result<Option<AutofixRun>, FetchError> {
        let resp = self.authed(self.http.get(self.url(group))).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                detail: Self::error_detail(resp).await,
            });
        }
        let envelope: AutofixEnvelope = resp.json().await?;
        Ok(envelope.autofix)
    }

    async fn trigger_run(
        &self,
        group: &GroupId,
        event: &EventId,
        instruction: &str,
    ) -> Result<(), SubmitError> {
        let body = TriggerAutofix {
            event_id: event.clone(),
            instruction: instruction.to_string(),
        };
        let resp = self.authed(self.http.post(self.url(group))).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                detail: Self::error_detail(resp).await,
            });
        }
        Ok(())
    }
}
