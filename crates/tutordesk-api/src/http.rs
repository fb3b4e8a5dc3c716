//! REST backend client
//!
//! Endpoints, relative to the configured base URL:
//! - `GET   /sessions`             -> `[SessionRecord]`
//! - `PATCH /sessions/{id}`        body `{"session_status": ...}` -> `SessionRecord`
//! - `GET   /tests/upcoming`       -> `[TestEvent]`

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tutordesk_core::prelude::*;
use tutordesk_core::{SessionId, SessionRecord, TestEvent};

use crate::repository::SessionRepository;

/// Default request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    session_status: &'a str,
}

/// [`SessionRepository`] over the tutoring-center REST API
#[derive(Debug, Clone)]
pub struct HttpSessionRepository {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSessionRepository {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::api(format!("GET {url} failed: {e}")))?;

        read_json(response).await
    }
}

impl SessionRepository for HttpSessionRepository {
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>> {
        self.get_json("sessions").await
    }

    async fn update_session_status(&self, id: SessionId, status: &str) -> Result<SessionRecord> {
        let url = self.endpoint(&format!("sessions/{id}"));
        debug!("PATCH {} -> {}", url, status);

        let response = self
            .client
            .patch(&url)
            .json(&StatusUpdate {
                session_status: status,
            })
            .send()
            .await
            .map_err(|e| Error::api(format!("PATCH {url} failed: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::session_not_found(id));
        }

        read_json(response).await
    }

    async fn fetch_upcoming_tests(&self) -> Result<Vec<TestEvent>> {
        self.get_json("tests/upcoming").await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(Error::api_status(status.as_u16(), error_detail(&body)));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::api(format!("failed to read response body: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Pull a `detail`/`message` field out of a JSON error body, else the raw text
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::config_invalid(format!(
            "api base_url must start with http:// or https://, got '{raw}'"
        )));
    }
    Ok(trimmed.to_string())
}
