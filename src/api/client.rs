//! Async client for the classification backend.
//!
//! Four REST calls, each failure caught here and converted into something
//! the UI can show. Nothing in this module panics on a bad response.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::constants::*;
use crate::models::{MetricsSnapshot, PredictionResult, SystemStatus};

/// Why an API call failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the server (DNS, refused, timeout).
    #[error("connection failed: {0}")]
    Connect(reqwest::Error),
    /// Server answered with a non-2xx status, possibly with an
    /// `{"error": "..."}` body explaining itself.
    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },
    /// 2xx response whose body did not decode as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(reqwest::Error),
}

impl ApiError {
    /// The message shown to the user: the server's own explanation when it
    /// gave one, otherwise the generic connection-failure line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(msg), ..
            } => msg.clone(),
            _ => MSG_CONNECT_FAILED.to_string(),
        }
    }
}

/// Events sent from a spawned analysis task back to the main loop.
///
/// `seq` is the submission generation: the loop drops any event whose
/// generation is not the latest, so a stale response can never overwrite
/// a newer result.
#[derive(Debug)]
pub enum AnalysisEvent {
    Completed {
        seq: u64,
        result: Box<PredictionResult>,
    },
    Failed {
        seq: u64,
        message: String,
    },
}

/// Events from the two independent startup fetches. Either may arrive
/// first, or not at all; neither blocks the input form.
#[derive(Debug)]
pub enum StartupEvent {
    Status(SystemStatus),
    /// `None` means the metrics fetch failed; the loading flag still clears.
    Metrics(Option<MetricsSnapshot>),
}

/// Async HTTP client for the backend collaborator.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS)))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch service readiness. Never fails: any error substitutes the
    /// Offline snapshot, which keeps submission disabled.
    pub async fn fetch_status_or_default(&self) -> SystemStatus {
        match self.fetch_status().await {
            Ok(status) => status,
            Err(_) => SystemStatus::offline(),
        }
    }

    async fn fetch_status(&self) -> Result<SystemStatus, ApiError> {
        let response = self
            .client
            .get(self.url("status"))
            .send()
            .await
            .map_err(ApiError::Connect)?;
        decode_response(response).await
    }

    /// Fetch the model scoreboard. Failure leaves metrics absent; the
    /// caller keeps whatever accuracy figure it already displays.
    pub async fn fetch_metrics(&self) -> Result<MetricsSnapshot, ApiError> {
        let response = self
            .client
            .get(self.url("metrics"))
            .send()
            .await
            .map_err(ApiError::Connect)?;
        decode_response(response).await
    }

    /// Submit a text passage for classification.
    pub async fn predict_text(
        &self,
        text: &str,
        deep_scan: bool,
    ) -> Result<PredictionResult, ApiError> {
        let body = serde_json::json!({
            "text": text,
            "deep_scan": deep_scan,
        });
        let response = self
            .client
            .post(self.url("predict"))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Connect)?;
        decode_response(response).await
    }

    /// Submit a file's contents for classification (multipart, field `file`).
    pub async fn predict_file(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<PredictionResult, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name);
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("predict/file"))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Connect)?;
        decode_response(response).await
    }
}

/// Decode a 2xx body as `T`, or pull the server's `{"error": ...}` message
/// out of a non-2xx body.
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from));
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }
    response.json::<T>().await.map_err(ApiError::Malformed)
}
