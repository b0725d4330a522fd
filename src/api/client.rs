use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use super::error::FetchError;
use super::result::FetchResult;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP client for the remote catalog API. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    /// `base_url` is used as given, callers sanitize it through `config`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Shopfront/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn get(&self, endpoint: &str) -> FetchResult<Value> {
        self.get_with_query(endpoint, &[]).await
    }

    /// Issue a GET and parse the JSON body. Failures of any kind come back as
    /// `FetchResult::Failure`.
    pub async fn get_with_query(&self, endpoint: &str, params: &[(&str, String)]) -> FetchResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        // --- Curl Logging ---
        let mut url_for_log = url.clone();
        if !params.is_empty() {
            let query_string = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }
        let parts = [
            Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
            format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
            format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)),
        ];
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let mut req = self.http.get(&url);
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                let err = self.transport_error(&e);
                tracing::warn!(url = %url_for_log, %err, "Catalog request failed");
                return FetchResult::Failure(err);
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                let err = self.transport_error(&e);
                tracing::warn!(url = %url_for_log, %err, "Failed to read catalog response");
                return FetchResult::Failure(err);
            }
        };
        tracing::debug!(url = %url_for_log, status = status.as_u16(), bytes = body.len(), "Catalog response");

        // Grayed out color (dimmed/dark gray)
        log_output(format!("Response:\n{}", Paint::new(&body).rgb(100, 100, 100)));

        if !status.is_success() {
            let message = server_message(&body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            tracing::warn!(url = %url_for_log, status = status.as_u16(), %message, "Catalog returned an error status");
            return FetchResult::Failure(FetchError::http(status.as_u16(), message));
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => FetchResult::Success(value),
            Err(e) => FetchResult::Failure(FetchError::mapping(format!("response is not valid JSON: {}", e))),
        }
    }

    fn transport_error(&self, e: &reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::transport(e.to_string())
        }
    }
}

/// Pull the human-readable `message` out of an error body. The catalog sends
/// either a string or, for validation failures, a list of strings.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}
