//! HTTP client for the region-scoped TypingDNA REST APIs.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, error};

/// Connect timeout for TypingDNA calls.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Read timeout for TypingDNA calls.
const READ_TIMEOUT: Duration = Duration::from_millis(5000);

/// Thin client over the TypingDNA `save` / `verify` / `auto` endpoints.
///
/// One client is held per function instance; `reqwest` owns connection
/// pooling and releases sockets when the client drops.
pub struct TypingDnaClient {
    http: reqwest::Client,
    api_host: Option<String>,
}

impl TypingDnaClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_host: None,
        })
    }

    /// Replaces the region-derived `https://api-{region}.typingdna.com`
    /// host. Tests point this at a local port.
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    fn api_host(&self, region: &str) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None => format!("https://api-{region}.typingdna.com"),
        }
    }

    /// Builds the URL for an API operation on a user.
    pub(crate) fn endpoint(&self, region: &str, operation: &str, user_id: &str) -> String {
        format!("{}/{operation}/{user_id}", self.api_host(region))
    }

    /// Assembles a form POST with HTTP Basic credentials.
    ///
    /// The body is `application/x-www-form-urlencoded` with the fields in
    /// the given order.
    pub(crate) fn form_post(
        &self,
        url: &str,
        api_key: &str,
        api_secret: &str,
        fields: &[(&str, &str)],
    ) -> Result<reqwest::Request, reqwest::Error> {
        let credentials = STANDARD.encode(format!("{api_key}:{api_secret}"));
        self.http
            .post(url)
            .header(AUTHORIZATION, format!("Basic {credentials}"))
            .form(&fields)
            .build()
    }

    /// Sends a request whose outcome is best-effort.
    ///
    /// Transport failures are logged and swallowed; the response body is
    /// read only to surface it on the debug channel. No status-code
    /// branching, no retry.
    pub(crate) async fn dispatch_best_effort(&self, request: reqwest::Request) {
        match self.http.execute(request).await {
            Ok(response) => match response.text().await {
                Ok(body) => debug!(target: "typingdna", %body, "response from TypingDNA"),
                Err(err) => log_transient(&err),
            },
            Err(err) => log_transient(&err),
        }
    }

    /// Sends a verify/auto request and parses the match outcome.
    ///
    /// Returns `None` on any transport failure or unparseable body; the
    /// caller reports TypingDNA as unavailable in that case.
    pub(crate) async fn dispatch_verify(&self, request: reqwest::Request) -> Option<VerifyResponse> {
        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                log_transient(&err);
                return None;
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                log_transient(&err);
                return None;
            }
        };

        debug!(target: "typingdna", %body, "response from TypingDNA");

        match serde_json::from_str::<VerifyResponse>(&body) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                error!(target: "typingdna", error = %err, "unparseable TypingDNA verify response");
                None
            }
        }
    }
}

/// Logs a transport failure without surfacing it.
///
/// The login flow must never be blocked by a TypingDNA round trip, so every
/// network-level failure ends here: an error line with the cause plus a
/// debug hint for the failure category.
pub(crate) fn log_transient(err: &reqwest::Error) {
    error!(target: "typingdna", error = %err, "TypingDNA request failed");
    if err.is_connect() {
        debug!(target: "typingdna", "error while connecting to the TypingDNA APIs");
    } else if err.is_timeout() {
        debug!(target: "typingdna", "timed out waiting for TypingDNA");
    } else {
        debug!(target: "typingdna", "I/O error during the TypingDNA call");
    }
}

/// Subset of the TypingDNA verify/auto response the policy flow consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub message_code: i64,
    #[serde(default)]
    pub result: i64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub confidence: i64,
}
