//! Signed HTTP transport.
//!
//! The endpoint mapper never touches HTTP directly. It hands a
//! [`RestRequest`] (verb, path, params, security) to a [`SignedTransport`],
//! which owns base URL selection, the API key header, timestamps,
//! `recvWindow`, signatures, retries and error translation.
//!
//! [`HttpTransport`] is the production implementation on top of `reqwest`.
//! All params travel in the query string, for every verb, and signed
//! requests are re-signed on each retry so the timestamp stays fresh. A
//! `Retry-After` header on a retryable response replaces the backoff delay;
//! when it asks for longer than the configured maximum the error is returned
//! instead.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use coinm_core::error::CoinMError;
use coinm_core::time_util::{adjusted_now_ms, now_ms};
use coinm_core::types::{CodeMsg, ServerTime};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::{Signer, load_ed25519_key};
use crate::config::RestClientOptions;
use crate::endpoints;
use crate::error::RestError;
use crate::params::ParamBag;
use crate::rate_limit::{RateLimitSnapshot, RateLimitTracker};
use crate::retry::RetryConfig;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

// ---------------------------------------------------------------------------
// Request description
// ---------------------------------------------------------------------------

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Endpoint security type, fixed per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Security {
    /// No credentials.
    Public,
    /// API key header only (`MARKET_DATA`, `USER_STREAM`).
    ApiKey,
    /// API key header plus timestamp and signature (`TRADE`, `USER_DATA`).
    Signed,
}

/// One outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: Method,
    pub path: &'static str,
    pub params: ParamBag,
    pub security: Security,
}

impl RestRequest {
    pub fn new(method: Method, path: &'static str, security: Security) -> Self {
        Self { method, path, params: ParamBag::new(), security }
    }

    pub fn with_params(mut self, params: ParamBag) -> Self {
        self.params = params;
        self
    }
}

/// Sends [`RestRequest`]s and returns the decoded JSON body.
///
/// Implementations report non-2xx responses as errors; 2xx bodies are
/// returned as-is even when they carry an inline exchange error.
#[async_trait]
pub trait SignedTransport: Send + Sync {
    async fn send(&self, request: RestRequest) -> Result<Value, RestError>;
}

// ---------------------------------------------------------------------------
// HttpTransport
// ---------------------------------------------------------------------------

/// `reqwest`-backed transport.
pub struct HttpTransport {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// REST base URL without trailing slash.
    base_url: String,
    /// API key, required for `ApiKey` and `Signed` requests.
    api_key: Option<String>,
    /// Signing scheme, required for `Signed` requests.
    signer: Option<Signer>,
    /// `recvWindow` for signed requests (0 = omit).
    recv_window: u64,
    /// Retry policy for GET requests.
    retry: RetryConfig,
    /// Server clock minus local clock, in milliseconds.
    time_offset_ms: AtomicI64,
    /// Latest rate-limit headers.
    rate_limits: RateLimitTracker,
}

impl HttpTransport {
    /// Build a transport from client options. No connection is opened.
    pub fn new(options: &RestClientOptions) -> Result<Self, RestError> {
        let signer = match (&options.ed25519_key_path, &options.api_secret) {
            (Some(path), _) => {
                let pem = std::fs::read_to_string(path)
                    .map_err(|e| CoinMError::Signing(format!("failed to read Ed25519 key {path}: {e}")))?;
                Some(Signer::Ed25519 { key: load_ed25519_key(&pem)? })
            }
            (None, Some(secret)) => Some(Signer::Hmac { secret: secret.clone() }),
            (None, None) => None,
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(options.timeout_ms))
            .build()?;

        let base_url = options.effective_base_url();
        debug!(base_url = %base_url, signer = ?signer, "[{}] http transport created", options.category());

        Ok(Self {
            http,
            base_url,
            api_key: options.api_key.clone(),
            signer,
            recv_window: options.recv_window,
            retry: options.retry.clone(),
            time_offset_ms: AtomicI64::new(0),
            rate_limits: RateLimitTracker::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest rate-limit usage reported by the exchange.
    pub fn rate_limits(&self) -> RateLimitSnapshot {
        self.rate_limits.snapshot()
    }

    /// Current server clock offset applied to request timestamps.
    pub fn time_offset_ms(&self) -> i64 {
        self.time_offset_ms.load(Ordering::Relaxed)
    }

    /// Measure the server clock offset and apply it to later signed requests.
    ///
    /// The local reference point is the midpoint of the round trip.
    pub async fn sync_time(&self) -> Result<i64, RestError> {
        let started = now_ms();
        let body = self
            .send(RestRequest::new(Method::Get, endpoints::market::SERVER_TIME, Security::Public))
            .await?;
        let finished = now_ms();

        let server: ServerTime = serde_json::from_value(body)?;
        let local_mid = started + finished.saturating_sub(started) / 2;
        let offset = server.server_time as i64 - local_mid as i64;
        self.time_offset_ms.store(offset, Ordering::Relaxed);
        info!(offset_ms = offset, rtt_ms = finished.saturating_sub(started), "server time synced");
        Ok(offset)
    }

    /// Encoded query string for `request`, signed when the endpoint needs it.
    fn build_query(&self, request: &RestRequest) -> Result<String, RestError> {
        match request.security {
            Security::Signed => {
                let signer = self
                    .signer
                    .as_ref()
                    .ok_or(RestError::MissingCredentials("api secret or Ed25519 key required for signed endpoint"))?;
                let timestamp = adjusted_now_ms(self.time_offset_ms());
                Ok(signed_query(&request.params, self.recv_window, timestamp, signer))
            }
            Security::Public | Security::ApiKey => Ok(request.params.to_query()),
        }
    }

    async fn send_once(&self, request: &RestRequest, query: &str) -> Result<Value, FailedAttempt> {
        let url = if query.is_empty() {
            format!("{}/{}", self.base_url, request.path)
        } else {
            format!("{}/{}?{query}", self.base_url, request.path)
        };

        let mut builder = self.http.request(request.method.into(), &url);
        if request.security != Security::Public {
            let key = self
                .api_key
                .as_deref()
                .ok_or(RestError::MissingCredentials("api key required for this endpoint"))?;
            builder = builder.header(API_KEY_HEADER, key);
        }

        let resp = builder.send().await?;
        self.rate_limits.record(resp.headers());
        let status = resp.status();
        let retry_after = retry_after(resp.headers());
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FailedAttempt { error: error_from_body(status.as_u16(), body), retry_after });
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn is_retryable(&self, err: &RestError) -> bool {
        match err {
            RestError::Http(e) => e.is_timeout() || e.is_connect(),
            RestError::Exchange { status, .. } | RestError::Status { status, .. } => {
                self.retry.is_retryable_status(*status)
            }
            _ => false,
        }
    }
}

#[async_trait]
impl SignedTransport for HttpTransport {
    async fn send(&self, request: RestRequest) -> Result<Value, RestError> {
        let max_retries = if request.method == Method::Get { self.retry.max_retries } else { 0 };
        let mut attempt = 0;

        loop {
            let query = self.build_query(&request)?;
            debug!(method = %request.method, path = request.path, attempt, "sending request");

            match self.send_once(&request, &query).await {
                Err(FailedAttempt { error, retry_after })
                    if attempt < max_retries && self.is_retryable(&error) =>
                {
                    let delay = match retry_after {
                        Some(wait) if wait > Duration::from_millis(self.retry.max_delay_ms) => {
                            warn!(
                                method = %request.method,
                                path = request.path,
                                retry_after_s = wait.as_secs(),
                                "server asked to back off beyond max delay, giving up: {error}"
                            );
                            return Err(error);
                        }
                        Some(wait) => wait,
                        None => self.retry.delay_for_attempt(attempt),
                    };
                    warn!(
                        method = %request.method,
                        path = request.path,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "request failed, retrying: {error}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(FailedAttempt { error, .. }) => {
                    debug!(method = %request.method, path = request.path, "request failed: {error}");
                    return Err(error);
                }
                Ok(body) => return Ok(body),
            }
        }
    }
}

/// One unsuccessful round trip, with the server's `Retry-After` if it sent one.
struct FailedAttempt {
    error: RestError,
    retry_after: Option<Duration>,
}

impl From<RestError> for FailedAttempt {
    fn from(error: RestError) -> Self {
        Self { error, retry_after: None }
    }
}

impl From<reqwest::Error> for FailedAttempt {
    fn from(error: reqwest::Error) -> Self {
        RestError::from(error).into()
    }
}

impl From<serde_json::Error> for FailedAttempt {
    fn from(error: serde_json::Error) -> Self {
        RestError::from(error).into()
    }
}

/// `Retry-After` in its delay-seconds form. HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let secs: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
    Some(Duration::from_secs(secs))
}

/// Append `recvWindow` (when non-zero) and `timestamp` to `params`, then sign.
pub fn signed_query(params: &ParamBag, recv_window: u64, timestamp: u64, signer: &Signer) -> String {
    let mut bag = params.clone();
    if recv_window > 0 {
        bag.push("recvWindow", recv_window.to_string());
    }
    bag.push("timestamp", timestamp.to_string());
    signer.sign_query(&bag.to_query())
}

/// Translate a non-2xx body into an error, preferring the exchange's
/// `{code,msg}` shape.
fn error_from_body(status: u16, body: String) -> RestError {
    match serde_json::from_str::<CodeMsg>(&body) {
        Ok(CodeMsg { code, msg }) => RestError::Exchange { status, code, msg },
        Err(_) => RestError::Status { status, body },
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------
