//! HTTP smoke tests for the Orii-O1 API.
//!
//! Issues real requests against a running service and checks status codes and the
//! presence of documented response keys. Transport failures (refused connection, timeout)
//! are reported separately from assertion failures.
//!
//! ## Usage
//!
//! ```bash
//! # Against the default http://localhost:8001
//! cargo run -p smoke-tests --bin smoke
//!
//! # Against another deployment
//! API_BASE_URL=https://orii.example.com cargo run -p smoke-tests --bin smoke
//! ```

use reqwest::{header, Client};
use serde_json::{json, Value};
use std::sync::Once;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

static INIT: Once = Once::new();

/// Initialize tracing (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,smoke_tests=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// One request with the status and response keys it must produce.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub expected_status: u16,
    pub body: Option<Value>,
    pub expected_keys: &'static [&'static str],
}

impl Check {
    pub fn get(name: &'static str, path: &'static str, expected_status: u16) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            expected_status,
            body: None,
            expected_keys: &[],
        }
    }

    pub fn post(name: &'static str, path: &'static str, expected_status: u16, body: Value) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path,
            expected_status,
            body: Some(body),
            expected_keys: &[],
        }
    }

    pub fn expect_keys(mut self, keys: &'static [&'static str]) -> Self {
        self.expected_keys = keys;
        self
    }
}

/// A check that met its expectations.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub url: String,
    pub status: u16,
    /// Parsed response body; `Value::Null` when the body was not JSON.
    pub body: Value,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("expected status {expected}, got {actual}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("response is missing expected keys: {}", missing.join(", "))]
    MissingKeys { missing: Vec<String>, body: Value },
}

impl CheckError {
    /// True when the service could not be reached at all, as opposed to answering wrongly.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CheckError::Connection { .. } | CheckError::Timeout { .. } | CheckError::Request { .. }
        )
    }
}

pub struct CheckOutcome {
    pub check: Check,
    pub result: Result<CheckReport, CheckError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub run: usize,
    pub passed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        Self {
            run: outcomes.len(),
            passed: outcomes.iter().filter(|o| o.result.is_ok()).count(),
        }
    }

    pub fn failed(&self) -> usize {
        self.run - self.passed
    }

    /// Percentage of passing checks; 0 when nothing ran.
    pub fn success_rate(&self) -> f64 {
        if self.run == 0 {
            return 0.0;
        }
        self.passed as f64 * 100.0 / self.run as f64
    }

    pub fn all_passed(&self) -> bool {
        self.run > 0 && self.passed == self.run
    }
}

/// HTTP client bound to one deployment of the API.
pub struct ApiTester {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiTester {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base URL from `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn run(&self, check: &Check) -> Result<CheckReport, CheckError> {
        let url = self.url(check.path);
        tracing::debug!(check = check.name, url = %url, "Running check");

        let request = match check.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self
                .client
                .post(&url)
                .json(check.body.as_ref().unwrap_or(&Value::Null)),
        };

        let response = request
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        if status != check.expected_status {
            return Err(CheckError::StatusMismatch {
                expected: check.expected_status,
                actual: status,
                body: text,
            });
        }

        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let missing: Vec<String> = check
            .expected_keys
            .iter()
            .filter(|key| body.get(**key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CheckError::MissingKeys { missing, body });
        }

        Ok(CheckReport { url, status, body })
    }

    /// Runs checks in order; a failing check does not stop the rest.
    pub async fn run_suite(&self, checks: &[Check]) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(checks.len());

        for check in checks {
            let result = self.run(check).await;
            match &result {
                Ok(report) => {
                    tracing::info!(check = check.name, status = report.status, "Check passed")
                }
                Err(e) if e.is_transport() => {
                    tracing::error!(check = check.name, error = %e, "Service unreachable")
                }
                Err(e) => tracing::warn!(check = check.name, error = %e, "Check failed"),
            }
            outcomes.push(CheckOutcome {
                check: check.clone(),
                result,
            });
        }

        outcomes
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> CheckError {
        let url = url.to_string();
        if source.is_timeout() {
            CheckError::Timeout {
                url,
                timeout: self.timeout,
            }
        } else if source.is_connect() {
            CheckError::Connection { url, source }
        } else {
            CheckError::Request { url, source }
        }
    }
}

/// The standard suite: every endpoint on its happy path plus the documented rejections.
pub fn standard_checks() -> Vec<Check> {
    vec![
        Check::get("Health Check", "/api/health", 200).expect_keys(&["status", "model", "version"]),
        Check::get("Model Info", "/api/model-info", 200).expect_keys(&[
            "name",
            "company",
            "version",
            "capabilities",
            "specifications",
        ]),
        Check::post(
            "Contact Form Submission",
            "/api/contact",
            200,
            json!({
                "name": "Test User",
                "email": "test@example.com",
                "company": "Test Company",
                "message": "This is a test message for the Orii-O1 contact form."
            }),
        )
        .expect_keys(&["status", "message"]),
        Check::post(
            "Demo Request",
            "/api/demo",
            200,
            json!({"prompt": "What is artificial intelligence?", "max_tokens": 100}),
        )
        .expect_keys(&["model", "response", "tokens_used"]),
        Check::post(
            "Invalid Contact Form (Bad Email)",
            "/api/contact",
            422,
            json!({"name": "Test User", "email": "invalid-email", "message": "Test message"}),
        ),
        Check::post(
            "Demo Request (Missing Prompt)",
            "/api/demo",
            422,
            json!({"max_tokens": 10}),
        ),
    ]
}
