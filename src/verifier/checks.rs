//! Check definitions and response classification.
//!
//! Classification is kept free of I/O: each function takes the outcome of a
//! request and decides pass/fail plus the line to print.

use super::catalog::REQUIRED_REALTIME_KEYS;
use super::session::{HttpMethod, ProbeResponse};
use crate::errors::CheckError;
use crate::output::{self, Status};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Success,
    Fail,
    /// Reported as a warning; whether it counts as a pass is up to the check.
    Warning,
}

impl CheckStatus {
    fn as_output(self) -> Status {
        match self {
            Self::Success => Status::Success,
            Self::Fail => Status::Fail,
            Self::Warning => Status::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            status: CheckStatus::Success,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            status: CheckStatus::Fail,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>, passed: bool) -> Self {
        Self {
            passed,
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    pub fn print(&self) {
        output::print_status(&self.message, self.status.as_output());
    }
}

/// One probe: what to request and which status counts as success.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointCheck {
    pub path: String,
    pub description: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub expected_status: u16,
}

impl EndpointCheck {
    pub fn get(path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            description: description.to_string(),
            method: HttpMethod::Get,
            body: None,
            expected_status: 200,
        }
    }

    pub fn post(path: &str, description: &str, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            body: Some(body),
            ..Self::get(path, description)
        }
    }

    pub fn expecting(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }
}

type Outcome = Result<ProbeResponse, CheckError>;

/// Status-code-only classification.
pub fn classify_endpoint(check: &EndpointCheck, outcome: Outcome) -> CheckResult {
    let description = &check.description;
    match outcome {
        Ok(response) if response.status == check.expected_status => {
            CheckResult::success(format!("{description}: OK (Status {})", response.status))
        }
        Ok(response) => {
            CheckResult::fail(format!("{description}: Failed (Status {})", response.status))
        }
        Err(e) => CheckResult::fail(format!("{description}: Error - {e}")),
    }
}

/// 200 plus a body that parses as JSON.
pub fn classify_api(description: &str, outcome: Outcome) -> CheckResult {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(format!("{description}: Error - {e}")),
    };
    if response.status != 200 {
        return CheckResult::fail(format!("{description}: Failed (Status {})", response.status));
    }

    match response.json() {
        Ok(data) => {
            let status = data
                .get("status")
                .map(render_value)
                .unwrap_or_else(|| "API working".to_string());
            CheckResult::success(format!("{description}: OK - {status}"))
        }
        Err(e) => CheckResult::fail(format!("{description}: Error - {e}")),
    }
}

/// 200 is the pass criterion; missing payload keys only warn.
pub fn classify_realtime(outcome: Outcome) -> CheckResult {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return CheckResult::fail(format!("Real-time Data: Error - {e}")),
    };
    if response.status != 200 {
        return CheckResult::fail(format!(
            "Real-time Data: Failed (Status {})",
            response.status
        ));
    }

    let data = match response.json() {
        Ok(data) => data,
        Err(e) => return CheckResult::fail(format!("Real-time Data: Error - {e}")),
    };

    let missing = missing_realtime_keys(&data);
    if missing.is_empty() {
        CheckResult::success(format!(
            "Real-time Data: OK - AI Confidence: {}%",
            render_value(&data["ai_confidence"])
        ))
    } else {
        warn!(missing = ?missing, "Real-time payload is missing required keys");
        CheckResult::warning("Real-time Data: Incomplete response structure", true)
    }
}

pub fn missing_realtime_keys(data: &Value) -> Vec<&'static str> {
    REQUIRED_REALTIME_KEYS
        .iter()
        .copied()
        .filter(|key| data.get(*key).is_none())
        .collect()
}

/// Classify a login response. Returns the bearer token to install on the
/// session when login succeeded with one.
pub fn classify_login(outcome: Outcome) -> (CheckResult, Option<String>) {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return (CheckResult::fail(format!("Authentication: Error - {e}")), None),
    };
    if response.status != 200 {
        return (
            CheckResult::fail(format!(
                "Authentication: Failed (Status {})",
                response.status
            )),
            None,
        );
    }

    let data = match response.json() {
        Ok(data) => data,
        Err(e) => return (CheckResult::fail(format!("Authentication: Error - {e}")), None),
    };

    if data.get("success").and_then(Value::as_bool) != Some(true) {
        let message = data
            .get("message")
            .map(render_value)
            .unwrap_or_else(|| "no message provided".to_string());
        return (
            CheckResult::fail(format!("Authentication: Login failed - {message}")),
            None,
        );
    }

    match data.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => (
            CheckResult::success("Authentication: Login successful"),
            Some(token.to_string()),
        ),
        // Reads as a success on the console but counts as a failure.
        _ => {
            warn!("Login response carried no token");
            (
                CheckResult {
                    passed: false,
                    status: CheckStatus::Success,
                    message: "Authentication: Login successful".to_string(),
                },
                None,
            )
        }
    }
}

/// Strings verbatim, everything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
