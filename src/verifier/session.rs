//! Target configuration and the HTTP session shared by every check.

use crate::config::{Config, Credentials};
use crate::errors::CheckError;
use crate::telemetry::{redact_secrets, sanitize_for_log};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

pub const AUTHORIZATION: &str = "Authorization";

/// Strip surrounding whitespace and every trailing slash.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Where and how to probe. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetConfiguration {
    pub base_url: String,
    pub timeout: Duration,
    pub realtime_timeout: Duration,
    pub pause: Duration,
    pub pass_threshold_percent: u32,
    pub credentials: Credentials,
}

impl TargetConfiguration {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&Config {
            base_url: base_url.to_string(),
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: normalize_base_url(&config.base_url),
            timeout: Duration::from_secs(config.timeout_secs),
            realtime_timeout: Duration::from_secs(config.realtime_timeout_secs),
            pause: Duration::from_millis(config.pause_ms),
            pass_threshold_percent: config.pass_threshold_percent,
            credentials: config.credentials.clone(),
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Resolve `path` against the base URL with standard URL-join rules: an
    /// absolute path replaces whatever path the base carries.
    pub fn url(&self, path: &str) -> String {
        match url::Url::parse(&self.base_url).and_then(|base| base.join(path)) {
            Ok(joined) => joined.to_string(),
            Err(_) => format!("{}/{}", self.base_url, path.trim_start_matches('/')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-formed request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(&self) -> std::result::Result<Value, CheckError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends one request and waits for the whole response.
pub trait Transport {
    fn send(&mut self, request: &ProbeRequest) -> std::result::Result<ProbeResponse, CheckError>;
}

/// Blocking reqwest client with a cookie store, so cookies set by the target
/// persist across checks.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .user_agent(concat!("deploycheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: &ProbeRequest) -> std::result::Result<ProbeResponse, CheckError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        }
        .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| CheckError::from_reqwest(&e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| CheckError::from_reqwest(&e))?;
        Ok(ProbeResponse { status, body })
    }
}

/// Connection context reused across the run: the transport (and its cookie
/// jar) plus default headers attached to every request.
pub struct Session<T: Transport> {
    transport: T,
    headers: BTreeMap<String, String>,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            headers: BTreeMap::new(),
        }
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn set_bearer_token(&mut self, token: &str) {
        self.set_header(AUTHORIZATION, &format!("Bearer {}", token));
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(
        &mut self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<ProbeResponse, CheckError> {
        self.send(HttpMethod::Get, url, None, timeout)
    }

    pub fn post_json(
        &mut self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> std::result::Result<ProbeResponse, CheckError> {
        self.send(HttpMethod::Post, url, Some(body.clone()), timeout)
    }

    pub fn send(
        &mut self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        timeout: Duration,
    ) -> std::result::Result<ProbeResponse, CheckError> {
        let request = ProbeRequest {
            method,
            url: url.to_string(),
            headers: self.headers.clone(),
            body,
            timeout,
        };

        if let Some(body) = &request.body {
            debug!(%method, url, body = %redact_secrets(&body.to_string()), "Sending request");
        } else {
            debug!(%method, url, "Sending request");
        }

        let start = Instant::now();
        let result = self.transport.send(&request);
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => debug!(
                %method,
                url,
                status = response.status,
                elapsed_ms,
                "Received response"
            ),
            Err(e) => debug!(
                %method,
                url,
                elapsed_ms,
                error = %sanitize_for_log(&e.to_string()),
                "Request failed"
            ),
        }
        result
    }
}
