//! Deployment Verifier
//!
//! Probes a deployed web application in a fixed, linear order:
//! - every page must render (200)
//! - every API must answer 200 with JSON
//! - the real-time endpoint must answer 200; payload completeness is advisory
//! - the login endpoint must accept the test credentials
//!
//! No check gates another and no failure aborts the run. The result is the
//! aggregate [`RunSummary`].

pub mod catalog;
pub mod checks;
pub mod session;
pub mod summary;

pub use checks::{CheckResult, CheckStatus, EndpointCheck};
pub use session::{
    HttpMethod, HttpTransport, ProbeRequest, ProbeResponse, Session, TargetConfiguration,
    Transport,
};
pub use summary::{RunSummary, Verdict};

use crate::output;
use anyhow::Result;
use catalog::{API_CHECKS, LOGIN_PATH, PAGE_CHECKS, REALTIME_PATH};
use serde_json::json;
use tracing::{info, warn};

pub struct DeploymentVerifier<T: Transport> {
    target: TargetConfiguration,
    session: Session<T>,
}

impl DeploymentVerifier<HttpTransport> {
    /// Verifier backed by a real blocking HTTP client.
    pub fn connect(target: TargetConfiguration) -> Result<Self> {
        Ok(Self::with_transport(target, HttpTransport::new()?))
    }
}

impl<T: Transport> DeploymentVerifier<T> {
    pub fn with_transport(target: TargetConfiguration, transport: T) -> Self {
        Self {
            target,
            session: Session::new(transport),
        }
    }

    pub fn target(&self) -> &TargetConfiguration {
        &self.target
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Issue `check` and pass iff the status matches its expectation.
    pub fn check_endpoint(&mut self, check: &EndpointCheck) -> CheckResult {
        let url = self.target.url(&check.path);
        let outcome = self
            .session
            .send(check.method, &url, check.body.clone(), self.target.timeout);
        report(checks::classify_endpoint(check, outcome))
    }

    pub fn check_page(&mut self, path: &str, description: &str) -> CheckResult {
        self.check_endpoint(&EndpointCheck::get(path, description))
    }

    pub fn check_api_endpoint(&mut self, path: &str, description: &str) -> CheckResult {
        let url = self.target.url(path);
        let outcome = self.session.get(&url, self.target.timeout);
        report(checks::classify_api(description, outcome))
    }

    pub fn check_realtime_data(&mut self) -> CheckResult {
        let url = self.target.url(REALTIME_PATH);
        let outcome = self.session.get(&url, self.target.realtime_timeout);
        report(checks::classify_realtime(outcome))
    }

    /// Log in with the configured credentials. A returned token is installed
    /// as the session's bearer token for any later request.
    pub fn check_authentication(&mut self) -> CheckResult {
        let url = self.target.url(LOGIN_PATH);
        let body = json!({
            "email": self.target.credentials.email,
            "password": self.target.credentials.password,
        });
        let outcome = self.session.post_json(&url, &body, self.target.timeout);
        let (result, token) = checks::classify_login(outcome);
        if let Some(token) = token {
            self.session.set_bearer_token(&token);
            info!("Stored bearer token on session");
        }
        report(result)
    }

    /// Run the whole suite and print the summary.
    pub fn run_all(&mut self) -> RunSummary {
        output::print_banner(&format!(
            "Testing deployment at: {}",
            self.target.base_url
        ));

        let mut pages_passed = 0;
        for (path, description) in PAGE_CHECKS {
            if self.check_page(path, description).passed {
                pages_passed += 1;
            }
            self.pause();
        }

        output::print_section_break();

        let mut apis_passed = 0;
        for (path, description) in API_CHECKS {
            if self.check_api_endpoint(path, description).passed {
                apis_passed += 1;
            }
            self.pause();
        }

        output::print_section_break();
        let realtime_passed = self.check_realtime_data().passed;

        output::print_section_break();
        let auth_passed = self.check_authentication().passed;

        output::print_section_break();
        let summary = RunSummary {
            pages_passed,
            pages_total: PAGE_CHECKS.len(),
            apis_passed,
            apis_total: API_CHECKS.len(),
            realtime_passed,
            auth_passed,
            threshold_percent: self.target.pass_threshold_percent,
        };
        summary.print();

        info!(
            passed = summary.passed(),
            total = summary.total(),
            verdict = ?summary.verdict(),
            "Deployment verification finished"
        );
        summary
    }

    fn pause(&self) {
        if !self.target.pause.is_zero() {
            std::thread::sleep(self.target.pause);
        }
    }
}

fn report(result: CheckResult) -> CheckResult {
    if !result.passed {
        warn!(message = %result.message, "Check failed");
    }
    result.print();
    result
}
