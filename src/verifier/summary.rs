//! Aggregate counters and the run verdict.

use crate::errors::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::output::{self, Glyphs, Status};

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    AllPassed,
    /// At or above the pass threshold, but not everything passed.
    MostlyPassed,
    Failed,
}

impl Verdict {
    /// `passed * 100 >= total * threshold_percent`, in integer arithmetic so
    /// the boundary is exact.
    pub fn from_counts(passed: usize, total: usize, threshold_percent: u32) -> Self {
        if passed >= total {
            Self::AllPassed
        } else if passed * 100 >= total * threshold_percent as usize {
            Self::MostlyPassed
        } else {
            Self::Failed
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed)
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::AllPassed => "ALL TESTS PASSED! Deployment is successful!",
            Self::MostlyPassed => "MOST TESTS PASSED! Deployment is mostly successful.",
            Self::Failed => "DEPLOYMENT HAS ISSUES! Check the failed tests above.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_passed: usize,
    pub pages_total: usize,
    pub apis_passed: usize,
    pub apis_total: usize,
    pub realtime_passed: bool,
    pub auth_passed: bool,
    pub threshold_percent: u32,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.pages_passed
            + self.apis_passed
            + usize::from(self.realtime_passed)
            + usize::from(self.auth_passed)
    }

    pub fn total(&self) -> usize {
        self.pages_total + self.apis_total + 2
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_counts(self.passed(), self.total(), self.threshold_percent)
    }

    pub fn print(&self) {
        output::print_heading("TEST SUMMARY");
        println!("Pages Tested: {}/{}", self.pages_passed, self.pages_total);
        println!("API Endpoints: {}/{}", self.apis_passed, self.apis_total);
        println!("Real-time Data: {}", Glyphs::outcome(self.realtime_passed));
        println!("Authentication: {}", Glyphs::outcome(self.auth_passed));
        println!("Overall: {}/{} tests passed", self.passed(), self.total());

        let verdict = self.verdict();
        match verdict {
            Verdict::AllPassed => println!("{} {}", Glyphs::party(), verdict.message()),
            Verdict::MostlyPassed => output::print_status(verdict.message(), Status::Warning),
            Verdict::Failed => output::print_status(verdict.message(), Status::Fail),
        }
    }
}
