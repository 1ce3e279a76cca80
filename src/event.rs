//! Test-run events consumed by formatters.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Outcome of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Skipped,
    Pending,
    Undefined,
    Failed,
}

impl Status {
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => write!(f, "passed"),
            Status::Skipped => write!(f, "skipped"),
            Status::Pending => write!(f, "pending"),
            Status::Undefined => write!(f, "undefined"),
            Status::Failed => write!(f, "failed"),
        }
    }
}

/// A finished step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Gherkin keyword including its trailing space, e.g. `"Given "`
    pub keyword: String,
    /// Step text
    pub text: String,
    pub status: Status,
    pub duration: Duration,
    /// Failure message, if the step failed
    pub error: Option<String>,
}

impl StepResult {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>, status: Status) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            status,
            duration: Duration::ZERO,
            error: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// An event of a test run, in the order the runner produces them.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    FeatureStarted { uri: &'a str, name: &'a str },
    ScenarioStarted { name: &'a str, line: u32 },
    StepFinished(&'a StepResult),
    ScenarioFinished,
    FeatureFinished,
}
