//! Grouping of run events into features, scenarios and steps.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::event::{Event, Status, StepResult};

fn as_nanos<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_nanos())
}

/// A step inside a [`ScenarioReport`].
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub keyword: String,
    pub name: String,
    pub status: Status,
    #[serde(serialize_with = "as_nanos")]
    pub duration: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<&StepResult> for StepReport {
    fn from(step: &StepResult) -> Self {
        Self {
            keyword: step.keyword.clone(),
            name: step.text.clone(),
            status: step.status,
            duration: step.duration,
            error_message: step.error.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub line: u32,
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    /// Worst status of any step; a scenario without steps passed.
    pub fn status(&self) -> Status {
        self.steps
            .iter()
            .map(|s| s.status)
            .max()
            .unwrap_or(Status::Passed)
    }

    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// First failure message.
    pub fn error(&self) -> Option<&str> {
        self.steps.iter().find_map(|s| s.error_message.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub uri: String,
    pub name: String,
    #[serde(rename = "elements")]
    pub scenarios: Vec<ScenarioReport>,
}

/// Accumulates events into a tree of reports.
///
/// Steps arriving outside a scenario, or scenarios outside a feature, are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct ReportCollector {
    features: Vec<FeatureReport>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &Event<'_>) {
        match *event {
            Event::FeatureStarted { uri, name } => self.features.push(FeatureReport {
                uri: uri.to_string(),
                name: name.to_string(),
                scenarios: Vec::new(),
            }),
            Event::ScenarioStarted { name, line } => {
                if let Some(feature) = self.features.last_mut() {
                    feature.scenarios.push(ScenarioReport {
                        name: name.to_string(),
                        line,
                        steps: Vec::new(),
                    });
                }
            }
            Event::StepFinished(step) => {
                if let Some(scenario) = self
                    .features
                    .last_mut()
                    .and_then(|f| f.scenarios.last_mut())
                {
                    scenario.steps.push(StepReport::from(step));
                }
            }
            Event::ScenarioFinished | Event::FeatureFinished => {}
        }
    }

    pub fn features(&self) -> &[FeatureReport] {
        &self.features
    }
}
