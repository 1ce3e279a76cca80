//! Human-readable listing of features, scenarios and steps.

use std::io::{self, Write};

use super::Formatter;
use crate::event::Event;
use crate::io::Sink;

/// Writes each feature, scenario and step as it finishes.
///
/// ```text
/// Feature: Eating
///
///   Scenario: Eat cucumbers
///     Given there are 12 cucumbers # passed
/// ```
#[derive(Debug)]
pub struct PrettyFormatter {
    out: Sink,
}

impl PrettyFormatter {
    pub fn new(out: Sink) -> Self {
        Self { out }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }
}

impl Formatter for PrettyFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        match *event {
            Event::FeatureStarted { name, .. } => writeln!(self.out, "Feature: {name}"),
            Event::ScenarioStarted { name, .. } => writeln!(self.out, "\n  Scenario: {name}"),
            Event::StepFinished(step) => {
                writeln!(
                    self.out,
                    "    {}{} # {}",
                    step.keyword, step.text, step.status
                )?;
                if let Some(error) = &step.error {
                    for line in error.lines() {
                        writeln!(self.out, "      {line}")?;
                    }
                }
                Ok(())
            }
            Event::ScenarioFinished => Ok(()),
            Event::FeatureFinished => writeln!(self.out),
        }
    }

    fn done(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
