use std::collections::BTreeMap;
use std::io::{self, Write};

use super::Formatter;
use crate::event::Event;
use crate::io::Sink;

/// Writes `uri:line[:line...]` for every feature with failed scenarios, in a
/// form a later run can take as its feature list.
#[derive(Debug)]
pub struct RerunFormatter {
    out: Sink,
    current_uri: Option<String>,
    current_line: Option<u32>,
    failed: BTreeMap<String, Vec<u32>>,
}

impl RerunFormatter {
    pub fn new(out: Sink) -> Self {
        Self {
            out,
            current_uri: None,
            current_line: None,
            failed: BTreeMap::new(),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }
}

impl Formatter for RerunFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        match *event {
            Event::FeatureStarted { uri, .. } => self.current_uri = Some(uri.to_string()),
            Event::ScenarioStarted { line, .. } => self.current_line = Some(line),
            Event::StepFinished(step) if step.status.is_failure() => {
                if let (Some(uri), Some(line)) = (&self.current_uri, self.current_line) {
                    let lines = self.failed.entry(uri.clone()).or_default();
                    if !lines.contains(&line) {
                        lines.push(line);
                    }
                }
            }
            Event::ScenarioFinished => self.current_line = None,
            Event::FeatureFinished => self.current_uri = None,
            Event::StepFinished(_) => {}
        }
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        let entries: Vec<String> = self
            .failed
            .iter()
            .map(|(uri, lines)| {
                let lines: Vec<String> = lines.iter().map(u32::to_string).collect();
                format!("{uri}:{}", lines.join(":"))
            })
            .collect();
        self.out.write_str(&entries.join(" "))?;
        self.out.flush()
    }
}
