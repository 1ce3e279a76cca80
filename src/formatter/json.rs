//! JSON report.

use std::io::{self, Write};

use super::{FeatureReport, Formatter, ReportCollector};
use crate::event::Event;
use crate::io::Sink;

/// Collects the run and writes it as a JSON array of features on `done`.
///
/// Step durations are in nanoseconds.
#[derive(Debug)]
pub struct JsonFormatter {
    out: Sink,
    collector: ReportCollector,
}

impl JsonFormatter {
    pub fn new(out: Sink) -> Self {
        Self {
            out,
            collector: ReportCollector::new(),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }

    pub fn features(&self) -> &[FeatureReport] {
        self.collector.features()
    }
}

impl Formatter for JsonFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        self.collector.record(event);
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, self.collector.features())?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
