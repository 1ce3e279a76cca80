use std::io::{self, Write};

use super::Formatter;
use crate::event::{Event, Status};
use crate::io::Sink;

/// Prints one character per finished step and a newline at the end.
#[derive(Debug)]
pub struct ProgressFormatter {
    out: Sink,
}

impl ProgressFormatter {
    pub fn new(out: Sink) -> Self {
        Self { out }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }
}

fn marker(status: Status) -> &'static str {
    match status {
        Status::Passed => ".",
        Status::Skipped => "-",
        Status::Pending => "P",
        Status::Undefined => "U",
        Status::Failed => "F",
    }
}

impl Formatter for ProgressFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        if let Event::StepFinished(step) = event {
            self.out.write_str(marker(step.status))?;
        }
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}
