//! Step usage statistics.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use super::Formatter;
use crate::event::Event;
use crate::io::Sink;

/// Counts how often each step text ran and how long it took in total.
///
/// The table is written on `done`, slowest steps first.
#[derive(Debug)]
pub struct UsageFormatter {
    out: Sink,
    usage: BTreeMap<String, StepUsage>,
}

/// Accumulated timings of one step text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepUsage {
    pub count: usize,
    pub total: Duration,
}

impl StepUsage {
    pub fn average(&self) -> Duration {
        match u32::try_from(self.count) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total / n,
        }
    }
}

impl UsageFormatter {
    pub fn new(out: Sink) -> Self {
        Self {
            out,
            usage: BTreeMap::new(),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }

    /// Usage recorded so far, keyed by step text.
    pub fn usage(&self) -> &BTreeMap<String, StepUsage> {
        &self.usage
    }
}

impl Formatter for UsageFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        if let Event::StepFinished(step) = event {
            let entry = self.usage.entry(step.text.clone()).or_default();
            entry.count += 1;
            entry.total += step.duration;
        }
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        let mut rows: Vec<_> = self.usage.iter().collect();
        rows.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        for (text, usage) in rows {
            writeln!(
                self.out,
                "{:>8.3}s {:>4}x  {}",
                usage.average().as_secs_f64(),
                usage.count,
                text
            )?;
        }
        self.out.flush()
    }
}
