//! JUnit XML report.

use std::io::{self, Write};

use quick_xml::escape::escape;

use super::{Formatter, ReportCollector};
use crate::event::{Event, Status};
use crate::io::Sink;

/// Writes one `<testsuite>` per feature and one `<testcase>` per scenario.
///
/// Failed scenarios carry a `<failure>` with the first step error, skipped,
/// pending and undefined ones a `<skipped/>`.
#[derive(Debug)]
pub struct JUnitFormatter {
    out: Sink,
    collector: ReportCollector,
}

impl JUnitFormatter {
    pub fn new(out: Sink) -> Self {
        Self {
            out,
            collector: ReportCollector::new(),
        }
    }

    pub fn sink(&self) -> &Sink {
        &self.out
    }
}

impl Formatter for JUnitFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        self.collector.record(event);
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out, "<testsuites>")?;
        for feature in self.collector.features() {
            let failures = feature
                .scenarios
                .iter()
                .filter(|s| s.status() == Status::Failed)
                .count();
            let skipped = feature
                .scenarios
                .iter()
                .filter(|s| {
                    matches!(
                        s.status(),
                        Status::Skipped | Status::Pending | Status::Undefined
                    )
                })
                .count();
            let time: f64 = feature
                .scenarios
                .iter()
                .map(|s| s.duration().as_secs_f64())
                .sum();
            writeln!(
                out,
                r#"  <testsuite name="{}" tests="{}" failures="{}" skipped="{}" time="{:.3}">"#,
                escape(feature.name.as_str()),
                feature.scenarios.len(),
                failures,
                skipped,
                time
            )?;
            for scenario in &feature.scenarios {
                write!(
                    out,
                    r#"    <testcase classname="{}" name="{}" time="{:.3}""#,
                    escape(feature.name.as_str()),
                    escape(scenario.name.as_str()),
                    scenario.duration().as_secs_f64()
                )?;
                match scenario.status() {
                    Status::Passed => writeln!(out, "/>")?,
                    Status::Failed => {
                        writeln!(out, ">")?;
                        let message = scenario.error().unwrap_or("failed");
                        writeln!(
                            out,
                            r#"      <failure message="{}"/>"#,
                            escape(message)
                        )?;
                        writeln!(out, "    </testcase>")?;
                    }
                    Status::Skipped | Status::Pending | Status::Undefined => {
                        writeln!(out, ">")?;
                        writeln!(out, "      <skipped/>")?;
                        writeln!(out, "    </testcase>")?;
                    }
                }
            }
            writeln!(out, "  </testsuite>")?;
        }
        writeln!(out, "</testsuites>")?;
        out.flush()
    }
}
