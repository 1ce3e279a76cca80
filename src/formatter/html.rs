//! HTML report directory.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::escape::escape;

use super::{Formatter, ReportCollector};
use crate::event::Event;

const STYLE: &str = "body{font-family:sans-serif}\
.passed{color:#2a7}.failed{color:#c33}.skipped,.pending,.undefined{color:#b80}\
pre{background:#f4f4f4;padding:.5em}";

/// Writes `index.html` into its report directory on `done`.
///
/// The directory is only created when the report is written, so constructing
/// the formatter never touches the filesystem.
#[derive(Debug)]
pub struct HtmlFormatter {
    dir: PathBuf,
    collector: ReportCollector,
}

impl HtmlFormatter {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            collector: ReportCollector::new(),
        }
    }

    /// Report directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html><head><meta charset=\"utf-8\"><title>Test report</title>")?;
        writeln!(out, "<style>{STYLE}</style></head><body>")?;
        for feature in self.collector.features() {
            writeln!(
                out,
                "<h1>Feature: {}</h1><p><code>{}</code></p>",
                escape(feature.name.as_str()),
                escape(feature.uri.as_str())
            )?;
            for scenario in &feature.scenarios {
                writeln!(
                    out,
                    "<h2 class=\"{}\">Scenario: {}</h2><ol>",
                    scenario.status(),
                    escape(scenario.name.as_str())
                )?;
                for step in &scenario.steps {
                    writeln!(
                        out,
                        "<li class=\"{}\"><b>{}</b>{}</li>",
                        step.status,
                        escape(step.keyword.as_str()),
                        escape(step.name.as_str())
                    )?;
                    if let Some(error) = &step.error_message {
                        writeln!(out, "<pre>{}</pre>", escape(error.as_str()))?;
                    }
                }
                writeln!(out, "</ol>")?;
            }
        }
        writeln!(out, "</body></html>")
    }
}

impl Formatter for HtmlFormatter {
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()> {
        self.collector.record(event);
        Ok(())
    }

    fn done(&mut self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let file = fs::File::create(self.dir.join("index.html"))?;
        let mut out = BufWriter::new(file);
        self.write_report(&mut out)?;
        out.flush()
    }
}
