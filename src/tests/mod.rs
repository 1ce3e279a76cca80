//! Internal tests, laid out like the modules they cover.
//!
//! The formatters below stand in for user plugins and are registered under
//! their fully-qualified names.

use std::path::PathBuf;

use crate::event::Event;
use crate::formatter::Formatter;
use crate::io::Sink;
use crate::registry::FormatterDescriptor;

mod io;

pub(crate) const WANTS_SINK: &str = "reportfmt.tests.WantsSink";
pub(crate) const WANTS_FILE: &str = "reportfmt.tests.WantsFile";
pub(crate) const WANTS_BOTH: &str = "reportfmt.tests.WantsSinkAndPath";
pub(crate) const FLEXIBLE: &str = "reportfmt.tests.Flexible";
pub(crate) const EXPLODING: &str = "reportfmt.tests.Exploding";

/// Plugin taking a sink.
pub(crate) struct WantsSink {
    pub out: Sink,
}

/// Plugin taking a path.
pub(crate) struct WantsFile {
    pub out: PathBuf,
}

/// Plugin taking a sink and the path it was opened at.
pub(crate) struct WantsSinkAndPath {
    pub out: Sink,
    pub path: PathBuf,
}

/// Plugin with a no-arg and a sink constructor.
pub(crate) struct Flexible {
    pub out: Option<Sink>,
}

/// Plugin whose constructor always fails.
pub(crate) struct Exploding;

macro_rules! ignore_events {
    ($($ty:ty),*) => {
        $(impl Formatter for $ty {
            fn handle(&mut self, _event: &Event<'_>) -> std::io::Result<()> {
                Ok(())
            }
        })*
    };
}

ignore_events!(WantsSink, WantsFile, WantsSinkAndPath, Flexible, Exploding);

pub(crate) fn wants_sink() -> FormatterDescriptor {
    FormatterDescriptor::new(WANTS_SINK).with_sink(|out| Ok(WantsSink { out }))
}

pub(crate) fn wants_file() -> FormatterDescriptor {
    FormatterDescriptor::new(WANTS_FILE).with_path(|out| Ok(WantsFile { out }))
}

pub(crate) fn wants_both() -> FormatterDescriptor {
    FormatterDescriptor::new(WANTS_BOTH)
        .with_sink_and_path(|out, path| Ok(WantsSinkAndPath { out, path }))
}

pub(crate) fn flexible() -> FormatterDescriptor {
    FormatterDescriptor::new(FLEXIBLE)
        .with_no_arg(|| Ok(Flexible { out: None }))
        .with_sink(|out| Ok(Flexible { out: Some(out) }))
}

pub(crate) fn exploding() -> FormatterDescriptor {
    FormatterDescriptor::new(EXPLODING)
        .with_no_arg(|| -> Result<Exploding, crate::BoxError> { Err("boom".into()) })
}
