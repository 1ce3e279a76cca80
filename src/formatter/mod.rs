//! The `Formatter` capability and the built-in formatters.
//!
//! Built-ins:
//! - `NullFormatter`: discards everything
//! - `PrettyFormatter`: human-readable feature/scenario/step listing
//! - `ProgressFormatter`: one character per step
//! - `UsageFormatter`: step usage statistics
//! - `RerunFormatter`: `uri:line` of failed scenarios
//! - `JsonFormatter`: JSON report (feature `json`)
//! - `JUnitFormatter`: JUnit XML report (feature `xml`)
//! - `HtmlFormatter`: HTML report directory (feature `xml`)

use std::any::Any;
use std::fmt;
use std::io;

use crate::event::Event;

mod collect;
mod null;
mod pretty;
mod progress;
mod rerun;
mod usage;

#[cfg(feature = "xml")]
mod html;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "xml")]
mod junit;

pub use collect::{FeatureReport, ReportCollector, ScenarioReport, StepReport};
pub use null::NullFormatter;
pub use pretty::PrettyFormatter;
pub use progress::ProgressFormatter;
pub use rerun::RerunFormatter;
pub use usage::{StepUsage, UsageFormatter};

#[cfg(feature = "xml")]
pub use html::HtmlFormatter;
#[cfg(feature = "json")]
pub use json::JsonFormatter;
#[cfg(feature = "xml")]
pub use junit::JUnitFormatter;

/// Consumes test-run events and renders them into a report.
///
/// A formatter owns its output for the whole run. `done` is called once after
/// the last event; formatters that build a whole document write it there.
pub trait Formatter: Any + Send {
    /// Handle one event.
    fn handle(&mut self, event: &Event<'_>) -> io::Result<()>;

    /// Finish the report and flush the output.
    fn done(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for dyn Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Formatter")
    }
}

impl dyn Formatter {
    /// Whether this formatter is a `T`.
    pub fn is<T: Formatter>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Borrow this formatter as a `T`.
    pub fn downcast_ref<T: Formatter>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Mutably borrow this formatter as a `T`.
    pub fn downcast_mut<T: Formatter>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
