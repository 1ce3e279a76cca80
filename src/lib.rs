//! # reportfmt
//!
//! Turns formatter specs such as `"pretty"`, `"json:target/run.json"` or
//! `"my_crate.reports.Teamcity:out.txt"` into report formatters bound to the
//! right output.
//!
//! ## Overview
//!
//! reportfmt provides:
//! - **Spec parsing**: `<type>[:<destination>]`, split at the first colon only
//! - **Built-in formatters**: `null`, `pretty`, `progress`, `usage`, `rerun`,
//!   `json`, `junit` and `html`
//! - **Plugins**: custom formatters registered under a fully-qualified name
//! - **Constructor shapes**: formatters take nothing, a sink, a sink and its
//!   path, or only a path; the most specific one that fits the spec is used
//! - **One STDOUT per run**: a factory hands standard output to at most one
//!   formatter
//! - **Lazy file outputs**: files and their parent directories are only
//!   created when a formatter needs a sink
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reportfmt::{FormatterFactory, event::Event};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut factory = FormatterFactory::new();
//!     let mut formatters = factory.create_all(["pretty", "json:target/report.json"])?;
//!
//!     for f in &mut formatters {
//!         f.handle(&Event::FeatureStarted { uri: "features/a.feature", name: "A" })?;
//!     }
//!     for f in &mut formatters {
//!         f.done()?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - the `json` formatter and JSON run configs (enabled by default)
//! - `xml` - the `junit` and `html` formatters (enabled by default)
//! - `yaml` - YAML run configs
//! - `toml` - TOML run configs
//! - `miette` - Pretty error reporting with miette

pub mod config;
pub mod error;
pub mod event;
pub mod factory;
pub mod formatter;
pub mod io;
pub mod registry;

pub use config::{ConfigFormat, FormatterSpec, RunConfig};
pub use error::{BoxError, ConfigurationError};
pub use event::{Event, Status, StepResult};
pub use factory::FormatterFactory;
pub use formatter::Formatter;
pub use io::{InMemorySink, OutputTarget, Sink, SinkKind, StdoutGuard};
pub use registry::{FormatterDescriptor, FormatterRegistry, Shape};

#[cfg(feature = "miette")]
pub use error::ConfigDiagnostic;

/// Create every formatter of a run configuration with a fresh factory.
pub fn create_formatters(config: &RunConfig) -> Result<Vec<Box<dyn Formatter>>, ConfigurationError> {
    FormatterFactory::from_config(config).create_all(&config.formatters)
}

/// Create every formatter of a run configuration, letting the caller adjust
/// the factory first. This is the place to register plugins.
pub fn create_formatters_with<F>(
    config: &RunConfig,
    customize: F,
) -> Result<Vec<Box<dyn Formatter>>, ConfigurationError>
where
    F: FnOnce(FormatterFactory) -> FormatterFactory,
{
    let mut factory = customize(FormatterFactory::from_config(config));
    factory.create_all(&config.formatters)
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
