//! Configuration types for formatter resolution.
//!
//! This module provides:
//! - `FormatterSpec`: A parsed `type[:destination]` string
//! - `RunConfig`: The list of formatters for a run, loadable from JSON/YAML/TOML

mod run;
mod spec;

pub use run::{ConfigFormat, RunConfig};
pub use spec::FormatterSpec;
