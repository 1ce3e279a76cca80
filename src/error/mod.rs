//! Error types for formatter resolution.
//!
//! Every failure while turning a `type[:destination]` spec into a formatter is
//! a [`ConfigurationError`]. They are all terminal: the caller is expected to
//! abort startup and show the message, which is why each variant carries an
//! exact, stable text.

use thiserror::Error;

/// Boxed error returned by formatter constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A formatter spec could not be turned into a formatter.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Neither a built-in nor a registered plugin matches the type token.
    #[error("unknown formatter: {0}")]
    UnknownFormatter(String),

    /// The formatter only accepts a path and none was given.
    #[error("You must supply an output argument to {0}. Like so: {0}:output")]
    MissingOutput(String),

    /// Standard output is already bound to another formatter of this factory.
    #[error(
        "Only one formatter can use STDOUT. If you use more than one formatter you must specify output path with FORMAT:PATH"
    )]
    StdoutInUse {
        /// Spec of the formatter that holds standard output
        bound_spec: Option<String>,
    },

    /// The parent directory of an output file could not be created.
    #[error("Could not create dirs for formatter output file {path}")]
    CreateDirs {
        /// Destination as the user wrote it
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The output file itself could not be opened for writing.
    #[error("Could not open formatter output file {path}")]
    OpenOutput {
        /// Destination as the user wrote it
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A plugin was registered without any constructor.
    #[error("formatter {0} exposes no usable constructor")]
    NoConstructor(String),

    /// The formatter's constructor returned an error.
    #[error("Could not instantiate formatter {name}: {source}")]
    Instantiate {
        name: String,
        #[source]
        source: BoxError,
    },

    /// A run configuration could not be loaded.
    #[error("invalid formatter configuration: {0}")]
    InvalidConfig(#[source] BoxError),
}

impl ConfigurationError {
    /// The type token or destination this error is about, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            ConfigurationError::UnknownFormatter(token)
            | ConfigurationError::MissingOutput(token)
            | ConfigurationError::NoConstructor(token) => Some(token),
            ConfigurationError::CreateDirs { path, .. }
            | ConfigurationError::OpenOutput { path, .. } => Some(path),
            ConfigurationError::Instantiate { name, .. } => Some(name),
            ConfigurationError::StdoutInUse { bound_spec } => bound_spec.as_deref(),
            ConfigurationError::InvalidConfig(_) => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
