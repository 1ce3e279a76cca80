//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::ConfigurationError;

/// A diagnostic wrapper for configuration errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ConfigDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(err: &ConfigurationError) -> Option<String> {
    match err {
        ConfigurationError::UnknownFormatter(_) => Some(
            "Use a built-in (null, junit, html, pretty, progress, usage, rerun, json) or register a plugin under its full name".into(),
        ),
        ConfigurationError::MissingOutput(token) => {
            Some(format!("Pass a directory, e.g. {token}:target/{token}"))
        }
        ConfigurationError::StdoutInUse {
            bound_spec: Some(spec),
        } => Some(format!("STDOUT is already used by '{spec}'")),
        ConfigurationError::StdoutInUse { bound_spec: None } => None,
        ConfigurationError::CreateDirs { .. } | ConfigurationError::OpenOutput { .. } => {
            Some("Check that the output path is writable and a valid file name".into())
        }
        ConfigurationError::NoConstructor(_) | ConfigurationError::Instantiate { .. } => {
            Some("Check the plugin registration for this formatter".into())
        }
        ConfigurationError::InvalidConfig(_) => {
            Some("Check the `formatters` list of your run configuration".into())
        }
    }
}

impl From<ConfigurationError> for ConfigDiagnostic {
    fn from(e: ConfigurationError) -> Self {
        let help = help_for(&e);
        let message = e.to_string();
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            ConfigurationError::CreateDirs {
                source: Some(io), ..
            } => Some(Box::new(io)),
            ConfigurationError::OpenOutput { source, .. } => Some(Box::new(source)),
            ConfigurationError::Instantiate { source, .. }
            | ConfigurationError::InvalidConfig(source) => Some(source),
            _ => None,
        };
        ConfigDiagnostic {
            message,
            source,
            help,
            severity: Severity::Error,
        }
    }
}

impl From<ConfigurationError> for miette::Report {
    fn from(err: ConfigurationError) -> Self {
        miette::Report::new(ConfigDiagnostic::from(err))
    }
}
