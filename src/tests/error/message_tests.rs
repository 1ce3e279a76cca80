//! The error messages are shown to users as-is and must not drift.

use std::error::Error;

use crate::error::ConfigurationError;

#[test]
fn unknown_formatter_message() {
    let err = ConfigurationError::UnknownFormatter("nope".into());
    assert_eq!(err.to_string(), "unknown formatter: nope");
    assert_eq!(err.subject(), Some("nope"));
}

#[test]
fn missing_output_message_repeats_token() {
    let err = ConfigurationError::MissingOutput("html".into());
    assert_eq!(
        err.to_string(),
        "You must supply an output argument to html. Like so: html:output"
    );
}

#[test]
fn stdout_message_does_not_mention_holder() {
    let err = ConfigurationError::StdoutInUse {
        bound_spec: Some("pretty".into()),
    };
    assert_eq!(
        err.to_string(),
        "Only one formatter can use STDOUT. If you use more than one formatter you must specify output path with FORMAT:PATH"
    );
    assert_eq!(err.subject(), Some("pretty"));
}

#[test]
fn create_dirs_message_and_source() {
    let err = ConfigurationError::CreateDirs {
        path: "a/b/c.json".into(),
        source: Some(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )),
    };
    assert_eq!(
        err.to_string(),
        "Could not create dirs for formatter output file a/b/c.json"
    );
    assert!(err.source().is_some());

    let err = ConfigurationError::CreateDirs {
        path: "x".into(),
        source: None,
    };
    assert!(err.source().is_none());
}

#[test]
fn instantiate_wraps_cause() {
    let err = ConfigurationError::Instantiate {
        name: "my.Plugin".into(),
        source: "boom".into(),
    };
    assert_eq!(err.to_string(), "Could not instantiate formatter my.Plugin: boom");
    assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
}

#[cfg(feature = "miette")]
#[test]
fn miette_diagnostic_has_help() {
    use crate::error::ConfigDiagnostic;

    let diag = ConfigDiagnostic::from(ConfigurationError::MissingOutput("html".into()));
    assert_eq!(
        diag.message,
        "You must supply an output argument to html. Like so: html:output"
    );
    assert_eq!(diag.help.as_deref(), Some("Pass a directory, e.g. html:target/html"));
}
