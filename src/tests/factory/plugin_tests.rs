//! Plugin formatters resolved by fully-qualified name.

use std::error::Error;
use std::path::Path;

use crate::error::ConfigurationError;
use crate::factory::FormatterFactory;
use crate::registry::{FormatterDescriptor, FormatterRegistry};
use crate::tests::{
    EXPLODING, FLEXIBLE, Flexible, WANTS_BOTH, WANTS_FILE, WantsFile, WantsSinkAndPath, exploding,
    flexible, wants_both, wants_file,
};

#[test]
fn instantiates_custom_file_formatter() {
    let mut fc = FormatterFactory::new().with_plugin(wants_file());

    let formatter = fc.create(&format!("{WANTS_FILE}:halp.txt")).unwrap();
    let wants = formatter.downcast_ref::<WantsFile>().unwrap();
    assert_eq!(wants.out, Path::new("halp.txt"));
    // A path-only constructor gets the path untouched.
    assert!(!Path::new("halp.txt").exists());
}

#[test]
fn custom_file_formatter_without_destination_needs_output() {
    let mut fc = FormatterFactory::new().with_plugin(wants_file());

    let err = fc.create(WANTS_FILE).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("You must supply an output argument to {WANTS_FILE}. Like so: {WANTS_FILE}:output")
    );
}

#[test]
fn sink_and_path_formatter_gets_both() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/both.txt");

    let mut fc = FormatterFactory::new().with_plugin(wants_both());
    let formatter = fc.create(&format!("{WANTS_BOTH}:{}", path.display())).unwrap();
    let wants = formatter.downcast_ref::<WantsSinkAndPath>().unwrap();

    assert_eq!(wants.path, path);
    assert_eq!(wants.out.path(), Some(path.as_path()));
    assert!(path.is_file());

    assert!(matches!(
        fc.create(WANTS_BOTH),
        Err(ConfigurationError::MissingOutput(_))
    ));
}

#[test]
fn flexible_formatter_takes_sink_when_destination_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flex.txt");

    let mut fc = FormatterFactory::new().with_plugin(flexible());
    let formatter = fc.create(&format!("{FLEXIBLE}:{}", path.display())).unwrap();
    let flex = formatter.downcast_ref::<Flexible>().unwrap();
    assert_eq!(
        flex.out.as_ref().and_then(|s| s.path()),
        Some(path.as_path())
    );
}

#[test]
fn unregistered_plugin_is_unknown() {
    let mut fc = FormatterFactory::new();
    let err = fc.create(&format!("{WANTS_FILE}:halp.txt")).unwrap_err();
    assert_eq!(err.to_string(), format!("unknown formatter: {WANTS_FILE}"));
}

#[test]
fn plugin_without_constructor_is_reported() {
    let mut fc = FormatterFactory::new().with_plugin(FormatterDescriptor::new("my.Empty"));
    let err = fc.create("my.Empty:out.txt").unwrap_err();
    assert!(matches!(err, ConfigurationError::NoConstructor(ref name) if name == "my.Empty"));
}

#[test]
fn constructor_failure_is_wrapped() {
    let mut fc = FormatterFactory::new();
    fc.register_plugin(exploding());

    let err = fc.create(EXPLODING).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Could not instantiate formatter {EXPLODING}: boom")
    );
    assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("boom"));
}

#[test]
fn factory_over_existing_registry() {
    let registry = FormatterRegistry::new().with_plugin(wants_file());
    let mut fc = FormatterFactory::with_registry(registry);

    assert!(fc.registry().has_formatter(WANTS_FILE));
    assert!(fc.create(&format!("{WANTS_FILE}:x")).is_ok());
}
