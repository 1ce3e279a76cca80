//! Resolution of a destination into an output target.
//!
//! Sinks are only produced when a formatter's constructor needs one, so a
//! formatter that ignores its destination never touches the filesystem or
//! standard output.

use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};

use sanitize_filename::{OptionsForCheck, is_sanitized_with_options};

use super::{OutputTarget, Sink, StdoutGuard};
use crate::error::ConfigurationError;

/// A destination as the user wrote it, together with the path it resolves
/// to on disk (which differs when a base directory is configured).
#[derive(Debug, Clone, Copy)]
pub struct Destination<'a> {
    /// Text after the colon, used verbatim in error messages
    pub raw: &'a str,
    /// Filesystem location
    pub path: &'a Path,
}

impl<'a> Destination<'a> {
    pub fn new(raw: &'a str, path: &'a Path) -> Self {
        Self { raw, path }
    }
}

/// Resolve the output of a sink-taking formatter.
///
/// Without a destination, standard output is claimed from `guard` on behalf
/// of `requester`. With one, missing parent directories are created and the
/// file is created or truncated.
pub fn resolve_sink(
    destination: Option<Destination<'_>>,
    guard: &mut StdoutGuard,
    requester: &str,
) -> Result<OutputTarget, ConfigurationError> {
    open_sink(destination, guard, requester).map(OutputTarget::from)
}

fn open_sink(
    destination: Option<Destination<'_>>,
    guard: &mut StdoutGuard,
    requester: &str,
) -> Result<Sink, ConfigurationError> {
    let Some(dest) = destination else {
        guard.bind(requester)?;
        log::debug!("Formatter {} bound to STDOUT", requester);
        return Ok(Sink::stdout());
    };

    ensure_parent_dirs(dest)?;

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(dest.path)
        .map_err(|e| ConfigurationError::OpenOutput {
            path: dest.raw.to_string(),
            source: e,
        })?;
    log::debug!("Opened formatter output file {}", dest.path.display());
    Ok(Sink::file(dest.path, file))
}

/// Hand out the destination path without opening anything.
pub fn resolve_handle(path: impl Into<PathBuf>) -> OutputTarget {
    OutputTarget::FileHandle(path.into())
}

/// Make sure the directory that will hold `dest` exists.
fn ensure_parent_dirs(dest: Destination<'_>) -> Result<(), ConfigurationError> {
    let Some(parent) = dest.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    let create_failed = |source: Option<std::io::Error>| ConfigurationError::CreateDirs {
        path: dest.raw.to_string(),
        source,
    };

    // Reserved characters are refused everywhere, device names only where
    // the platform reserves them.
    let legal = |name: &str| {
        is_sanitized_with_options(
            name,
            OptionsForCheck {
                windows: cfg!(windows),
                truncate: false,
            },
        )
    };
    let mut probe = PathBuf::new();
    for component in parent.components() {
        probe.push(component);
        if let Component::Normal(name) = component {
            if !probe.exists() && !legal(&name.to_string_lossy()) {
                log::debug!(
                    "Refusing to create directory {:?} for {}",
                    name,
                    dest.raw
                );
                return Err(create_failed(None));
            }
        }
    }

    fs::create_dir_all(parent).map_err(|e| create_failed(Some(e)))?;
    log::debug!("Created output directory {}", parent.display());
    Ok(())
}
