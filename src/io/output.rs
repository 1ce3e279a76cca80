//! Output sinks and resolved output targets.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::InMemorySink;

/// What a [`Sink`] writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    /// The process's standard output
    Stdout,
    /// A file opened by the output resolver
    File(PathBuf),
    /// An in-memory buffer
    Memory,
}

/// An owned writable stream handed to a formatter.
///
/// Text goes through [`Sink::write_str`], so everything a formatter writes is
/// UTF-8 regardless of the platform.
pub struct Sink {
    kind: SinkKind,
    writer: Box<dyn Write + Send>,
}

impl Sink {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self {
            kind: SinkKind::Stdout,
            writer: Box::new(io::stdout()),
        }
    }

    /// A buffered sink over an already opened file.
    pub fn file(path: impl Into<PathBuf>, file: File) -> Self {
        Self {
            kind: SinkKind::File(path.into()),
            writer: Box::new(BufWriter::new(file)),
        }
    }

    /// A sink appending to an in-memory buffer.
    pub fn memory(sink: &InMemorySink) -> Self {
        Self {
            kind: SinkKind::Memory,
            writer: Box::new(sink.handle()),
        }
    }

    pub fn kind(&self) -> &SinkKind {
        &self.kind
    }

    pub fn is_stdout(&self) -> bool {
        self.kind == SinkKind::Stdout
    }

    /// Path of the file behind this sink, if it is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            SinkKind::File(path) => Some(path),
            _ => None,
        }
    }

    /// Write a UTF-8 string.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}

/// Where a formatter's output was resolved to.
#[derive(Debug)]
pub enum OutputTarget {
    /// Standard output, bound through the factory's stdout guard
    Stdout(Sink),
    /// A freshly opened file sink
    FileSink(Sink),
    /// A path the formatter manages itself; nothing has been opened
    FileHandle(PathBuf),
}

impl From<Sink> for OutputTarget {
    fn from(sink: Sink) -> Self {
        if sink.is_stdout() {
            OutputTarget::Stdout(sink)
        } else {
            OutputTarget::FileSink(sink)
        }
    }
}

impl OutputTarget {
    /// Take the sink, if this target has one.
    pub fn into_sink(self) -> Option<Sink> {
        match self {
            OutputTarget::Stdout(sink) | OutputTarget::FileSink(sink) => Some(sink),
            OutputTarget::FileHandle(_) => None,
        }
    }

    /// Take the path, if this target is a path handle.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            OutputTarget::FileHandle(path) => Some(path),
            _ => None,
        }
    }

    /// Identifier for logging: "-" for stdout, the path otherwise.
    pub fn id(&self) -> String {
        match self {
            OutputTarget::Stdout(_) => "-".to_string(),
            OutputTarget::FileSink(sink) => sink
                .path()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            OutputTarget::FileHandle(path) => path.to_string_lossy().into_owned(),
        }
    }
}
