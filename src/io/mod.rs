//! Output sinks for formatters.
//!
//! This module provides:
//! - `Sink`: An owned UTF-8 writable stream (stdout, file or memory)
//! - `OutputTarget`: What a destination resolved to
//! - `StdoutGuard`: Per-factory exclusive use of standard output
//! - `resolve_sink` / `resolve_handle`: Lazy creation of outputs
//! - `InMemorySink`: Capturing output in tests

mod guard;
mod memory;
mod output;
mod resolver;

pub use guard::StdoutGuard;
pub use memory::InMemorySink;
pub use output::{OutputTarget, Sink, SinkKind};
pub use resolver::{Destination, resolve_handle, resolve_sink};
