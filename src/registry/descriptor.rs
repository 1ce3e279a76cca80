//! Formatter descriptors: a name plus the constructors a formatter offers.
//!
//! This is how custom formatters are plugged in without touching the crate:
//! describe the constructors, register the descriptor under the formatter's
//! fully-qualified name, and refer to that name in a spec.
//!
//! Specs split at their first colon, so plugin names use dots where a Rust
//! path has `::` (`my_crate.reports.Teamcity`). [`plugin_name`] derives such a
//! name from a type.

use std::any::type_name;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::BoxError;
use crate::formatter::Formatter;
use crate::io::Sink;

/// Argument list a formatter constructor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No output at all
    NoArg,
    /// A writable sink (standard output or a file)
    SinkOnly,
    /// A file sink plus the path it was opened at
    SinkAndPath,
    /// A path the formatter writes under by itself
    PathOnly,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::NoArg => write!(f, "no-arg"),
            Shape::SinkOnly => write!(f, "sink"),
            Shape::SinkAndPath => write!(f, "sink+path"),
            Shape::PathOnly => write!(f, "path"),
        }
    }
}

/// Dotted fully-qualified name of `T`, usable as a spec type token.
pub fn plugin_name<T: ?Sized>() -> String {
    type_name::<T>().replace("::", ".")
}

type Built = Result<Box<dyn Formatter>, BoxError>;

/// Constructor taking no argument.
pub type NoArgFn = Arc<dyn Fn() -> Built + Send + Sync>;

/// Constructor taking a sink.
pub type SinkFn = Arc<dyn Fn(Sink) -> Built + Send + Sync>;

/// Constructor taking a sink and its path.
pub type SinkAndPathFn = Arc<dyn Fn(Sink, PathBuf) -> Built + Send + Sync>;

/// Constructor taking a path.
pub type PathFn = Arc<dyn Fn(PathBuf) -> Built + Send + Sync>;

/// A constructor picked from a descriptor.
pub enum Constructor<'a> {
    NoArg(&'a NoArgFn),
    Sink(&'a SinkFn),
    SinkAndPath(&'a SinkAndPathFn),
    Path(&'a PathFn),
}

/// A formatter type and its constructors.
///
/// # Example
///
/// ```rust,ignore
/// use reportfmt::registry::FormatterDescriptor;
///
/// let desc = FormatterDescriptor::new("my_crate.Teamcity")
///     .with_no_arg(|| Ok(Teamcity::to_stdout()))
///     .with_sink(|out| Ok(Teamcity::new(out)));
/// ```
#[derive(Clone)]
pub struct FormatterDescriptor {
    /// Short name or fully-qualified plugin name
    pub name: String,
    pub no_arg_fn: Option<NoArgFn>,
    pub sink_fn: Option<SinkFn>,
    pub sink_and_path_fn: Option<SinkAndPathFn>,
    pub path_fn: Option<PathFn>,
}

impl fmt::Debug for FormatterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterDescriptor")
            .field("name", &self.name)
            .field("shapes", &self.accepted_shapes())
            .finish()
    }
}

impl FormatterDescriptor {
    /// Create a descriptor with no constructors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            no_arg_fn: None,
            sink_fn: None,
            sink_and_path_fn: None,
            path_fn: None,
        }
    }

    /// Create a descriptor named after `T` (see [`plugin_name`]).
    pub fn of<T: Formatter>() -> Self {
        Self::new(plugin_name::<T>())
    }

    /// Set the no-argument constructor.
    pub fn with_no_arg<F, T>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
        T: Formatter,
    {
        self.no_arg_fn = Some(Arc::new(move || -> Built {
            Ok(Box::new(f()?) as Box<dyn Formatter>)
        }));
        self
    }

    /// Set the sink constructor.
    pub fn with_sink<F, T>(mut self, f: F) -> Self
    where
        F: Fn(Sink) -> Result<T, BoxError> + Send + Sync + 'static,
        T: Formatter,
    {
        self.sink_fn = Some(Arc::new(move |out: Sink| -> Built {
            Ok(Box::new(f(out)?) as Box<dyn Formatter>)
        }));
        self
    }

    /// Set the sink-and-path constructor.
    pub fn with_sink_and_path<F, T>(mut self, f: F) -> Self
    where
        F: Fn(Sink, PathBuf) -> Result<T, BoxError> + Send + Sync + 'static,
        T: Formatter,
    {
        self.sink_and_path_fn = Some(Arc::new(move |out: Sink, path: PathBuf| -> Built {
            Ok(Box::new(f(out, path)?) as Box<dyn Formatter>)
        }));
        self
    }

    /// Set the path constructor.
    pub fn with_path<F, T>(mut self, f: F) -> Self
    where
        F: Fn(PathBuf) -> Result<T, BoxError> + Send + Sync + 'static,
        T: Formatter,
    {
        self.path_fn = Some(Arc::new(move |path: PathBuf| -> Built {
            Ok(Box::new(f(path)?) as Box<dyn Formatter>)
        }));
        self
    }

    /// The constructor of the given shape, if there is one.
    pub fn constructor(&self, shape: Shape) -> Option<Constructor<'_>> {
        match shape {
            Shape::NoArg => self.no_arg_fn.as_ref().map(Constructor::NoArg),
            Shape::SinkOnly => self.sink_fn.as_ref().map(Constructor::Sink),
            Shape::SinkAndPath => self.sink_and_path_fn.as_ref().map(Constructor::SinkAndPath),
            Shape::PathOnly => self.path_fn.as_ref().map(Constructor::Path),
        }
    }

    /// Whether a constructor of this shape exists.
    pub fn accepts(&self, shape: Shape) -> bool {
        self.constructor(shape).is_some()
    }

    /// All shapes this formatter can be built with.
    pub fn accepted_shapes(&self) -> Vec<Shape> {
        [
            Shape::NoArg,
            Shape::SinkOnly,
            Shape::SinkAndPath,
            Shape::PathOnly,
        ]
        .into_iter()
        .filter(|s| self.accepts(*s))
        .collect()
    }

    /// Pick the constructor to use given whether a destination was supplied.
    ///
    /// With a destination the most specific shape wins: path, then sink plus
    /// path, then sink, then no-arg (which ignores the destination). Without
    /// one a no-arg constructor is preferred over standard output. `None`
    /// means every constructor needs a destination, or there is none at all.
    pub fn select_shape(&self, has_destination: bool) -> Option<Shape> {
        let order: &[Shape] = if has_destination {
            &[
                Shape::PathOnly,
                Shape::SinkAndPath,
                Shape::SinkOnly,
                Shape::NoArg,
            ]
        } else {
            &[Shape::NoArg, Shape::SinkOnly]
        };
        order.iter().copied().find(|s| self.accepts(*s))
    }
}
