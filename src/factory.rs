//! Turning formatter specs into formatters.

use std::path::{Path, PathBuf};

use crate::config::{FormatterSpec, RunConfig};
use crate::error::ConfigurationError;
use crate::formatter::Formatter;
use crate::io::{Destination, OutputTarget, Sink, StdoutGuard, resolve_handle, resolve_sink};
use crate::registry::{Constructor, FormatterDescriptor, FormatterRegistry};

/// Creates formatters from `type[:destination]` specs.
///
/// A factory is used during run setup, once per configured formatter. It
/// remembers whether standard output has been handed out, so only one of the
/// formatters it creates can write there.
///
/// ```rust,ignore
/// let mut factory = FormatterFactory::new();
/// let pretty = factory.create("pretty")?;            // STDOUT
/// let json = factory.create("json:target/run.json")?; // file
/// let err = factory.create("progress");               // STDOUT taken
/// ```
#[derive(Debug, Default)]
pub struct FormatterFactory {
    registry: FormatterRegistry,
    guard: StdoutGuard,
    base_dir: Option<PathBuf>,
}

impl FormatterFactory {
    /// Create a factory knowing only the built-in formatters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory over an existing registry.
    pub fn with_registry(registry: FormatterRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Create a factory for a run configuration.
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            ..Self::default()
        }
    }

    /// Register a plugin formatter (builder pattern).
    pub fn with_plugin(mut self, descriptor: FormatterDescriptor) -> Self {
        self.registry.register_plugin(descriptor);
        self
    }

    /// Register a plugin formatter.
    pub fn register_plugin(&mut self, descriptor: FormatterDescriptor) {
        self.registry.register_plugin(descriptor);
    }

    /// Resolve relative destinations against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    pub fn stdout_guard(&self) -> &StdoutGuard {
        &self.guard
    }

    /// Create a formatter from a raw `type[:destination]` spec.
    pub fn create(&mut self, raw: &str) -> Result<Box<dyn Formatter>, ConfigurationError> {
        self.create_from_spec(&FormatterSpec::parse(raw))
    }

    /// Create a formatter from a parsed spec.
    ///
    /// Nothing is opened or bound until the constructor is known, and the
    /// stdout guard only changes when standard output is actually handed out.
    pub fn create_from_spec(
        &mut self,
        spec: &FormatterSpec,
    ) -> Result<Box<dyn Formatter>, ConfigurationError> {
        let token = spec.type_token.as_str();
        let descriptor = self
            .registry
            .lookup(token)
            .ok_or_else(|| ConfigurationError::UnknownFormatter(token.to_string()))?;

        let Some(shape) = descriptor.select_shape(spec.has_destination()) else {
            return Err(if descriptor.accepted_shapes().is_empty() {
                ConfigurationError::NoConstructor(token.to_string())
            } else {
                ConfigurationError::MissingOutput(token.to_string())
            });
        };
        let constructor = descriptor
            .constructor(shape)
            .ok_or_else(|| ConfigurationError::NoConstructor(token.to_string()))?;
        log::debug!("Creating formatter {} with its {} constructor", spec, shape);

        let path = spec
            .destination
            .as_deref()
            .map(|raw| resolve_against(self.base_dir.as_deref(), raw));
        let destination = spec
            .destination
            .as_deref()
            .zip(path.as_deref())
            .map(|(raw, path)| Destination::new(raw, path));
        let requester = spec.to_string();

        let built = match constructor {
            Constructor::NoArg(ctor) => ctor(),
            Constructor::Sink(ctor) => {
                let target = resolve_sink(destination, &mut self.guard, &requester)?;
                ctor(sink_of(target, token)?)
            }
            Constructor::SinkAndPath(ctor) => {
                let target = resolve_sink(destination, &mut self.guard, &requester)?;
                ctor(sink_of(target, token)?, path.clone().unwrap_or_default())
            }
            Constructor::Path(ctor) => {
                let target = resolve_handle(path.clone().unwrap_or_default());
                log::debug!("Formatter {} writes under {}", spec, target.id());
                let dir = target
                    .into_path()
                    .ok_or_else(|| ConfigurationError::NoConstructor(token.to_string()))?;
                ctor(dir)
            }
        };

        built.map_err(|source| ConfigurationError::Instantiate {
            name: token.to_string(),
            source,
        })
    }

    /// Create formatters for several specs in order, stopping at the first
    /// error.
    pub fn create_all<I, S>(&mut self, specs: I) -> Result<Vec<Box<dyn Formatter>>, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        specs
            .into_iter()
            .map(|raw| self.create(raw.as_ref()))
            .collect()
    }
}

/// Unwrap the sink a sink-taking constructor was resolved to.
fn sink_of(target: OutputTarget, token: &str) -> Result<Sink, ConfigurationError> {
    log::trace!("Formatter {} resolved to output {}", token, target.id());
    target
        .into_sink()
        .ok_or_else(|| ConfigurationError::NoConstructor(token.to_string()))
}

fn resolve_against(base_dir: Option<&Path>, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
