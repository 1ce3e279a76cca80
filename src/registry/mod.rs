//! Formatter lookup by name.
//!
//! This module provides:
//! - `FormatterDescriptor`: A formatter type and its constructors
//! - `Shape`: The constructor argument lists a formatter can offer
//! - `FormatterRegistry`: Built-in formatters plus plugins registered by
//!   fully-qualified name

use std::collections::HashMap;

use once_cell::sync::Lazy;

mod descriptor;
pub use descriptor::{
    Constructor, FormatterDescriptor, NoArgFn, PathFn, Shape, SinkAndPathFn, SinkFn, plugin_name,
};

use crate::formatter::{
    NullFormatter, PrettyFormatter, ProgressFormatter, RerunFormatter, UsageFormatter,
};

static BUILTINS: Lazy<Vec<FormatterDescriptor>> = Lazy::new(|| {
    #[allow(unused_mut)]
    let mut builtins = vec![
        FormatterDescriptor::new("null").with_no_arg(|| Ok(NullFormatter)),
        FormatterDescriptor::new("pretty").with_sink(|out| Ok(PrettyFormatter::new(out))),
        FormatterDescriptor::new("progress").with_sink(|out| Ok(ProgressFormatter::new(out))),
        FormatterDescriptor::new("usage").with_sink(|out| Ok(UsageFormatter::new(out))),
        FormatterDescriptor::new("rerun").with_sink(|out| Ok(RerunFormatter::new(out))),
    ];

    #[cfg(feature = "xml")]
    {
        use crate::formatter::{HtmlFormatter, JUnitFormatter};
        builtins.push(
            FormatterDescriptor::new("junit").with_sink(|out| Ok(JUnitFormatter::new(out))),
        );
        builtins.push(FormatterDescriptor::new("html").with_path(|dir| Ok(HtmlFormatter::new(dir))));
    }

    #[cfg(feature = "json")]
    builtins.push(
        FormatterDescriptor::new("json")
            .with_sink(|out| Ok(crate::formatter::JsonFormatter::new(out))),
    );

    builtins
});

/// Names of all built-in formatters enabled in this build.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|d| d.name.as_str()).collect()
}

/// Registry of formatters: the built-in table plus registered plugins.
#[derive(Debug, Clone, Default)]
pub struct FormatterRegistry {
    plugins: HashMap<String, FormatterDescriptor>,
}

impl FormatterRegistry {
    /// Create a registry with only the built-in formatters.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Look up a built-in formatter. Names are case-sensitive.
    pub fn lookup_builtin(name: &str) -> Option<&'static FormatterDescriptor> {
        BUILTINS.iter().find(|d| d.name == name)
    }

    /// Register a plugin under its descriptor's name.
    ///
    /// Built-ins always win a lookup, so a plugin cannot shadow `pretty` or
    /// `json`. Registering the same name twice replaces the first plugin.
    pub fn register_plugin(&mut self, descriptor: FormatterDescriptor) {
        if Self::lookup_builtin(&descriptor.name).is_some() {
            log::debug!(
                "Plugin {} is shadowed by the built-in formatter of the same name",
                descriptor.name
            );
        }
        log::trace!(
            "Registered formatter plugin {} ({:?})",
            descriptor.name,
            descriptor.accepted_shapes()
        );
        self.plugins.insert(descriptor.name.clone(), descriptor);
    }

    /// Register a plugin (builder pattern).
    pub fn with_plugin(mut self, descriptor: FormatterDescriptor) -> Self {
        self.register_plugin(descriptor);
        self
    }

    /// Look up a registered plugin by its fully-qualified name.
    pub fn get_plugin(&self, name: &str) -> Option<&FormatterDescriptor> {
        self.plugins.get(name)
    }

    /// Resolve a type token: built-ins first, then plugins.
    pub fn lookup(&self, name: &str) -> Option<&FormatterDescriptor> {
        match Self::lookup_builtin(name) {
            Some(builtin) => Some(builtin),
            None => self.get_plugin(name),
        }
    }

    /// Whether `name` resolves to anything.
    pub fn has_formatter(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Names of all registered plugins, sorted.
    pub fn plugin_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
