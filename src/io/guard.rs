//! Per-factory ownership of standard output.

use crate::error::ConfigurationError;

/// Tracks whether standard output has been handed to a formatter.
///
/// One guard lives in each [`FormatterFactory`](crate::FormatterFactory), so
/// independent factories never see each other's bindings.
#[derive(Debug, Clone, Default)]
pub struct StdoutGuard {
    bound_count: usize,
    bound_spec: Option<String>,
}

impl StdoutGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim standard output for `spec`.
    ///
    /// Fails once anything holds it, whoever asks. State only changes on
    /// success.
    pub fn bind(&mut self, spec: &str) -> Result<(), ConfigurationError> {
        if self.bound_count > 0 {
            return Err(ConfigurationError::StdoutInUse {
                bound_spec: self.bound_spec.clone(),
            });
        }
        self.bound_count += 1;
        self.bound_spec = Some(spec.to_string());
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.bound_count > 0
    }

    pub fn bound_count(&self) -> usize {
        self.bound_count
    }

    /// The spec that holds standard output.
    pub fn bound_spec(&self) -> Option<&str> {
        self.bound_spec.as_deref()
    }
}
