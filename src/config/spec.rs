//! Formatter specifications: `<type>[:<destination>]`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A parsed formatter specification.
///
/// The type token names either a built-in formatter (`pretty`, `json`, ...)
/// or a plugin registered under its fully-qualified name. The destination is
/// everything after the first colon and may itself contain colons, so
/// `json:C:\reports\out.json` keeps the drive letter in the destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatterSpec {
    /// Formatter name
    pub type_token: String,
    /// Output path, if one was given
    pub destination: Option<String>,
}

impl FormatterSpec {
    /// Split a raw spec at its first colon.
    ///
    /// No validation happens here: an empty type token is reported later as an
    /// unknown formatter. An empty destination (`html:`) counts as none.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((type_token, destination)) => Self {
                type_token: type_token.to_string(),
                destination: Some(destination.to_string()).filter(|d| !d.is_empty()),
            },
            None => Self {
                type_token: raw.to_string(),
                destination: None,
            },
        }
    }

    /// Create a spec that writes to standard output (or needs no output).
    pub fn new(type_token: impl Into<String>) -> Self {
        Self {
            type_token: type_token.into(),
            destination: None,
        }
    }

    /// Set the destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Whether a destination was supplied.
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }
}

impl FromStr for FormatterSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FormatterSpec::parse(s))
    }
}

impl fmt::Display for FormatterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.destination {
            Some(dest) => write!(f, "{}:{}", self.type_token, dest),
            None => write!(f, "{}", self.type_token),
        }
    }
}
