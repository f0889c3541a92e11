//! Run-time graph configuration.
//!
//! The only run-time choice is which storage representation backs a
//! [`Graph`](crate::graph::Graph) and how many vertices to reserve room for.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage representation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Sparse adjacency lists.
    #[default]
    List,
    /// Dense adjacency matrix with a "no edge" sentinel.
    Matrix,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        })
    }
}

/// Error returned when a backend name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend `{0}`, expected `list` or `matrix`")]
pub struct ParseBackendKindError(String);

impl FromStr for BackendKind {
    type Err = ParseBackendKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "matrix" => Ok(Self::Matrix),
            _ => Err(ParseBackendKindError(s.to_owned())),
        }
    }
}

/// Construction parameters for a [`Graph`](crate::graph::Graph).
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Representation to build.
    pub backend: BackendKind,
    /// Vertices to reserve room for up front.
    pub capacity: usize,
}

impl GraphConfig {
    /// Default configuration on the given backend.
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Sets the reserved vertex capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Any `serde_json` error, including an unknown backend name.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration to JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
