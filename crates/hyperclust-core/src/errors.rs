//! Structured error types shared across hyperclust crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HyperError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for hyperclust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HyperError {
    /// Hypergraph structural errors (unknown nodes or edges, empty hyperedges).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Neighborhood index errors.
    #[error("index error: {0}")]
    Index(ErrorInfo),
    /// Dataset loading errors.
    #[error("dataset error: {0}")]
    Dataset(ErrorInfo),
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HyperError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HyperError::Graph(info)
            | HyperError::Index(info)
            | HyperError::Dataset(info)
            | HyperError::Config(info)
            | HyperError::Serde(info) => info,
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a context entry to the payload, keeping the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            HyperError::Graph(info) => HyperError::Graph(info.with_context(key, value)),
            HyperError::Index(info) => HyperError::Index(info.with_context(key, value)),
            HyperError::Dataset(info) => HyperError::Dataset(info.with_context(key, value)),
            HyperError::Config(info) => HyperError::Config(info.with_context(key, value)),
            HyperError::Serde(info) => HyperError::Serde(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint to the payload, keeping the error family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            HyperError::Graph(info) => HyperError::Graph(info.with_hint(hint)),
            HyperError::Index(info) => HyperError::Index(info.with_hint(hint)),
            HyperError::Dataset(info) => HyperError::Dataset(info.with_hint(hint)),
            HyperError::Config(info) => HyperError::Config(info.with_hint(hint)),
            HyperError::Serde(info) => HyperError::Serde(info.with_hint(hint)),
        }
    }
}
