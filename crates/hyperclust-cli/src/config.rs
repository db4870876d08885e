use std::fs;
use std::path::Path;

use clap::ValueEnum;
use hyperclust_core::errors::{ErrorInfo, HyperError};
use serde::{Deserialize, Serialize};

/// Serialization format used for emitted reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty printed JSON document.
    #[default]
    Json,
    /// One CSV row per node or hyperedge.
    Csv,
}

/// Options shared by every analysis command.
///
/// Loaded from YAML; flags given on the command line take precedence.
///
/// ```yaml
/// name: email-Enron
/// nodes: [1, 4, 17]
/// format: csv
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Dataset file prefix; defaults to the dataset directory name.
    pub name: Option<String>,
    /// Nodes to report clustering for; empty means every node.
    pub nodes: Vec<u64>,
    /// Report format.
    pub format: OutputFormat,
}

impl AnalysisConfig {
    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, HyperError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            HyperError::Config(
                ErrorInfo::new("io", err.to_string()).with_context("path", path.display()),
            )
        })?;
        Self::from_yaml(&contents).map_err(|err| err.with_context("path", path.display()))
    }

    /// Parses a YAML configuration document.
    pub fn from_yaml(contents: &str) -> Result<Self, HyperError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|err| {
            HyperError::Config(
                ErrorInfo::new("invalid-config", err.to_string())
                    .with_hint("known keys are name, nodes and format"),
            )
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, HyperError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command line flags on top of the file values.
    pub fn apply_overrides(
        &mut self,
        name: Option<&str>,
        nodes: &[u64],
        format: Option<OutputFormat>,
    ) {
        if let Some(name) = name {
            self.name = Some(name.to_string());
        }
        if !nodes.is_empty() {
            self.nodes = nodes.to_vec();
        }
        if let Some(format) = format {
            self.format = format;
        }
    }
}
