//! Validation run options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Options controlling a validation run: which files to visit and which
/// rules to skip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Glob patterns for files to validate. Empty means everything.
    #[serde(default)]
    pub include_patterns: Vec<String>,
    /// Glob patterns for files to skip.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Rule ids or aliases to disable, matched case-insensitively.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

impl ValidationOptions {
    /// Options that visit Markdown files only.
    pub fn markdown_only() -> Self {
        Self {
            include_patterns: vec!["**/*.md".to_string()],
            ..Self::default()
        }
    }

    /// Loads options from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|source| ValidationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ValidationError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_ignored(mut self, patterns: &[&str]) -> Self {
        self.ignore_patterns
            .extend(patterns.iter().map(|p| p.to_string()));
        self
    }

    pub fn with_disabled(mut self, rules: &[&str]) -> Self {
        self.disabled_rules
            .extend(rules.iter().map(|r| r.to_string()));
        self
    }
}
