//! Oracle configuration: which diagnostic facets to emit.
//!
//! The boolean completeness result is always computed; facets only control
//! how much the oracle logs about a mismatch. An absent facet means
//! "disabled", never an error.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A category of diagnostic output the oracle can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFacet {
    /// Print the one-sided diff partitions when an assertion set mismatches.
    ComparedResults,
    /// Print derived-set sizes after computation.
    Statistics,
}

/// Configuration for the completeness oracle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Enabled diagnostic facets. Empty by default: queries stay cheap and
    /// silent unless an operator opts in.
    #[serde(default)]
    pub log_facets: HashSet<LogFacet>,
}

impl OracleConfig {
    /// Create a config with no facets enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a diagnostic facet.
    pub fn with_facet(mut self, facet: LogFacet) -> Self {
        self.log_facets.insert(facet);
        self
    }

    /// Whether a facet is enabled.
    pub fn enabled(&self, facet: LogFacet) -> bool {
        self.log_facets.contains(&facet)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|source| ConfigError::Parse { source })
    }

    /// Load a config from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&input)
    }
}
