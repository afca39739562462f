use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::NormalizeRules;
use crate::table::GeneticCode;
use crate::translate::UnknownCodonPolicy;

/// NCBI table used when nothing else is configured.
pub const DEFAULT_TABLE: u8 = 1;

fn default_table() -> u8 {
    DEFAULT_TABLE
}

///
/// Settings for one translation run.
///
/// ```toml
/// table = 11
/// unknown = "mark"
///
/// [rules]
/// substitutions = [{ from = "T", to = "U" }]
/// removals = [" ", "\n", "\r", "-"]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    #[serde(default = "default_table")]
    pub table: u8,
    #[serde(default)]
    pub unknown: UnknownCodonPolicy,
    #[serde(default)]
    pub rules: NormalizeRules,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        TranslateConfig {
            table: DEFAULT_TABLE,
            unknown: UnknownCodonPolicy::default(),
            rules: NormalizeRules::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported genetic code {0}, expected one of 1, 2, 3, 4, 5, 6 or 11")]
    UnsupportedTable(u8),
    #[error("Invalid normalization rules: {0}")]
    InvalidRules(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{}", .0.message())]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TranslateConfig {
    ///
    /// Resolve the configured table id to a built-in genetic code.
    ///
    pub fn genetic_code(&self) -> ConfigResult<GeneticCode> {
        GeneticCode::from_id(self.table).ok_or(ConfigError::UnsupportedTable(self.table))
    }

    ///
    /// Check the table id and the normalization rules.
    ///
    pub fn validate(&self) -> ConfigResult<()> {
        self.genetic_code()?;
        self.rules
            .validate()
            .map_err(|e| ConfigError::InvalidRules(e.to_string()))
    }
}

impl TryFrom<&Path> for TranslateConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: TranslateConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
