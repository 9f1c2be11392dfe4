//! Configuration for Cadastro
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{CadastroError, Result};

/// Backing file used when none is configured
pub const DEFAULT_DATA_FILE: &str = "alunos_cadastrados.csv";

/// Main configuration for a Cadastro session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// CSV file holding the whole roster.
    /// Rewritten from scratch after every mutation.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Consecutive invalid answers tolerated at a single prompt.
    /// `None` keeps asking forever.
    pub max_retries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_retries: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values that can never work
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CadastroError::Config("data file path is empty".to_string()));
        }
        if self.max_retries == Some(0) {
            return Err(CadastroError::Config(
                "max retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing CSV file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Cap the number of invalid answers per prompt
    pub fn max_retries(mut self, retries: Option<usize>) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
