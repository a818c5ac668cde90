//! Shared configuration loader for mdsnip.
//!
//! `defaults/mdsnip.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. The CLI layers `mdsnip.toml`, an explicit `--config` file and its own flags on
//! top of those defaults via [`Loader`] before deserializing into [`SnipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdsnip_core::Strategy;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/mdsnip.default.toml");

/// Top-level configuration consumed by mdsnip.
#[derive(Debug, Clone, Deserialize)]
pub struct SnipConfig {
    pub materialize: MaterializeConfig,
    pub selector: SelectorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterializeConfig {
    /// Unknown names deserialize to [`Strategy::Substitute`].
    pub strategy: Strategy,
}

/// External picker invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    pub program: String,
    pub args: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub clipboard: bool,
    pub echo: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SnipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SnipConfig, ConfigError> {
    Loader::new().build()
}
