//! Shared configuration loader for the header generator.
//!
//! `defaults/execctx.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer
//! project-specific files and command-line overrides on top of those defaults
//! via [`Loader`] before deserializing into [`GeneratorConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/execctx.default.toml");

/// Top-level configuration consumed by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub paths: PathsConfig,
    pub pointers: PointersConfig,
    pub banner: BannerConfig,
}

/// Source header and generated header locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointersConfig {
    pub destination_type: String,
}

/// Copyright banner fields. `year` pins the end of the range.
#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    pub holder: String,
    pub first_year: i32,
    pub license: String,
    #[serde(default)]
    pub year: Option<i32>,
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

    /// Apply a single key/value override (used for command-line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Like [`Loader::set_override`], but a `None` leaves the key untouched.
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
