//! Shared configuration loader for the cxt toolchain.
//!
//! `defaults/cxt.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CxtConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use cxt_babel::formats::html::HtmlOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/cxt.default.toml");

/// Top-level configuration consumed by cxt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CxtConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    pub title: String,
    /// Stylesheet path; empty when unset.
    pub custom_css: String,
}

impl HtmlConfig {
    pub fn css_path(&self) -> Option<&str> {
        Some(self.custom_css.as_str()).filter(|path| !path.is_empty())
    }
}

/// The stylesheet is not read here; callers pass [`HtmlConfig::css_path`]
/// to the html format as its `css-path` option.
impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            standalone: config.standalone,
            title: Some(config.title.clone()).filter(|t| !t.is_empty()),
            custom_css: None,
        }
    }
}

/// Controls tree dumps produced by `inspect`.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub tag: InspectTagConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectTagConfig {
    pub show_attrs: bool,
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

    /// Apply a single key/value override, e.g. `("convert.html.title", "Notes")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<CxtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CxtConfig, ConfigError> {
    Loader::new().build()
}
