//! Configuration for weave: logging level, script indentation and the layout
//! of an exported project.
//!
//! Layers, lowest first: the embedded `defaults/weave.default.toml`, one user
//! TOML file (`--config`, or `./weave.toml` when it exists), then single keys
//! set from command-line flags such as `--log-level`. [`Loader`] stacks the
//! layers and deserializes the result into [`WeaveConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use ::config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/weave.default.toml");

/// Top-level configuration consumed by the library and the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaveConfig {
    pub logging: LoggingConfig,
    pub emit: EmitConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` filter directive, e.g. `warn` or `weave=debug`
    pub level: String,
}

/// Script emission knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitConfig {
    /// One level of indentation in generated scripts
    pub indent: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// Layout of an exported project, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    pub scripts_dir: String,
    pub autoloads_dir: String,
    pub manifest: String,
    /// `[autoload]` fragment listing the global classes, written only
    /// when the project has one
    pub autoload_registry: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scripts_dir: "scripts".to_string(),
            autoloads_dir: "autoloads".to_string(),
            manifest: "weave_setup.json".to_string(),
            autoload_registry: "project_autoloads.cfg".to_string(),
        }
    }
}

/// Stacks weave's configuration layers; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults, so every key in [`WeaveConfig`] is set.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// A file the user named explicitly; [`Loader::build`] fails if it is missing.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// A file picked up by convention, such as `./weave.toml`. Skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key above every file layer, e.g. `logging.level`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<WeaveConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration with no user layers.
pub fn load_defaults() -> Result<WeaveConfig, ConfigError> {
    Loader::new().build()
}
