//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KILN_DEFAULTS__FRAMEWORK=next`,
//!    `KILN_OUTPUT__NO_COLOR=true`, ...
//! 3. `--config <FILE>` (or `KILN_CONFIG`), which must exist
//! 4. `.kiln.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use kiln_core::domain::RawManifest;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name of a project-local config.
pub const LOCAL_CONFIG_FILE: &str = ".kiln.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Fallback manifest choices. Anything left `None` must come from a flag,
/// a template, a manifest file or the interactive prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub framework: Option<String>,
    pub language: Option<String>,
    pub styling: Option<String>,
    pub package_manager: Option<String>,
    pub lint: bool,
    pub prettier: bool,
    pub git: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
    /// Where `kiln new` writes unless `--output` is given.
    pub directory: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                framework: None,
                language: Some("ts".into()),
                styling: Some("tailwind".into()),
                package_manager: Some("npm".into()),
                lint: true,
                prettier: true,
                git: true,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
                directory: None,
            },
        }
    }
}

impl Defaults {
    /// The defaults as the lowest-priority manifest layer.
    pub fn as_raw_manifest(&self) -> RawManifest {
        RawManifest {
            framework: self.framework.clone(),
            language: self.language.clone(),
            styling: self.styling.clone(),
            package_manager: self.package_manager.clone(),
            lint: Some(self.lint),
            prettier: Some(self.prettier),
            git: Some(self.git),
            ..RawManifest::default()
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("serialising defaults")?)
            .add_source(toml_file(&Self::config_path(), false))
            .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE), false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(toml_file(path, true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("KILN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration sources")?;

        config
            .try_deserialize()
            .context("configuration has an unexpected shape")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `kiln config path` reports: the explicit one if given, else
    /// a local `.kiln.toml` if present, else the user file.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn toml_file(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}
