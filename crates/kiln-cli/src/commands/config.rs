//! `kiln config`: inspect the effective configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `kiln config get`.
pub const KEYS: &[&str] = &[
    "defaults.framework",
    "defaults.language",
    "defaults.styling",
    "defaults.package_manager",
    "defaults.lint",
    "defaults.prettier",
    "defaults.git",
    "output.no_color",
    "output.format",
    "output.directory",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Current Configuration:")?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let d = &config.defaults;
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    let value = match key {
        "defaults.framework" => opt(&d.framework),
        "defaults.language" => opt(&d.language),
        "defaults.styling" => opt(&d.styling),
        "defaults.package_manager" => opt(&d.package_manager),
        "defaults.lint" => d.lint.to_string(),
        "defaults.prettier" => d.prettier.to_string(),
        "defaults.git" => d.git.to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        "output.directory" => config
            .output
            .directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.language").unwrap(), "ts");
        assert_eq!(get_config_value(&cfg, "defaults.framework").unwrap(), "");
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "failed for: {key}");
        }
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
