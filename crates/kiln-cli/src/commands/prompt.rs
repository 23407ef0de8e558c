//! Interactive prompts.
//!
//! Only reached when both stdin and stderr are terminals. With the
//! `interactive` feature the prompts use `dialoguer`; without it missing
//! choices are reported as errors and confirmation falls back to a plain
//! `[Y/n]` line.

use std::io::{self, IsTerminal};

use kiln_core::domain::RawManifest;

use crate::{cli::GlobalArgs, error::CliResult, output::OutputManager};

/// Whether prompting makes sense for this invocation.
pub fn is_interactive(global: &GlobalArgs, output: &OutputManager) -> bool {
    !global.quiet
        && !output.is_machine_readable()
        && io::stdin().is_terminal()
        && io::stderr().is_terminal()
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, FuzzySelect, Input, theme::ColorfulTheme};
    use kiln_core::domain::{FRAMEWORK_REGISTRY, ProjectName, RawManifest};

    use crate::error::{CliError, CliResult};

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        std::io::Error::other(e).into()
    }

    pub fn fill_missing(raw: &mut RawManifest) -> CliResult<()> {
        let theme = ColorfulTheme::default();

        if raw.framework.is_none() {
            let labels: Vec<String> = FRAMEWORK_REGISTRY
                .iter()
                .map(|def| format!("{:<10} {}", def.display_name, def.description))
                .collect();

            let choice = FuzzySelect::with_theme(&theme)
                .with_prompt("Framework")
                .items(labels.as_slice())
                .default(0)
                .interact_opt()
                .map_err(prompt_failed)?
                .ok_or(CliError::Cancelled)?;

            raw.framework = Some(FRAMEWORK_REGISTRY[choice].framework.to_string());
        }

        if raw.name.is_none() {
            let name: String = Input::with_theme(&theme)
                .with_prompt("Project name")
                .validate_with(|input: &String| {
                    ProjectName::parse(input.as_str())
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_failed)?;

            raw.name = Some(name);
        }

        Ok(())
    }

    pub fn confirm(prompt: &str) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(prompt_failed)
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use std::io::{self, Write};

    use kiln_core::domain::RawManifest;

    use crate::error::{CliError, CliResult, IntoCli};

    pub fn fill_missing(raw: &mut RawManifest) -> CliResult<()> {
        if raw.framework.is_none() || raw.name.is_none() {
            return Err(CliError::FeatureNotAvailable {
                feature: "interactive",
            });
        }
        Ok(())
    }

    pub fn confirm(prompt: &str) -> CliResult<bool> {
        eprint!("{prompt} [Y/n] ");
        io::stderr()
            .flush()
            .with_cli_context(|| "failed to flush stderr")?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .with_cli_context(|| "failed to read confirmation input")?;

        let input = input.trim().to_ascii_lowercase();
        Ok(input.is_empty() || input == "y" || input == "yes")
    }
}

/// Ask for the framework and name if no layer supplied them.
pub fn fill_missing(raw: &mut RawManifest) -> CliResult<()> {
    imp::fill_missing(raw)
}

/// Yes/no question defaulting to yes.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    imp::confirm(prompt)
}

/// Aligned `label: value` block printed before asking to proceed.
pub fn show_summary(output: &OutputManager, rows: &[(&str, String)]) -> CliResult<()> {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    output.header("Configuration")?;
    for (label, value) in rows {
        output.field(label, value, width)?;
    }
    output.print("")?;
    Ok(())
}
