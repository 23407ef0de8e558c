//! `kiln preview`: print the tree a manifest would produce, or one file.

use tracing::instrument;

use kiln_core::{
    application::generate_scaffold,
    domain::{Artifact, files_to_tree},
};

use crate::{
    cli::{GlobalArgs, PreviewArgs},
    commands::{prompt, resolve_manifest},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: PreviewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let interactive = prompt::is_interactive(global, output);
    let manifest = resolve_manifest(&args.manifest, config, interactive)?;
    let artifacts = generate_scaffold(&manifest)?;

    match args.show {
        Some(path) => {
            let artifact = lookup(&artifacts, &path)?;
            output.data(&artifact.content)?;
        }
        None => output.tree(manifest.name().as_str(), &files_to_tree(&artifacts))?,
    }
    Ok(())
}

/// Find the artifact at `path`, tolerating a leading `./`.
///
/// Shared with `inspect`, which looks entries up in an unpacked archive.
pub fn lookup<'a>(artifacts: &'a [Artifact], path: &str) -> CliResult<&'a Artifact> {
    let wanted = path.trim_start_matches("./");
    artifacts
        .iter()
        .find(|a| a.path.as_str() == wanted)
        .ok_or_else(|| CliError::FileNotFound {
            path: path.to_string(),
            available: artifacts.iter().map(|a| a.path.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Artifact> {
        vec![
            Artifact::new("package.json", "{}\n"),
            Artifact::new("src/main.js", "console.log(1);\n"),
        ]
    }

    #[test]
    fn lookup_accepts_dot_slash_prefix() {
        let files = sample();
        assert_eq!(lookup(&files, "./src/main.js").unwrap().content, "console.log(1);\n");
    }

    #[test]
    fn lookup_miss_lists_available_paths() {
        let err = lookup(&sample(), "src/nope.js").unwrap_err();
        match err {
            CliError::FileNotFound { path, available } => {
                assert_eq!(path, "src/nope.js");
                assert_eq!(available, ["package.json", "src/main.js"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lookup_miss_exits_not_found() {
        assert_eq!(lookup(&sample(), "x").unwrap_err().exit_code(), 3);
    }
}
