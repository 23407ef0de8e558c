//! `README.md`.
//!
//! Summarises every resolved choice and spells out the commands for the
//! selected package manager. The structure sketch is rendered from the other
//! generators' actual output, so it never drifts from the archive contents.

use std::fmt::Write as _;

use super::GENERATOR_REGISTRY;
use crate::domain::{Artifact, Framework, Language, Manifest, files_to_tree, render_tree};

const SELF_NAME: &str = "readme";
const PATH: &str = "README.md";

pub fn generate(manifest: &Manifest) -> Option<Artifact> {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_readme(manifest, &mut out);
    Some(Artifact::new(PATH, out))
}

fn write_readme(m: &Manifest, out: &mut String) -> std::fmt::Result {
    let pm = m.package_manager();
    let framework = m.framework();

    writeln!(out, "# {}\n", m.name())?;
    match m.description() {
        Some(description) => writeln!(out, "{description}\n")?,
        None => writeln!(
            out,
            "A {} project generated with Kiln.\n",
            framework.display_name()
        )?,
    }

    writeln!(out, "## Tech Stack\n")?;
    writeln!(out, "- **Framework**: {}", framework.display_name())?;
    writeln!(out, "- **Language**: {}", written_language(m).display_name())?;
    if m.styling().is_enabled() {
        writeln!(out, "- **Styling**: {}", m.styling().display_name())?;
    }
    if m.lint() {
        writeln!(out, "- **Linting**: ESLint")?;
    }
    if m.prettier() {
        writeln!(out, "- **Formatting**: Prettier")?;
    }
    writeln!(out, "- **Package manager**: {pm}")?;

    writeln!(out, "\n## Getting Started\n")?;
    writeln!(out, "### Prerequisites\n")?;
    writeln!(out, "- Node.js 20+")?;
    writeln!(out, "- {pm}\n")?;

    writeln!(out, "### Installation\n")?;
    code_block(out, pm.install_command())?;
    writeln!(
        out,
        "> Every dependency is declared as `\"*\"`, so the install resolves the latest"
    )?;
    writeln!(
        out,
        "> releases. Commit `{}` afterwards to pin them.\n",
        pm.lockfile()
    )?;

    writeln!(out, "### Development\n")?;
    code_block(out, &pm.run_command("dev"))?;

    for (title, script) in scripts_for(m) {
        writeln!(out, "### {title}\n")?;
        code_block(out, &pm.run_command(script))?;
    }

    writeln!(out, "## Project Structure\n")?;
    writeln!(out, "```")?;
    writeln!(out, "{}/", m.name())?;
    out.push_str(&structure_sketch(m));
    writeln!(out, "```\n")?;

    writeln!(out, "## License\n")?;
    writeln!(out, "MIT\n")?;
    writeln!(out, "---\n")?;
    writeln!(out, "Generated with Kiln")
}

/// The language the generated sources are actually written in. Static sites
/// ship plain JavaScript whatever the manifest asked for.
fn written_language(m: &Manifest) -> Language {
    match m.framework() {
        Framework::Static => Language::Js,
        _ => m.language(),
    }
}

/// Documented scripts beyond `dev`, in `package.json` order.
fn scripts_for(m: &Manifest) -> Vec<(&'static str, &'static str)> {
    let mut scripts = match m.framework() {
        Framework::Next => vec![
            ("Build for Production", "build"),
            ("Start Production Server", "start"),
        ],
        Framework::React => vec![
            ("Build for Production", "build"),
            ("Preview Production Build", "preview"),
        ],
        Framework::Node if m.is_typescript() => {
            vec![("Build", "build"), ("Start", "start")]
        }
        Framework::Node => vec![("Start", "start")],
        Framework::Static => Vec::new(),
    };
    if m.lint() {
        scripts.push(("Lint", "lint"));
    }
    if m.prettier() {
        scripts.push(("Format Code", "format"));
    }
    scripts
}

fn code_block(out: &mut String, command: &str) -> std::fmt::Result {
    writeln!(out, "```bash\n{command}\n```\n")
}

fn structure_sketch(m: &Manifest) -> String {
    let mut artifacts: Vec<Artifact> = GENERATOR_REGISTRY
        .iter()
        .filter(|entry| entry.name != SELF_NAME)
        .flat_map(|entry| entry.generate(m))
        .collect();
    artifacts.push(Artifact::new(PATH, ""));
    render_tree(&files_to_tree(&artifacts))
}
