//! `.gitignore`.

use super::lines_to_file;
use crate::domain::{Artifact, Framework, Manifest};

const HEAD: &[&str] = &[
    "# Dependencies",
    "node_modules",
    ".pnp",
    ".pnp.js",
    "",
    "# Testing",
    "coverage",
    "",
    "# Build outputs",
];

const TAIL: &[&str] = &[
    "",
    "# Misc",
    ".DS_Store",
    "*.pem",
    "",
    "# Debug",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    "",
    "# Local env files",
    ".env*.local",
    ".env",
    "",
    "# IDE",
    ".vscode/",
    ".idea/",
    "*.swp",
    "*.swo",
];

pub fn generate(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.git() {
        return None;
    }

    let def = manifest.framework().capabilities();
    let mut lines: Vec<String> = HEAD.iter().map(|l| l.to_string()).collect();
    lines.extend(
        def.build_outputs
            .iter()
            .chain(def.vcs_only_outputs)
            .map(|dir| format!("{dir}/")),
    );
    lines.extend(TAIL.iter().map(|l| l.to_string()));

    if manifest.is_typescript() {
        lines.extend(["".into(), "# TypeScript".into(), "*.tsbuildinfo".into()]);
        if manifest.framework() == Framework::Next {
            lines.push("next-env.d.ts".into());
        }
    }

    Some(Artifact::new(".gitignore", lines_to_file(&lines)))
}
