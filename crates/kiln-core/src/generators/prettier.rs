//! `.prettierrc` and `.prettierignore`.

use serde_json::json;

use super::{lines_to_file, pretty_json};
use crate::domain::{Artifact, Manifest, PackageManager};

pub fn generate_config(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.prettier() {
        return None;
    }

    let config = json!({
        "semi": true,
        "singleQuote": true,
        "tabWidth": 2,
        "trailingComma": "es5",
        "printWidth": 100,
        "bracketSpacing": true,
        "arrowParens": "avoid",
        "endOfLine": "lf"
    });

    Some(Artifact::new(".prettierrc", pretty_json(&config)))
}

pub fn generate_ignore(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.prettier() {
        return None;
    }

    let mut lines = vec!["# Dependencies", "node_modules", "", "# Build outputs"];
    lines.extend(manifest.framework().capabilities().build_outputs);
    lines.extend(["", "# Misc", "*.min.js", "*.min.css"]);
    lines.extend(PackageManager::ALL.iter().map(PackageManager::lockfile));

    Some(Artifact::new(".prettierignore", lines_to_file(&lines)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Framework, Language, Styling};
    use crate::generators::test_support::{all_manifests, manifest};

    #[test]
    fn emitted_iff_prettier() {
        for m in all_manifests() {
            assert_eq!(generate_config(&m).is_some(), m.prettier());
            assert_eq!(generate_ignore(&m).is_some(), m.prettier());
        }
    }

    #[test]
    fn config_has_fixed_preferences() {
        let m = manifest(Framework::Node, Language::Js, Styling::None)
            .prettier(true)
            .build()
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&generate_config(&m).unwrap().content).unwrap();
        assert_eq!(json["singleQuote"], true);
        assert_eq!(json["printWidth"], 100);
        assert_eq!(json["trailingComma"], "es5");
        assert_eq!(json["endOfLine"], "lf");
    }

    #[test]
    fn ignore_lists_build_outputs_and_lockfiles() {
        let m = manifest(Framework::Next, Language::Ts, Styling::None)
            .prettier(true)
            .build()
            .unwrap();
        let content = generate_ignore(&m).unwrap().content;
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "# Dependencies",
                "node_modules",
                "",
                "# Build outputs",
                ".next",
                "out",
                "",
                "# Misc",
                "*.min.js",
                "*.min.css",
                "package-lock.json",
                "yarn.lock",
                "pnpm-lock.yaml",
                "bun.lockb",
            ]
        );
    }

    #[test]
    fn static_has_no_formatter_build_outputs() {
        let m = manifest(Framework::Static, Language::Js, Styling::Css)
            .prettier(true)
            .build()
            .unwrap();
        let content = generate_ignore(&m).unwrap().content;
        assert!(content.contains("# Build outputs\n\n# Misc"));
    }
}
