//! `package.json`.
//!
//! Every dependency is pinned to `"*"`; the package manager resolves the
//! latest release at install time. Key order follows insertion order, which
//! is why the maps are `IndexMap`s.

use indexmap::IndexMap;
use serde::Serialize;

use super::pretty_json;
use crate::domain::{Artifact, Framework, Manifest, Styling};

const LATEST: &str = "*";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson<'a> {
    name: &'a str,
    version: &'static str,
    private: bool,
    #[serde(rename = "type")]
    module_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    scripts: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    dependencies: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    dev_dependencies: IndexMap<&'static str, &'static str>,
}

impl PackageJson<'_> {
    fn dep(&mut self, name: &'static str) {
        self.dependencies.insert(name, LATEST);
    }

    fn dev_dep(&mut self, name: &'static str) {
        self.dev_dependencies.insert(name, LATEST);
    }

    fn script(&mut self, name: &'static str, command: &'static str) {
        self.scripts.insert(name, command);
    }
}

pub fn generate(manifest: &Manifest) -> Option<Artifact> {
    let ts = manifest.is_typescript();
    let framework = manifest.framework();
    let bundled = framework.capabilities().has_build_pipeline;

    let mut pkg = PackageJson {
        name: manifest.name().as_str(),
        version: "0.1.0",
        private: true,
        module_type: "module",
        description: manifest.description(),
        scripts: IndexMap::new(),
        dependencies: IndexMap::new(),
        dev_dependencies: IndexMap::new(),
    };

    match framework {
        Framework::Next => {
            pkg.dep("next");
            pkg.dep("react");
            pkg.dep("react-dom");
            pkg.script("dev", "next dev --turbopack");
            pkg.script("build", "next build");
            pkg.script("start", "next start");
            if ts {
                pkg.dev_dep("typescript");
                pkg.dev_dep("@types/node");
                pkg.dev_dep("@types/react");
                pkg.dev_dep("@types/react-dom");
            }
        }
        Framework::React => {
            pkg.dep("react");
            pkg.dep("react-dom");
            pkg.dev_dep("vite");
            pkg.dev_dep("@vitejs/plugin-react");
            pkg.script("dev", "vite");
            pkg.script("build", "vite build");
            pkg.script("preview", "vite preview");
            if ts {
                pkg.dev_dep("typescript");
                pkg.dev_dep("@types/react");
                pkg.dev_dep("@types/react-dom");
            }
        }
        Framework::Node if ts => {
            pkg.script("dev", "tsx watch src/index.ts");
            pkg.script("build", "tsc");
            pkg.script("start", "node dist/index.js");
            pkg.dev_dep("typescript");
            pkg.dev_dep("tsx");
            pkg.dev_dep("@types/node");
        }
        Framework::Node => {
            pkg.script("dev", "node --watch src/index.js");
            pkg.script("build", "echo 'No build step for JS'");
            pkg.script("start", "node src/index.js");
        }
        Framework::Static => {
            pkg.script("dev", "npx live-server src");
            pkg.script("build", "echo 'No build step for static'");
        }
    }

    match manifest.styling() {
        Styling::Tailwind if bundled => {
            pkg.dev_dep("tailwindcss");
            pkg.dev_dep("@tailwindcss/postcss");
        }
        Styling::Scss | Styling::Sass if bundled => pkg.dev_dep("sass"),
        _ => {}
    }

    if manifest.lint() {
        pkg.dev_dep("eslint");
        pkg.script("lint", "eslint .");
        match framework {
            Framework::Next => {
                pkg.dev_dep("eslint-config-next");
                pkg.dev_dep("@eslint/eslintrc");
            }
            Framework::React => {
                pkg.dev_dep("@eslint/js");
                pkg.dev_dep("globals");
                pkg.dev_dep("eslint-plugin-react-hooks");
                pkg.dev_dep("eslint-plugin-react-refresh");
            }
            Framework::Node => pkg.dev_dep("@eslint/js"),
            Framework::Static => {}
        }
        if ts && bundled {
            pkg.dev_dep("@eslint/js");
            pkg.dev_dep("typescript-eslint");
        }
    }

    if manifest.prettier() {
        pkg.dev_dep("prettier");
        pkg.script("format", "prettier --write .");
        pkg.script("format:check", "prettier --check .");
    }

    Some(Artifact::new("package.json", pretty_json(&pkg)))
}
