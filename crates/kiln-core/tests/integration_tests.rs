//! Integration tests for kiln-core.
//!
//! These drive the public API only: manifest in, artifacts, tree and
//! archive out.

use std::collections::HashSet;
use std::sync::Mutex;

use kiln_core::{
    application::{DeliverySink, package, unpack},
    domain::{NodeKind, TreeNode, find_node, forest_file_count, render_tree},
    prelude::*,
};

fn all_manifests() -> Vec<Manifest> {
    let mut out = Vec::new();
    for framework in Framework::ALL {
        for language in Language::ALL {
            for styling in Styling::ALL {
                for package_manager in PackageManager::ALL {
                    for flags in 0u8..8 {
                        out.push(
                            Manifest::builder()
                                .framework(framework)
                                .language(language)
                                .styling(styling)
                                .package_manager(package_manager)
                                .name("demo")
                                .lint(flags & 1 != 0)
                                .prettier(flags & 2 != 0)
                                .git(flags & 4 != 0)
                                .build()
                                .unwrap(),
                        );
                    }
                }
            }
        }
    }
    out
}

fn paths(artifacts: &[Artifact]) -> Vec<&str> {
    artifacts.iter().map(|a| a.path.as_str()).collect()
}

fn content<'a>(artifacts: &'a [Artifact], path: &str) -> &'a str {
    artifacts
        .iter()
        .find(|a| a.path.as_str() == path)
        .map(|a| a.content.as_str())
        .unwrap_or_else(|| panic!("missing {path}"))
}

// ── Whole option space ───────────────────────────────────────────────────────

#[test]
fn option_space_has_expected_size() {
    assert_eq!(all_manifests().len(), 4 * 2 * 5 * 4 * 8);
}

#[test]
fn generation_is_deterministic_and_duplicate_free() {
    for manifest in all_manifests() {
        let first = generate_scaffold(&manifest).unwrap();
        let second = generate_scaffold(&manifest).unwrap();
        assert_eq!(first, second, "{manifest}");

        let unique: HashSet<_> = first.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(unique.len(), first.len(), "{manifest}");
        assert!(first.iter().any(|a| a.path.as_str() == "package.json"));
        assert!(first.iter().any(|a| a.path.as_str() == "README.md"));
    }
}

#[test]
fn tree_leaves_match_artifact_count() {
    for manifest in all_manifests() {
        let artifacts = generate_scaffold(&manifest).unwrap();
        let tree = files_to_tree(&artifacts);
        assert_eq!(forest_file_count(&tree), artifacts.len(), "{manifest}");
    }
}

#[test]
fn tree_ignores_input_order() {
    for manifest in all_manifests().into_iter().step_by(7) {
        let artifacts = generate_scaffold(&manifest).unwrap();
        let mut reversed = artifacts.clone();
        reversed.reverse();
        assert_eq!(files_to_tree(&artifacts), files_to_tree(&reversed));
    }
}

#[test]
fn every_generated_file_ends_with_newline() {
    for manifest in all_manifests().into_iter().step_by(3) {
        for artifact in generate_scaffold(&manifest).unwrap() {
            if artifact.is_empty() {
                continue;
            }
            assert!(
                artifact.content.ends_with('\n'),
                "{} for {manifest}",
                artifact.path
            );
        }
    }
}

// ── Toggles ──────────────────────────────────────────────────────────────────

fn react_ts() -> ManifestBuilder {
    Manifest::builder()
        .framework(Framework::React)
        .language(Language::Ts)
        .styling(Styling::Css)
        .package_manager(PackageManager::Yarn)
        .name("toggles")
}

#[test]
fn lint_toggle_controls_eslint_config_and_script() {
    let on = generate_scaffold(&react_ts().lint(true).build().unwrap()).unwrap();
    let off = generate_scaffold(&react_ts().lint(false).build().unwrap()).unwrap();

    assert!(paths(&on).contains(&"eslint.config.js"));
    assert!(!paths(&off).contains(&"eslint.config.js"));
    assert!(content(&on, "package.json").contains("\"lint\""));
    assert!(!content(&off, "package.json").contains("\"lint\""));
}

#[test]
fn prettier_toggle_controls_both_files() {
    let on = generate_scaffold(&react_ts().prettier(true).build().unwrap()).unwrap();
    let off = generate_scaffold(&react_ts().prettier(false).build().unwrap()).unwrap();

    for file in [".prettierrc", ".prettierignore"] {
        assert!(paths(&on).contains(&file));
        assert!(!paths(&off).contains(&file));
    }
}

#[test]
fn git_toggle_controls_gitignore() {
    let on = generate_scaffold(&react_ts().git(true).build().unwrap()).unwrap();
    let off = generate_scaffold(&react_ts().git(false).build().unwrap()).unwrap();
    assert!(paths(&on).contains(&".gitignore"));
    assert!(!paths(&off).contains(&".gitignore"));
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn node_typescript_with_tooling() {
    let manifest = Manifest::builder()
        .framework(Framework::Node)
        .language(Language::Ts)
        .styling(Styling::None)
        .package_manager(PackageManager::Npm)
        .name("demo")
        .lint(true)
        .prettier(true)
        .git(true)
        .build()
        .unwrap();
    let artifacts = generate_scaffold(&manifest).unwrap();

    let pkg: serde_json::Value = serde_json::from_str(content(&artifacts, "package.json")).unwrap();
    for script in ["dev", "build", "start"] {
        assert!(pkg["scripts"][script].is_string(), "script {script}");
    }
    assert!(pkg["devDependencies"]["typescript"].is_string());
    assert!(pkg["devDependencies"]["tsx"].is_string());

    assert!(content(&artifacts, "tsconfig.json").contains("NodeNext"));
    assert!(content(&artifacts, ".gitignore").contains("*.tsbuildinfo"));
    for file in [
        "eslint.config.js",
        ".prettierrc",
        ".prettierignore",
        "README.md",
        "src/index.ts",
        "src/lib/.gitkeep",
    ] {
        assert!(paths(&artifacts).contains(&file), "{file}");
    }
}

#[test]
fn bare_static_tailwind_site() {
    let manifest = Manifest::builder()
        .framework(Framework::Static)
        .language(Language::Js)
        .styling(Styling::Tailwind)
        .package_manager(PackageManager::Npm)
        .name("site")
        .lint(false)
        .prettier(false)
        .git(false)
        .build()
        .unwrap();
    let artifacts = generate_scaffold(&manifest).unwrap();
    let files = paths(&artifacts);

    for absent in [
        "tsconfig.json",
        "eslint.config.js",
        ".prettierrc",
        ".prettierignore",
        ".gitignore",
        "postcss.config.mjs",
    ] {
        assert!(!files.contains(&absent), "{absent}");
    }
    assert_eq!(
        files,
        [
            "package.json",
            "src/theme.css",
            "README.md",
            "src/index.html",
            "src/main.js",
            "src/styles.css",
        ]
    );
}

// ── Tree ─────────────────────────────────────────────────────────────────────

#[test]
fn tree_puts_folders_first_then_sorts_by_name() {
    let artifacts = vec![
        Artifact::new("b.txt", "b"),
        Artifact::new("src/z.ts", "z"),
        Artifact::new("a.txt", "a"),
        Artifact::new("lib/x.ts", "x"),
    ];
    let tree = files_to_tree(&artifacts);
    let names: Vec<_> = tree.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["lib", "src", "a.txt", "b.txt"]);
    assert_eq!(tree[0].kind, NodeKind::Folder);

    let leaf: &TreeNode = find_node(&tree, "src/z.ts").unwrap();
    assert_eq!(leaf.content.as_deref(), Some("z"));
}

#[test]
fn project_root_sorts_readme_among_lowercase_names() {
    let manifest = Manifest::builder()
        .framework(Framework::Node)
        .language(Language::Ts)
        .styling(Styling::None)
        .package_manager(PackageManager::Npm)
        .name("demo")
        .lint(true)
        .prettier(true)
        .build()
        .unwrap();
    let tree = files_to_tree(&generate_scaffold(&manifest).unwrap());
    let names: Vec<_> = tree.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "src",
            ".gitignore",
            ".prettierignore",
            ".prettierrc",
            "eslint.config.js",
            "package.json",
            "README.md",
            "tsconfig.json",
        ]
    );
}

#[test]
fn rendered_tree_lists_every_file() {
    let manifest = Manifest::builder()
        .framework(Framework::Next)
        .language(Language::Ts)
        .styling(Styling::Tailwind)
        .package_manager(PackageManager::Pnpm)
        .name("web")
        .build()
        .unwrap();
    let artifacts = generate_scaffold(&manifest).unwrap();
    let rendered = render_tree(&files_to_tree(&artifacts));

    for artifact in &artifacts {
        let name = artifact.path.file_name();
        assert!(rendered.contains(name), "{name}");
    }
    assert!(rendered.contains("app/"));
}

#[test]
fn tree_serializes_with_type_tag() {
    let tree = files_to_tree(&[Artifact::new("src/a.ts", "x")]);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json[0]["type"], "folder");
    assert_eq!(json[0]["children"][0]["type"], "file");
    assert_eq!(json[0]["children"][0]["content"], "x");
}

// ── Archive ──────────────────────────────────────────────────────────────────

#[test]
fn archive_round_trips_every_framework() {
    for framework in Framework::ALL {
        let manifest = Manifest::builder()
            .framework(framework)
            .language(Language::Ts)
            .styling(Styling::Scss)
            .package_manager(PackageManager::Bun)
            .name("round-trip")
            .lint(true)
            .prettier(true)
            .build()
            .unwrap();
        let artifacts = generate_scaffold(&manifest).unwrap();
        let bytes = package(&artifacts).unwrap();
        assert_eq!(unpack(&bytes).unwrap(), artifacts, "{framework}");
    }
}

#[derive(Default)]
struct RecordingSink {
    deliveries: Mutex<Vec<(String, Vec<u8>)>>,
}

impl DeliverySink for RecordingSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> KilnResult<()> {
        self.deliveries
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

#[tokio::test]
async fn delivery_hands_over_one_complete_archive() {
    let manifest = Manifest::builder()
        .framework(Framework::React)
        .language(Language::Js)
        .styling(Styling::Sass)
        .package_manager(PackageManager::Npm)
        .name("shipped")
        .build()
        .unwrap();
    let artifacts = generate_scaffold(&manifest).unwrap();
    let sink = RecordingSink::default();

    generate_and_deliver(&artifacts, &manifest, &sink)
        .await
        .unwrap();

    let deliveries = sink.deliveries.lock().unwrap();
    assert_eq!(deliveries.len(), 1);
    let (name, bytes) = &deliveries[0];
    assert_eq!(name, "shipped-scaffold.zip");
    assert_eq!(unpack(bytes).unwrap(), artifacts);
}

// ── Manifest interchange ─────────────────────────────────────────────────────

#[test]
fn manifest_json_round_trip_drives_same_output() {
    let manifest = Manifest::builder()
        .framework(Framework::Next)
        .language(Language::Js)
        .styling(Styling::Css)
        .package_manager(PackageManager::Yarn)
        .name("from-json")
        .description("Loaded from disk")
        .build()
        .unwrap();
    let json = serde_json::to_string(&manifest).unwrap();
    assert!(json.contains("\"packageManager\":\"yarn\""));

    let back: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(
        generate_scaffold(&back).unwrap(),
        generate_scaffold(&manifest).unwrap()
    );
}

#[test]
fn catalog_presets_all_generate() {
    for preset in kiln_core::domain::TEMPLATE_CATALOG {
        let manifest = preset.manifest("preset-check", None).unwrap();
        assert!(!generate_scaffold(&manifest).unwrap().is_empty(), "{}", preset.id);
    }
}
