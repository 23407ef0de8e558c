//! Built-in template catalog.
//!
//! A preset is a named, pre-filled manifest minus the project name. The CLI
//! lists these with `kiln templates` and applies one with
//! `kiln new <name> --template <id>`; explicit flags still override whatever
//! the preset chose.

use serde::Serialize;

use crate::domain::{
    entities::manifest::{Manifest, ManifestBuilder},
    error::DomainError,
    value_objects::{Framework, Language, PackageManager, Styling},
};

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub framework: Framework,
    pub language: Language,
    pub styling: Styling,
    pub package_manager: PackageManager,
    pub lint: bool,
    pub prettier: bool,
    pub git: bool,
    pub tags: &'static [&'static str],
    pub popular: bool,
}

impl TemplatePreset {
    /// Builder pre-filled with every option of this preset, name unset.
    pub fn builder(&self) -> ManifestBuilder {
        Manifest::builder()
            .framework(self.framework)
            .language(self.language)
            .styling(self.styling)
            .package_manager(self.package_manager)
            .lint(self.lint)
            .prettier(self.prettier)
            .git(self.git)
    }

    /// Complete manifest for a project called `name`.
    pub fn manifest(
        &self,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Result<Manifest, DomainError> {
        let mut builder = self.builder().name(name);
        if let Some(description) = description {
            builder = builder.description(description);
        }
        builder.build()
    }
}

pub static TEMPLATE_CATALOG: &[TemplatePreset] = &[
    TemplatePreset {
        id: "next-ts-tailwind",
        name: "Next.js + TypeScript + Tailwind",
        description: "Production-ready Next.js starter with TypeScript and Tailwind CSS",
        framework: Framework::Next,
        language: Language::Ts,
        styling: Styling::Tailwind,
        package_manager: PackageManager::Npm,
        lint: true,
        prettier: true,
        git: true,
        tags: &["React", "TypeScript", "Tailwind", "ESLint", "Prettier"],
        popular: true,
    },
    TemplatePreset {
        id: "next-js-minimal",
        name: "Next.js Minimal",
        description: "Lightweight Next.js project with JavaScript, no extras",
        framework: Framework::Next,
        language: Language::Js,
        styling: Styling::Css,
        package_manager: PackageManager::Npm,
        lint: false,
        prettier: false,
        git: true,
        tags: &["React", "JavaScript", "Minimal"],
        popular: false,
    },
    TemplatePreset {
        id: "react-vite-ts",
        name: "React + Vite + TypeScript",
        description: "Fast React development with Vite and TypeScript",
        framework: Framework::React,
        language: Language::Ts,
        styling: Styling::Tailwind,
        package_manager: PackageManager::Pnpm,
        lint: true,
        prettier: true,
        git: true,
        tags: &["React", "Vite", "TypeScript", "Tailwind"],
        popular: true,
    },
    TemplatePreset {
        id: "react-vite-sass",
        name: "React + Vite + SCSS",
        description: "React with Vite bundler and SCSS styling",
        framework: Framework::React,
        language: Language::Ts,
        styling: Styling::Scss,
        package_manager: PackageManager::Npm,
        lint: true,
        prettier: true,
        git: true,
        tags: &["React", "Vite", "SCSS", "TypeScript"],
        popular: false,
    },
    TemplatePreset {
        id: "node-ts-api",
        name: "Node.js TypeScript API",
        description: "Backend Node.js project with TypeScript",
        framework: Framework::Node,
        language: Language::Ts,
        styling: Styling::None,
        package_manager: PackageManager::Npm,
        lint: true,
        prettier: true,
        git: true,
        tags: &["Node.js", "TypeScript", "Backend", "API"],
        popular: false,
    },
    TemplatePreset {
        id: "node-js-minimal",
        name: "Node.js Minimal",
        description: "Simple Node.js project with JavaScript",
        framework: Framework::Node,
        language: Language::Js,
        styling: Styling::None,
        package_manager: PackageManager::Npm,
        lint: false,
        prettier: false,
        git: true,
        tags: &["Node.js", "JavaScript", "Minimal"],
        popular: false,
    },
    TemplatePreset {
        id: "static-landing",
        name: "Static Landing Page",
        description: "Simple HTML/CSS/JS landing page",
        framework: Framework::Static,
        language: Language::Js,
        styling: Styling::Css,
        package_manager: PackageManager::Npm,
        lint: false,
        prettier: false,
        git: true,
        tags: &["HTML", "CSS", "JavaScript", "Landing Page"],
        popular: false,
    },
    TemplatePreset {
        id: "static-tailwind",
        name: "Static + Tailwind (CDN)",
        description: "Static HTML with Tailwind CSS via CDN",
        framework: Framework::Static,
        language: Language::Js,
        styling: Styling::Tailwind,
        package_manager: PackageManager::Npm,
        lint: false,
        prettier: false,
        git: true,
        tags: &["HTML", "Tailwind", "CDN"],
        popular: false,
    },
];

/// Look a preset up by id (case-insensitive).
pub fn find_template(id: &str) -> Result<&'static TemplatePreset, DomainError> {
    TEMPLATE_CATALOG
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| DomainError::UnknownTemplate { id: id.to_string() })
}

/// Presets for one framework, catalog order.
pub fn templates_for(framework: Framework) -> impl Iterator<Item = &'static TemplatePreset> {
    TEMPLATE_CATALOG
        .iter()
        .filter(move |t| t.framework == framework)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = TEMPLATE_CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATE_CATALOG.len());
        assert_eq!(TEMPLATE_CATALOG.len(), 8);
    }

    #[test]
    fn every_preset_builds_a_manifest() {
        for preset in TEMPLATE_CATALOG {
            let m = preset.manifest("my-app", None).unwrap();
            assert_eq!(m.framework(), preset.framework);
            assert_eq!(m.lint(), preset.lint);
            assert_eq!(m.name().as_str(), "my-app");
        }
    }

    #[test]
    fn find_template_is_case_insensitive() {
        assert_eq!(find_template("Node-TS-API").unwrap().id, "node-ts-api");
        assert!(matches!(
            find_template("rails"),
            Err(DomainError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn templates_for_filters_by_framework() {
        let ids: Vec<_> = templates_for(Framework::Static).map(|t| t.id).collect();
        assert_eq!(ids, ["static-landing", "static-tailwind"]);
    }

    #[test]
    fn preset_builder_leaves_name_open() {
        let err = find_template("react-vite-ts")
            .unwrap()
            .builder()
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "name" });
    }
}
