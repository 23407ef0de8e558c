//! Template Service - catalog queries.
//!
//! Turns the static preset catalog into display DTOs and resolves presets
//! by id. Separated from the scaffold workflow for single responsibility.

use serde::Serialize;

use crate::{
    domain::{Framework, TEMPLATE_CATALOG, TemplatePreset, find_template},
    error::KilnResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub framework: String,
    pub language: String,
    pub styling: String,
    pub package_manager: String,
    pub tooling: Vec<String>,
    pub tags: Vec<String>,
    pub popular: bool,
}

impl From<&TemplatePreset> for TemplateInfo {
    fn from(t: &TemplatePreset) -> Self {
        let tooling = [("eslint", t.lint), ("prettier", t.prettier), ("git", t.git)]
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.to_string())
            .collect();

        Self {
            id: t.id.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            framework: t.framework.to_string(),
            language: t.language.to_string(),
            styling: t.styling.to_string(),
            package_manager: t.package_manager.to_string(),
            tooling,
            tags: t.tags.iter().map(|s| s.to_string()).collect(),
            popular: t.popular,
        }
    }
}

/// Service for catalog operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateService;

impl TemplateService {
    pub fn new() -> Self {
        Self
    }

    /// All presets, optionally narrowed to one framework, popular first.
    pub fn list(&self, framework: Option<Framework>) -> Vec<TemplateInfo> {
        let mut presets: Vec<&TemplatePreset> = TEMPLATE_CATALOG
            .iter()
            .filter(|t| framework.is_none_or(|fw| t.framework == fw))
            .collect();
        presets.sort_by_key(|t| !t.popular);
        presets.into_iter().map(TemplateInfo::from).collect()
    }

    /// Resolve a preset by id.
    pub fn get(&self, id: &str) -> KilnResult<&'static TemplatePreset> {
        Ok(find_template(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_puts_popular_first() {
        let all = TemplateService::new().list(None);
        assert_eq!(all.len(), TEMPLATE_CATALOG.len());
        assert!(all[0].popular && all[1].popular);
        assert!(!all[2].popular);
    }

    #[test]
    fn list_filters_by_framework() {
        let node = TemplateService::new().list(Some(Framework::Node));
        assert!(node.iter().all(|t| t.framework == "node"));
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn info_lists_enabled_tooling() {
        let info = TemplateInfo::from(find_template("node-js-minimal").unwrap());
        assert_eq!(info.tooling, ["git"]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(TemplateService::new().get("nope").is_err());
    }
}
