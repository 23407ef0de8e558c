//! Hierarchical view over a flat artifact list.
//!
//! The tree is derived on demand and never stored. Building it twice from the
//! same artifacts, in any order, yields the same forest.

use std::cmp::Ordering;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::entities::artifact::Artifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One node of the derived tree.
///
/// Files carry `content`, folders carry `children`. Serialises the same way a
/// front-end file tree expects: absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            content: Some(content.into()),
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            content: None,
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Number of file leaves at or below this node.
    pub fn file_count(&self) -> usize {
        match self.kind {
            NodeKind::File => 1,
            NodeKind::Folder => self.children.iter().map(TreeNode::file_count).sum(),
        }
    }

    /// Folders before files, then by name ignoring case. Names equal up to
    /// case fall back to byte order.
    fn sibling_order(a: &TreeNode, b: &TreeNode) -> Ordering {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// Build a sorted forest from a flat artifact list.
///
/// Intermediate folders are created on first use and reused afterwards. When
/// a path would descend through an existing file, or names an existing leaf,
/// the first entry wins and the later artifact is skipped; the orchestrator
/// never produces such lists.
pub fn files_to_tree(artifacts: &[Artifact]) -> Vec<TreeNode> {
    let mut root: Vec<TreeNode> = Vec::new();

    'artifacts: for artifact in artifacts {
        let segments: Vec<&str> = artifact.path.segments().collect();
        let Some((leaf, dirs)) = segments.split_last() else {
            continue;
        };

        let mut level = &mut root;
        for dir in dirs {
            let idx = match level.iter().position(|n| n.name == *dir) {
                Some(idx) if level[idx].is_folder() => idx,
                Some(_) => continue 'artifacts,
                None => {
                    level.push(TreeNode::folder(*dir));
                    level.len() - 1
                }
            };
            level = &mut level[idx].children;
        }

        if level.iter().all(|n| n.name != *leaf) {
            level.push(TreeNode::file(*leaf, artifact.content.clone()));
        }
    }

    sort_forest(&mut root);
    root
}

fn sort_forest(nodes: &mut [TreeNode]) {
    nodes.sort_by(TreeNode::sibling_order);
    for node in nodes.iter_mut() {
        sort_forest(&mut node.children);
    }
}

/// Total number of file leaves in a forest.
pub fn forest_file_count(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::file_count).sum()
}

/// Render a forest with box-drawing guides, one node per line.
///
/// ```text
/// ├── src/
/// │   └── index.ts
/// └── package.json
/// ```
///
/// Folders get a trailing `/`.
pub fn render_tree(forest: &[TreeNode]) -> String {
    let mut out = String::new();
    render_level(forest, "", &mut out);
    out
}

fn render_level(nodes: &[TreeNode], prefix: &str, out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let suffix = if node.is_folder() { "/" } else { "" };
        let _ = writeln!(out, "{prefix}{branch}{}{suffix}", node.name);

        if node.is_folder() {
            let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_level(&node.children, &child_prefix, out);
        }
    }
}

/// Find a node by its slash-separated path.
pub fn find_node<'a>(forest: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    let mut level = forest;
    let mut found = None;
    for segment in path.split('/') {
        let node = level.iter().find(|n| n.name == segment)?;
        level = &node.children;
        found = Some(node);
    }
    found
}
