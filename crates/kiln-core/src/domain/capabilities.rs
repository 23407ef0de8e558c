//! Framework capability registry.
//!
//! Each framework is described exactly once by its [`FrameworkDef`]. The
//! generators read build directories, stylesheet locations and tooling
//! support from here instead of repeating `match` arms for every concern.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `Framework` in `value_objects.rs`
//! 2. Add one [`FrameworkDef`] constant and list it in [`FRAMEWORK_REGISTRY`]
//! 3. Add its arm to [`framework_def`]
//! 4. Decide what the layout generator emits for it

use crate::domain::value_objects::{Framework, Styling};

/// Everything the generator set needs to know about one framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    /// The framework variant this entry describes.
    pub framework: Framework,

    /// Name used in documentation and listings.
    pub display_name: &'static str,

    /// One-line description for listings.
    pub description: &'static str,

    /// Directory holding the application sources.
    pub source_root: &'static str,

    /// Build output directories, without trailing slash.
    ///
    /// Feeds both `.gitignore` (with a trailing `/`) and `.prettierignore`.
    pub build_outputs: &'static [&'static str],

    /// Extra build outputs ignored by git but not by the formatter.
    pub vcs_only_outputs: &'static [&'static str],

    /// Stylesheet path without extension.
    pub stylesheet_stem: &'static str,

    /// Whether the project runs through a bundler that can load PostCSS and
    /// Sass. The static flavour serves raw files.
    pub has_build_pipeline: bool,
}

impl FrameworkDef {
    /// Full stylesheet path for `styling`, or `None` when no sheet is emitted.
    pub fn stylesheet_path(&self, styling: Styling) -> Option<String> {
        styling
            .is_enabled()
            .then(|| format!("{}.{}", self.stylesheet_stem, styling.file_extension()))
    }
}

pub const NEXT: FrameworkDef = FrameworkDef {
    framework: Framework::Next,
    display_name: "Next.js",
    description: "Full-stack React framework with App Router",
    source_root: "app",
    build_outputs: &[".next", "out"],
    vcs_only_outputs: &[],
    stylesheet_stem: "app/globals",
    has_build_pipeline: true,
};

pub const REACT: FrameworkDef = FrameworkDef {
    framework: Framework::React,
    display_name: "React (Vite)",
    description: "Lightning-fast React with Vite bundler",
    source_root: "src",
    build_outputs: &["dist"],
    vcs_only_outputs: &[],
    stylesheet_stem: "src/index",
    has_build_pipeline: true,
};

pub const NODE: FrameworkDef = FrameworkDef {
    framework: Framework::Node,
    display_name: "Node.js",
    description: "Backend JavaScript/TypeScript project",
    source_root: "src",
    build_outputs: &["dist", "build"],
    vcs_only_outputs: &[],
    stylesheet_stem: "src/styles",
    has_build_pipeline: true,
};

// The static trio already owns `src/styles.css`, so the theme sheet gets its
// own stem.
pub const STATIC: FrameworkDef = FrameworkDef {
    framework: Framework::Static,
    display_name: "Static Frontend",
    description: "Simple HTML/CSS/JS project",
    source_root: "src",
    build_outputs: &[],
    vcs_only_outputs: &["build"],
    stylesheet_stem: "src/theme",
    has_build_pipeline: false,
};

/// All frameworks, in display order.
pub static FRAMEWORK_REGISTRY: &[FrameworkDef] = &[NEXT, REACT, NODE, STATIC];

/// Look up the capability entry for a framework.
pub const fn framework_def(framework: Framework) -> &'static FrameworkDef {
    match framework {
        Framework::Next => &NEXT,
        Framework::React => &REACT,
        Framework::Node => &NODE,
        Framework::Static => &STATIC,
    }
}
