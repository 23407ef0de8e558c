//! The generator set.
//!
//! One pure function per concern. Each reads the [`Manifest`] and yields zero
//! or one artifact; the layout generator yields several. None of them fail:
//! an inapplicable option is `None`, not an error.
//!
//! [`GENERATOR_REGISTRY`] lists every generator in invocation order. That
//! order is also the archive entry order, so appending is safe and
//! reordering is a visible change.
//!
//! # Adding a Generator
//!
//! 1. Add a module with a `pub fn generate(&Manifest) -> Option<Artifact>`
//! 2. Add one [`GeneratorEntry`] to [`GENERATOR_REGISTRY`]

use serde::Serialize;
use tracing::error;

use crate::domain::{Artifact, Manifest};

pub mod eslint;
pub mod gitignore;
pub mod layout;
pub mod package_json;
pub mod prettier;
pub mod readme;
pub mod styles;
pub mod tsconfig;

/// How a generator produces its output.
#[derive(Clone, Copy)]
pub enum GeneratorFn {
    /// Zero or one artifact.
    Single(fn(&Manifest) -> Option<Artifact>),
    /// Any number of artifacts.
    Many(fn(&Manifest) -> Vec<Artifact>),
}

/// A named registry slot.
#[derive(Clone, Copy)]
pub struct GeneratorEntry {
    pub name: &'static str,
    pub run: GeneratorFn,
}

impl GeneratorEntry {
    pub const fn single(name: &'static str, f: fn(&Manifest) -> Option<Artifact>) -> Self {
        Self {
            name,
            run: GeneratorFn::Single(f),
        }
    }

    pub const fn many(name: &'static str, f: fn(&Manifest) -> Vec<Artifact>) -> Self {
        Self {
            name,
            run: GeneratorFn::Many(f),
        }
    }

    pub fn generate(&self, manifest: &Manifest) -> Vec<Artifact> {
        match self.run {
            GeneratorFn::Single(f) => f(manifest).into_iter().collect(),
            GeneratorFn::Many(f) => f(manifest),
        }
    }
}

impl std::fmt::Debug for GeneratorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub static GENERATOR_REGISTRY: &[GeneratorEntry] = &[
    GeneratorEntry::single("package-json", package_json::generate),
    GeneratorEntry::single("tsconfig", tsconfig::generate),
    GeneratorEntry::single("tsconfig-node", tsconfig::generate_node),
    GeneratorEntry::single("eslint", eslint::generate),
    GeneratorEntry::single("postcss", styles::generate_postcss),
    GeneratorEntry::single("stylesheet", styles::generate_stylesheet),
    GeneratorEntry::single("prettierrc", prettier::generate_config),
    GeneratorEntry::single("prettierignore", prettier::generate_ignore),
    GeneratorEntry::single("gitignore", gitignore::generate),
    GeneratorEntry::single("readme", readme::generate),
    GeneratorEntry::many("layout", layout::generate),
];

// ── Shared helpers ───────────────────────────────────────────────────────────

/// Pretty-print with two-space indentation and a trailing newline.
///
/// Generator payloads are string-keyed maps of strings and booleans, which
/// always serialise. Should one ever fail, the file comes out empty and the
/// failure is logged instead of aborting generation.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        error!(error = %e, "Generator payload failed to serialise");
        String::new()
    });
    json.push('\n');
    json
}

/// Join lines with `\n` and terminate the file with one newline.
pub(crate) fn lines_to_file<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Quote `text` as a single-quoted JavaScript string literal.
pub(crate) fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

/// Escape text placed between HTML tags.
pub(crate) fn html_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
