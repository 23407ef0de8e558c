//! Domain value objects: Framework, Language, Styling, PackageManager.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Per-framework knowledge (build directories, stylesheet locations) lives in
//! `capabilities.rs`. This file's only job is to define the closed sets, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `FromStr` arm and the `ALL` entry here
//! 3. Add a capability entry in `capabilities.rs` (frameworks only)
//! 4. Give every generator a look: their `match` arms are exhaustive, so the
//!    compiler lists every place that must decide what the new variant emits

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ────────────────────────────────────────────────────────────────

/// The project flavour to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Next.js with the App Router.
    Next,
    /// React bundled with Vite.
    React,
    /// Plain Node.js backend.
    Node,
    /// HTML/CSS/JS without a bundler.
    Static,
}

impl Framework {
    pub const ALL: [Framework; 4] = [Self::Next, Self::React, Self::Node, Self::Static];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::React => "react",
            Self::Node => "node",
            Self::Static => "static",
        }
    }

    /// Human-readable name, as shown in READMEs and listings.
    pub fn display_name(self) -> &'static str {
        self.capabilities().display_name
    }

    /// The capability entry describing this framework.
    ///
    /// Delegates to `capabilities::framework_def`.
    pub fn capabilities(self) -> &'static crate::domain::capabilities::FrameworkDef {
        crate::domain::capabilities::framework_def(self)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "nextjs" | "next.js" => Ok(Self::Next),
            "react" | "vite" | "react-vite" => Ok(Self::React),
            "node" | "nodejs" | "node.js" => Ok(Self::Node),
            "static" | "html" => Ok(Self::Static),
            other => Err(DomainError::UnknownVariant {
                field: "framework",
                value: other.to_string(),
                expected: &["next", "react", "node", "static"],
            }),
        }
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ts,
    Js,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::Ts, Self::Js];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ts => "TypeScript",
            Self::Js => "JavaScript",
        }
    }

    /// Extension for plain modules (`ts` / `js`).
    pub const fn script_ext(&self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
        }
    }

    /// Extension for modules containing JSX (`tsx` / `jsx`).
    pub const fn jsx_ext(&self) -> &'static str {
        match self {
            Self::Ts => "tsx",
            Self::Js => "jsx",
        }
    }

    pub const fn is_typescript(&self) -> bool {
        matches!(self, Self::Ts)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Ts),
            "js" | "javascript" => Ok(Self::Js),
            other => Err(DomainError::UnknownVariant {
                field: "language",
                value: other.to_string(),
                expected: &["ts", "js"],
            }),
        }
    }
}

// ── Styling ──────────────────────────────────────────────────────────────────

/// Styling approach; decides which stylesheet (if any) is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Styling {
    Tailwind,
    Css,
    Scss,
    Sass,
    None,
}

impl Styling {
    pub const ALL: [Styling; 5] = [
        Self::Tailwind,
        Self::Css,
        Self::Scss,
        Self::Sass,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::None => "none",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind CSS v4",
            Self::Css => "CSS",
            Self::Scss => "SCSS (Sass)",
            Self::Sass => "Sass (indented syntax)",
            Self::None => "None",
        }
    }

    /// File extension of the emitted stylesheet.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Tailwind | Self::Css | Self::None => "css",
        }
    }

    /// Whether the stylesheet needs the Sass compiler.
    pub const fn needs_preprocessor(&self) -> bool {
        matches!(self, Self::Scss | Self::Sass)
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Styling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tailwind" | "tailwindcss" => Ok(Self::Tailwind),
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "sass" => Ok(Self::Sass),
            "none" => Ok(Self::None),
            other => Err(DomainError::UnknownVariant {
                field: "styling",
                value: other.to_string(),
                expected: &["tailwind", "css", "scss", "sass", "none"],
            }),
        }
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// Package manager the README instructions are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    pub const fn install_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm install",
            Self::Bun => "bun install",
        }
    }

    /// Command line that runs a `package.json` script.
    ///
    /// `npm start` and the yarn/pnpm shorthands are used where the tool
    /// supports them; bun always needs `run` because `bun build` is its own
    /// bundler subcommand.
    pub fn run_command(&self, script: &str) -> String {
        match self {
            Self::Npm if script == "start" => "npm start".to_string(),
            Self::Npm => format!("npm run {script}"),
            Self::Yarn => format!("yarn {script}"),
            Self::Pnpm => format!("pnpm {script}"),
            Self::Bun => format!("bun run {script}"),
        }
    }

    /// Lockfile produced by `install_command`.
    pub const fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
            Self::Bun => "bun.lockb",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::UnknownVariant {
                field: "packageManager",
                value: other.to_string(),
                expected: &["npm", "yarn", "pnpm", "bun"],
            }),
        }
    }
}
