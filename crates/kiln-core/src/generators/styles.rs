//! Stylesheet and the Tailwind PostCSS pipeline.
//!
//! Exactly one stylesheet is emitted whenever styling is enabled. Its path
//! comes from the framework's capability entry, its syntax from the styling
//! choice.

use crate::domain::{Artifact, Manifest, Styling};

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    "@tailwindcss/postcss": {},
  },
};
"#;

/// `postcss.config.mjs`, for Tailwind on a framework with a bundler.
pub fn generate_postcss(manifest: &Manifest) -> Option<Artifact> {
    let bundled = manifest.framework().capabilities().has_build_pipeline;
    (manifest.styling() == Styling::Tailwind && bundled)
        .then(|| Artifact::new("postcss.config.mjs", POSTCSS_CONFIG))
}

pub fn generate_stylesheet(manifest: &Manifest) -> Option<Artifact> {
    let styling = manifest.styling();
    let path = manifest.framework().capabilities().stylesheet_path(styling)?;
    let content = match styling {
        Styling::Tailwind => TAILWIND,
        Styling::Css => CSS,
        Styling::Scss => SCSS,
        Styling::Sass => SASS,
        Styling::None => return None,
    };
    Some(Artifact::new(path.as_str(), content))
}

const TAILWIND: &str = r#"@import "tailwindcss";

/* Theme tokens */
@theme {
  /* Colors */
  --color-primary: oklch(0.6 0.2 260);
  --color-primary-foreground: oklch(0.98 0.01 260);
  --color-secondary: oklch(0.7 0.1 200);
  --color-secondary-foreground: oklch(0.2 0.02 200);
  --color-accent: oklch(0.85 0.15 180);
  --color-accent-foreground: oklch(0.2 0.02 180);
  --color-muted: oklch(0.95 0.01 260);
  --color-muted-foreground: oklch(0.45 0.02 260);
  --color-background: oklch(0.99 0.005 260);
  --color-foreground: oklch(0.1 0.02 260);
  --color-card: oklch(0.99 0.005 260);
  --color-card-foreground: oklch(0.1 0.02 260);
  --color-border: oklch(0.9 0.01 260);
  --color-input: oklch(0.9 0.01 260);
  --color-ring: oklch(0.6 0.2 260);
  --color-destructive: oklch(0.55 0.25 30);
  --color-destructive-foreground: oklch(0.98 0.01 30);

  /* Radius */
  --radius-sm: 0.25rem;
  --radius-md: 0.5rem;
  --radius-lg: 0.75rem;
  --radius-xl: 1rem;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1);
  --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1);

  /* Fonts */
  --font-sans: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  --font-mono: ui-monospace, SFMono-Regular, "SF Mono", Menlo, Consolas, monospace;
}

/* Dark mode */
@media (prefers-color-scheme: dark) {
  :root {
    --color-primary: oklch(0.7 0.2 260);
    --color-primary-foreground: oklch(0.1 0.02 260);
    --color-secondary: oklch(0.35 0.05 260);
    --color-secondary-foreground: oklch(0.95 0.01 260);
    --color-muted: oklch(0.2 0.02 260);
    --color-muted-foreground: oklch(0.65 0.02 260);
    --color-background: oklch(0.12 0.02 260);
    --color-foreground: oklch(0.95 0.01 260);
    --color-card: oklch(0.15 0.02 260);
    --color-card-foreground: oklch(0.95 0.01 260);
    --color-border: oklch(0.25 0.02 260);
    --color-input: oklch(0.25 0.02 260);
  }
}

/* Base styles */
body {
  font-family: var(--font-sans);
  background-color: var(--color-background);
  color: var(--color-foreground);
}
"#;

const CSS: &str = r#"/* Reset and design tokens */
*,
*::before,
*::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

:root {
  /* Colors */
  --color-primary: hsl(221 83% 53%);
  --color-primary-dark: hsl(221 83% 43%);
  --color-secondary: hsl(215 20% 45%);
  --color-background: hsl(0 0% 100%);
  --color-foreground: hsl(222 47% 11%);
  --color-muted: hsl(210 40% 96%);
  --color-muted-foreground: hsl(215 16% 47%);
  --color-border: hsl(214 32% 91%);
  --color-card: hsl(0 0% 100%);
  --color-destructive: hsl(0 84% 60%);

  /* Spacing */
  --spacing-1: 0.25rem;
  --spacing-2: 0.5rem;
  --spacing-3: 0.75rem;
  --spacing-4: 1rem;
  --spacing-6: 1.5rem;
  --spacing-8: 2rem;
  --spacing-12: 3rem;

  /* Typography */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-4xl: 2.25rem;

  /* Radius */
  --radius-sm: 0.25rem;
  --radius-md: 0.5rem;
  --radius-lg: 0.75rem;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
  --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1);
  --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}

/* Dark mode */
@media (prefers-color-scheme: dark) {
  :root {
    --color-primary: hsl(221 83% 63%);
    --color-background: hsl(222 47% 8%);
    --color-foreground: hsl(210 40% 98%);
    --color-muted: hsl(217 33% 17%);
    --color-muted-foreground: hsl(215 20% 65%);
    --color-border: hsl(217 33% 17%);
    --color-card: hsl(222 47% 11%);
  }
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--color-foreground);
  background-color: var(--color-background);
  -webkit-font-smoothing: antialiased;
}

/* Utilities */
.container {
  width: 100%;
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 var(--spacing-4);
}

.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--spacing-2) var(--spacing-4);
  font-size: var(--text-sm);
  font-weight: 500;
  border-radius: var(--radius-md);
  cursor: pointer;
  transition: all 0.2s ease;
  border: none;
}

.btn-primary {
  background: var(--color-primary);
  color: white;
}

.btn-primary:hover {
  background: var(--color-primary-dark);
}

.card {
  background: var(--color-card);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-lg);
  padding: var(--spacing-6);
  box-shadow: var(--shadow-sm);
}
"#;

const SCSS: &str = r#"@use "sass:map";

// Colors
$primary: hsl(221, 83%, 53%);
$primary-dark: hsl(221, 83%, 43%);
$secondary: hsl(215, 20%, 45%);
$background: hsl(0, 0%, 100%);
$foreground: hsl(222, 47%, 11%);
$muted: hsl(210, 40%, 96%);
$muted-foreground: hsl(215, 16%, 47%);
$border: hsl(214, 32%, 91%);
$card: hsl(0, 0%, 100%);
$destructive: hsl(0, 84%, 60%);

// Dark mode colors
$dark-background: hsl(222, 47%, 8%);
$dark-foreground: hsl(210, 40%, 98%);
$dark-muted: hsl(217, 33%, 17%);
$dark-border: hsl(217, 33%, 17%);
$dark-card: hsl(222, 47%, 11%);

// Spacing
$spacing: (
  1: 0.25rem,
  2: 0.5rem,
  3: 0.75rem,
  4: 1rem,
  6: 1.5rem,
  8: 2rem,
  12: 3rem
);

// Typography
$font-sans: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
$font-mono: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;

$text-sizes: (
  "xs": 0.75rem,
  "sm": 0.875rem,
  "base": 1rem,
  "lg": 1.125rem,
  "xl": 1.25rem,
  "2xl": 1.5rem,
  "3xl": 1.875rem,
  "4xl": 2.25rem
);

// Radius
$radius-sm: 0.25rem;
$radius-md: 0.5rem;
$radius-lg: 0.75rem;
$radius-full: 9999px;

// Breakpoints
$breakpoints: (
  "sm": 640px,
  "md": 768px,
  "lg": 1024px,
  "xl": 1280px,
  "2xl": 1536px
);

// Mixins
@mixin respond-to($breakpoint) {
  @media (min-width: map.get($breakpoints, $breakpoint)) {
    @content;
  }
}

@mixin flex-center {
  display: flex;
  align-items: center;
  justify-content: center;
}

@mixin card {
  background: $card;
  border: 1px solid $border;
  border-radius: $radius-lg;
  padding: map.get($spacing, 6);
}

// Reset
*,
*::before,
*::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

// Base
body {
  font-family: $font-sans;
  font-size: map.get($text-sizes, "base");
  line-height: 1.6;
  color: $foreground;
  background-color: $background;
  -webkit-font-smoothing: antialiased;

  @media (prefers-color-scheme: dark) {
    color: $dark-foreground;
    background-color: $dark-background;
  }
}

// Utilities
.container {
  width: 100%;
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 map.get($spacing, 4);

  @include respond-to("lg") {
    padding: 0 map.get($spacing, 6);
  }
}

.btn {
  @include flex-center;
  padding: map.get($spacing, 2) map.get($spacing, 4);
  font-size: map.get($text-sizes, "sm");
  font-weight: 500;
  border-radius: $radius-md;
  cursor: pointer;
  transition: all 0.2s ease;
  border: none;

  &-primary {
    background: $primary;
    color: white;

    &:hover {
      background: $primary-dark;
    }
  }
}

.card {
  @include card;
}
"#;

// Indented syntax: no braces or semicolons, maps stay on one line.
const SASS: &str = r#"@use "sass:map"

// Colors
$primary: hsl(221, 83%, 53%)
$primary-dark: hsl(221, 83%, 43%)
$secondary: hsl(215, 20%, 45%)
$background: hsl(0, 0%, 100%)
$foreground: hsl(222, 47%, 11%)
$muted: hsl(210, 40%, 96%)
$muted-foreground: hsl(215, 16%, 47%)
$border: hsl(214, 32%, 91%)
$card: hsl(0, 0%, 100%)
$destructive: hsl(0, 84%, 60%)

// Dark mode colors
$dark-background: hsl(222, 47%, 8%)
$dark-foreground: hsl(210, 40%, 98%)
$dark-muted: hsl(217, 33%, 17%)
$dark-border: hsl(217, 33%, 17%)
$dark-card: hsl(222, 47%, 11%)

// Spacing
$spacing: (1: 0.25rem, 2: 0.5rem, 3: 0.75rem, 4: 1rem, 6: 1.5rem, 8: 2rem, 12: 3rem)

// Typography
$font-sans: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif
$font-mono: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace

$text-sizes: ("xs": 0.75rem, "sm": 0.875rem, "base": 1rem, "lg": 1.125rem, "xl": 1.25rem, "2xl": 1.5rem, "3xl": 1.875rem, "4xl": 2.25rem)

// Radius
$radius-sm: 0.25rem
$radius-md: 0.5rem
$radius-lg: 0.75rem
$radius-full: 9999px

// Breakpoints
$breakpoints: ("sm": 640px, "md": 768px, "lg": 1024px, "xl": 1280px, "2xl": 1536px)

// Mixins
@mixin respond-to($breakpoint)
  @media (min-width: map.get($breakpoints, $breakpoint))
    @content

@mixin flex-center
  display: flex
  align-items: center
  justify-content: center

@mixin card
  background: $card
  border: 1px solid $border
  border-radius: $radius-lg
  padding: map.get($spacing, 6)

// Reset
*, *::before, *::after
  box-sizing: border-box
  margin: 0
  padding: 0

// Base
body
  font-family: $font-sans
  font-size: map.get($text-sizes, "base")
  line-height: 1.6
  color: $foreground
  background-color: $background
  -webkit-font-smoothing: antialiased

  @media (prefers-color-scheme: dark)
    color: $dark-foreground
    background-color: $dark-background

// Utilities
.container
  width: 100%
  max-width: 1280px
  margin: 0 auto
  padding: 0 map.get($spacing, 4)

  @include respond-to("lg")
    padding: 0 map.get($spacing, 6)

.btn
  @include flex-center
  padding: map.get($spacing, 2) map.get($spacing, 4)
  font-size: map.get($text-sizes, "sm")
  font-weight: 500
  border-radius: $radius-md
  cursor: pointer
  transition: all 0.2s ease
  border: none

  &-primary
    background: $primary
    color: white

    &:hover
      background: $primary-dark

.card
  @include card
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Framework, Language};
    use crate::generators::test_support::{all_manifests, manifest};

    fn sheet(framework: Framework, styling: Styling) -> Option<Artifact> {
        let m = manifest(framework, Language::Ts, styling).build().unwrap();
        generate_stylesheet(&m)
    }

    #[test]
    fn one_sheet_iff_styling_enabled() {
        for m in all_manifests() {
            assert_eq!(
                generate_stylesheet(&m).is_some(),
                m.styling().is_enabled(),
                "{m}"
            );
        }
    }

    #[test]
    fn postcss_only_for_bundled_tailwind() {
        for m in all_manifests() {
            let expected = m.styling() == Styling::Tailwind && m.framework() != Framework::Static;
            assert_eq!(generate_postcss(&m).is_some(), expected, "{m}");
        }
    }

    #[test]
    fn path_tracks_framework_and_syntax() {
        let cases = [
            (Framework::Next, Styling::Tailwind, "app/globals.css"),
            (Framework::React, Styling::Scss, "src/index.scss"),
            (Framework::Node, Styling::Css, "src/styles.css"),
            (Framework::Static, Styling::Sass, "src/theme.sass"),
        ];
        for (framework, styling, path) in cases {
            assert_eq!(sheet(framework, styling).unwrap().path.as_str(), path);
        }
    }

    #[test]
    fn syntax_matches_styling() {
        let tw = sheet(Framework::Next, Styling::Tailwind).unwrap().content;
        assert!(tw.starts_with("@import \"tailwindcss\";"));
        assert!(tw.contains("@theme {"));

        let scss = sheet(Framework::React, Styling::Scss).unwrap().content;
        assert!(scss.contains("@mixin respond-to($breakpoint) {"));

        let sass = sheet(Framework::React, Styling::Sass).unwrap().content;
        assert!(!sass.contains('{'));
        assert!(!sass.contains(';'));
        assert!(sass.contains("@mixin flex-center\n  display: flex\n"));
    }
}
