//! `eslint.config.js` in flat-config form.
//!
//! The framework picks the base rule set. TypeScript layers
//! `typescript-eslint` on top and switches the linted extensions.

use crate::domain::{Artifact, Framework, Manifest};

pub fn generate(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.lint() {
        return None;
    }

    let ts = manifest.is_typescript();
    let content = match manifest.framework() {
        Framework::Next => next_config(ts),
        Framework::React => react_config(ts),
        Framework::Node => node_config(ts),
        Framework::Static => STATIC_CONFIG.to_string(),
    };

    Some(Artifact::new("eslint.config.js", content))
}

/// Opening and closing of the exported array, wrapped in `tseslint.config`
/// for TypeScript.
fn export_wrapper(ts: bool) -> (&'static str, &'static str) {
    if ts {
        ("tseslint.config(", ");")
    } else {
        ("[", "];")
    }
}

fn next_config(ts: bool) -> String {
    let (open, close) = export_wrapper(ts);
    let ts_imports = if ts {
        "import js from \"@eslint/js\";\nimport tseslint from \"typescript-eslint\";\n"
    } else {
        ""
    };
    let ts_layer = if ts {
        "  {\n    files: [\"**/*.{ts,tsx}\"],\n    extends: [js.configs.recommended, ...tseslint.configs.recommended],\n  },\n"
    } else {
        "  {\n    files: [\"**/*.{js,jsx}\"],\n  },\n"
    };

    format!(
        r#"import {{ dirname }} from "path";
import {{ fileURLToPath }} from "url";
import {{ FlatCompat }} from "@eslint/eslintrc";
{ts_imports}
const __filename = fileURLToPath(import.meta.url);
const __dirname = dirname(__filename);

const compat = new FlatCompat({{
  baseDirectory: __dirname,
}});

const eslintConfig = {open}
  {{ ignores: [".next", "out"] }},
  ...compat.extends("next/core-web-vitals"),
{ts_layer}{close}

export default eslintConfig;
"#
    )
}

fn react_config(ts: bool) -> String {
    let (open, close) = export_wrapper(ts);
    let ts_import = if ts {
        "import tseslint from 'typescript-eslint'\n"
    } else {
        ""
    };
    let extends = if ts {
        "[js.configs.recommended, ...tseslint.configs.recommended]"
    } else {
        "[js.configs.recommended]"
    };
    let files = if ts { "ts,tsx" } else { "js,jsx" };

    format!(
        r#"import js from '@eslint/js'
import globals from 'globals'
import reactHooks from 'eslint-plugin-react-hooks'
import reactRefresh from 'eslint-plugin-react-refresh'
{ts_import}
export default {open}
  {{ ignores: ['dist'] }},
  {{
    extends: {extends},
    files: ['**/*.{{{files}}}'],
    languageOptions: {{
      ecmaVersion: 2020,
      globals: globals.browser,
    }},
    plugins: {{
      'react-hooks': reactHooks,
      'react-refresh': reactRefresh,
    }},
    rules: {{
      ...reactHooks.configs.recommended.rules,
      'react-refresh/only-export-components': [
        'warn',
        {{ allowConstantExport: true }},
      ],
    }},
  }},
{close}
"#
    )
}

fn node_config(ts: bool) -> String {
    let (open, close) = export_wrapper(ts);
    let ts_import = if ts {
        "import tseslint from 'typescript-eslint'\n"
    } else {
        ""
    };
    let extends = if ts {
        "[js.configs.recommended, ...tseslint.configs.recommended]"
    } else {
        "[js.configs.recommended]"
    };
    let ext = if ts { "ts" } else { "js" };

    format!(
        r#"import js from '@eslint/js'
{ts_import}
export default {open}
  {{ ignores: ['dist', 'build', 'node_modules'] }},
  {{
    extends: {extends},
    files: ['**/*.{ext}'],
    rules: {{
      // Add your custom rules here
    }},
  }},
{close}
"#
    )
}

const STATIC_CONFIG: &str = r#"export default [
  { ignores: ['node_modules', 'build'] },
  {
    files: ['src/**/*.js'],
    languageOptions: {
      ecmaVersion: 'latest',
      sourceType: 'script',
      globals: {
        window: 'readonly',
        document: 'readonly',
        console: 'readonly',
      },
    },
    rules: {
      // Add your custom rules here
    },
  },
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, Styling};
    use crate::generators::test_support::{all_manifests, manifest};

    fn config(framework: Framework, language: Language) -> String {
        let m = manifest(framework, language, Styling::None)
            .lint(true)
            .build()
            .unwrap();
        generate(&m).unwrap().content
    }

    #[test]
    fn emitted_iff_lint() {
        for m in all_manifests() {
            assert_eq!(generate(&m).is_some(), m.lint(), "{m}");
        }
    }

    #[test]
    fn next_uses_flat_compat() {
        let js = config(Framework::Next, Language::Js);
        assert!(js.contains("compat.extends(\"next/core-web-vitals\")"));
        assert!(!js.contains("typescript-eslint"));
        assert!(js.contains("const eslintConfig = [\n"));

        let ts = config(Framework::Next, Language::Ts);
        assert!(ts.contains("import tseslint from \"typescript-eslint\";"));
        assert!(ts.contains("const eslintConfig = tseslint.config(\n"));
        assert!(ts.contains("**/*.{ts,tsx}"));
    }

    #[test]
    fn react_language_switches_extensions() {
        let ts = config(Framework::React, Language::Ts);
        assert!(ts.contains("files: ['**/*.{ts,tsx}']"));
        assert!(ts.contains("...tseslint.configs.recommended"));
        assert!(ts.trim_end().ends_with(");"));

        let js = config(Framework::React, Language::Js);
        assert!(js.contains("files: ['**/*.{js,jsx}']"));
        assert!(!js.contains("tseslint"));
        assert!(js.trim_end().ends_with("];"));
    }

    #[test]
    fn node_lints_single_extension() {
        assert!(config(Framework::Node, Language::Ts).contains("files: ['**/*.ts']"));
        assert!(config(Framework::Node, Language::Js).contains("files: ['**/*.js']"));
    }

    #[test]
    fn static_config_is_language_independent() {
        assert_eq!(
            config(Framework::Static, Language::Ts),
            config(Framework::Static, Language::Js)
        );
    }
}
