//! Framework-specific source files and folder placeholders.

use super::{html_text, js_string};
use crate::domain::{Artifact, Framework, Manifest, Styling};

const TAGLINE: &str = "Generated with Kiln";
const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

pub fn generate(manifest: &Manifest) -> Vec<Artifact> {
    match manifest.framework() {
        Framework::Next => next(manifest),
        Framework::React => react(manifest),
        Framework::Node => node(manifest),
        Framework::Static => static_site(manifest),
    }
}

/// Import specifier for the framework stylesheet, relative to `dir`.
fn stylesheet_import(manifest: &Manifest, dir: &str) -> Option<String> {
    let path = manifest
        .framework()
        .capabilities()
        .stylesheet_path(manifest.styling())?;
    let relative = path.strip_prefix(dir)?.trim_start_matches('/');
    Some(format!("./{relative}"))
}

// ── Next.js ──────────────────────────────────────────────────────────────────

fn next(manifest: &Manifest) -> Vec<Artifact> {
    let jsx = manifest.language().jsx_ext();
    vec![
        Artifact::new(format!("app/layout.{jsx}").as_str(), next_layout(manifest)),
        Artifact::new(format!("app/page.{jsx}").as_str(), NEXT_PAGE),
        Artifact::placeholder("components"),
        Artifact::placeholder("lib"),
    ]
}

fn next_layout(manifest: &Manifest) -> String {
    let ts = manifest.is_typescript();
    let mut out = String::new();

    if let Some(sheet) = stylesheet_import(manifest, "app") {
        out.push_str(&format!("import {}\n", js_string(&sheet)));
    }
    if ts {
        out.push_str("import type { Metadata } from 'next'\n");
    }

    let annotation = if ts { ": Metadata" } else { "" };
    let props = if ts {
        "{\n  children,\n}: {\n  children: React.ReactNode\n}"
    } else {
        "{ children }"
    };

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        r#"export const metadata{annotation} = {{
  title: {title},
  description: {description},
}}

export default function RootLayout({props}) {{
  return (
    <html lang="en">
      <body>{{children}}</body>
    </html>
  )
}}
"#,
        title = js_string(manifest.name().as_str()),
        description = js_string(manifest.description().unwrap_or(TAGLINE)),
    ));
    out
}

const NEXT_PAGE: &str = r#"export default function Home() {
  return (
    <main className="min-h-screen flex items-center justify-center">
      <div className="text-center">
        <h1 className="text-4xl font-bold mb-4">Welcome to Your App</h1>
        <p className="text-gray-600">Generated with Kiln</p>
      </div>
    </main>
  )
}
"#;

// ── React (Vite) ─────────────────────────────────────────────────────────────

fn react(manifest: &Manifest) -> Vec<Artifact> {
    let lang = manifest.language();
    vec![
        Artifact::new(
            format!("vite.config.{}", lang.script_ext()).as_str(),
            vite_config(manifest),
        ),
        Artifact::new("index.html", vite_index_html(manifest)),
        Artifact::new(
            format!("src/main.{}", lang.jsx_ext()).as_str(),
            react_main(manifest),
        ),
        Artifact::new(
            format!("src/App.{}", lang.jsx_ext()).as_str(),
            react_app(manifest),
        ),
        Artifact::placeholder("src/components"),
        Artifact::placeholder("src/lib"),
    ]
}

fn vite_config(manifest: &Manifest) -> String {
    if manifest.is_typescript() {
        r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import { resolve } from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': resolve(__dirname, './src'),
    },
  },
})
"#
        .to_string()
    } else {
        r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
})
"#
        .to_string()
    }
}

fn vite_index_html(manifest: &Manifest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{name}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.{jsx}"></script>
  </body>
</html>
"#,
        name = html_text(manifest.name().as_str()),
        jsx = manifest.language().jsx_ext(),
    )
}

fn react_main(manifest: &Manifest) -> String {
    let sheet = stylesheet_import(manifest, "src")
        .map(|s| format!("import {}\n", js_string(&s)))
        .unwrap_or_default();
    let non_null = if manifest.is_typescript() { "!" } else { "" };

    format!(
        r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App'
{sheet}
ReactDOM.createRoot(document.getElementById('root'){non_null}).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#
    )
}

fn react_app(manifest: &Manifest) -> String {
    format!(
        r#"function App() {{
  return (
    <div className="min-h-screen flex items-center justify-center">
      <div className="text-center">
        <h1 className="text-4xl font-bold mb-4">Welcome to {name}</h1>
        <p className="text-gray-600">{TAGLINE}</p>
      </div>
    </div>
  )
}}

export default App
"#,
        name = html_text(manifest.name().as_str()),
    )
}

// ── Node.js ──────────────────────────────────────────────────────────────────

fn node(manifest: &Manifest) -> Vec<Artifact> {
    let ext = manifest.language().script_ext();
    let header = if manifest.is_typescript() {
        "// TypeScript Node.js entry point\n"
    } else {
        ""
    };
    let index = format!(
        "{header}console.log({})\n\n// Your application code goes here\n",
        js_string(&format!("Hello from {}!", manifest.name()))
    );

    vec![
        Artifact::new(format!("src/index.{ext}").as_str(), index),
        Artifact::placeholder("src/lib"),
    ]
}

// ── Static ───────────────────────────────────────────────────────────────────

/// The static trio stays plain JavaScript whatever the language choice,
/// because nothing compiles it.
fn static_site(manifest: &Manifest) -> Vec<Artifact> {
    vec![
        Artifact::new("src/index.html", static_html(manifest)),
        Artifact::new("src/main.js", STATIC_JS),
        Artifact::new("src/styles.css", STATIC_CSS),
    ]
}

fn static_html(manifest: &Manifest) -> String {
    let name = html_text(manifest.name().as_str());
    let mut head = String::new();

    match manifest.styling() {
        Styling::Tailwind => {
            head.push_str(&format!("  <script src=\"{TAILWIND_CDN}\"></script>\n"));
        }
        // Only plain CSS is linkable without a compile step.
        Styling::Css => head.push_str("  <link rel=\"stylesheet\" href=\"theme.css\">\n"),
        Styling::Scss | Styling::Sass | Styling::None => {}
    }
    if let Some(description) = manifest.description() {
        head.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            html_text(description)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name}</title>
{head}  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <main class="container">
    <h1>Welcome to {name}</h1>
    <p>{TAGLINE}</p>
  </main>
  <script src="main.js"></script>
</body>
</html>
"#
    )
}

const STATIC_JS: &str = "// Your JavaScript code goes here\nconsole.log('App loaded!')\n";

const STATIC_CSS: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.5;
  color: #333;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
}

h1 {
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

p {
  color: #666;
}
"#;
