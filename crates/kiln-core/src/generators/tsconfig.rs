//! `tsconfig.json` and the Vite-side `tsconfig.node.json`.

use serde_json::{Value, json};

use super::pretty_json;
use crate::domain::{Artifact, Framework, Manifest};

/// Fixed compiler profile per framework. Static pages have no compile step.
fn profile(framework: Framework) -> Option<Value> {
    let config = match framework {
        Framework::Next => json!({
            "compilerOptions": {
                "target": "ES2017",
                "lib": ["dom", "dom.iterable", "esnext"],
                "allowJs": true,
                "skipLibCheck": true,
                "strict": true,
                "noEmit": true,
                "esModuleInterop": true,
                "module": "esnext",
                "moduleResolution": "bundler",
                "resolveJsonModule": true,
                "isolatedModules": true,
                "jsx": "preserve",
                "incremental": true,
                "plugins": [{ "name": "next" }],
                "paths": { "@/*": ["./*"] }
            },
            "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
            "exclude": ["node_modules"]
        }),
        Framework::React => json!({
            "compilerOptions": {
                "target": "ES2020",
                "useDefineForClassFields": true,
                "lib": ["ES2020", "DOM", "DOM.Iterable"],
                "module": "ESNext",
                "skipLibCheck": true,
                "moduleResolution": "bundler",
                "allowImportingTsExtensions": true,
                "resolveJsonModule": true,
                "isolatedModules": true,
                "noEmit": true,
                "jsx": "react-jsx",
                "strict": true,
                "noUnusedLocals": true,
                "noUnusedParameters": true,
                "noFallthroughCasesInSwitch": true,
                "paths": { "@/*": ["./src/*"] }
            },
            "include": ["src"],
            "references": [{ "path": "./tsconfig.node.json" }]
        }),
        Framework::Node => json!({
            "compilerOptions": {
                "target": "ES2022",
                "module": "NodeNext",
                "moduleResolution": "NodeNext",
                "outDir": "./dist",
                "rootDir": "./src",
                "strict": true,
                "esModuleInterop": true,
                "skipLibCheck": true,
                "forceConsistentCasingInFileNames": true,
                "resolveJsonModule": true,
                "declaration": true,
                "declarationMap": true,
                "sourceMap": true
            },
            "include": ["src/**/*"],
            "exclude": ["node_modules", "dist"]
        }),
        Framework::Static => return None,
    };
    Some(config)
}

pub fn generate(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.is_typescript() {
        return None;
    }
    let config = profile(manifest.framework())?;
    Some(Artifact::new("tsconfig.json", pretty_json(&config)))
}

/// Type-checks `vite.config.ts`; React + TypeScript only.
pub fn generate_node(manifest: &Manifest) -> Option<Artifact> {
    if !manifest.is_typescript() || manifest.framework() != Framework::React {
        return None;
    }

    let config = json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true,
            "strict": true
        },
        "include": ["vite.config.ts"]
    });

    Some(Artifact::new("tsconfig.node.json", pretty_json(&config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, Styling};
    use crate::generators::test_support::{all_manifests, manifest};

    fn options(framework: Framework) -> Value {
        let m = manifest(framework, Language::Ts, Styling::None)
            .build()
            .unwrap();
        let json: Value = serde_json::from_str(&generate(&m).unwrap().content).unwrap();
        json["compilerOptions"].clone()
    }

    #[test]
    fn emitted_only_for_typescript_outside_static() {
        for m in all_manifests() {
            let expected = m.is_typescript() && m.framework() != Framework::Static;
            assert_eq!(generate(&m).is_some(), expected, "{m}");
        }
    }

    #[test]
    fn node_config_only_for_react_typescript() {
        for m in all_manifests() {
            let expected = m.is_typescript() && m.framework() == Framework::React;
            assert_eq!(generate_node(&m).is_some(), expected, "{m}");
        }
    }

    #[test]
    fn profiles_differ_per_framework() {
        let next = options(Framework::Next);
        assert_eq!(next["moduleResolution"], "bundler");
        assert_eq!(next["paths"]["@/*"][0], "./*");

        let react = options(Framework::React);
        assert_eq!(react["paths"]["@/*"][0], "./src/*");

        let node = options(Framework::Node);
        assert_eq!(node["module"], "NodeNext");
        assert_eq!(node["outDir"], "./dist");
        assert_eq!(node["rootDir"], "./src");
    }

    #[test]
    fn react_references_node_config() {
        let m = manifest(Framework::React, Language::Ts, Styling::Css)
            .build()
            .unwrap();
        let content = generate(&m).unwrap().content;
        assert!(content.contains("./tsconfig.node.json"));
        let node = generate_node(&m).unwrap();
        assert!(node.content.contains("vite.config.ts"));
    }
}
