//! Import-hygiene presets and rule table.

use super::{err, err_with, rule_map, warn};
use crate::fragment::{Fragment, RuleMap, TEST_FILES};
use serde_json::json;

/// The import plugin's recommended preset.
pub fn recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("import/default", err()),
        ("import/export", err()),
        ("import/named", err()),
        ("import/namespace", err()),
        ("import/no-duplicates", warn()),
        ("import/no-named-as-default", warn()),
        ("import/no-named-as-default-member", warn()),
        ("import/no-unresolved", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The import plugin's TypeScript adjustments: resolution is delegated to the
/// type checker, so the syntactic resolution rules switch off.
pub fn typescript() -> Vec<Fragment> {
    let rules = rule_map([
        ("import/named", super::off()),
        ("import/no-unresolved", super::off()),
    ]);
    let settings = json!({
        "import/extensions": [".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs"],
        "import/external-module-folders": ["node_modules", "node_modules/@types"]
    });
    vec![Fragment {
        rules,
        settings: Some(settings),
        ..Fragment::default()
    }]
}

/// The `import/*` portion of the main ruleset.
pub fn rules() -> RuleMap {
    rule_map([
        ("import/first", err()),
        ("import/no-amd", err()),
        ("import/no-anonymous-default-export", err()),
        ("import/no-commonjs", err()),
        ("import/no-cycle", err()),
        ("import/no-default-export", err()),
        ("import/no-deprecated", err()),
        ("import/no-dynamic-require", err()),
        ("import/no-empty-named-blocks", err()),
        (
            "import/no-extraneous-dependencies",
            err_with(json!({
                "devDependencies": TEST_FILES,
                "optionalDependencies": false,
                "peerDependencies": false
            })),
        ),
        ("import/no-mutable-exports", err()),
        ("import/no-named-as-default", err()),
        ("import/no-named-as-default-member", err()),
        ("import/no-named-default", err()),
        ("import/no-self-import", err()),
        ("import/no-useless-path-segments", err()),
        ("import/no-webpack-loader-syntax", err()),
        (
            "import/order",
            err_with(json!({
                "groups": [
                    "builtin", "external", "internal", "parent", "sibling", "index", "object"
                ],
                "newlines-between": "never",
                "alphabetize": { "order": "asc", "caseInsensitive": true },
                "warnOnUnassignedImports": true,
                "pathGroupsExcludedImportTypes": [],
                "pathGroups": [
                    { "pattern": "@/**", "group": "parent", "position": "before" },
                    { "pattern": "./**/*.json", "group": "sibling", "position": "after" },
                    {
                        "pattern": "{./**/*.scss,./**/*.css}",
                        "group": "object",
                        "position": "after"
                    }
                ]
            })),
        ),
    ])
}
