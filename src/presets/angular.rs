//! Angular presets.

use super::{err, err_with, rule_map};
use crate::fragment::Fragment;
use serde_json::json;

/// Processor token for components with inline templates.
pub const INLINE_TEMPLATES_PROCESSOR: &str = "angular/process-inline-templates";

pub fn ts_recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("@angular-eslint/component-class-suffix", err()),
        (
            "@angular-eslint/component-selector",
            err_with(json!({ "type": "element", "prefix": "app", "style": "kebab-case" })),
        ),
        ("@angular-eslint/contextual-lifecycle", err()),
        ("@angular-eslint/directive-class-suffix", err()),
        (
            "@angular-eslint/directive-selector",
            err_with(json!({ "type": "attribute", "prefix": "app", "style": "camelCase" })),
        ),
        ("@angular-eslint/no-empty-lifecycle-method", err()),
        ("@angular-eslint/no-input-rename", err()),
        ("@angular-eslint/no-inputs-metadata-property", err()),
        ("@angular-eslint/no-output-native", err()),
        ("@angular-eslint/no-output-on-prefix", err()),
        ("@angular-eslint/no-output-rename", err()),
        ("@angular-eslint/no-outputs-metadata-property", err()),
        ("@angular-eslint/prefer-standalone", err()),
        ("@angular-eslint/use-lifecycle-interface", err()),
        ("@angular-eslint/use-pipe-transform-interface", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

pub fn template_recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("@angular-eslint/template/banana-in-box", err()),
        ("@angular-eslint/template/eqeqeq", err()),
        ("@angular-eslint/template/no-negated-async", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

pub fn template_accessibility() -> Vec<Fragment> {
    let rules = rule_map([
        ("@angular-eslint/template/alt-text", err()),
        ("@angular-eslint/template/click-events-have-key-events", err()),
        ("@angular-eslint/template/elements-content", err()),
        ("@angular-eslint/template/interactive-supports-focus", err()),
        ("@angular-eslint/template/label-has-associated-control", err()),
        ("@angular-eslint/template/mouse-events-have-key-events", err()),
        ("@angular-eslint/template/no-autofocus", err()),
        ("@angular-eslint/template/no-distracting-elements", err()),
        ("@angular-eslint/template/role-has-required-aria", err()),
        ("@angular-eslint/template/table-scope", err()),
        ("@angular-eslint/template/valid-aria", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}
