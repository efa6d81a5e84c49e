//! Vue presets and rule fragments.

use super::{err, err_with, off, rule_map};
use crate::fragment::Fragment;
use serde_json::json;

pub fn recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("vue/multi-word-component-names", err()),
        ("vue/no-arrow-functions-in-watch", err()),
        ("vue/no-async-in-computed-properties", err()),
        ("vue/no-dupe-keys", err()),
        ("vue/no-duplicate-attributes", err()),
        ("vue/no-mutating-props", err()),
        ("vue/no-parsing-error", err()),
        ("vue/no-reserved-component-names", err()),
        ("vue/no-reserved-keys", err()),
        ("vue/no-side-effects-in-computed-properties", err()),
        ("vue/no-template-key", err()),
        ("vue/no-textarea-mustache", err()),
        ("vue/no-unused-components", err()),
        ("vue/no-unused-vars", err()),
        ("vue/no-use-v-if-with-v-for", err()),
        ("vue/require-component-is", err()),
        ("vue/require-render-return", err()),
        ("vue/require-v-for-key", err()),
        ("vue/require-valid-default-prop", err()),
        ("vue/return-in-computed-property", err()),
        ("vue/valid-template-root", err()),
        ("vue/valid-v-bind", err()),
        ("vue/valid-v-for", err()),
        ("vue/valid-v-if", err()),
        ("vue/valid-v-model", err()),
        ("vue/valid-v-on", err()),
        ("vue/valid-v-slot", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The type-aware strict base adjusted for single-file components. Replaces
/// the default strict ruleset through the `ts_ruleset` override slot.
pub fn strict_type_checked() -> Vec<Fragment> {
    let mut fragments = crate::presets::typescript::strict_type_checked();
    for fragment in &mut fragments {
        fragment.language_options = Some(json!({
            "parserOptions": {
                "extraFileExtensions": [".vue"]
            }
        }));
    }
    fragments
}

/// Opinionated template and component-shape rules.
pub fn rules_fragment() -> Fragment {
    Fragment::builder()
        .rules(rule_map([
            ("vue/attribute-hyphenation", err()),
            ("vue/component-definition-name-casing", err()),
            ("vue/first-attribute-linebreak", err()),
            ("vue/html-closing-bracket-newline", err()),
            ("vue/html-closing-bracket-spacing", err()),
            ("vue/html-end-tags", err()),
            ("vue/html-indent", err()),
            ("vue/html-quotes", err()),
            ("vue/html-self-closing", err()),
            ("vue/max-attributes-per-line", err()),
            ("vue/multiline-html-element-content-newline", err()),
            ("vue/mustache-interpolation-spacing", err()),
            ("vue/no-multi-spaces", err()),
            ("vue/no-spaces-around-equal-signs-in-attribute", err()),
            ("vue/no-template-shadow", err()),
            ("vue/one-component-per-file", err()),
            ("vue/prop-name-casing", err()),
            ("vue/require-default-prop", err()),
            ("vue/require-explicit-emits", err()),
            ("vue/require-prop-types", err()),
            ("vue/singleline-html-element-content-newline", err()),
            ("vue/v-bind-style", err()),
            (
                "vue/v-on-event-hyphenation",
                err_with(json!(["always", { "autofix": true }])),
            ),
            ("vue/v-on-style", err()),
            ("vue/v-slot-style", err()),
            ("vue/attributes-order", err()),
            ("vue/block-order", err()),
            ("vue/no-lone-template", err()),
            ("vue/no-multiple-slot-args", err()),
            ("vue/no-required-prop-with-default", err()),
            ("vue/no-v-html", err()),
            ("vue/order-in-components", err()),
            ("vue/this-in-template", err()),
        ]))
        .build()
}

/// Compiler-generated bindings trip the assignment analysis in `.vue` files.
pub fn vue_files_fragment() -> Fragment {
    Fragment::builder()
        .files(["**/*.vue"])
        .rule("no-useless-assignment", off())
        .build()
}

/// The bundler config conventionally default-exports and uses dev
/// dependencies.
pub fn vite_config_fragment() -> Fragment {
    Fragment::builder()
        .files(["vite.config.ts"])
        .rule("import/no-default-export", off())
        .rule("import/no-extraneous-dependencies", off())
        .build()
}
