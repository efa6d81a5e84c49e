//! React-family presets and rule fragments.

use super::{err, err_with, off, rule_map};
use crate::fragment::{Fragment, Severity};
use crate::naming::{NamingSelector, PredefinedFormat, SelectorKind, naming_convention_setting};
use serde_json::json;

pub fn recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("react/display-name", err()),
        ("react/jsx-key", err()),
        ("react/jsx-no-comment-textnodes", err()),
        ("react/jsx-no-duplicate-props", err()),
        ("react/jsx-no-target-blank", err()),
        ("react/jsx-no-undef", err()),
        ("react/jsx-uses-react", err()),
        ("react/jsx-uses-vars", err()),
        ("react/no-children-prop", err()),
        ("react/no-danger-with-children", err()),
        ("react/no-deprecated", err()),
        ("react/no-direct-mutation-state", err()),
        ("react/no-find-dom-node", err()),
        ("react/no-is-mounted", err()),
        ("react/no-render-return-value", err()),
        ("react/no-string-refs", err()),
        ("react/no-unescaped-entities", err()),
        ("react/no-unknown-property", err()),
        ("react/prop-types", err()),
        ("react/react-in-jsx-scope", err()),
        ("react/require-render-return", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The modern-runtime addendum: the two rules the automatic JSX transform
/// makes obsolete switch off.
pub fn jsx_runtime() -> Vec<Fragment> {
    let rules = rule_map([
        ("react/jsx-uses-react", off()),
        ("react/react-in-jsx-scope", off()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

pub fn hooks_recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("react-hooks/exhaustive-deps", super::warn()),
        ("react-hooks/rules-of-hooks", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

pub fn refresh_recommended() -> Vec<Fragment> {
    let rules = rule_map([("react-refresh/only-export-components", err())]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

pub fn jsx_a11y_recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("jsx-a11y/alt-text", err()),
        ("jsx-a11y/anchor-has-content", err()),
        ("jsx-a11y/anchor-is-valid", err()),
        ("jsx-a11y/aria-props", err()),
        ("jsx-a11y/aria-proptypes", err()),
        ("jsx-a11y/aria-role", err()),
        ("jsx-a11y/aria-unsupported-elements", err()),
        ("jsx-a11y/click-events-have-key-events", err()),
        ("jsx-a11y/heading-has-content", err()),
        ("jsx-a11y/html-has-lang", err()),
        ("jsx-a11y/iframe-has-title", err()),
        ("jsx-a11y/img-redundant-alt", err()),
        ("jsx-a11y/no-access-key", err()),
        ("jsx-a11y/no-autofocus", err()),
        ("jsx-a11y/no-distracting-elements", err()),
        ("jsx-a11y/no-redundant-roles", err()),
        ("jsx-a11y/role-has-required-aria-props", err()),
        ("jsx-a11y/role-supports-aria-props", err()),
        ("jsx-a11y/scope", err()),
        ("jsx-a11y/tabindex-no-positive", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The main React rules fragment: version detection plus the opinionated
/// react / react-hooks / react-refresh / jsx-a11y settings.
pub fn rules_fragment() -> Fragment {
    Fragment::builder()
        .settings(json!({ "react": { "version": "detect" } }))
        .rules(rule_map([
            // plugin: react
            (
                "react/boolean-prop-naming",
                err_with(json!({ "rule": "^(has|is|should|with)[A-Z]([A-Za-z0-9]?)+" })),
            ),
            ("react/button-has-type", err()),
            ("react/destructuring-assignment", err_with(json!(["never"]))),
            ("react/display-name", err()),
            ("react/function-component-definition", err()),
            ("react/hook-use-state", err()),
            ("react/iframe-missing-sandbox", err()),
            ("react/jsx-fragments", err()),
            ("react/jsx-handler-names", err()),
            (
                "react/jsx-key",
                err_with(json!({ "checkFragmentShorthand": true, "warnOnDuplicates": true })),
            ),
            ("react/jsx-max-depth", err_with(json!({ "max": 8 }))),
            ("react/jsx-no-bind", err()),
            ("react/jsx-no-comment-textnodes", err()),
            ("react/jsx-no-constructed-context-values", err()),
            ("react/jsx-no-duplicate-props", err()),
            ("react/jsx-no-leaked-render", err()),
            ("react/jsx-no-script-url", err()),
            ("react/jsx-no-target-blank", err()),
            ("react/jsx-props-no-spreading", err()),
            ("react/jsx-uses-react", off()),
            ("react/no-array-index-key", err()),
            ("react/no-children-prop", err()),
            ("react/no-danger", err()),
            ("react/no-danger-with-children", err()),
            ("react/no-deprecated", err()),
            ("react/no-object-type-as-default-prop", err()),
            ("react/no-render-return-value", err()),
            ("react/no-string-refs", err()),
            ("react/no-this-in-sfc", err()),
            ("react/no-unescaped-entities", err()),
            ("react/no-unstable-nested-components", err()),
            ("react/prefer-stateless-function", err()),
            ("react/react-in-jsx-scope", off()),
            ("react/require-render-return", err()),
            ("react/self-closing-comp", err()),
            // plugin: react-hooks
            ("react-hooks/exhaustive-deps", err()),
            ("react-hooks/rules-of-hooks", err()),
            // plugin: react-refresh
            (
                "react-refresh/only-export-components",
                err_with(json!({ "allowConstantExport": true })),
            ),
            // plugin: jsx-a11y
            (
                "jsx-a11y/alt-text",
                err_with(json!({ "elements": ["img"], "img": ["Image"] })),
            ),
            ("jsx-a11y/anchor-has-content", err()),
            ("jsx-a11y/anchor-is-valid", err()),
            ("jsx-a11y/aria-activedescendant-has-tabindex", err()),
            ("jsx-a11y/aria-props", err()),
            ("jsx-a11y/aria-proptypes", err()),
            ("jsx-a11y/aria-role", err()),
            ("jsx-a11y/aria-unsupported-elements", err()),
            ("jsx-a11y/autocomplete-valid", err()),
            ("jsx-a11y/click-events-have-key-events", err()),
            ("jsx-a11y/control-has-associated-label", err()),
            ("jsx-a11y/heading-has-content", err()),
            ("jsx-a11y/html-has-lang", err()),
            ("jsx-a11y/iframe-has-title", err()),
            ("jsx-a11y/img-redundant-alt", err()),
            ("jsx-a11y/interactive-supports-focus", err()),
            ("jsx-a11y/label-has-associated-control", err()),
            ("jsx-a11y/lang", err()),
            ("jsx-a11y/media-has-caption", err()),
            ("jsx-a11y/mouse-events-have-key-events", err()),
            ("jsx-a11y/no-access-key", err()),
            ("jsx-a11y/no-aria-hidden-on-focusable", err()),
            ("jsx-a11y/no-autofocus", err()),
            ("jsx-a11y/no-distracting-elements", err()),
            ("jsx-a11y/no-interactive-element-to-noninteractive-role", err()),
            ("jsx-a11y/no-noninteractive-element-interactions", err()),
            ("jsx-a11y/no-noninteractive-element-to-interactive-role", err()),
            ("jsx-a11y/no-noninteractive-tabindex", err()),
            ("jsx-a11y/no-redundant-roles", err()),
            ("jsx-a11y/no-static-element-interactions", err()),
            ("jsx-a11y/prefer-tag-over-role", err()),
            ("jsx-a11y/role-has-required-aria-props", err()),
            ("jsx-a11y/role-supports-aria-props", err()),
            ("jsx-a11y/scope", err()),
            ("jsx-a11y/tabindex-no-positive", err()),
        ]))
        .build()
}

/// Component files get a longer function budget and may use PascalCase
/// function components; explicit return types stop being required.
pub fn tsx_overrides_fragment() -> Fragment {
    let component_naming = NamingSelector::new(
        vec![SelectorKind::Function, SelectorKind::Variable],
        vec![
            PredefinedFormat::StrictCamelCase,
            PredefinedFormat::StrictPascalCase,
        ],
    );

    Fragment::builder()
        .files(["**/*.tsx"])
        .rule(
            "max-lines-per-function",
            err_with(json!({
                "max": 300,
                "skipBlankLines": true,
                "skipComments": true,
                "IIFEs": true
            })),
        )
        .rule("@typescript-eslint/explicit-function-return-type", off())
        .rule("@typescript-eslint/explicit-module-boundary-types", off())
        .rule(
            "@typescript-eslint/naming-convention",
            naming_convention_setting(Severity::Error, &[component_naming]),
        )
        .build()
}
