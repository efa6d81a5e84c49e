//! Engine-recommended baseline and the main core rule table.

use super::{err, err_with, rule_map};
use crate::fragment::{Fragment, RuleMap};
use serde_json::json;

/// The engine's recommended baseline. Always the second position of a
/// composed sequence, unscoped.
pub fn recommended() -> Vec<Fragment> {
    let rules = rule_map([
        ("constructor-super", err()),
        ("for-direction", err()),
        ("getter-return", err()),
        ("no-async-promise-executor", err()),
        ("no-case-declarations", err()),
        ("no-class-assign", err()),
        ("no-compare-neg-zero", err()),
        ("no-cond-assign", err()),
        ("no-const-assign", err()),
        ("no-constant-binary-expression", err()),
        ("no-constant-condition", err()),
        ("no-control-regex", err()),
        ("no-debugger", err()),
        ("no-delete-var", err()),
        ("no-dupe-args", err()),
        ("no-dupe-class-members", err()),
        ("no-dupe-else-if", err()),
        ("no-dupe-keys", err()),
        ("no-duplicate-case", err()),
        ("no-empty", err()),
        ("no-empty-character-class", err()),
        ("no-empty-pattern", err()),
        ("no-empty-static-block", err()),
        ("no-ex-assign", err()),
        ("no-extra-boolean-cast", err()),
        ("no-fallthrough", err()),
        ("no-func-assign", err()),
        ("no-global-assign", err()),
        ("no-import-assign", err()),
        ("no-invalid-regexp", err()),
        ("no-irregular-whitespace", err()),
        ("no-loss-of-precision", err()),
        ("no-misleading-character-class", err()),
        ("no-new-native-nonconstructor", err()),
        ("no-nonoctal-decimal-escape", err()),
        ("no-obj-calls", err()),
        ("no-octal", err()),
        ("no-prototype-builtins", err()),
        ("no-redeclare", err()),
        ("no-regex-spaces", err()),
        ("no-self-assign", err()),
        ("no-setter-return", err()),
        ("no-shadow-restricted-names", err()),
        ("no-sparse-arrays", err()),
        ("no-this-before-super", err()),
        ("no-undef", err()),
        ("no-unexpected-multiline", err()),
        ("no-unreachable", err()),
        ("no-unsafe-finally", err()),
        ("no-unsafe-negation", err()),
        ("no-unsafe-optional-chaining", err()),
        ("no-unused-labels", err()),
        ("no-unused-private-class-members", err()),
        ("no-unused-vars", err()),
        ("no-useless-backreference", err()),
        ("no-useless-catch", err()),
        ("no-useless-escape", err()),
        ("no-with", err()),
        ("require-yield", err()),
        ("use-isnan", err()),
        ("valid-typeof", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// Core "Possible Problems" and "Suggestions" rules for the main ruleset
/// fragment.
pub fn main_rules() -> RuleMap {
    let mut rules = rule_map([
        // core / "Possible Problems"
        ("no-async-promise-executor", err()),
        ("no-compare-neg-zero", err()),
        ("no-cond-assign", err()),
        ("no-constant-binary-expression", err()),
        ("no-constant-condition", err()),
        ("no-control-regex", err()),
        ("no-debugger", err()),
        ("no-dupe-else-if", err()),
        ("no-empty-character-class", err()),
        ("no-empty-pattern", err()),
        ("no-ex-assign", err()),
        ("no-fallthrough", err()),
        ("no-inner-declarations", err()),
        ("no-invalid-regexp", err()),
        ("no-irregular-whitespace", err()),
        ("no-misleading-character-class", err()),
        ("no-promise-executor-return", err()),
        ("no-prototype-builtins", err()),
        ("no-self-assign", err()),
        ("no-self-compare", err()),
        ("no-sparse-arrays", err()),
        ("no-template-curly-in-string", err()),
        ("no-unexpected-multiline", err()),
        ("no-unmodified-loop-condition", err()),
        ("no-unreachable", err()),
        ("no-unreachable-loop", err()),
        ("no-unsafe-finally", err()),
        ("no-unsafe-negation", err()),
        ("no-unsafe-optional-chaining", err()),
        ("no-unused-private-class-members", err()),
        ("no-useless-assignment", err()),
        ("no-useless-backreference", err()),
        ("require-atomic-updates", err()),
        ("use-isnan", err()),
    ]);

    rules.extend(rule_map([
        // core / "Suggestions"
        ("curly", err_with(json!(["all"]))),
        ("default-case", err()),
        ("default-case-last", err()),
        ("eqeqeq", err()),
        ("grouped-accessor-pairs", err()),
        (
            "max-classes-per-file",
            err_with(json!({ "ignoreExpressions": true, "max": 1 })),
        ),
        ("max-depth", err_with(json!(5))),
        (
            "max-lines",
            err_with(json!({ "max": 1000, "skipBlankLines": true, "skipComments": true })),
        ),
        (
            "max-lines-per-function",
            err_with(json!({
                "max": 80,
                "skipBlankLines": true,
                "skipComments": true,
                "IIFEs": true
            })),
        ),
        ("max-nested-callbacks", err_with(json!(3))),
        ("no-alert", err()),
        ("no-bitwise", err()),
        ("no-caller", err()),
        ("no-case-declarations", err()),
        ("no-console", err()),
        ("no-delete-var", err()),
        ("no-div-regex", err()),
        ("no-eval", err()),
        ("no-extend-native", err()),
        ("no-extra-bind", err()),
        ("no-extra-label", err()),
        ("no-global-assign", err()),
        ("no-implicit-coercion", err()),
        ("no-iterator", err()),
        ("no-label-var", err()),
        ("no-labels", err()),
        ("no-lone-blocks", err()),
        ("no-multi-assign", err()),
        ("no-negated-condition", err()),
        ("no-new", err()),
        ("no-new-func", err()),
        ("no-new-wrappers", err()),
        ("no-nonoctal-decimal-escape", err()),
        ("no-object-constructor", err()),
        ("no-octal", err()),
        ("no-octal-escape", err()),
        ("no-param-reassign", err_with(json!({ "props": true }))),
        ("no-proto", err()),
        ("no-regex-spaces", err()),
        ("no-return-assign", err()),
        ("no-script-url", err()),
        ("no-sequences", err()),
        ("no-shadow-restricted-names", err()),
        ("no-unneeded-ternary", err()),
        ("no-unused-labels", err()),
        ("no-useless-call", err()),
        ("no-useless-catch", err()),
        ("no-useless-computed-key", err()),
        ("no-useless-concat", err()),
        ("no-useless-escape", err()),
        ("no-useless-rename", err()),
        ("no-var", err()),
        ("no-void", err_with(json!({ "allowAsStatement": true }))),
        (
            "no-warning-comments",
            err_with(json!({
                "terms": ["todo", "fixme"],
                "location": "start",
                "decoration": ["*", "/", "@"]
            })),
        ),
        ("no-with", err()),
        ("one-var", err_with(json!(["never"]))),
        ("prefer-arrow-callback", err()),
        ("prefer-const", err()),
        ("prefer-exponentiation-operator", err()),
        ("prefer-named-capture-group", err()),
        ("prefer-numeric-literals", err()),
        ("prefer-object-has-own", err()),
        ("prefer-object-spread", err()),
        ("prefer-regex-literals", err()),
        ("prefer-rest-params", err()),
        ("prefer-spread", err()),
        ("prefer-template", err()),
        ("radix", err()),
        ("require-unicode-regexp", err()),
        ("require-yield", err()),
        (
            "sort-imports",
            err_with(json!({ "ignoreDeclarationSort": true })),
        ),
        ("symbol-description", err()),
        ("yoda", err()),
    ]));

    rules
}
