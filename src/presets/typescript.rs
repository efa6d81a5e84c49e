//! Type-aware presets and the `@typescript-eslint` rule table.

use super::{err, err_with, off, rule_map};
use crate::fragment::{Fragment, RuleMap, Severity};
use crate::naming::naming_convention_setting;
use serde_json::json;

/// The default type-aware strict ruleset. The base composer scopes it to
/// source-like files unless the caller supplies an override.
pub fn strict_type_checked() -> Vec<Fragment> {
    let rules = rule_map([
        ("@typescript-eslint/await-thenable", err()),
        ("@typescript-eslint/no-array-delete", err()),
        ("@typescript-eslint/no-base-to-string", err()),
        ("@typescript-eslint/no-confusing-void-expression", err()),
        ("@typescript-eslint/no-duplicate-type-constituents", err()),
        ("@typescript-eslint/no-floating-promises", err()),
        ("@typescript-eslint/no-for-in-array", err()),
        ("@typescript-eslint/no-implied-eval", err()),
        ("@typescript-eslint/no-meaningless-void-operator", err()),
        ("@typescript-eslint/no-misused-promises", err()),
        ("@typescript-eslint/no-mixed-enums", err()),
        ("@typescript-eslint/no-redundant-type-constituents", err()),
        ("@typescript-eslint/no-unnecessary-boolean-literal-compare", err()),
        ("@typescript-eslint/no-unnecessary-condition", err()),
        ("@typescript-eslint/no-unnecessary-template-expression", err()),
        ("@typescript-eslint/no-unnecessary-type-assertion", err()),
        ("@typescript-eslint/no-unsafe-argument", err()),
        ("@typescript-eslint/no-unsafe-assignment", err()),
        ("@typescript-eslint/no-unsafe-call", err()),
        ("@typescript-eslint/no-unsafe-enum-comparison", err()),
        ("@typescript-eslint/no-unsafe-member-access", err()),
        ("@typescript-eslint/no-unsafe-return", err()),
        ("@typescript-eslint/no-unsafe-unary-minus", err()),
        ("@typescript-eslint/only-throw-error", err()),
        ("@typescript-eslint/prefer-promise-reject-errors", err()),
        ("@typescript-eslint/prefer-reduce-type-parameter", err()),
        ("@typescript-eslint/prefer-return-this-type", err()),
        ("@typescript-eslint/require-await", err()),
        ("@typescript-eslint/restrict-plus-operands", err()),
        ("@typescript-eslint/restrict-template-expressions", err()),
        ("@typescript-eslint/unbound-method", err()),
        ("@typescript-eslint/use-unknown-in-catch-callback-variable", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The `@typescript-eslint` portion of the main ruleset. Core rules that the
/// plugin reimplements are switched off next to their typed replacement.
pub fn rules() -> RuleMap {
    let mut rules = rule_map([
        ("@typescript-eslint/adjacent-overload-signatures", err()),
        (
            "@typescript-eslint/array-type",
            err_with(json!({ "default": "array-simple", "readonly": "array-simple" })),
        ),
        ("@typescript-eslint/await-thenable", err()),
        (
            "@typescript-eslint/ban-ts-comment",
            err_with(json!({
                "ts-expect-error": "allow-with-description",
                "ts-ignore": "allow-with-description",
                "ts-nocheck": "allow-with-description",
                "ts-check": false,
                "minimumDescriptionLength": 3
            })),
        ),
        ("@typescript-eslint/class-literal-property-style", err()),
        ("@typescript-eslint/consistent-generic-constructors", err()),
        ("@typescript-eslint/consistent-indexed-object-style", err()),
        (
            "@typescript-eslint/consistent-type-assertions",
            err_with(json!({
                "assertionStyle": "as",
                "objectLiteralTypeAssertions": "never"
            })),
        ),
        ("@typescript-eslint/consistent-type-definitions", err()),
        ("@typescript-eslint/consistent-type-exports", err()),
        ("@typescript-eslint/consistent-type-imports", err()),
        ("default-param-last", off()),
        ("@typescript-eslint/default-param-last", err()),
        ("dot-notation", off()),
        ("@typescript-eslint/dot-notation", err()),
        (
            "@typescript-eslint/explicit-function-return-type",
            err_with(json!({ "allowExpressions": true })),
        ),
        (
            "@typescript-eslint/explicit-member-accessibility",
            err_with(json!({
                "accessibility": "no-public",
                "overrides": { "parameterProperties": "off" }
            })),
        ),
        ("@typescript-eslint/explicit-module-boundary-types", err()),
        ("max-params", off()),
        ("@typescript-eslint/max-params", err_with(json!({ "max": 3 }))),
        (
            "@typescript-eslint/member-ordering",
            err_with(json!({
                "default": {
                    "optionalityOrder": "required-first",
                    "memberTypes": [
                        "signature",
                        "call-signature",
                        "public-static-field",
                        "protected-static-field",
                        "private-static-field",
                        "#private-static-field",
                        [
                            "public-static-get",
                            "public-static-set",
                            "protected-static-get",
                            "protected-static-set",
                            "private-static-get",
                            "private-static-set",
                            "#private-static-get",
                            "#private-static-set"
                        ],
                        "public-static-method",
                        "protected-static-method",
                        "private-static-method",
                        "#private-static-method",
                        "static-initialization",
                        "public-decorated-field",
                        "protected-decorated-field",
                        "private-decorated-field",
                        "public-abstract-field",
                        "protected-abstract-field",
                        "public-instance-field",
                        "protected-instance-field",
                        "private-instance-field",
                        "#private-instance-field",
                        [
                            "public-instance-get",
                            "public-instance-set",
                            "protected-instance-get",
                            "protected-instance-set",
                            "private-instance-get",
                            "private-instance-set",
                            "#private-instance-get",
                            "#private-instance-set"
                        ],
                        "public-constructor",
                        "protected-constructor",
                        "private-constructor",
                        "public-abstract-method",
                        "protected-abstract-method",
                        "public-decorated-method",
                        "protected-decorated-method",
                        "private-decorated-method",
                        "public-instance-method",
                        "protected-instance-method",
                        "private-instance-method",
                        "#private-instance-method"
                    ]
                }
            })),
        ),
        ("@typescript-eslint/method-signature-style", err()),
        ("no-array-constructor", off()),
        ("@typescript-eslint/no-array-constructor", err()),
        ("@typescript-eslint/no-array-delete", err()),
        ("@typescript-eslint/no-base-to-string", err()),
        ("@typescript-eslint/no-confusing-non-null-assertion", err()),
        ("@typescript-eslint/no-confusing-void-expression", err()),
        ("@typescript-eslint/no-deprecated", err()),
        ("@typescript-eslint/no-duplicate-enum-values", err()),
        ("@typescript-eslint/no-duplicate-type-constituents", err()),
        ("@typescript-eslint/no-dynamic-delete", err()),
        ("@typescript-eslint/no-empty-interface", off()),
        (
            "@typescript-eslint/no-empty-object-type",
            err_with(json!({ "allowInterfaces": "always" })),
        ),
        ("@typescript-eslint/no-explicit-any", err()),
        ("@typescript-eslint/no-extra-non-null-assertion", err()),
        ("@typescript-eslint/no-extraneous-class", off()),
        ("@typescript-eslint/no-floating-promises", err()),
        ("@typescript-eslint/no-for-in-array", err()),
        ("no-implied-eval", off()),
        ("@typescript-eslint/no-implied-eval", err()),
        ("@typescript-eslint/no-import-type-side-effects", err()),
        ("@typescript-eslint/no-inferrable-types", err()),
        ("@typescript-eslint/no-invalid-void-type", err()),
        ("no-loop-func", off()),
        ("@typescript-eslint/no-loop-func", err()),
        ("no-loss-of-precision", off()),
        ("@typescript-eslint/no-loss-of-precision", err()),
        ("@typescript-eslint/no-meaningless-void-operator", err()),
        ("@typescript-eslint/no-misused-new", err()),
        ("@typescript-eslint/no-misused-promises", err()),
        ("@typescript-eslint/no-mixed-enums", err()),
        (
            "@typescript-eslint/no-namespace",
            err_with(json!({ "allowDeclarations": true, "allowDefinitionFiles": true })),
        ),
        ("@typescript-eslint/no-non-null-asserted-nullish-coalescing", err()),
        ("@typescript-eslint/no-non-null-asserted-optional-chain", err()),
        ("@typescript-eslint/no-non-null-assertion", err()),
        ("@typescript-eslint/no-redundant-type-constituents", err()),
        ("@typescript-eslint/no-require-imports", err()),
        ("no-shadow", off()),
        ("@typescript-eslint/no-shadow", err()),
        ("@typescript-eslint/no-this-alias", err()),
        ("@typescript-eslint/no-unnecessary-boolean-literal-compare", err()),
        ("@typescript-eslint/no-unnecessary-condition", err()),
        ("@typescript-eslint/no-unnecessary-qualifier", err()),
        ("@typescript-eslint/no-unnecessary-template-expression", err()),
        ("@typescript-eslint/no-unnecessary-type-arguments", off()),
        ("@typescript-eslint/no-unnecessary-type-assertion", err()),
        ("@typescript-eslint/no-unnecessary-type-constraint", err()),
        ("@typescript-eslint/no-unsafe-argument", err()),
        ("@typescript-eslint/no-unsafe-assignment", err()),
        ("@typescript-eslint/no-unsafe-call", err()),
        ("@typescript-eslint/no-unsafe-declaration-merging", err()),
        ("@typescript-eslint/no-unsafe-enum-comparison", err()),
        ("@typescript-eslint/no-unsafe-member-access", err()),
        ("@typescript-eslint/no-unsafe-return", err()),
        ("@typescript-eslint/no-unsafe-unary-minus", err()),
        ("no-unused-expressions", off()),
        ("@typescript-eslint/no-unused-expressions", err()),
        ("no-unused-vars", off()),
        (
            "@typescript-eslint/no-unused-vars",
            err_with(json!({
                "argsIgnorePattern": "^_",
                "varsIgnorePattern": "^_",
                "caughtErrorsIgnorePattern": "^_"
            })),
        ),
        ("no-use-before-define", off()),
        ("@typescript-eslint/no-use-before-define", off()),
        ("no-useless-constructor", off()),
        ("@typescript-eslint/no-useless-constructor", off()),
        ("@typescript-eslint/no-useless-empty-export", err()),
        ("@typescript-eslint/no-var-requires", err()),
        ("@typescript-eslint/non-nullable-type-assertion-style", err()),
        ("no-throw-literal", off()),
        ("@typescript-eslint/only-throw-error", err()),
        ("@typescript-eslint/prefer-as-const", err()),
        ("@typescript-eslint/prefer-enum-initializers", err()),
        ("@typescript-eslint/prefer-find", err()),
        ("@typescript-eslint/prefer-for-of", err()),
        ("@typescript-eslint/prefer-function-type", err()),
        ("@typescript-eslint/prefer-includes", err()),
        ("@typescript-eslint/prefer-literal-enum-member", err()),
        ("@typescript-eslint/prefer-namespace-keyword", err()),
        ("@typescript-eslint/prefer-nullish-coalescing", err()),
        ("@typescript-eslint/prefer-optional-chain", err()),
        ("prefer-promise-reject-errors", off()),
        ("@typescript-eslint/prefer-promise-reject-errors", err()),
        ("@typescript-eslint/prefer-readonly", err()),
        ("@typescript-eslint/prefer-reduce-type-parameter", err()),
        ("@typescript-eslint/prefer-regexp-exec", err()),
        ("@typescript-eslint/prefer-return-this-type", err()),
        ("@typescript-eslint/prefer-string-starts-ends-with", err()),
        ("@typescript-eslint/prefer-ts-expect-error", err()),
        ("@typescript-eslint/promise-function-async", err()),
        ("@typescript-eslint/require-array-sort-compare", err()),
        ("require-await", off()),
        ("@typescript-eslint/require-await", err()),
        ("@typescript-eslint/restrict-plus-operands", err()),
        ("@typescript-eslint/restrict-template-expressions", err()),
        ("no-return-await", off()),
        ("@typescript-eslint/return-await", err_with(json!(["always"]))),
        ("@typescript-eslint/strict-boolean-expressions", err()),
        ("@typescript-eslint/switch-exhaustiveness-check", err()),
        ("@typescript-eslint/triple-slash-reference", err()),
        ("@typescript-eslint/unbound-method", err()),
        ("@typescript-eslint/unified-signatures", err()),
        ("@typescript-eslint/use-unknown-in-catch-callback-variable", err()),
    ]);

    rules.insert(
        "@typescript-eslint/naming-convention".to_string(),
        naming_convention_setting(Severity::Error, &[]),
    );

    rules
}
