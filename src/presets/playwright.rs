//! Test-runner integration preset and its overrides.

use super::{err, err_with, off, rule_map, warn};
use crate::fragment::RuleMap;
use serde_json::json;

/// The playwright plugin's recommended rules.
pub fn recommended_rules() -> RuleMap {
    rule_map([
        ("playwright/expect-expect", warn()),
        ("playwright/max-nested-describe", warn()),
        ("playwright/missing-playwright-await", err()),
        ("playwright/no-conditional-expect", warn()),
        ("playwright/no-conditional-in-test", warn()),
        ("playwright/no-element-handle", warn()),
        ("playwright/no-eval", warn()),
        ("playwright/no-focused-test", err()),
        ("playwright/no-force-option", warn()),
        ("playwright/no-nested-step", warn()),
        ("playwright/no-networkidle", err()),
        ("playwright/no-page-pause", warn()),
        ("playwright/no-skipped-test", warn()),
        ("playwright/no-standalone-expect", err()),
        ("playwright/no-unsafe-references", err()),
        ("playwright/no-useless-await", warn()),
        ("playwright/no-useless-not", warn()),
        ("playwright/no-wait-for-selector", warn()),
        ("playwright/no-wait-for-timeout", warn()),
        ("playwright/prefer-web-first-assertions", err()),
        ("playwright/valid-describe-callback", err()),
        ("playwright/valid-expect", err()),
        ("playwright/valid-expect-in-promise", err()),
        ("playwright/valid-title", err()),
    ])
}

/// Overrides layered over the recommended rules in the test-file fragment:
/// size limits inherited from the main ruleset relax, naming conventions stop
/// applying, and most advisory rules harden to errors.
pub fn overrides() -> RuleMap {
    rule_map([
        // core / "Suggestions"
        ("max-classes-per-file", off()),
        ("max-depth", off()),
        ("max-lines", off()),
        ("max-lines-per-function", off()),
        ("max-nested-callbacks", off()),
        // plugin: @typescript-eslint
        ("@typescript-eslint/naming-convention", off()),
        ("@typescript-eslint/no-unnecessary-boolean-literal-compare", off()),
        // plugin: playwright
        ("playwright/expect-expect", err()),
        ("playwright/max-expects", err_with(json!({ "max": 20 }))),
        ("playwright/max-nested-describe", err_with(json!({ "max": 5 }))),
        ("playwright/missing-playwright-await", err()),
        ("playwright/no-commented-out-tests", err()),
        ("playwright/no-conditional-expect", err()),
        ("playwright/no-conditional-in-test", err()),
        ("playwright/no-duplicate-hooks", err()),
        ("playwright/no-element-handle", err()),
        ("playwright/no-eval", err()),
        ("playwright/no-focused-test", err()),
        ("playwright/no-force-option", err()),
        ("playwright/no-get-by-title", err()),
        ("playwright/no-hooks", off()),
        ("playwright/no-nested-step", err()),
        ("playwright/no-networkidle", err()),
        ("playwright/no-nth-methods", err()),
        ("playwright/no-page-pause", err()),
        ("playwright/no-raw-locators", off()),
        ("playwright/no-restricted-matchers", err_with(json!({}))),
        ("playwright/no-skipped-test", err()),
        ("playwright/no-standalone-expect", err()),
        ("playwright/no-unsafe-references", err()),
        ("playwright/no-useless-await", err()),
        ("playwright/no-useless-not", err()),
        ("playwright/no-wait-for-selector", err()),
        ("playwright/no-wait-for-timeout", err()),
        ("playwright/prefer-comparison-matcher", err()),
        ("playwright/prefer-equality-matcher", err()),
        ("playwright/prefer-hooks-in-order", err()),
        ("playwright/prefer-hooks-on-top", err()),
        ("playwright/prefer-lowercase-title", off()),
        ("playwright/prefer-strict-equal", err()),
        ("playwright/prefer-to-be", err()),
        ("playwright/prefer-to-contain", err()),
        ("playwright/prefer-to-have-count", err()),
        ("playwright/prefer-to-have-length", err()),
        ("playwright/prefer-web-first-assertions", err()),
        ("playwright/require-hook", err()),
        ("playwright/require-soft-assertions", off()),
        ("playwright/require-to-throw-message", err()),
        ("playwright/require-top-level-describe", err()),
        ("playwright/valid-describe-callback", err()),
        ("playwright/valid-expect", err()),
        ("playwright/valid-expect-in-promise", err()),
        ("playwright/valid-title", err()),
    ])
}
