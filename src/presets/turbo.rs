//! Monorepo-tool integration preset.

use super::{err_with, rule_map, warn};
use crate::fragment::{Fragment, RuleMap, RuleSetting};
use serde_json::json;

/// The turbo plugin's recommended preset.
pub fn recommended() -> Fragment {
    let rules: RuleMap = rule_map([("turbo/no-undeclared-env-vars", warn())]);
    Fragment {
        rules,
        ..Fragment::default()
    }
}

/// The hardened setting merged into the main ruleset when the integration is
/// enabled.
pub fn main_rule() -> (&'static str, RuleSetting) {
    (
        "turbo/no-undeclared-env-vars",
        err_with(json!({ "allowList": [] })),
    )
}
