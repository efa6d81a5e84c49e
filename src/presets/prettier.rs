//! Formatter-compatibility preset.

use super::{off, rule_map};
use crate::fragment::Fragment;

/// Disables stylistic rules that fight the external formatter. Sits second to
/// last so it wins over everything except the caller's terminal fragments.
pub fn compat() -> Fragment {
    let rules = rule_map([
        ("arrow-body-style", off()),
        ("arrow-parens", off()),
        ("brace-style", off()),
        ("comma-dangle", off()),
        ("comma-spacing", off()),
        ("eol-last", off()),
        ("func-call-spacing", off()),
        ("indent", off()),
        ("key-spacing", off()),
        ("keyword-spacing", off()),
        ("linebreak-style", off()),
        ("max-len", off()),
        ("new-parens", off()),
        ("no-extra-parens", off()),
        ("no-extra-semi", off()),
        ("no-mixed-spaces-and-tabs", off()),
        ("no-multi-spaces", off()),
        ("no-multiple-empty-lines", off()),
        ("no-tabs", off()),
        ("no-trailing-spaces", off()),
        ("no-unexpected-multiline", off()),
        ("object-curly-spacing", off()),
        ("operator-linebreak", off()),
        ("prefer-arrow-callback", off()),
        ("quote-props", off()),
        ("quotes", off()),
        ("semi", off()),
        ("semi-spacing", off()),
        ("space-before-blocks", off()),
        ("space-before-function-paren", off()),
        ("space-in-parens", off()),
        ("space-infix-ops", off()),
        ("space-unary-ops", off()),
        ("template-curly-spacing", off()),
        ("wrap-iife", off()),
    ]);
    Fragment {
        rules,
        ..Fragment::default()
    }
}
