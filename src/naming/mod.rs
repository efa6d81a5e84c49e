//! Naming-convention rule table.
//!
//! A static, ordered list of selector tuples consumed by the engine's
//! naming-convention rule. The engine evaluates selectors in sequence and the
//! first matching, non-overridden entry wins, so specific refinements (mixin
//! functions, singleton `instance` properties) are declared after the general
//! entry they refine. This is declarative data; the only composition is
//! list concatenation when a composer appends extra entries.

mod rules;
#[cfg(test)]
mod tests;
mod types;

pub use rules::{common_naming_rules, naming_convention_setting};
pub use types::{
    MatchRegex, Modifier, NamingSelector, PredefinedFormat, SelectorKind, TypeModifier,
    UnderscoreOption,
};
