//! Static preset tables.
//!
//! Everything in here is inert declarative data: rule identifiers mapped to
//! settings, grouped the way the upstream plugins group them. The composers
//! decide where these land in a sequence; nothing here carries ordering logic
//! of its own.

pub mod angular;
pub mod core;
pub mod imports;
pub mod next;
pub mod playwright;
pub mod prettier;
pub mod react;
pub mod turbo;
pub mod typescript;
pub mod vue;

use crate::fragment::{RuleMap, RuleSetting, Severity};
use serde_json::Value;

pub(crate) fn err() -> RuleSetting {
    RuleSetting::On(Severity::Error)
}

pub(crate) fn warn() -> RuleSetting {
    RuleSetting::On(Severity::Warn)
}

pub(crate) fn off() -> RuleSetting {
    RuleSetting::Off
}

pub(crate) fn err_with(options: Value) -> RuleSetting {
    RuleSetting::WithOptions(Severity::Error, options)
}

pub(crate) fn rule_map<I>(entries: I) -> RuleMap
where
    I: IntoIterator<Item = (&'static str, RuleSetting)>,
{
    entries
        .into_iter()
        .map(|(id, setting)| (id.to_string(), setting))
        .collect()
}
