use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::FragmentBuilder;

/// Ordered mapping from rule identifier to its configured setting.
pub type RuleMap = BTreeMap<String, RuleSetting>;

/// Severity levels understood by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warn,
    #[default]
    Error,
}

/// The setting for a single rule: disabled, enabled at a severity, or
/// enabled at a severity with rule-specific options.
///
/// Option payloads are opaque to the composer; the engine validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleSetting {
    Off,
    On(Severity),
    WithOptions(Severity, Value),
}

/// Linter-wide options carried by a fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_unused_disable_directives: Option<bool>,
}

/// One unit of linter configuration.
///
/// A fragment pairs an optional file scope with rule settings and engine
/// wiring. Fragments are immutable once built; composition produces new
/// sequences rather than mutating inputs. A fragment with no `files` applies
/// to every file the engine sees, and a fragment carrying only `ignores`
/// excludes those patterns globally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// File-pattern scope; `None` means the fragment applies to all files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Global ignore patterns contributed by this fragment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// Rule settings, keyed by rule identifier.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: RuleMap,

    /// Nested language and parser options, passed through to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,

    /// Linter-wide options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter_options: Option<LinterOptions>,

    /// Shared settings consumed by rule plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Processor token for files that need pre-processing (e.g. inline
    /// templates) before rules run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
}

impl Fragment {
    pub fn builder() -> FragmentBuilder {
        FragmentBuilder::new()
    }

    /// A fragment contributing only global ignore patterns.
    pub fn global_ignores<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Fragment {
            ignores: patterns.into_iter().map(Into::into).collect(),
            ..Fragment::default()
        }
    }

    /// Returns this fragment re-scoped to the given file patterns.
    pub fn scoped_to(mut self, files: &[&str]) -> Self {
        self.files = Some(files.iter().map(|pattern| (*pattern).to_string()).collect());
        self
    }

    /// True when the fragment contributes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Fragment::default()
    }
}
