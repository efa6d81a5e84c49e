use serde_json::Value;

use super::types::{Fragment, LinterOptions, RuleSetting};

/// Fluent builder for a [`Fragment`].
///
/// ```
/// use flatlint_config::{Fragment, RuleSetting, Severity};
///
/// let fragment = Fragment::builder()
///     .files(["**/*.ts"])
///     .rule("no-console", RuleSetting::On(Severity::Error))
///     .build();
/// assert_eq!(fragment.rules.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    fragment: Fragment,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragment.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragment.ignores = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.fragment.rules.insert(id.into(), setting);
        self
    }

    pub fn rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (S, RuleSetting)>,
        S: Into<String>,
    {
        self.fragment
            .rules
            .extend(rules.into_iter().map(|(id, setting)| (id.into(), setting)));
        self
    }

    pub fn language_options(mut self, options: Value) -> Self {
        self.fragment.language_options = Some(options);
        self
    }

    pub fn linter_options(mut self, options: LinterOptions) -> Self {
        self.fragment.linter_options = Some(options);
        self
    }

    pub fn settings(mut self, settings: Value) -> Self {
        self.fragment.settings = Some(settings);
        self
    }

    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        self.fragment.processor = Some(processor.into());
        self
    }

    pub fn build(self) -> Fragment {
        self.fragment
    }
}
