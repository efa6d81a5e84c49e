use crate::fragment::Fragment;

/// Options accepted by every composer. Each field is optional with a safe
/// default, so `ComposeOptions::new()` (or `Default`) composes a working
/// configuration on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// Custom fragments spliced close to the end of the sequence, after the
    /// framework defaults but before the watch-mode and formatter fragments.
    pub configs: Vec<Fragment>,

    /// Extra ignore patterns, unioned with the fixed built-in ignore set.
    pub global_ignores: Vec<String>,

    /// Custom fragments appended after everything else. Always last,
    /// regardless of nesting depth.
    pub last_configs: Vec<Fragment>,

    /// Replacement for the default type-aware strict ruleset. Spliced
    /// verbatim; the default is scoped to source-like files.
    pub ts_ruleset: Option<Vec<Fragment>>,

    /// Compose for watch mode: appends a relaxation fragment that downgrades
    /// rules which only produce noise during iterative local development.
    pub watch: bool,

    /// Include the test-runner integration fragment.
    pub with_playwright: bool,

    /// Include the formatter-compatibility fragment.
    pub with_prettier: bool,

    /// Include the monorepo-tool integration fragment.
    pub with_turbo: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            configs: Vec::new(),
            global_ignores: Vec::new(),
            last_configs: Vec::new(),
            ts_ruleset: None,
            watch: false,
            with_playwright: false,
            with_prettier: true,
            with_turbo: false,
        }
    }
}

impl ComposeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configs<I>(mut self, configs: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        self.configs = configs.into_iter().collect();
        self
    }

    pub fn with_global_ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global_ignores = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_last_configs<I>(mut self, configs: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        self.last_configs = configs.into_iter().collect();
        self
    }

    pub fn with_ts_ruleset<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        self.ts_ruleset = Some(fragments.into_iter().collect());
        self
    }

    pub fn watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn with_playwright(mut self, with_playwright: bool) -> Self {
        self.with_playwright = with_playwright;
        self
    }

    pub fn with_prettier(mut self, with_prettier: bool) -> Self {
        self.with_prettier = with_prettier;
        self
    }

    pub fn with_turbo(mut self, with_turbo: bool) -> Self {
        self.with_turbo = with_turbo;
        self
    }
}
