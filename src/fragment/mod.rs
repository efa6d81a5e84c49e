mod builder;
#[cfg(test)]
mod tests;
mod types;

pub use builder::FragmentBuilder;
pub use types::{Fragment, LinterOptions, RuleMap, RuleSetting, Severity};

/// Glob patterns for source-like files. Fragments carrying type-aware or
/// import-hygiene rules are scoped to these so the engine never runs them
/// against config files or assets.
pub const SOURCE_FILES: &[&str] = &[
    "**/*.ts", "**/*.tsx", "**/*.js", "**/*.jsx", "**/*.mjs", "**/*.cjs", "**/*.vue",
];

/// Glob patterns for test files and test utilities.
pub const TEST_FILES: &[&str] = &[
    "**/*.test.ts",
    "**/*.test.tsx",
    "**/*.spec.ts",
    "**/*.spec.tsx",
    "**/tests/**",
    "**/test-utils/**",
];

/// Re-scopes every fragment in a preset to the source-like file patterns.
///
/// Presets ship unscoped; applying them verbatim would run type-aware rules
/// against everything the engine can see.
pub fn only_for_source_files(fragments: Vec<Fragment>) -> Vec<Fragment> {
    fragments
        .into_iter()
        .map(|fragment| fragment.scoped_to(SOURCE_FILES))
        .collect()
}
