//! The base composer: the fixed 13-position sequence every flavor builds on.

use serde_json::json;

use crate::fragment::{
    Fragment, LinterOptions, SOURCE_FILES, TEST_FILES, only_for_source_files,
};
use crate::options::ComposeOptions;
use crate::presets;
use crate::sequence::FragmentSequence;

/// Directories ignored by every composed configuration, before any
/// caller-supplied extras.
pub const BUILT_IN_IGNORES: &[&str] = &[
    "coverage/",
    "build/",
    "dist/",
    "dist-ssr/",
    "out/",
    "out-tsc/",
    "playwright-report/",
    "test-results/",
    "tmp/",
];

/// Composes the base configuration sequence.
///
/// Every position is always present; optional sections contribute an inert
/// placeholder when disabled so the sequence shape is identical for every
/// flag combination. Pure: same options in, structurally identical sequence
/// out.
pub fn base_config(options: ComposeOptions) -> FragmentSequence {
    let ComposeOptions {
        configs,
        global_ignores,
        last_configs,
        ts_ruleset,
        watch,
        with_playwright,
        with_prettier,
        with_turbo,
    } = options;

    let mut sequence = FragmentSequence::new();

    // 1. Global ignores: the built-in set unioned with caller extras.
    let mut ignores: Vec<String> = BUILT_IN_IGNORES.iter().map(|d| (*d).to_string()).collect();
    ignores.extend(global_ignores);
    sequence.push(Fragment::global_ignores(ignores));

    // 2. Recommended baseline.
    sequence.splice(presets::core::recommended());

    // 3. Type-aware strict ruleset: caller override or the scoped default.
    match ts_ruleset {
        Some(fragments) => sequence.splice(fragments),
        None => sequence.splice(only_for_source_files(
            presets::typescript::strict_type_checked(),
        )),
    }

    // 4. Import hygiene, source files only.
    sequence.splice(only_for_source_files(presets::imports::recommended()));
    sequence.splice(only_for_source_files(presets::imports::typescript()));

    // 5. Monorepo-tool integration slot.
    sequence.push_optional(with_turbo.then(presets::turbo::recommended));

    // 6. Parser-service wiring and linter options for source files.
    sequence.push(wiring_fragment());

    // 7. The main ruleset.
    sequence.push(main_ruleset_fragment(with_turbo));

    // 8. Test-runner integration slot.
    sequence.push_optional(with_playwright.then(playwright_fragment));

    // 9. Known config filenames get their conventions back.
    sequence.push(engine_config_files_fragment());
    sequence.push(tooling_config_files_fragment());

    // 10. Caller-supplied middle fragments, verbatim.
    sequence.splice(configs);

    // 11. Watch-mode relaxation slot.
    sequence.push_optional(watch.then(watch_fragment));

    // 12. Formatter-compatibility slot.
    sequence.push_optional(with_prettier.then(presets::prettier::compat));

    // 13. Caller-supplied terminal fragments, always last.
    sequence.splice(last_configs);

    tracing::debug!(
        fragments = sequence.len(),
        placeholders = sequence.iter().filter(|slot| slot.is_placeholder()).count(),
        "composed base configuration"
    );

    sequence
}

fn wiring_fragment() -> Fragment {
    Fragment::builder()
        .files(SOURCE_FILES.iter().copied())
        .language_options(json!({
            "parserOptions": {
                "projectService": true
            }
        }))
        .linter_options(LinterOptions {
            report_unused_disable_directives: Some(true),
        })
        .settings(json!({
            "import/resolver": {
                "typescript": {}
            }
        }))
        .build()
}

fn main_ruleset_fragment(with_turbo: bool) -> Fragment {
    let mut rules = presets::core::main_rules();
    rules.extend(presets::typescript::rules());
    rules.extend(presets::imports::rules());
    if with_turbo {
        let (id, setting) = presets::turbo::main_rule();
        rules.insert(id.to_string(), setting);
    }

    Fragment {
        files: Some(SOURCE_FILES.iter().map(|f| (*f).to_string()).collect()),
        rules,
        ..Fragment::default()
    }
}

fn playwright_fragment() -> Fragment {
    let mut rules = presets::playwright::recommended_rules();
    rules.extend(presets::playwright::overrides());

    Fragment {
        files: Some(TEST_FILES.iter().map(|f| (*f).to_string()).collect()),
        rules,
        ..Fragment::default()
    }
}

/// The engine's own config files (and the test runner's) run under node and
/// conventionally default-export.
fn engine_config_files_fragment() -> Fragment {
    Fragment::builder()
        .files([
            "flatlint.config.js",
            "flatlint-watch.config.js",
            "flatlint.config.ts",
            "flatlint-watch.config.ts",
            "playwright.config.ts",
        ])
        .language_options(json!({
            "globals": ["node"]
        }))
        .rule("@typescript-eslint/naming-convention", presets::off())
        .rule("@typescript-eslint/no-require-imports", presets::off())
        .rule("@typescript-eslint/no-var-requires", presets::off())
        .rule("import/no-commonjs", presets::off())
        .rule("import/no-default-export", presets::off())
        .rule("import/no-extraneous-dependencies", presets::off())
        .build()
}

/// Formatter and documentation-generator configs: default exports and
/// devtime-only dependencies are the convention there.
fn tooling_config_files_fragment() -> Fragment {
    Fragment::builder()
        .files([
            ".prettierrc.js",
            ".prettierrc.cjs",
            ".prettierrc.ts",
            ".prettierrc.mjs",
            "prettier.config.js",
            "prettier.config.ts",
            "typedoc.config.js",
            "typedoc.config.cjs",
            "typedoc.config.mjs",
        ])
        .rule("import/no-default-export", presets::off())
        .rule("import/no-extraneous-dependencies", presets::off())
        .build()
}

/// Rules that only slow down an edit-lint loop switch off in watch mode.
fn watch_fragment() -> Fragment {
    Fragment::builder()
        .linter_options(LinterOptions {
            report_unused_disable_directives: Some(false),
        })
        .rule("no-debugger", presets::off())
        .rule("no-console", presets::off())
        .rule("no-warning-comments", presets::off())
        .rule("@typescript-eslint/no-explicit-any", presets::off())
        .rule("@typescript-eslint/no-unsafe-argument", presets::off())
        .rule("@typescript-eslint/no-unsafe-assignment", presets::off())
        .rule("@typescript-eslint/no-unsafe-call", presets::off())
        .rule("@typescript-eslint/no-unsafe-member-access", presets::off())
        .rule("@typescript-eslint/no-unsafe-return", presets::off())
        .rule("@typescript-eslint/no-unused-vars", presets::off())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::RuleSetting;

    fn ignore_patterns(sequence: &FragmentSequence) -> &[String] {
        let first = sequence.fragments[0]
            .fragment()
            .expect("first slot is the global ignore fragment");
        &first.ignores
    }

    #[test]
    fn test_default_compose_uses_exactly_the_built_in_ignores() {
        let sequence = base_config(ComposeOptions::new());
        assert_eq!(ignore_patterns(&sequence), BUILT_IN_IGNORES);
    }

    #[test]
    fn test_extra_ignores_are_unioned_after_the_built_ins() {
        let sequence =
            base_config(ComposeOptions::new().with_global_ignores([".cache/", "vendor/"]));

        let patterns = ignore_patterns(&sequence);
        assert_eq!(patterns.len(), BUILT_IN_IGNORES.len() + 2);
        assert_eq!(&patterns[..BUILT_IN_IGNORES.len()], BUILT_IN_IGNORES);
        assert_eq!(&patterns[BUILT_IN_IGNORES.len()..], [".cache/", "vendor/"]);
    }

    #[test]
    fn test_composition_is_deterministic() {
        let options = ComposeOptions::new()
            .with_playwright(true)
            .with_turbo(true)
            .watch(true)
            .with_global_ignores(["vendor/"]);

        assert_eq!(base_config(options.clone()), base_config(options));
    }

    #[test]
    fn test_optional_slots_keep_positions_for_every_flag_combination() {
        let baseline = base_config(ComposeOptions::new());

        for (playwright, turbo, watch, prettier) in [
            (true, false, false, true),
            (false, true, false, true),
            (false, false, true, true),
            (false, false, false, false),
            (true, true, true, false),
        ] {
            let sequence = base_config(
                ComposeOptions::new()
                    .with_playwright(playwright)
                    .with_turbo(turbo)
                    .watch(watch)
                    .with_prettier(prettier),
            );
            assert_eq!(sequence.len(), baseline.len());
        }
    }

    #[test]
    fn test_disabled_playwright_leaves_a_placeholder_where_the_fragment_goes() {
        let disabled = base_config(ComposeOptions::new());
        let enabled = base_config(ComposeOptions::new().with_playwright(true));

        let position = enabled
            .position_with_rule("playwright/valid-expect")
            .expect("playwright fragment present when enabled");
        assert!(disabled.fragments[position].is_placeholder());
    }

    #[test]
    fn test_playwright_fragment_is_scoped_to_tests_and_merges_overrides() {
        let sequence = base_config(ComposeOptions::new().with_playwright(true));

        let playwright_fragments: Vec<_> = sequence
            .present()
            .filter(|fragment| {
                fragment
                    .rules
                    .keys()
                    .any(|rule| rule.starts_with("playwright/"))
            })
            .collect();
        assert_eq!(playwright_fragments.len(), 1);

        let fragment = playwright_fragments[0];
        assert_eq!(
            fragment.files.as_deref().unwrap(),
            TEST_FILES
                .iter()
                .map(|f| (*f).to_string())
                .collect::<Vec<_>>()
        );
        // Overrides win over the recommended preset...
        assert_eq!(
            fragment.rules["playwright/no-conditional-in-test"],
            RuleSetting::On(crate::fragment::Severity::Error)
        );
        // ...and the size limits inherited from the main ruleset relax.
        assert_eq!(fragment.rules["max-lines-per-function"], RuleSetting::Off);
    }

    #[test]
    fn test_turbo_flag_adds_the_env_var_rule_to_the_main_ruleset() {
        let without = base_config(ComposeOptions::new());
        let with = base_config(ComposeOptions::new().with_turbo(true));

        assert!(without.position_with_rule("turbo/no-undeclared-env-vars").is_none());

        let main_position = with.position_with_rule("no-eval").unwrap();
        let main = with.fragments[main_position].fragment().unwrap();
        assert!(main.rules.contains_key("turbo/no-undeclared-env-vars"));
    }

    #[test]
    fn test_ts_ruleset_override_replaces_the_default() {
        let replacement = Fragment::builder()
            .rule("@typescript-eslint/await-thenable", presets::off())
            .build();
        let sequence =
            base_config(ComposeOptions::new().with_ts_ruleset([replacement.clone()]));

        // The scoped strict default would carry the rule as an error in an
        // earlier fragment than the main ruleset; with the override, the
        // first occurrence is the replacement itself.
        let position = sequence
            .position_with_rule("@typescript-eslint/await-thenable")
            .unwrap();
        assert_eq!(sequence.fragments[position].fragment(), Some(&replacement));
    }

    #[test]
    fn test_watch_mode_relaxes_noisy_rules_after_the_main_ruleset() {
        let sequence = base_config(ComposeOptions::new().watch(true));

        let main = sequence.position_with_rule("no-eval").unwrap();
        let relax = sequence
            .iter()
            .position(|slot| {
                slot.fragment().is_some_and(|fragment| {
                    fragment.rules.get("no-debugger") == Some(&RuleSetting::Off)
                })
            })
            .unwrap();
        assert!(relax > main);

        let fragment = sequence.fragments[relax].fragment().unwrap();
        assert_eq!(
            fragment
                .linter_options
                .as_ref()
                .unwrap()
                .report_unused_disable_directives,
            Some(false)
        );
    }

    #[test]
    fn test_last_configs_occupy_the_final_positions() {
        let terminal = Fragment::builder()
            .rule("no-console", presets::off())
            .build();
        let sequence = base_config(
            ComposeOptions::new()
                .with_configs([Fragment::global_ignores(["middle/"])])
                .with_last_configs([terminal.clone()]),
        );

        assert_eq!(
            sequence.fragments.last().unwrap().fragment(),
            Some(&terminal)
        );
    }

    #[test]
    fn test_middle_configs_come_before_watch_and_prettier_fragments() {
        let middle = Fragment::global_ignores(["middle/"]);
        let sequence = base_config(
            ComposeOptions::new()
                .watch(true)
                .with_configs([middle.clone()]),
        );

        let middle_position = sequence
            .iter()
            .position(|slot| slot.fragment() == Some(&middle))
            .unwrap();
        let watch_position = sequence
            .iter()
            .position(|slot| {
                slot.fragment().is_some_and(|fragment| {
                    fragment.rules.get("no-debugger") == Some(&RuleSetting::Off)
                })
            })
            .unwrap();
        assert!(middle_position < watch_position);
    }
}
