use flatlint_config::{
    BUILT_IN_IGNORES, ComposeOptions, ConfigError, ExtensionCatalog, Fragment, FragmentSequence,
    RuleSetting, Severity, base_config, keys, next_config, next_config_with, react_config,
};

///
/// Composes a full configuration through the public API, writes it to a RON
/// file the way a calling project would for the engine, and reads it back.
///
/// This both:
///
/// * exercises the composition path end to end, so we can check the emitted
///   file in and point `flatlint check --config` at it if we like
/// * proves placeholders and ordering survive the file round-trip
#[test]
fn compose_write_and_reload_full_configuration() {
    let custom = Fragment::builder()
        .files(["scripts/**"])
        .rule("no-console", RuleSetting::Off)
        .build();
    let terminal = Fragment::builder()
        .rule("max-lines", RuleSetting::WithOptions(Severity::Warn, serde_json::json!(2000)))
        .build();

    let sequence = base_config(
        ComposeOptions::new()
            .with_global_ignores(["generated/"])
            .with_configs([custom])
            .with_last_configs([terminal.clone()])
            .with_playwright(true)
            .with_turbo(true),
    );

    // Terminal fragments land absolute-last.
    assert_eq!(
        sequence.fragments.last().unwrap().fragment(),
        Some(&terminal)
    );

    let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    sequence
        .write_to_file(temp_file.path())
        .expect("Failed to write configuration file");

    let loaded = FragmentSequence::read_from_file(temp_file.path())
        .expect("Failed to read configuration file back");
    assert_eq!(loaded, sequence);

    println!("Successfully composed and round-tripped the configuration");
}

/// Composing twice with identical options yields structurally identical
/// sequences.
#[test]
fn composition_is_deterministic() {
    let options = ComposeOptions::new()
        .with_playwright(true)
        .with_prettier(false)
        .watch(true);

    assert_eq!(base_config(options.clone()), base_config(options));

    let next_options = ComposeOptions::new().with_turbo(true);
    assert_eq!(
        next_config(next_options.clone()).unwrap(),
        next_config(next_options).unwrap()
    );
}

/// Every flag combination produces the same number of slots; disabled
/// integrations occupy inert placeholders instead of disappearing.
#[test]
fn positional_stability_across_flag_combinations() {
    let baseline = base_config(ComposeOptions::new());

    for (playwright, prettier, turbo, watch) in [
        (true, true, true, true),
        (true, false, false, false),
        (false, true, false, true),
        (false, false, true, false),
    ] {
        let sequence = base_config(
            ComposeOptions::new()
                .with_playwright(playwright)
                .with_prettier(prettier)
                .with_turbo(turbo)
                .watch(watch),
        );
        assert_eq!(
            sequence.len(),
            baseline.len(),
            "flags ({playwright}, {prettier}, {turbo}, {watch}) changed the slot count"
        );
    }
}

/// With no options, the global-ignore fragment carries exactly the fixed
/// built-in pattern set.
#[test]
fn default_global_ignores_match_the_built_in_set() {
    let sequence = base_config(ComposeOptions::new());

    let ignores = sequence
        .present()
        .find(|fragment| !fragment.ignores.is_empty())
        .expect("Expected a global-ignore fragment");
    assert_eq!(ignores.ignores, BUILT_IN_IGNORES);
}

/// The two-level delegation chain: base rules, then the React layer, then the
/// Next layer, then caller middle fragments, with caller terminal fragments
/// absolute-last.
#[test]
fn next_chain_preserves_layer_ordering_transitively() {
    let middle = Fragment::builder()
        .rule("@next/next/no-typos", RuleSetting::Off)
        .build();
    let terminal = Fragment::builder()
        .rule("react/no-danger", RuleSetting::Off)
        .build();

    let sequence = next_config(
        ComposeOptions::new()
            .with_configs([middle.clone()])
            .with_last_configs([terminal.clone()]),
    )
    .expect("Failed to compose the Next.js configuration");

    let base_rules = sequence.position_with_rule("no-eval").unwrap();
    let react_layer = sequence.position_with_rule("react/button-has-type").unwrap();
    let next_layer = sequence
        .position_with_rule("@next/next/no-img-element")
        .unwrap();
    let middle_position = sequence
        .iter()
        .position(|slot| slot.fragment() == Some(&middle))
        .unwrap();

    assert!(base_rules < react_layer);
    assert!(react_layer < next_layer);
    assert!(next_layer < middle_position);
    assert_eq!(
        sequence.fragments.last().unwrap().fragment(),
        Some(&terminal)
    );
}

/// A missing required integration surfaces the configuration-integrity error
/// instead of a sequence with the fragment silently absent.
#[test]
fn missing_integration_raises_instead_of_degrading() {
    let mut catalog = ExtensionCatalog::with_builtin_presets();
    catalog.unregister(keys::NEXT_CORE_WEB_VITALS);

    match next_config_with(&catalog, ComposeOptions::new()) {
        Err(ConfigError::MissingIntegration(key)) => {
            assert_eq!(key, keys::NEXT_CORE_WEB_VITALS);
        }
        other => panic!("Expected MissingIntegration, got {other:?}"),
    }
}

/// The secondary test-runner integration contributes exactly one test-scoped
/// fragment merging the recommended rules with the stated overrides.
#[test]
fn playwright_flag_contributes_one_test_scoped_fragment() {
    let sequence = base_config(ComposeOptions::new().with_playwright(true));

    let test_scoped: Vec<&Fragment> = sequence
        .present()
        .filter(|fragment| {
            fragment
                .files
                .as_deref()
                .is_some_and(|files| files.iter().any(|glob| glob.contains(".test.")))
        })
        .collect();
    assert_eq!(test_scoped.len(), 1);

    let fragment = test_scoped[0];
    // Recommended rules and overrides merged into the same fragment.
    assert!(fragment.rules.contains_key("playwright/expect-expect"));
    assert_eq!(fragment.rules["max-lines"], RuleSetting::Off);
}

/// React user configs still land after the framework prefix.
#[test]
fn react_user_configs_follow_framework_fragments() {
    let user = Fragment::builder()
        .rule("react/jsx-max-depth", RuleSetting::Off)
        .build();
    let sequence = react_config(ComposeOptions::new().with_configs([user.clone()]))
        .expect("Failed to compose the React configuration");

    let framework = sequence.position_with_rule("react/button-has-type").unwrap();
    let user_position = sequence
        .iter()
        .position(|slot| slot.fragment() == Some(&user))
        .unwrap();
    assert!(framework < user_position);
}
