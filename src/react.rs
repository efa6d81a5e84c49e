//! The React composer.

use crate::base::base_config;
use crate::catalog::{ExtensionCatalog, keys};
use crate::error::ConfigError;
use crate::options::ComposeOptions;
use crate::presets;
use crate::sequence::FragmentSequence;

/// Composes a React configuration using the built-in extension catalog.
///
/// Framework fragments are layered after the generic base rules but before
/// the caller's own `configs`, so user customizations still land last.
pub fn react_config(options: ComposeOptions) -> Result<FragmentSequence, ConfigError> {
    react_config_with(ExtensionCatalog::builtin(), options)
}

/// Same as [`react_config`], against an explicit catalog.
pub fn react_config_with(
    catalog: &ExtensionCatalog,
    mut options: ComposeOptions,
) -> Result<FragmentSequence, ConfigError> {
    let user_configs = std::mem::take(&mut options.configs);

    let mut configs = Vec::new();
    for key in [
        keys::REACT_RECOMMENDED,
        keys::REACT_JSX_RUNTIME,
        keys::REACT_HOOKS_RECOMMENDED,
        keys::REACT_REFRESH_RECOMMENDED,
        keys::JSX_A11Y_RECOMMENDED,
    ] {
        configs.extend_from_slice(catalog.require(key)?);
    }
    configs.push(presets::react::rules_fragment());
    configs.push(presets::react::tsx_overrides_fragment());
    configs.extend(user_configs);

    tracing::debug!(fragments = configs.len(), "composed react layer");

    options.configs = configs;
    Ok(base_config(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{Fragment, RuleSetting};

    #[test]
    fn test_react_fragments_precede_user_configs() {
        let user = Fragment::builder()
            .rule("react/jsx-max-depth", RuleSetting::Off)
            .build();
        let sequence = react_config(ComposeOptions::new().with_configs([user.clone()])).unwrap();

        let react_rules = sequence
            .position_with_rule("react/button-has-type")
            .unwrap();
        let user_position = sequence
            .iter()
            .position(|slot| slot.fragment() == Some(&user))
            .unwrap();
        assert!(react_rules < user_position);
    }

    #[test]
    fn test_react_layer_lands_after_the_main_ruleset() {
        let sequence = react_config(ComposeOptions::new()).unwrap();

        let main = sequence.position_with_rule("no-eval").unwrap();
        let react = sequence
            .position_with_rule("react/button-has-type")
            .unwrap();
        assert!(main < react);
    }

    #[test]
    fn test_tsx_overrides_extend_the_naming_table() {
        let sequence = react_config(ComposeOptions::new()).unwrap();

        let fragment = sequence
            .present()
            .find(|fragment| fragment.files.as_deref() == Some(&["**/*.tsx".to_string()][..]))
            .expect("tsx override fragment");

        let RuleSetting::WithOptions(_, options) =
            &fragment.rules["@typescript-eslint/naming-convention"]
        else {
            panic!("Expected naming convention options");
        };
        let entries = options.as_array().unwrap();
        assert_eq!(
            entries.last().unwrap()["selector"],
            serde_json::json!(["function", "variable"])
        );
    }

    #[test]
    fn test_missing_react_integration_fails_fast() {
        let mut catalog = ExtensionCatalog::with_builtin_presets();
        catalog.unregister(keys::REACT_RECOMMENDED);

        let error = react_config_with(&catalog, ComposeOptions::new()).unwrap_err();
        assert!(matches!(error, ConfigError::MissingIntegration(_)));
    }

    #[test]
    fn test_terminal_configs_still_land_last() {
        let terminal = Fragment::builder()
            .rule("react/no-danger", RuleSetting::Off)
            .build();
        let sequence =
            react_config(ComposeOptions::new().with_last_configs([terminal.clone()])).unwrap();

        assert_eq!(
            sequence.fragments.last().unwrap().fragment(),
            Some(&terminal)
        );
    }
}
