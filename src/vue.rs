//! The Vue composer.

use crate::base::base_config;
use crate::catalog::{ExtensionCatalog, keys};
use crate::error::ConfigError;
use crate::options::ComposeOptions;
use crate::presets;
use crate::sequence::FragmentSequence;

/// Composes a Vue configuration using the built-in extension catalog.
///
/// Unless the caller supplied one, the type-aware strict base is replaced by
/// the single-file-component variant so `.vue` files type-check.
pub fn vue_config(options: ComposeOptions) -> Result<FragmentSequence, ConfigError> {
    vue_config_with(ExtensionCatalog::builtin(), options)
}

/// Same as [`vue_config`], against an explicit catalog.
pub fn vue_config_with(
    catalog: &ExtensionCatalog,
    mut options: ComposeOptions,
) -> Result<FragmentSequence, ConfigError> {
    let user_configs = std::mem::take(&mut options.configs);

    if options.ts_ruleset.is_none() {
        options.ts_ruleset = Some(catalog.require(keys::VUE_STRICT_TYPE_CHECKED)?.to_vec());
    }

    let mut configs = catalog.require(keys::VUE_RECOMMENDED)?.to_vec();
    configs.push(presets::vue::rules_fragment());
    configs.push(presets::vue::vue_files_fragment());
    configs.push(presets::vue::vite_config_fragment());
    configs.extend(user_configs);

    tracing::debug!(fragments = configs.len(), "composed vue layer");

    options.configs = configs;
    Ok(base_config(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{Fragment, RuleSetting};

    #[test]
    fn test_vue_strict_base_replaces_the_default() {
        let sequence = vue_config(ComposeOptions::new()).unwrap();

        let position = sequence
            .position_with_rule("@typescript-eslint/await-thenable")
            .unwrap();
        let fragment = sequence.fragments[position].fragment().unwrap();

        // The SFC variant is unscoped and carries the extra file extension.
        assert!(fragment.files.is_none());
        let options = fragment.language_options.as_ref().unwrap();
        assert_eq!(
            options["parserOptions"]["extraFileExtensions"],
            serde_json::json!([".vue"])
        );
    }

    #[test]
    fn test_caller_ts_ruleset_wins_over_the_vue_variant() {
        let replacement = Fragment::builder()
            .rule("@typescript-eslint/await-thenable", RuleSetting::Off)
            .build();
        let sequence = vue_config(ComposeOptions::new().with_ts_ruleset([replacement.clone()]))
            .unwrap();

        let position = sequence
            .position_with_rule("@typescript-eslint/await-thenable")
            .unwrap();
        assert_eq!(sequence.fragments[position].fragment(), Some(&replacement));
    }

    #[test]
    fn test_vue_layer_relaxes_assignment_analysis_for_sfcs() {
        let sequence = vue_config(ComposeOptions::new()).unwrap();

        let fragment = sequence
            .present()
            .find(|fragment| fragment.files.as_deref() == Some(&["**/*.vue".to_string()][..]))
            .expect("vue files fragment");
        assert_eq!(fragment.rules["no-useless-assignment"], RuleSetting::Off);
    }

    #[test]
    fn test_missing_vue_integration_fails_fast() {
        let mut catalog = ExtensionCatalog::with_builtin_presets();
        catalog.unregister(keys::VUE_RECOMMENDED);

        let error = vue_config_with(&catalog, ComposeOptions::new()).unwrap_err();
        assert!(matches!(error, ConfigError::MissingIntegration(_)));
    }
}
