//! The Next.js composer: a two-level delegation chain through React.

use crate::catalog::{ExtensionCatalog, keys};
use crate::error::ConfigError;
use crate::fragment::Fragment;
use crate::options::ComposeOptions;
use crate::presets;
use crate::react::react_config_with;
use crate::sequence::FragmentSequence;

/// Composes a Next.js configuration using the built-in extension catalog.
///
/// Delegates through the React composer: Next fragments precede the React
/// layer's splice point, React fragments precede the base rules, and
/// caller-supplied terminal fragments stay absolute-last through both levels.
pub fn next_config(options: ComposeOptions) -> Result<FragmentSequence, ConfigError> {
    next_config_with(ExtensionCatalog::builtin(), options)
}

/// Same as [`next_config`], against an explicit catalog.
pub fn next_config_with(
    catalog: &ExtensionCatalog,
    mut options: ComposeOptions,
) -> Result<FragmentSequence, ConfigError> {
    let user_configs = std::mem::take(&mut options.configs);

    let mut configs = vec![Fragment::global_ignores(["**/.next/**"])];
    configs.push(core_web_vitals_fragment(catalog)?);
    configs.push(presets::next::app_router_fragment());
    configs.push(presets::next::next_config_fragment());
    configs.push(presets::next::refresh_off_fragment());
    configs.extend(user_configs);

    tracing::debug!(fragments = configs.len(), "composed next layer");

    options.configs = configs;
    react_config_with(catalog, options)
}

/// The core-web-vitals preset merged with the hardened rule table, scoped to
/// TypeScript sources.
fn core_web_vitals_fragment(catalog: &ExtensionCatalog) -> Result<Fragment, ConfigError> {
    let preset = catalog.require(keys::NEXT_CORE_WEB_VITALS)?;

    let mut rules = crate::fragment::RuleMap::new();
    for fragment in preset {
        rules.extend(fragment.rules.clone());
    }
    rules.extend(presets::next::rules());

    Ok(Fragment {
        files: Some(vec!["**/*.ts".to_string(), "**/*.tsx".to_string()]),
        rules,
        ..Fragment::default()
    })
}
