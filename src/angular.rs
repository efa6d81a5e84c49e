//! The Angular composer.

use crate::base::base_config;
use crate::catalog::{ExtensionCatalog, keys};
use crate::error::ConfigError;
use crate::fragment::{Fragment, SOURCE_FILES};
use crate::options::ComposeOptions;
use crate::sequence::FragmentSequence;

/// Composes an Angular configuration using the built-in extension catalog.
pub fn angular_config(options: ComposeOptions) -> Result<FragmentSequence, ConfigError> {
    angular_config_with(ExtensionCatalog::builtin(), options)
}

/// Same as [`angular_config`], against an explicit catalog.
pub fn angular_config_with(
    catalog: &ExtensionCatalog,
    mut options: ComposeOptions,
) -> Result<FragmentSequence, ConfigError> {
    let user_configs = std::mem::take(&mut options.configs);
    let processor = catalog.require_processor(keys::ANGULAR_INLINE_TEMPLATES)?;

    let mut configs = vec![Fragment::global_ignores(["**/.angular/**"])];
    for fragment in catalog.require(keys::ANGULAR_TS_RECOMMENDED)? {
        configs.push(fragment.clone().scoped_to(SOURCE_FILES));
    }
    // Components with inline templates need pre-processing before the
    // template rules can see them.
    configs.push(
        Fragment::builder()
            .files(SOURCE_FILES.iter().copied())
            .processor(processor)
            .build(),
    );
    for key in [
        keys::ANGULAR_TEMPLATE_RECOMMENDED,
        keys::ANGULAR_TEMPLATE_ACCESSIBILITY,
    ] {
        for fragment in catalog.require(key)? {
            configs.push(fragment.clone().scoped_to(&["**/*.html"]));
        }
    }
    configs.extend(user_configs);

    tracing::debug!(fragments = configs.len(), "composed angular layer");

    options.configs = configs;
    Ok(base_config(options))
}
