use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use crate::error::ConfigError;
use crate::fragment::Fragment;
use crate::presets;

/// Preset keys the built-in catalog registers.
pub mod keys {
    pub const REACT_RECOMMENDED: &str = "react/recommended";
    pub const REACT_JSX_RUNTIME: &str = "react/jsx-runtime";
    pub const REACT_HOOKS_RECOMMENDED: &str = "react-hooks/recommended";
    pub const REACT_REFRESH_RECOMMENDED: &str = "react-refresh/recommended";
    pub const JSX_A11Y_RECOMMENDED: &str = "jsx-a11y/recommended";
    pub const VUE_RECOMMENDED: &str = "vue/recommended";
    pub const VUE_STRICT_TYPE_CHECKED: &str = "vue/strict-type-checked";
    pub const ANGULAR_TS_RECOMMENDED: &str = "angular/ts-recommended";
    pub const ANGULAR_TEMPLATE_RECOMMENDED: &str = "angular/template-recommended";
    pub const ANGULAR_TEMPLATE_ACCESSIBILITY: &str = "angular/template-accessibility";
    pub const ANGULAR_INLINE_TEMPLATES: &str = crate::presets::angular::INLINE_TEMPLATES_PROCESSOR;
    pub const NEXT_CORE_WEB_VITALS: &str = "next/core-web-vitals";
}

static BUILTIN: LazyLock<ExtensionCatalog> = LazyLock::new(ExtensionCatalog::with_builtin_presets);

/// The framework presets available to the composers.
///
/// The built-in catalog mirrors what a fully installed engine ships with. The
/// framework composers look their presets up here and fail fast with
/// [`ConfigError`] when one is missing — a silently absent integration would
/// degrade lint coverage without anyone noticing.
#[derive(Debug, Default)]
pub struct ExtensionCatalog {
    presets: BTreeMap<String, Vec<Fragment>>,
    processors: BTreeSet<String>,
}

impl ExtensionCatalog {
    /// An empty catalog. Useful for simulating a missing integration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide catalog with every built-in preset registered.
    pub fn builtin() -> &'static ExtensionCatalog {
        &BUILTIN
    }

    /// An owned catalog pre-populated with the built-in presets, for callers
    /// that need to add or remove entries.
    pub fn with_builtin_presets() -> Self {
        let mut catalog = ExtensionCatalog::empty();
        catalog.register(keys::REACT_RECOMMENDED, presets::react::recommended());
        catalog.register(keys::REACT_JSX_RUNTIME, presets::react::jsx_runtime());
        catalog.register(
            keys::REACT_HOOKS_RECOMMENDED,
            presets::react::hooks_recommended(),
        );
        catalog.register(
            keys::REACT_REFRESH_RECOMMENDED,
            presets::react::refresh_recommended(),
        );
        catalog.register(
            keys::JSX_A11Y_RECOMMENDED,
            presets::react::jsx_a11y_recommended(),
        );
        catalog.register(keys::VUE_RECOMMENDED, presets::vue::recommended());
        catalog.register(
            keys::VUE_STRICT_TYPE_CHECKED,
            presets::vue::strict_type_checked(),
        );
        catalog.register(keys::ANGULAR_TS_RECOMMENDED, presets::angular::ts_recommended());
        catalog.register(
            keys::ANGULAR_TEMPLATE_RECOMMENDED,
            presets::angular::template_recommended(),
        );
        catalog.register(
            keys::ANGULAR_TEMPLATE_ACCESSIBILITY,
            presets::angular::template_accessibility(),
        );
        catalog.register(keys::NEXT_CORE_WEB_VITALS, presets::next::core_web_vitals());
        catalog.register_processor(keys::ANGULAR_INLINE_TEMPLATES);
        catalog
    }

    pub fn register(&mut self, key: impl Into<String>, fragments: Vec<Fragment>) {
        self.presets.insert(key.into(), fragments);
    }

    pub fn register_processor(&mut self, key: impl Into<String>) {
        self.processors.insert(key.into());
    }

    /// Removes a preset, returning what was registered under the key.
    pub fn unregister(&mut self, key: &str) -> Option<Vec<Fragment>> {
        self.presets.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.presets.contains_key(key)
    }

    /// The fragments registered under `key`, or a configuration-integrity
    /// error when the integration is absent.
    pub fn require(&self, key: &str) -> Result<&[Fragment], ConfigError> {
        self.presets
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::MissingIntegration(key.to_string()))
    }

    /// The processor token for `key`, or a configuration-integrity error.
    pub fn require_processor(&self, key: &str) -> Result<String, ConfigError> {
        self.processors
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingProcessor(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_registers_every_framework_preset() {
        let catalog = ExtensionCatalog::builtin();
        for key in [
            keys::REACT_RECOMMENDED,
            keys::REACT_JSX_RUNTIME,
            keys::REACT_HOOKS_RECOMMENDED,
            keys::REACT_REFRESH_RECOMMENDED,
            keys::JSX_A11Y_RECOMMENDED,
            keys::VUE_RECOMMENDED,
            keys::VUE_STRICT_TYPE_CHECKED,
            keys::ANGULAR_TS_RECOMMENDED,
            keys::ANGULAR_TEMPLATE_RECOMMENDED,
            keys::ANGULAR_TEMPLATE_ACCESSIBILITY,
            keys::NEXT_CORE_WEB_VITALS,
        ] {
            assert!(catalog.contains(key), "missing builtin preset {key}");
            assert!(!catalog.require(key).unwrap().is_empty());
        }
        assert!(
            catalog
                .require_processor(keys::ANGULAR_INLINE_TEMPLATES)
                .is_ok()
        );
    }

    #[test]
    fn test_require_missing_integration_fails_fast() {
        let catalog = ExtensionCatalog::empty();

        let error = catalog.require(keys::REACT_RECOMMENDED).unwrap_err();
        assert!(matches!(error, ConfigError::MissingIntegration(_)));
        assert!(error.to_string().contains("react/recommended"));
    }

    #[test]
    fn test_unregister_simulates_a_broken_installation() {
        let mut catalog = ExtensionCatalog::with_builtin_presets();
        assert!(catalog.unregister(keys::VUE_RECOMMENDED).is_some());
        assert!(catalog.require(keys::VUE_RECOMMENDED).is_err());
    }
}
