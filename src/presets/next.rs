//! Next.js presets and rule fragments.

use super::{err, off, rule_map, warn};
use crate::fragment::{Fragment, RuleMap};

/// The core-web-vitals preset: the recommended rules with the
/// performance-critical subset hardened.
pub fn core_web_vitals() -> Vec<Fragment> {
    let rules = rule_map([
        ("@next/next/google-font-display", warn()),
        ("@next/next/google-font-preconnect", warn()),
        ("@next/next/inline-script-id", err()),
        ("@next/next/next-script-for-ga", warn()),
        ("@next/next/no-assign-module-variable", err()),
        ("@next/next/no-async-client-component", warn()),
        ("@next/next/no-before-interactive-script-outside-document", warn()),
        ("@next/next/no-css-tags", warn()),
        ("@next/next/no-document-import-in-page", err()),
        ("@next/next/no-duplicate-head", err()),
        ("@next/next/no-head-element", warn()),
        ("@next/next/no-head-import-in-document", err()),
        ("@next/next/no-html-link-for-pages", err()),
        ("@next/next/no-img-element", warn()),
        ("@next/next/no-page-custom-font", warn()),
        ("@next/next/no-script-component-in-head", err()),
        ("@next/next/no-styled-jsx-in-document", warn()),
        ("@next/next/no-sync-scripts", err()),
        ("@next/next/no-title-in-document-head", warn()),
        ("@next/next/no-typos", warn()),
        ("@next/next/no-unwanted-polyfillio", err()),
    ]);
    vec![Fragment {
        rules,
        ..Fragment::default()
    }]
}

/// The hardened `@next/next` settings layered over the preset.
pub fn rules() -> RuleMap {
    rule_map([
        ("@next/next/google-font-display", err()),
        ("@next/next/google-font-preconnect", err()),
        ("@next/next/inline-script-id", err()),
        ("@next/next/next-script-for-ga", err()),
        ("@next/next/no-assign-module-variable", err()),
        ("@next/next/no-async-client-component", err()),
        ("@next/next/no-before-interactive-script-outside-document", err()),
        ("@next/next/no-css-tags", err()),
        ("@next/next/no-document-import-in-page", err()),
        ("@next/next/no-duplicate-head", err()),
        ("@next/next/no-head-element", err()),
        ("@next/next/no-head-import-in-document", err()),
        ("@next/next/no-html-link-for-pages", err()),
        ("@next/next/no-img-element", err()),
        ("@next/next/no-page-custom-font", err()),
        ("@next/next/no-script-component-in-head", err()),
        ("@next/next/no-styled-jsx-in-document", err()),
        ("@next/next/no-sync-scripts", err()),
        ("@next/next/no-title-in-document-head", err()),
        ("@next/next/no-typos", err()),
        ("@next/next/no-unwanted-polyfillio", err()),
    ])
}

/// App-router entry files must default-export.
pub fn app_router_fragment() -> Fragment {
    Fragment::builder()
        .files([
            "**/*/app/**/@(default|error|global-error|layout|loading|not-found|page|route|template).tsx",
        ])
        .rule("import/no-default-export", off())
        .build()
}

/// So must the framework's own config file.
pub fn next_config_fragment() -> Fragment {
    Fragment::builder()
        .files(["next.config.ts"])
        .rule("import/no-default-export", off())
        .build()
}

/// Fast refresh is handled by the framework; the dev-server rule from the
/// React layer only produces noise here.
pub fn refresh_off_fragment() -> Fragment {
    Fragment::builder()
        .rule("react-refresh/only-export-components", off())
        .build()
}
