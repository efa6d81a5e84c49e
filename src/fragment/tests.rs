#[cfg(test)]
mod tests {
    use crate::fragment::{Fragment, RuleSetting, SOURCE_FILES, Severity, only_for_source_files};
    use serde_json::json;

    #[test]
    fn test_builder_collects_rules_in_order() {
        let fragment = Fragment::builder()
            .files(["**/*.ts"])
            .rule("no-console", RuleSetting::On(Severity::Error))
            .rule("no-debugger", RuleSetting::Off)
            .rule(
                "max-depth",
                RuleSetting::WithOptions(Severity::Error, json!(5)),
            )
            .build();

        assert_eq!(fragment.files.as_deref().unwrap(), ["**/*.ts"]);
        assert_eq!(fragment.rules.len(), 3);
        assert_eq!(fragment.rules["no-debugger"], RuleSetting::Off);
    }

    #[test]
    fn test_global_ignores_fragment_is_ignores_only() {
        let fragment = Fragment::global_ignores(["dist/", "coverage/"]);

        assert_eq!(fragment.ignores, ["dist/", "coverage/"]);
        assert!(fragment.files.is_none());
        assert!(fragment.rules.is_empty());
    }

    #[test]
    fn test_scoped_to_replaces_existing_scope() {
        let fragment = Fragment::builder()
            .files(["**/*.html"])
            .rule("no-eval", RuleSetting::On(Severity::Error))
            .build()
            .scoped_to(SOURCE_FILES);

        let files = fragment.files.unwrap();
        assert_eq!(files.len(), SOURCE_FILES.len());
        assert_eq!(files[0], "**/*.ts");
        // Rules survive the re-scope untouched.
        assert_eq!(fragment.rules.len(), 1);
    }

    #[test]
    fn test_only_for_source_files_scopes_every_fragment() {
        let preset = vec![
            Fragment::builder()
                .rule("a", RuleSetting::On(Severity::Warn))
                .build(),
            Fragment::builder().rule("b", RuleSetting::Off).build(),
        ];

        let scoped = only_for_source_files(preset);

        assert_eq!(scoped.len(), 2);
        for fragment in &scoped {
            assert_eq!(fragment.files.as_deref().unwrap().len(), SOURCE_FILES.len());
        }
    }

    #[test]
    fn test_empty_fragment_detection() {
        assert!(Fragment::default().is_empty());
        assert!(!Fragment::global_ignores(["dist/"]).is_empty());
    }
}
