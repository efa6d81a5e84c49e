#[cfg(test)]
mod tests {
    use crate::fragment::{RuleSetting, Severity};
    use crate::naming::{
        MatchRegex, NamingSelector, PredefinedFormat, SelectorKind, common_naming_rules,
        naming_convention_setting,
    };

    #[test]
    fn test_table_declares_general_entries_before_refinements() {
        let rules = common_naming_rules();

        let general_typelike = rules
            .iter()
            .position(|s| s.selector == [SelectorKind::TypeLike] && s.format.is_some())
            .unwrap();
        let mixin_typelike = rules
            .iter()
            .position(|s| s.selector == [SelectorKind::TypeLike] && s.format.is_none())
            .unwrap();

        // The first matching entry wins, so the mixin refinement must come
        // after the general type-like entry.
        assert!(general_typelike < mixin_typelike);
    }

    #[test]
    fn test_table_starts_with_the_default_selector() {
        let rules = common_naming_rules();
        assert_eq!(rules[0].selector, [SelectorKind::Default]);
        assert_eq!(
            rules[0].format.as_deref(),
            Some(&[PredefinedFormat::StrictCamelCase][..])
        );
    }

    #[test]
    fn test_setting_serializes_format_null_for_custom_only_entries() {
        let setting = naming_convention_setting(Severity::Error, &[]);

        let RuleSetting::WithOptions(severity, options) = setting else {
            panic!("Expected a setting with options");
        };
        assert_eq!(severity, Severity::Error);

        let entries = options.as_array().unwrap();
        assert_eq!(entries.len(), common_naming_rules().len());

        // The mixin super-alias entries disable casing with an explicit null.
        let custom_only = entries
            .iter()
            .filter(|entry| entry.get("format") == Some(&serde_json::Value::Null))
            .count();
        assert_eq!(custom_only, 2);

        // Keyword field round-trips under its wire name.
        assert!(entries.iter().any(|entry| {
            entry
                .get("filter")
                .and_then(|filter| filter.get("match"))
                .is_some()
        }));
    }

    #[test]
    fn test_extra_selectors_are_appended_after_the_shared_table() {
        let extra = NamingSelector::new(
            vec![SelectorKind::Function, SelectorKind::Variable],
            vec![
                PredefinedFormat::StrictCamelCase,
                PredefinedFormat::StrictPascalCase,
            ],
        );

        let RuleSetting::WithOptions(_, options) =
            naming_convention_setting(Severity::Error, &[extra])
        else {
            panic!("Expected a setting with options");
        };

        let entries = options.as_array().unwrap();
        assert_eq!(entries.len(), common_naming_rules().len() + 1);
        assert_eq!(
            entries.last().unwrap()["selector"],
            serde_json::json!(["function", "variable"])
        );
    }

    #[test]
    fn test_match_regex_constructors() {
        assert!(MatchRegex::matching("Mixin$").matches);
        assert!(!MatchRegex::not_matching("^instance$").matches);
    }
}
