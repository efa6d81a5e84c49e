use serde_json::Value;

use super::types::{
    MatchRegex, Modifier, NamingSelector, PredefinedFormat, SelectorKind, TypeModifier,
    UnderscoreOption,
};
use crate::fragment::{RuleSetting, Severity};

use Modifier as M;
use PredefinedFormat::{StrictCamelCase, StrictPascalCase};
use SelectorKind as S;

/// The shared naming-convention table.
///
/// Order matters: the engine takes the first matching entry, so the mixin and
/// singleton special cases sit after the general entries they refine.
pub fn common_naming_rules() -> Vec<NamingSelector> {
    vec![
        // strictCamelCase by default
        NamingSelector::new(vec![S::Default], vec![StrictCamelCase]),
        // Identifiers ending in "Class"/"Constructor" hold class values
        // (e.g. "const SomeClass = ...") and may be PascalCased
        NamingSelector::new(vec![S::Default], vec![StrictCamelCase, StrictPascalCase])
            .with_filter(MatchRegex::matching("(Class|Constructor)$")),
        // Mixin functions read like types
        NamingSelector::new(vec![S::Function], vec![StrictPascalCase])
            .with_filter(MatchRegex::matching("Mixin$")),
        // Unused parameters carry a single leading underscore
        NamingSelector::new(vec![S::Parameter], vec![StrictCamelCase])
            .with_modifiers(vec![M::Unused])
            .with_leading_underscore(UnderscoreOption::Require),
        // Type-like identifiers
        NamingSelector::new(vec![S::TypeLike], vec![StrictPascalCase])
            .with_leading_underscore(UnderscoreOption::Allow),
        // Mixin super aliases are generated names, exempt from casing
        NamingSelector::unformatted(vec![S::TypeLike])
            .with_custom(MatchRegex::matching("^_superOf_[a-zA-Z0-9_]+(_0)?$"))
            .with_filter(MatchRegex::matching("^_superOf_[a-zA-Z0-9_]+(_0)?$")),
        // Static-readonly class properties, except the singleton "instance"
        NamingSelector::new(vec![S::ClassProperty], vec![StrictCamelCase])
            .with_modifiers(vec![M::Static, M::Readonly])
            .with_filter(MatchRegex::not_matching("^instance$")),
        // Type parameters: "T" prefix
        NamingSelector::new(vec![S::TypeParameter], vec![StrictPascalCase])
            .with_prefix(["T"]),
        // Booleans read as predicates
        NamingSelector::new(vec![S::Variable], vec![StrictPascalCase])
            .with_types(vec![TypeModifier::Boolean])
            .with_prefix([
                "are", "can", "did", "does", "do", "has", "have", "is", "should", "was", "were",
                "will",
            ]),
        // Const variables may be PascalCased component-style values
        NamingSelector::new(vec![S::Variable], vec![StrictCamelCase, StrictPascalCase])
            .with_modifiers(vec![M::Const])
            .with_leading_underscore(UnderscoreOption::AllowSingleOrDouble),
        // Mixin super aliases bound to consts
        NamingSelector::unformatted(vec![S::Variable])
            .with_modifiers(vec![M::Const])
            .with_custom(MatchRegex::matching("^_superOf_[a-zA-Z0-9_]+(_[1-9][0-9]*)?$"))
            .with_filter(MatchRegex::matching("^_superOf_[a-zA-Z0-9_]+(_[1-9][0-9]*)?$")),
        // Private and protected properties may carry an underscore
        NamingSelector::new(vec![S::Property], vec![StrictCamelCase])
            .with_modifiers(vec![M::Private])
            .with_leading_underscore(UnderscoreOption::Allow),
        NamingSelector::new(vec![S::Property], vec![StrictCamelCase])
            .with_modifiers(vec![M::Protected])
            .with_leading_underscore(UnderscoreOption::Allow),
        // Enum members
        NamingSelector::new(vec![S::EnumMember], vec![StrictPascalCase]),
        // Default and namespace import names
        NamingSelector::new(vec![S::Import], vec![StrictCamelCase, StrictPascalCase]),
    ]
}

/// Builds the naming-convention rule setting from the shared table plus any
/// composer-appended entries. Appended entries land after the shared ones, so
/// they can only refine, never shadow, the general rules.
pub fn naming_convention_setting(severity: Severity, extra: &[NamingSelector]) -> RuleSetting {
    let mut selectors = common_naming_rules();
    selectors.extend_from_slice(extra);

    let options: Value =
        serde_json::to_value(&selectors).expect("naming selector table serializes");

    RuleSetting::WithOptions(severity, options)
}
