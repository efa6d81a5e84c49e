use serde::{Deserialize, Serialize};

/// Casing formats the engine can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredefinedFormat {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "strictCamelCase")]
    StrictCamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "StrictPascalCase")]
    StrictPascalCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "UPPER_CASE")]
    UpperCase,
}

/// How leading/trailing underscores are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnderscoreOption {
    Forbid,
    Allow,
    Require,
    RequireDouble,
    AllowDouble,
    AllowSingleOrDouble,
}

/// Identifier categories a selector can target, including the meta selectors
/// (`default`, `typeLike`, ...) that cover several individual kinds at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorKind {
    Default,
    VariableLike,
    MemberLike,
    TypeLike,
    Method,
    Property,
    Accessor,
    Variable,
    Function,
    Parameter,
    ParameterProperty,
    ClassicAccessor,
    EnumMember,
    ClassMethod,
    ObjectLiteralMethod,
    TypeMethod,
    ClassProperty,
    ObjectLiteralProperty,
    TypeProperty,
    AutoAccessor,
    Class,
    Interface,
    TypeAlias,
    Enum,
    TypeParameter,
    Import,
}

/// Declaration modifiers a selector can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modifier {
    Const,
    Readonly,
    Static,
    Public,
    Protected,
    Private,
    #[serde(rename = "#private")]
    HashPrivate,
    Abstract,
    Destructured,
    Global,
    Exported,
    Unused,
    RequiresQuotes,
    Override,
    Async,
    Default,
    Namespace,
}

/// Resolved-type filters for selectors that only apply to values of a
/// certain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeModifier {
    Boolean,
    String,
    Number,
    Function,
    Array,
}

/// A regex paired with whether matching or non-matching names pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRegex {
    pub regex: String,
    #[serde(rename = "match")]
    pub matches: bool,
}

impl MatchRegex {
    pub fn matching(regex: impl Into<String>) -> Self {
        MatchRegex {
            regex: regex.into(),
            matches: true,
        }
    }

    pub fn not_matching(regex: impl Into<String>) -> Self {
        MatchRegex {
            regex: regex.into(),
            matches: false,
        }
    }
}

/// One entry of the naming-convention table.
///
/// `format: None` serializes as an explicit null, which tells the engine to
/// skip casing enforcement and rely on `custom` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingSelector {
    pub selector: Vec<SelectorKind>,
    pub format: Option<Vec<PredefinedFormat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<MatchRegex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_underscore: Option<UnderscoreOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_underscore: Option<UnderscoreOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TypeModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<MatchRegex>,
}

impl NamingSelector {
    /// A selector enforcing the given formats, with no further constraints.
    pub fn new(selector: Vec<SelectorKind>, format: Vec<PredefinedFormat>) -> Self {
        NamingSelector {
            selector,
            format: Some(format),
            custom: None,
            leading_underscore: None,
            trailing_underscore: None,
            prefix: None,
            suffix: None,
            modifiers: None,
            types: None,
            filter: None,
        }
    }

    /// A selector with no casing enforcement, constrained by `custom` alone.
    pub fn unformatted(selector: Vec<SelectorKind>) -> Self {
        NamingSelector {
            format: None,
            ..NamingSelector::new(selector, Vec::new())
        }
    }

    pub fn with_custom(mut self, custom: MatchRegex) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn with_leading_underscore(mut self, option: UnderscoreOption) -> Self {
        self.leading_underscore = Some(option);
        self
    }

    pub fn with_prefix<I, S>(mut self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix = Some(prefix.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_types(mut self, types: Vec<TypeModifier>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn with_filter(mut self, filter: MatchRegex) -> Self {
        self.filter = Some(filter);
        self
    }
}
