//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Composite kinds double as grammar rules: their [`SyntaxKind::rule_tag`]
//! is the rule-kind string the model classifier consumes.

/// All syntax kinds (tokens and nodes) of the modeling DSL
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (packages, parts, connections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier or 'unrestricted name'
    INTEGER, // 42
    DECIMAL, // 3.14
    STRING,  // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COLON_COLON, // ::
    COLON_GT,    // :>  (specializes)
    COLON_GT_GT, // :>> (redefines)
    DOT,         // .
    DOT_DOT,     // ..
    COMMA,       // ,
    EQ,          // =
    STAR,        // *
    MINUS,       // -

    // =========================================================================
    // PARSER-ASSIGNED TOKENS (optional sub-fields of a rule)
    // =========================================================================
    TYPE_NAME,    // `Engine` in `part e : Engine`
    CONSTANT,     // `1500` in `attribute mass = 1500`
    MULTIPLICITY, // `[0..*]`
    COMMENT_TEXT, // `/* ... */` body of a comment or doc

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABOUT_KW,
    ACTOR_KW,
    ATTRIBUTE_KW,
    CASE_KW,
    COMMENT_KW,
    CONNECT_KW,
    CONNECTION_KW,
    DEF_KW,
    DOC_KW,
    END_KW,
    ENUM_KW,
    FALSE_KW,
    FROM_KW,
    IMPORT_KW,
    INCLUDE_KW,
    ITEM_KW,
    MESSAGE_KW,
    OBJECTIVE_KW,
    OF_KW,
    PACKAGE_KW,
    PART_KW,
    PORT_KW,
    REDEFINES_KW,
    REF_KW,
    REFERENCES_KW,
    SPECIALIZES_KW,
    SUBJECT_KW,
    SUBSETS_KW,
    TO_KW,
    TRUE_KW,
    USE_KW,

    // =========================================================================
    // COMPOSITE NODES (grammar rules)
    // =========================================================================
    // Root and structure
    SOURCE_FILE,
    NAMESPACE_BODY,

    // Namespaces
    PACKAGE,
    IMPORT_PACKAGE,

    // Parts and features
    PART_DEF,
    PART_DEF_SPECIALIZES,
    FEATURE_PART_SPECIALIZES,
    FEATURE_PART_SPECIALIZES_SUBSETS,
    PORT_DEF,
    FEATURE_ATTRIBUTE_DEF,
    FEATURE_ATTRIBUTE_REDEFINES,
    FEATURE_ITEM_DEF,
    FEATURE_ITEM_REF,
    FEATURE_ACTOR_SPECIALIZES,
    SUBJECT_DEF,

    // Use cases
    USE_CASE_DEF,
    OBJECTIVE_DEF,
    INCLUDE,
    MESSAGE,
    MESSAGE_EXPR,

    // Connections
    CONNECTION,
    END_PART,
    CONNECT,
    CONNECT_EXPR,

    // Enumerations
    ENUM_DEF,
    ENUM_VALUE,

    // Annotations
    COMMENT_UNNAMED,
    COMMENT_NAMED,
    COMMENT_NAMED_ABOUT,
    DOC_UNNAMED,
    DOC_NAMED,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABOUT_KW as u16) && (self as u16) <= (Self::USE_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::MINUS as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::INTEGER | Self::DECIMAL | Self::STRING
        )
    }

    /// The grammar rule name of a composite kind, e.g. `part_def_specializes`.
    ///
    /// Returns `None` for tokens.
    pub fn rule_tag(self) -> Option<&'static str> {
        let tag = match self {
            Self::SOURCE_FILE => "model",
            Self::NAMESPACE_BODY => "namespace_body",
            Self::PACKAGE => "package",
            Self::IMPORT_PACKAGE => "import_package",
            Self::PART_DEF => "part_def",
            Self::PART_DEF_SPECIALIZES => "part_def_specializes",
            Self::FEATURE_PART_SPECIALIZES => "feature_part_specializes",
            Self::FEATURE_PART_SPECIALIZES_SUBSETS => "feature_part_specializes_subsets",
            Self::PORT_DEF => "port_def",
            Self::FEATURE_ATTRIBUTE_DEF => "feature_attribute_def",
            Self::FEATURE_ATTRIBUTE_REDEFINES => "feature_attribute_redefines",
            Self::FEATURE_ITEM_DEF => "feature_item_def",
            Self::FEATURE_ITEM_REF => "feature_item_ref",
            Self::FEATURE_ACTOR_SPECIALIZES => "feature_actor_specializes",
            Self::SUBJECT_DEF => "subject_def",
            Self::USE_CASE_DEF => "use_case_def",
            Self::OBJECTIVE_DEF => "objective_def",
            Self::INCLUDE => "include",
            Self::MESSAGE => "message",
            Self::MESSAGE_EXPR => "message_expr",
            Self::CONNECTION => "connection",
            Self::END_PART => "end_part",
            Self::CONNECT => "connect",
            Self::CONNECT_EXPR => "connect_expr",
            Self::ENUM_DEF => "enum_def",
            Self::ENUM_VALUE => "enum_value",
            Self::COMMENT_UNNAMED => "comment_unnamed",
            Self::COMMENT_NAMED => "comment_named",
            Self::COMMENT_NAMED_ABOUT => "comment_named_about",
            Self::DOC_UNNAMED => "doc_unnamed",
            Self::DOC_NAMED => "doc_named",
            Self::ERROR => "error",
            _ => return None,
        };
        Some(tag)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SysMLLanguage {}

impl rowan::Language for SysMLLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SysMLLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SysMLLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SysMLLanguage>;
