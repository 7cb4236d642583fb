//! Logos-based lexer for the modeling DSL
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"'[^']*'")]
    UnrestrictedName,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token(":>>")]
    ColonGtGt,

    #[token(":>")]
    ColonGt,

    #[token("::")]
    ColonColon,

    #[token("..")]
    DotDot,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,

    // =========================================================================
    // KEYWORDS (alphabetical, longest match wins in logos)
    // =========================================================================
    #[token("about")]
    AboutKw,
    #[token("actor")]
    ActorKw,
    #[token("attribute")]
    AttributeKw,
    #[token("case")]
    CaseKw,
    #[token("comment")]
    CommentKw,
    #[token("connect")]
    ConnectKw,
    #[token("connection")]
    ConnectionKw,
    #[token("def")]
    DefKw,
    #[token("doc")]
    DocKw,
    #[token("end")]
    EndKw,
    #[token("enum")]
    EnumKw,
    #[token("false")]
    FalseKw,
    #[token("from")]
    FromKw,
    #[token("import")]
    ImportKw,
    #[token("include")]
    IncludeKw,
    #[token("item")]
    ItemKw,
    #[token("message")]
    MessageKw,
    #[token("objective")]
    ObjectiveKw,
    #[token("of")]
    OfKw,
    #[token("package")]
    PackageKw,
    #[token("part")]
    PartKw,
    #[token("port")]
    PortKw,
    #[token("redefines")]
    RedefinesKw,
    #[token("ref")]
    RefKw,
    #[token("references")]
    ReferencesKw,
    #[token("specializes")]
    SpecializesKw,
    #[token("subject")]
    SubjectKw,
    #[token("subsets")]
    SubsetsKw,
    #[token("to")]
    ToKw,
    #[token("true")]
    TrueKw,
    #[token("use")]
    UseKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident | UnrestrictedName => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Decimal => SyntaxKind::DECIMAL,
            String => SyntaxKind::STRING,

            // Multi-char punctuation
            ColonGtGt => SyntaxKind::COLON_GT_GT,
            ColonGt => SyntaxKind::COLON_GT,
            ColonColon => SyntaxKind::COLON_COLON,
            DotDot => SyntaxKind::DOT_DOT,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Dot => SyntaxKind::DOT,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Star => SyntaxKind::STAR,
            Minus => SyntaxKind::MINUS,

            // Keywords
            AboutKw => SyntaxKind::ABOUT_KW,
            ActorKw => SyntaxKind::ACTOR_KW,
            AttributeKw => SyntaxKind::ATTRIBUTE_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CommentKw => SyntaxKind::COMMENT_KW,
            ConnectKw => SyntaxKind::CONNECT_KW,
            ConnectionKw => SyntaxKind::CONNECTION_KW,
            DefKw => SyntaxKind::DEF_KW,
            DocKw => SyntaxKind::DOC_KW,
            EndKw => SyntaxKind::END_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FromKw => SyntaxKind::FROM_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            IncludeKw => SyntaxKind::INCLUDE_KW,
            ItemKw => SyntaxKind::ITEM_KW,
            MessageKw => SyntaxKind::MESSAGE_KW,
            ObjectiveKw => SyntaxKind::OBJECTIVE_KW,
            OfKw => SyntaxKind::OF_KW,
            PackageKw => SyntaxKind::PACKAGE_KW,
            PartKw => SyntaxKind::PART_KW,
            PortKw => SyntaxKind::PORT_KW,
            RedefinesKw => SyntaxKind::REDEFINES_KW,
            RefKw => SyntaxKind::REF_KW,
            ReferencesKw => SyntaxKind::REFERENCES_KW,
            SpecializesKw => SyntaxKind::SPECIALIZES_KW,
            SubjectKw => SyntaxKind::SUBJECT_KW,
            SubsetsKw => SyntaxKind::SUBSETS_KW,
            ToKw => SyntaxKind::TO_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            UseKw => SyntaxKind::USE_KW,
        }
    }
}
