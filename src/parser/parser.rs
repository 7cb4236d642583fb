//! Recursive descent parser for the modeling DSL
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::constants::FQN_SEPARATOR;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(input, &tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Tokens that end a statement during error recovery
const RECOVERY: &[SyntaxKind] = &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE];

/// The parser state
struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: &'a [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        // Look ahead, skipping trivia
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        SyntaxKind::ERROR
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume an identifier used as an element name.
    ///
    /// Qualified names are joined with `.`, so an unrestricted name may not
    /// contain one.
    fn bump_name(&mut self) {
        if self.current().is_some_and(|t| t.text.contains(FQN_SEPARATOR)) {
            self.error(format!("name may not contain '{FQN_SEPARATOR}'"));
        }
        self.bump();
    }

    /// Consume the current token, recording it under a different kind
    fn bump_as(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.current() {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume `count` tokens as a single token of `kind` spanning their source text
    fn bump_glued(&mut self, kind: SyntaxKind, count: usize) {
        let end = (self.pos + count).min(self.tokens.len());
        if end <= self.pos {
            return;
        }
        let first = &self.tokens[self.pos];
        let last = &self.tokens[end - 1];
        let lo = usize::from(first.offset);
        let hi = usize::from(last.offset) + last.text.len();
        self.builder.token(kind.into(), &self.input[lo..hi]);
        self.pos = end;
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    /// Skip whitespace and line comments, leaving block comments in place
    fn skip_ws(&mut self) {
        while self.at_any(&[SyntaxKind::WHITESPACE, SyntaxKind::LINE_COMMENT]) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.input)));
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Record an error and skip to the end of the current statement.
    ///
    /// A terminating `;` is consumed into the error node, a `}` is left for
    /// the enclosing body.
    fn error_recover(&mut self, message: impl Into<String>) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(RECOVERY) {
            self.bump();
            consumed = true;
        }
        if self.at(SyntaxKind::SEMICOLON) || (!consumed && !self.at_eof() && !self.at(SyntaxKind::R_BRACE)) {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = Member*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        while !self.at_eof() {
            let pos_before = self.pos;
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            if self.at(SyntaxKind::R_BRACE) {
                self.error_recover("unmatched '}'");
                self.bump();
                continue;
            }
            self.parse_member(false);
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump();
            }
        }

        self.finish_node();
    }

    /// Member = Package | Import | Part | Port | Attribute | ... | Comment | Doc
    fn parse_member(&mut self, in_enum: bool) {
        match self.current_kind() {
            SyntaxKind::PACKAGE_KW => self.parse_package(),
            SyntaxKind::IMPORT_KW => self.parse_import(),
            SyntaxKind::PART_KW => self.parse_part(),
            SyntaxKind::PORT_KW => self.parse_port(),
            SyntaxKind::ATTRIBUTE_KW => self.parse_attribute(),
            SyntaxKind::ITEM_KW => self.parse_item(),
            SyntaxKind::REF_KW => self.parse_ref_item(),
            SyntaxKind::ACTOR_KW => self.parse_actor(),
            SyntaxKind::SUBJECT_KW => self.parse_subject(),
            SyntaxKind::USE_KW => self.parse_use_case(),
            SyntaxKind::OBJECTIVE_KW => self.parse_objective(),
            SyntaxKind::INCLUDE_KW => self.parse_include(),
            SyntaxKind::MESSAGE_KW => self.parse_message(),
            SyntaxKind::CONNECTION_KW => self.parse_connection(),
            SyntaxKind::END_KW => self.parse_end_part(),
            SyntaxKind::CONNECT_KW => self.parse_connect(),
            SyntaxKind::ENUM_KW => self.parse_enum(),
            SyntaxKind::COMMENT_KW => self.parse_comment(),
            SyntaxKind::DOC_KW => self.parse_doc(),
            SyntaxKind::IDENT if in_enum => self.parse_bare_enum_value(),
            _ => {
                // Unknown token - skip with error
                self.error_recover(format!("unexpected token: {:?}", self.current_kind()));
            }
        }
    }

    /// Body = ';' | '{' Member* '}'
    fn parse_body(&mut self, in_enum: bool) {
        self.start_node(SyntaxKind::NAMESPACE_BODY);

        if self.eat(SyntaxKind::SEMICOLON) {
            // Empty body
        } else if self.eat(SyntaxKind::L_BRACE) {
            self.skip_trivia();

            while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
                let pos_before = self.pos;
                self.parse_member(in_enum);
                self.skip_trivia();
                // Safety: if we didn't make progress, force-skip a token
                if self.pos == pos_before && !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
                    self.error(format!("stuck on token: {:?}", self.current_kind()));
                    self.bump();
                }
            }

            self.expect(SyntaxKind::R_BRACE);
        } else {
            self.error("expected ';' or '{'");
        }

        self.finish_node();
    }

    fn parse_name(&mut self) -> bool {
        if self.at(SyntaxKind::IDENT) {
            self.bump_name();
            true
        } else {
            self.error("expected name");
            false
        }
    }

    /// Typing = ':' QualifiedName
    fn parse_typing(&mut self) {
        if !self.eat(SyntaxKind::COLON) {
            return;
        }
        self.skip_trivia();
        if !self.at(SyntaxKind::IDENT) {
            self.error("expected type name");
            return;
        }
        let mut count = 1;
        while self.tokens.get(self.pos + count).map(|t| t.kind) == Some(SyntaxKind::COLON_COLON)
            && self.tokens.get(self.pos + count + 1).map(|t| t.kind) == Some(SyntaxKind::IDENT)
        {
            count += 2;
        }
        self.bump_glued(SyntaxKind::TYPE_NAME, count);
    }

    /// Multiplicity = '[' ... ']'
    fn parse_multiplicity(&mut self) {
        if !self.at(SyntaxKind::L_BRACKET) {
            return;
        }
        let close = self.tokens[self.pos..]
            .iter()
            .take_while(|t| {
                !matches!(
                    t.kind,
                    SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE
                )
            })
            .position(|t| t.kind == SyntaxKind::R_BRACKET);
        match close {
            Some(offset) => self.bump_glued(SyntaxKind::MULTIPLICITY, offset + 1),
            None => {
                self.error("unclosed multiplicity, expected ']'");
                self.bump();
            }
        }
    }

    /// Value = '=' Literal
    fn parse_value(&mut self) {
        if !self.eat(SyntaxKind::EQ) {
            return;
        }
        self.skip_trivia();
        let next = self.tokens.get(self.pos + 1).map(|t| t.kind);
        if self.at(SyntaxKind::MINUS)
            && matches!(next, Some(SyntaxKind::INTEGER | SyntaxKind::DECIMAL))
        {
            self.bump_glued(SyntaxKind::CONSTANT, 2);
        } else if self.at_any(&[
            SyntaxKind::INTEGER,
            SyntaxKind::DECIMAL,
            SyntaxKind::STRING,
            SyntaxKind::TRUE_KW,
            SyntaxKind::FALSE_KW,
            SyntaxKind::IDENT,
        ]) {
            self.bump_as(SyntaxKind::CONSTANT);
        } else {
            self.error("expected value");
        }
    }

    /// Specialization = ('specializes' | ':>') Name
    fn parse_specialization(&mut self) -> bool {
        if self.at_any(&[SyntaxKind::SPECIALIZES_KW, SyntaxKind::COLON_GT]) {
            self.bump();
            self.skip_trivia();
            self.parse_name();
            true
        } else {
            false
        }
    }

    /// Subsetting = 'subsets' Name
    fn parse_subsetting(&mut self) -> bool {
        if self.eat(SyntaxKind::SUBSETS_KW) {
            self.skip_trivia();
            self.parse_name();
            true
        } else {
            false
        }
    }

    /// Package = 'package' Name Body
    fn parse_package(&mut self) {
        self.start_node(SyntaxKind::PACKAGE);

        self.expect(SyntaxKind::PACKAGE_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Import = 'import' Name ('::' Name)* ('::' '*' '*'?)? ';'
    fn parse_import(&mut self) {
        self.start_node(SyntaxKind::IMPORT_PACKAGE);

        self.expect(SyntaxKind::IMPORT_KW);
        self.skip_trivia();
        self.parse_name();
        while self.eat(SyntaxKind::COLON_COLON) {
            if self.eat(SyntaxKind::STAR) {
                // Recursive import ::**
                self.eat(SyntaxKind::STAR);
                break;
            }
            if !self.parse_name() {
                break;
            }
        }
        self.skip_trivia();
        self.expect(SyntaxKind::SEMICOLON);

        self.finish_node();
    }

    /// Part = 'part' 'def' Name Specialization? Body
    ///      | 'part' Name Typing? Multiplicity? (Specialization Subsetting?)? Body
    fn parse_part(&mut self) {
        let checkpoint = self.builder.checkpoint();

        self.expect(SyntaxKind::PART_KW);
        self.skip_trivia();
        let is_def = self.eat(SyntaxKind::DEF_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();

        let kind = if is_def {
            if self.parse_specialization() {
                SyntaxKind::PART_DEF_SPECIALIZES
            } else {
                SyntaxKind::PART_DEF
            }
        } else {
            self.parse_typing();
            self.skip_trivia();
            self.parse_multiplicity();
            self.skip_trivia();
            if self.parse_specialization() {
                self.skip_trivia();
                if self.parse_subsetting() {
                    SyntaxKind::FEATURE_PART_SPECIALIZES_SUBSETS
                } else {
                    SyntaxKind::FEATURE_PART_SPECIALIZES
                }
            } else {
                SyntaxKind::PART_DEF
            }
        };

        self.skip_trivia();
        self.parse_body(false);

        self.builder.start_node_at(checkpoint, kind.into());
        self.finish_node();
    }

    /// Port = 'port' 'def'? Name Typing? Multiplicity? Body
    fn parse_port(&mut self) {
        self.start_node(SyntaxKind::PORT_DEF);

        self.expect(SyntaxKind::PORT_KW);
        self.skip_trivia();
        self.eat(SyntaxKind::DEF_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_multiplicity();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Attribute = 'attribute' ('def' | 'redefines' | ':>>')? Name Typing? Multiplicity? Value? Body
    fn parse_attribute(&mut self) {
        let checkpoint = self.builder.checkpoint();

        self.expect(SyntaxKind::ATTRIBUTE_KW);
        self.skip_trivia();
        let kind = if self.at_any(&[SyntaxKind::REDEFINES_KW, SyntaxKind::COLON_GT_GT]) {
            self.bump();
            SyntaxKind::FEATURE_ATTRIBUTE_REDEFINES
        } else {
            self.eat(SyntaxKind::DEF_KW);
            SyntaxKind::FEATURE_ATTRIBUTE_DEF
        };
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_multiplicity();
        self.skip_trivia();
        self.parse_value();
        self.skip_trivia();
        self.parse_body(false);

        self.builder.start_node_at(checkpoint, kind.into());
        self.finish_node();
    }

    /// Item = 'item' 'def'? Name Typing? Multiplicity? Body
    fn parse_item(&mut self) {
        self.start_node(SyntaxKind::FEATURE_ITEM_DEF);

        self.expect(SyntaxKind::ITEM_KW);
        self.skip_trivia();
        self.eat(SyntaxKind::DEF_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_multiplicity();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// RefItem = 'ref' 'item' Name Typing? Multiplicity? ('references' Name)? Body
    fn parse_ref_item(&mut self) {
        self.start_node(SyntaxKind::FEATURE_ITEM_REF);

        self.expect(SyntaxKind::REF_KW);
        self.skip_trivia();
        self.expect(SyntaxKind::ITEM_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_multiplicity();
        self.skip_trivia();
        if self.eat(SyntaxKind::REFERENCES_KW) {
            self.skip_trivia();
            self.parse_name();
            self.skip_trivia();
        }
        self.parse_body(false);

        self.finish_node();
    }

    /// Actor = 'actor' Name Typing? Specialization? Body
    fn parse_actor(&mut self) {
        self.start_node(SyntaxKind::FEATURE_ACTOR_SPECIALIZES);

        self.expect(SyntaxKind::ACTOR_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_specialization();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Subject = 'subject' Name Typing? Body
    fn parse_subject(&mut self) {
        self.start_node(SyntaxKind::SUBJECT_DEF);

        self.expect(SyntaxKind::SUBJECT_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// UseCase = 'use' 'case' 'def'? Name Body
    fn parse_use_case(&mut self) {
        self.start_node(SyntaxKind::USE_CASE_DEF);

        self.expect(SyntaxKind::USE_KW);
        self.skip_trivia();
        self.expect(SyntaxKind::CASE_KW);
        self.skip_trivia();
        self.eat(SyntaxKind::DEF_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Objective = 'objective' Name? Body
    fn parse_objective(&mut self) {
        self.start_node(SyntaxKind::OBJECTIVE_DEF);

        self.expect(SyntaxKind::OBJECTIVE_KW);
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.bump_name();
            self.skip_trivia();
        }
        self.parse_body(false);

        self.finish_node();
    }

    /// Include = 'include' ('use' 'case')? Name Body
    fn parse_include(&mut self) {
        self.start_node(SyntaxKind::INCLUDE);

        self.expect(SyntaxKind::INCLUDE_KW);
        self.skip_trivia();
        if self.eat(SyntaxKind::USE_KW) {
            self.skip_trivia();
            self.expect(SyntaxKind::CASE_KW);
            self.skip_trivia();
        }
        self.parse_name();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Message = 'message' Name? 'of' Endpoint 'from' Endpoint 'to' Endpoint Body
    fn parse_message(&mut self) {
        self.start_node(SyntaxKind::MESSAGE);

        self.expect(SyntaxKind::MESSAGE_KW);
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.bump_name();
            self.skip_trivia();
        }
        for keyword in [SyntaxKind::OF_KW, SyntaxKind::FROM_KW, SyntaxKind::TO_KW] {
            self.expect(keyword);
            self.skip_trivia();
            self.parse_endpoint(SyntaxKind::MESSAGE_EXPR);
            self.skip_trivia();
        }
        self.parse_body(false);

        self.finish_node();
    }

    /// Endpoint = Name ('.' Name)*
    fn parse_endpoint(&mut self, kind: SyntaxKind) {
        self.start_node(kind);

        if self.parse_name() {
            while self.eat(SyntaxKind::DOT) {
                if !self.parse_name() {
                    break;
                }
            }
        }

        self.finish_node();
    }

    /// Connection = 'connection' 'def'? Name? Typing? Body
    fn parse_connection(&mut self) {
        self.start_node(SyntaxKind::CONNECTION);

        self.expect(SyntaxKind::CONNECTION_KW);
        self.skip_trivia();
        self.eat(SyntaxKind::DEF_KW);
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.bump_name();
            self.skip_trivia();
        }
        self.parse_typing();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// EndPart = 'end' 'part'? Name Typing? Multiplicity? Body
    fn parse_end_part(&mut self) {
        self.start_node(SyntaxKind::END_PART);

        self.expect(SyntaxKind::END_KW);
        self.skip_trivia();
        self.eat(SyntaxKind::PART_KW);
        self.skip_trivia();
        self.parse_name();
        self.skip_trivia();
        self.parse_typing();
        self.skip_trivia();
        self.parse_multiplicity();
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Connect = 'connect' Endpoint 'to' Endpoint Body
    fn parse_connect(&mut self) {
        self.start_node(SyntaxKind::CONNECT);

        self.expect(SyntaxKind::CONNECT_KW);
        self.skip_trivia();
        self.parse_endpoint(SyntaxKind::CONNECT_EXPR);
        self.skip_trivia();
        self.expect(SyntaxKind::TO_KW);
        self.skip_trivia();
        self.parse_endpoint(SyntaxKind::CONNECT_EXPR);
        self.skip_trivia();
        self.parse_body(false);

        self.finish_node();
    }

    /// Enum = 'enum' 'def' Name Body | 'enum' Name Value? ';'
    fn parse_enum(&mut self) {
        if self.nth(1) == SyntaxKind::DEF_KW {
            self.start_node(SyntaxKind::ENUM_DEF);

            self.expect(SyntaxKind::ENUM_KW);
            self.skip_trivia();
            self.expect(SyntaxKind::DEF_KW);
            self.skip_trivia();
            self.parse_name();
            self.skip_trivia();
            self.parse_body(true);

            self.finish_node();
        } else {
            self.start_node(SyntaxKind::ENUM_VALUE);

            self.expect(SyntaxKind::ENUM_KW);
            self.skip_trivia();
            self.parse_enum_value_rest();

            self.finish_node();
        }
    }

    /// EnumValue = Name Value? ';' (inside an enumeration body)
    fn parse_bare_enum_value(&mut self) {
        self.start_node(SyntaxKind::ENUM_VALUE);
        self.parse_enum_value_rest();
        self.finish_node();
    }

    fn parse_enum_value_rest(&mut self) {
        self.parse_name();
        self.skip_trivia();
        self.parse_value();
        self.skip_trivia();
        self.expect(SyntaxKind::SEMICOLON);
    }

    /// Comment = 'comment' Name? ('about' Name)? LongComment
    fn parse_comment(&mut self) {
        let checkpoint = self.builder.checkpoint();

        self.expect(SyntaxKind::COMMENT_KW);
        self.skip_ws();
        let named = self.at(SyntaxKind::IDENT);
        if named {
            self.bump_name();
            self.skip_ws();
        }
        let about = self.eat(SyntaxKind::ABOUT_KW);
        if about {
            if !named {
                self.error("'about' requires a named comment");
            }
            self.skip_ws();
            self.parse_name();
            self.skip_ws();
        }
        self.parse_comment_text();

        let kind = match (named, about) {
            (_, true) => SyntaxKind::COMMENT_NAMED_ABOUT,
            (true, false) => SyntaxKind::COMMENT_NAMED,
            (false, false) => SyntaxKind::COMMENT_UNNAMED,
        };
        self.builder.start_node_at(checkpoint, kind.into());
        self.finish_node();
    }

    /// Doc = 'doc' Name? LongComment
    fn parse_doc(&mut self) {
        let checkpoint = self.builder.checkpoint();

        self.expect(SyntaxKind::DOC_KW);
        self.skip_ws();
        let named = self.at(SyntaxKind::IDENT);
        if named {
            self.bump_name();
            self.skip_ws();
        }
        self.parse_comment_text();

        let kind = if named {
            SyntaxKind::DOC_NAMED
        } else {
            SyntaxKind::DOC_UNNAMED
        };
        self.builder.start_node_at(checkpoint, kind.into());
        self.finish_node();
    }

    fn parse_comment_text(&mut self) {
        if self.at(SyntaxKind::BLOCK_COMMENT) {
            self.bump_as(SyntaxKind::COMMENT_TEXT);
        } else {
            self.error("expected comment text '/* ... */'");
        }
    }
}
