//! [`RuleNode`] over the rowan CST.

use smol_str::SmolStr;

use super::RuleNode;
use crate::base::text::{strip_comment_delimiters, strip_quotes};
use crate::parser::{SyntaxKind, SyntaxNode};

/// Collect the direct child tokens of `kind`, quotes stripped.
fn tokens_of(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SmolStr> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == kind)
        .map(|token| SmolStr::new(strip_quotes(token.text())))
        .collect()
}

impl RuleNode for SyntaxNode {
    fn rule_kind(&self) -> &str {
        self.kind().rule_tag().unwrap_or_default()
    }

    fn identifiers(&self) -> Vec<SmolStr> {
        tokens_of(self, SyntaxKind::IDENT)
    }

    fn type_annotations(&self) -> Vec<SmolStr> {
        tokens_of(self, SyntaxKind::TYPE_NAME)
    }

    fn constants(&self) -> Vec<SmolStr> {
        tokens_of(self, SyntaxKind::CONSTANT)
    }

    fn multiplicities(&self) -> Vec<SmolStr> {
        // Bracket text is kept verbatim
        self.children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::MULTIPLICITY)
            .map(|token| SmolStr::new(token.text()))
            .collect()
    }

    fn long_comments(&self) -> Vec<SmolStr> {
        self.children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| token.kind() == SyntaxKind::COMMENT_TEXT)
            .map(|token| SmolStr::new(strip_comment_delimiters(token.text())))
            .collect()
    }

    fn endpoints(&self) -> Vec<Vec<SmolStr>> {
        self.children()
            .filter(|child| {
                matches!(
                    child.kind(),
                    SyntaxKind::CONNECT_EXPR | SyntaxKind::MESSAGE_EXPR
                )
            })
            .map(|expr| tokens_of(&expr, SyntaxKind::IDENT))
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        SyntaxNode::parent(self)
    }

    fn children(&self) -> Vec<Self> {
        SyntaxNode::children(self).collect()
    }
}
