//! Keyword vocabulary shared by the lexer and the model classifier.
//!
//! The classifier tags every model element with the keywords that appear as
//! whole words in its grammar rule name (`feature_part_specializes_subsets`
//! is tagged `feature`, `part`, `specializes` and `subsets`).

use std::fmt;
use std::str::FromStr;

/// A keyword spelling from the DSL vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Keyword {
    About,
    Actor,
    Attribute,
    Case,
    Comment,
    Connect,
    Connection,
    Def,
    Doc,
    End,
    Enum,
    Feature,
    From,
    Import,
    Include,
    Item,
    Message,
    Objective,
    Of,
    Package,
    Part,
    Port,
    Redefines,
    Ref,
    References,
    Specializes,
    Subject,
    Subsets,
    To,
    Use,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &'static [Keyword] = &[
        Keyword::About,
        Keyword::Actor,
        Keyword::Attribute,
        Keyword::Case,
        Keyword::Comment,
        Keyword::Connect,
        Keyword::Connection,
        Keyword::Def,
        Keyword::Doc,
        Keyword::End,
        Keyword::Enum,
        Keyword::Feature,
        Keyword::From,
        Keyword::Import,
        Keyword::Include,
        Keyword::Item,
        Keyword::Message,
        Keyword::Objective,
        Keyword::Of,
        Keyword::Package,
        Keyword::Part,
        Keyword::Port,
        Keyword::Redefines,
        Keyword::Ref,
        Keyword::References,
        Keyword::Specializes,
        Keyword::Subject,
        Keyword::Subsets,
        Keyword::To,
        Keyword::Use,
    ];

    /// The source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::About => "about",
            Keyword::Actor => "actor",
            Keyword::Attribute => "attribute",
            Keyword::Case => "case",
            Keyword::Comment => "comment",
            Keyword::Connect => "connect",
            Keyword::Connection => "connection",
            Keyword::Def => "def",
            Keyword::Doc => "doc",
            Keyword::End => "end",
            Keyword::Enum => "enum",
            Keyword::Feature => "feature",
            Keyword::From => "from",
            Keyword::Import => "import",
            Keyword::Include => "include",
            Keyword::Item => "item",
            Keyword::Message => "message",
            Keyword::Objective => "objective",
            Keyword::Of => "of",
            Keyword::Package => "package",
            Keyword::Part => "part",
            Keyword::Port => "port",
            Keyword::Redefines => "redefines",
            Keyword::Ref => "ref",
            Keyword::References => "references",
            Keyword::Specializes => "specializes",
            Keyword::Subject => "subject",
            Keyword::Subsets => "subsets",
            Keyword::To => "to",
            Keyword::Use => "use",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .iter()
            .copied()
            .find(|kw| kw.as_str() == s)
            .ok_or(())
    }
}
