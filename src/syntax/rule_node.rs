use smol_str::SmolStr;
use std::hash::Hash;

/// Uniform read-only view of one concrete syntax node.
///
/// Optional sub-fields that are absent come back as empty vectors, never as
/// errors. String accessors strip a single layer of surrounding quotes.
///
/// Implementors must be cheap to clone and hash by node identity: the
/// identity assigner keys its side table on them.
pub trait RuleNode: Clone + Eq + Hash {
    /// Grammar rule name of this node, e.g. `feature_part_specializes`.
    fn rule_kind(&self) -> &str;

    /// Identifier tokens owned directly by this node, in source order.
    fn identifiers(&self) -> Vec<SmolStr>;

    /// Type annotations (`: Engine`).
    fn type_annotations(&self) -> Vec<SmolStr>;

    /// Literal constants (`= 1500`).
    fn constants(&self) -> Vec<SmolStr>;

    /// Multiplicity markers, bracket text included (`[0..*]`).
    fn multiplicities(&self) -> Vec<SmolStr>;

    /// Long-comment payloads with their `/* */` delimiters removed.
    fn long_comments(&self) -> Vec<SmolStr>;

    /// Endpoint expressions of a connect or message construct.
    ///
    /// Each endpoint is the list of identifier tokens of a dotted path, so
    /// `connect a.p1 to b` yields `[["a", "p1"], ["b"]]`.
    fn endpoints(&self) -> Vec<Vec<SmolStr>>;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;
}
