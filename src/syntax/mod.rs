//! Syntax Node Adapter.
//!
//! The model table builder never looks at concrete syntax directly. It sees
//! every node through [`RuleNode`]: a rule-kind tag, the optional sub-fields
//! the rule may carry, and parent/child linkage. [`cst`] implements the trait
//! for the rowan tree produced by [`crate::parser`].

mod cst;
mod rule_node;

pub use rule_node::RuleNode;
