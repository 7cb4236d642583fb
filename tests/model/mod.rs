//! Model layer tests
//!
//! - Table properties that hold for every successful build
//! - End-to-end scenarios from source text to tree
//! - Fixture files on disk

pub mod tests_fixtures;
pub mod tests_scenarios;
pub mod tests_table_properties;
