//! Shared fixtures and assertions for the integration tests.

pub mod source_fixtures;
