//! Infrastructure layer - File system adapters for stories
//!
//! This layer contains implementations that deal with external concerns
//! like the file system and in-memory stand-ins used by tests.

pub mod repositories;

pub use repositories::*;
