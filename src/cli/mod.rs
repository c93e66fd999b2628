//! Command-line front end for `.paths` stories

pub mod check;
pub mod play;

use crate::domain::story::Story;
use crate::parser;
use anyhow::Context;
use std::path::Path;

/// Read and parse a story file
pub fn load_story_file(path: &Path) -> anyhow::Result<Story> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read story file '{}'", path.display()))?;
    let story = parser::parse(&parser::read_story_lines(&content))
        .with_context(|| format!("Failed to parse story file '{}'", path.display()))?;
    Ok(story)
}
