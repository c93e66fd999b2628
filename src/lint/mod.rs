//! Lint module for story quality checking
//!
//! This module runs static checks over a parsed story:
//! - Reference integrity (links that point at no passage)
//! - Story flow (unreachable passages, unmarked dead ends)
//! - Quality hints (ending passages with links, repeated destinations)

use crate::domain::story::Story;
use serde::{Deserialize, Serialize};

pub mod checks;
pub mod config;

/// Lint severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LintLevel {
    /// Error: must be fixed
    Error,
    /// Warning: should be reviewed
    Warning,
    /// Info: for your information
    Info,
}

/// A lint issue found in the story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintIssue {
    /// Severity level
    pub level: LintLevel,
    /// Issue message
    pub message: String,
    /// Title of the passage the issue was found in
    pub passage: Option<String>,
    /// Category of the issue
    pub category: String,
}

impl LintIssue {
    pub fn new(
        level: LintLevel,
        category: &str,
        passage: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            passage: passage.map(str::to_string),
            category: category.to_string(),
        }
    }
}

/// Result of linting a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    /// Issues found
    pub issues: Vec<LintIssue>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
    /// Number of info messages
    pub info_count: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            error_count: 0,
            warning_count: 0,
            info_count: 0,
        }
    }

    pub fn add_issue(&mut self, issue: LintIssue) {
        match issue.level {
            LintLevel::Error => self.error_count += 1,
            LintLevel::Warning => self.warning_count += 1,
            LintLevel::Info => self.info_count += 1,
        }
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for LintResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Lint a story with default configuration
pub fn lint(story: &Story) -> LintResult {
    let config = config::LintConfig::default();
    lint_with_config(story, &config)
}

/// Lint a story with custom configuration
pub fn lint_with_config(story: &Story, config: &config::LintConfig) -> LintResult {
    let mut result = LintResult::new();

    if config.references.enabled {
        checks::references::check(story, &mut result, config);
    }

    if config.flow.enabled {
        checks::flow::check(story, &mut result, config);
    }

    if config.quality.enabled {
        checks::quality::check(story, &mut result, config);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn lint_clean_story() {
        let story = parse(&[
            "Clean",
            "",
            "::Start",
            "A meadow.",
            "[Walk on] (End) {no_actions}",
            "",
            "::End",
            "You made it.",
            "[no_links]",
        ])
        .unwrap();

        let result = lint(&story);
        // End has no links and is not flagged as ending: info only
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.info_count, 1);
    }

    #[test]
    fn disabled_sections_are_skipped() {
        let story = parse(&["Broken", "", "::Start", "A door.", "[Open] (Nowhere) {}"]).unwrap();

        let mut config = config::LintConfig::default();
        assert!(lint_with_config(&story, &config).has_errors());

        config.references.enabled = false;
        config.flow.enabled = false;
        config.quality.enabled = false;
        assert!(lint_with_config(&story, &config).is_clean());
    }
}
