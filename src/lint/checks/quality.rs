//! Quality checking implementation

use crate::domain::story::Story;
use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use std::collections::HashSet;

/// Check quality issues (ending passages with links, repeated destinations)
pub fn check(story: &Story, result: &mut LintResult, config: &LintConfig) {
    if config.quality.check_ending_links {
        check_ending_links(story, result);
    }

    if config.quality.check_duplicate_links {
        check_duplicate_links(story, result);
    }
}

fn check_ending_links(story: &Story, result: &mut LintResult) {
    for passage in story.passages() {
        if passage.is_ending_passage() && passage.has_links() {
            result.add_issue(LintIssue::new(
                LintLevel::Info,
                "quality",
                Some(passage.title()),
                format!(
                    "Ending passage '{}' still has {} link(s)",
                    passage.title(),
                    passage.links().len()
                ),
            ));
        }
    }
}

fn check_duplicate_links(story: &Story, result: &mut LintResult) {
    for passage in story.passages() {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for link in passage.links() {
            // links compare by reference
            if !seen.insert(link) && reported.insert(link.reference()) {
                result.add_issue(LintIssue::new(
                    LintLevel::Warning,
                    "quality",
                    Some(passage.title()),
                    format!(
                        "Passage '{}' has several links to '{}'",
                        passage.title(),
                        link.reference()
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn quality_check_duplicate_destinations() {
        let story = parse(&[
            "Fork",
            "",
            "::Start",
            "Paths everywhere.",
            "[Left] (End) {no_actions}",
            "[Right] (End) {Add 1 gold}",
            "[Straight] (End) {no_actions}",
            "",
            "::End",
            "Done.",
            "[no_links]",
        ])
        .unwrap();

        let mut result = LintResult::new();
        check(&story, &mut result, &LintConfig::default());

        assert_eq!(result.warning_count, 1);
        assert_eq!(result.issues[0].passage.as_deref(), Some("Start"));
    }

    #[test]
    fn quality_check_ending_with_links() {
        let story = parse(&["Loop", "", "::Start", "Again?", "[Again] (Start) {}"]).unwrap();
        let mut story = story;
        let mut start = story.opening_passage().clone();
        start.set_ending_passage(true);
        story.add_passage(start).unwrap();

        let mut result = LintResult::new();
        check(&story, &mut result, &LintConfig::default());

        assert_eq!(result.info_count, 1);
        assert_eq!(result.issues[0].category, "quality");
    }
}
