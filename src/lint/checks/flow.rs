//! Flow analysis implementation

use crate::domain::story::Story;
use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use std::collections::{HashSet, VecDeque};

/// Check flow issues (unreachable passages, unmarked dead ends)
pub fn check(story: &Story, result: &mut LintResult, config: &LintConfig) {
    if config.flow.check_unreachable {
        check_unreachable_passages(story, result);
    }

    if config.flow.check_dead_ends {
        check_dead_ends(story, result);
    }
}

/// Titles of every passage reachable from the opening passage
pub fn reachable_passages(story: &Story) -> HashSet<&str> {
    // Build reachability set using BFS
    let mut reachable = HashSet::new();
    let mut queue = VecDeque::new();

    let opening = story.opening_passage();
    reachable.insert(opening.title());
    queue.push_back(opening);

    while let Some(passage) = queue.pop_front() {
        for link in passage.links() {
            let Ok(target) = story.get_passage(link) else {
                continue;
            };
            if reachable.insert(target.title()) {
                queue.push_back(target);
            }
        }
    }

    reachable
}

fn check_unreachable_passages(story: &Story, result: &mut LintResult) {
    let reachable = reachable_passages(story);

    for passage in story.passages() {
        if !reachable.contains(passage.title()) {
            result.add_issue(LintIssue::new(
                LintLevel::Warning,
                "flow",
                Some(passage.title()),
                format!(
                    "Passage '{}' cannot be reached from '{}'",
                    passage.title(),
                    story.opening_passage_title()
                ),
            ));
        }
    }
}

fn check_dead_ends(story: &Story, result: &mut LintResult) {
    for passage in story.passages() {
        if !passage.has_links() && !passage.is_ending_passage() {
            result.add_issue(LintIssue::new(
                LintLevel::Info,
                "flow",
                Some(passage.title()),
                format!(
                    "Passage '{}' has no links but is not marked as an ending",
                    passage.title()
                ),
            ));
        }
    }
}
