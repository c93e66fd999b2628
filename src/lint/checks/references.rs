//! Reference integrity checking implementation

use crate::domain::story::Story;
use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use log::warn;

/// Check reference integrity (links pointing at missing passages)
pub fn check(story: &Story, result: &mut LintResult, config: &LintConfig) {
    if config.references.check_broken_links {
        check_broken_links(story, result);
    }
}

fn check_broken_links(story: &Story, result: &mut LintResult) {
    for passage in story.passages() {
        for link in passage.links() {
            if !story.does_link_refer_to_passage(link) {
                warn!(
                    "Broken link in passage '{}': no passage titled '{}'",
                    passage.title(),
                    link.reference()
                );
                result.add_issue(LintIssue::new(
                    LintLevel::Error,
                    "references",
                    Some(passage.title()),
                    format!(
                        "Link '{}' points at missing passage '{}'",
                        link.text(),
                        link.reference()
                    ),
                ));
            }
        }
    }
}
