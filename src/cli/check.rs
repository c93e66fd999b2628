//! Static checking and canonical formatting of story files

use crate::cli::load_story_file;
use crate::domain::story::Story;
use crate::lint::config::LintConfig;
use crate::lint::{LintLevel, LintResult, lint_with_config};
use crate::parser;
use std::io::{self, Write};
use std::path::Path;

/// Check a story file, printing every issue found
///
/// Returns `false` when the story has errors, or warnings in strict mode.
pub fn run_check(path: &Path) -> anyhow::Result<bool> {
    let story = load_story_file(path)?;
    let config = LintConfig::from_env();
    let stdout = io::stdout();
    let passed = check_story(&story, &config, &mut stdout.lock())?;
    Ok(passed)
}

/// Lint `story` and report to `out`
pub fn check_story<W: Write>(story: &Story, config: &LintConfig, out: &mut W) -> io::Result<bool> {
    let result = lint_with_config(story, config);
    report(story, &result, out)?;

    let passed = !result.has_errors() && !(config.strict && result.has_warnings());
    Ok(passed)
}

fn report<W: Write>(story: &Story, result: &LintResult, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} passage(s), opening passage '{}'",
        story.title(),
        story.len(),
        story.opening_passage_title()
    )?;

    for issue in &result.issues {
        let level = match issue.level {
            LintLevel::Error => "error",
            LintLevel::Warning => "warning",
            LintLevel::Info => "info",
        };
        match &issue.passage {
            Some(passage) => writeln!(out, "{level}[{}] {passage}: {}", issue.category, issue.message)?,
            None => writeln!(out, "{level}[{}] {}", issue.category, issue.message)?,
        }
    }

    writeln!(
        out,
        "{} error(s), {} warning(s), {} info",
        result.error_count, result.warning_count, result.info_count
    )
}

/// Print the canonical form of a story file to stdout
pub fn run_fmt(path: &Path) -> anyhow::Result<()> {
    let story = load_story_file(path)?;
    let lines = parser::format(&story)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(parser::save_story_lines(&lines).as_bytes())?;
    Ok(())
}
