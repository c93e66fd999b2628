//! Story formatter - Writes a story back into `.paths` lines

use super::errors::FormatError;
use super::{NO_ACTIONS, NO_LINKS, NO_LINKS_TEXT, PASSAGE_PREFIX, is_integer, is_valid_story_title};
use crate::domain::action::Action;
use crate::domain::link::Link;
use crate::domain::passage::Passage;
use crate::domain::story::Story;
use log::debug;

/// Format `story` as story file lines
///
/// The opening passage comes first, the remaining passages follow in the
/// order they were added. Fails when a part of the story cannot be read
/// back by the parser.
pub fn format(story: &Story) -> Result<Vec<String>, FormatError> {
    if !is_valid_story_title(story.title()) {
        return Err(FormatError::unrepresentable(format!(
            "story title '{}' may only contain letters and spaces",
            story.title()
        )));
    }

    let mut lines = vec![story.title().to_string(), String::new()];
    format_passage(story.opening_passage(), &mut lines)?;
    for passage in story
        .passages()
        .filter(|passage| passage.title() != story.opening_passage_title())
    {
        lines.push(String::new());
        format_passage(passage, &mut lines)?;
    }

    debug!(
        "Formatted story '{}' into {} line(s)",
        story.title(),
        lines.len()
    );
    Ok(lines)
}

fn format_passage(passage: &Passage, lines: &mut Vec<String>) -> Result<(), FormatError> {
    require_single_line(passage.title(), "passage title")?;
    require_single_line(passage.content(), "passage content")?;

    lines.push(format!("{PASSAGE_PREFIX}{}", passage.title()));
    lines.push(passage.content().to_string());
    if !passage.has_links() {
        lines.push(NO_LINKS.to_string());
        return Ok(());
    }
    for link in passage.links() {
        lines.push(format_link(link)?);
    }
    Ok(())
}

/// Format one link as `[text] (reference) {actions}`
pub fn format_link(link: &Link) -> Result<String, FormatError> {
    let text = link.text();
    let reference = link.reference();
    require_single_line(text, "link text")?;
    require_single_line(reference, "link reference")?;
    if text.contains(']') {
        return Err(FormatError::unrepresentable(format!(
            "link text '{text}' contains ']'"
        )));
    }
    if text == NO_LINKS_TEXT {
        return Err(FormatError::unrepresentable(format!(
            "link text '{text}' is reserved"
        )));
    }
    if reference.contains(')') {
        return Err(FormatError::unrepresentable(format!(
            "link reference '{reference}' contains ')'"
        )));
    }

    let actions = if link.actions().is_empty() {
        NO_ACTIONS.to_string()
    } else {
        link.actions()
            .iter()
            .map(format_action)
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };
    Ok(format!("[{text}] ({reference}) {{{actions}}}"))
}

/// Format one action with its fixed template, e.g. `Add 300 gold`
pub fn format_action(action: &Action) -> Result<String, FormatError> {
    if let Some(item) = action.item() {
        require_single_line(item, "item")?;
        if item.contains([',', '}']) {
            return Err(FormatError::unrepresentable(format!(
                "item '{item}' contains ',' or '}}'"
            )));
        }
        if item.trim() != item {
            return Err(FormatError::unrepresentable(format!(
                "item '{item}' has surrounding whitespace"
            )));
        }
        if matches!(action, Action::AddToInventory(_))
            && item.split_whitespace().next().is_some_and(is_integer)
        {
            return Err(FormatError::unrepresentable(format!(
                "item '{item}' starts with a number"
            )));
        }
    }
    Ok(action.to_string())
}

fn require_single_line(value: &str, what: &str) -> Result<(), FormatError> {
    if value.contains(['\n', '\r']) {
        return Err(FormatError::unrepresentable(format!(
            "{what} '{}' spans several lines",
            value.escape_debug()
        )));
    }
    Ok(())
}
