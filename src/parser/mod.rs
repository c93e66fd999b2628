//! Story file parser for `.paths` stories
//!
//! This module converts the line-oriented story file format into a
//! [`Story`] and, through [`formatter`], back into lines.

pub mod errors;
pub mod formatter;


use crate::domain::action::Action;
use crate::domain::link::Link;
use crate::domain::passage::Passage;
use crate::domain::story::Story;
use log::{debug, trace};

pub use errors::FormatError;
pub use formatter::{format, format_action, format_link};

/// File extension of story files, without the dot
pub const STORY_FILE_EXTENSION: &str = "paths";

pub(crate) const PASSAGE_PREFIX: &str = "::";
pub(crate) const NO_LINKS_TEXT: &str = "no_links";
pub(crate) const NO_LINKS: &str = "[no_links]";
pub(crate) const NO_ACTIONS: &str = "no_actions";

/// Parse the lines of a story file into a story
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Story, FormatError> {
    debug!("Parsing story file with {} line(s)", lines.len());
    let story = StoryFileParser::new(lines).parse()?;
    debug!(
        "Parsed story '{}' with {} passage(s)",
        story.title(),
        story.len()
    );
    Ok(story)
}

/// Parse a single link line such as `[Run] (Forest) {Reduce 5 health}`
///
/// `line_number` is only used in error messages.
pub fn parse_link(line: &str, line_number: usize) -> Result<Link, FormatError> {
    let corrupt = |reason: String| FormatError::corrupt(line_number, reason);

    let rest = line
        .strip_prefix('[')
        .ok_or_else(|| corrupt(format!("link '{line}' must start with '['")))?;
    let (text, rest) = rest
        .split_once(']')
        .ok_or_else(|| corrupt(format!("link '{line}' has no closing ']'")))?;
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or_else(|| corrupt(format!("link '{line}' has no '(' before its reference")))?;
    let (reference, rest) = rest
        .split_once(')')
        .ok_or_else(|| corrupt(format!("link '{line}' has no closing ')'")))?;
    let actions = rest
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| corrupt(format!("link '{line}' must end with an action list in '{{}}'")))?;

    let actions = parse_actions(actions, line_number)?;
    let link = if actions.is_empty() {
        Link::new(text, reference)
    } else {
        Link::with_actions(text, reference, actions)
    };
    link.map_err(|error| corrupt(error.to_string()))
}

fn parse_actions(actions: &str, line_number: usize) -> Result<Vec<Action>, FormatError> {
    let actions = actions.trim();
    if actions.is_empty() || actions == NO_ACTIONS {
        return Ok(Vec::new());
    }
    actions
        .split(',')
        .map(str::trim)
        .filter(|action| *action != NO_ACTIONS)
        .map(|action| parse_action(action, line_number))
        .collect()
}

/// Parse one action such as `Add 300 gold` or `Remove rope from inventory`
pub fn parse_action(text: &str, line_number: usize) -> Result<Action, FormatError> {
    let corrupt = |reason: String| FormatError::corrupt(line_number, reason);

    let text = text.trim();
    let (verb, rest) = text.split_once(' ').unwrap_or((text, ""));
    let rest = rest.trim();
    let mut tokens = rest.split_whitespace();

    let action = match verb {
        "Add" => {
            let first = tokens
                .next()
                .ok_or_else(|| corrupt(format!("action '{text}' is missing what to add")))?;
            match parse_amount(first, text, line_number)? {
                Some(amount) => match unit(tokens.next(), text, line_number)? {
                    Unit::Gold => Action::add_gold(amount),
                    Unit::Health => Action::add_health(amount),
                    Unit::Points => Action::add_score(amount),
                },
                None => Action::add_to_inventory(strip_phrase(rest, " to inventory")),
            }
        }
        "Reduce" => {
            let first = tokens
                .next()
                .ok_or_else(|| corrupt(format!("action '{text}' is missing an amount")))?;
            let amount = parse_amount(first, text, line_number)?.ok_or_else(|| {
                corrupt(format!("action '{text}' has '{first}' where an amount is expected"))
            })?;
            match unit(tokens.next(), text, line_number)? {
                Unit::Gold => Action::reduce_gold(amount),
                Unit::Health => Action::reduce_health(amount),
                Unit::Points => Action::reduce_score(amount),
            }
        }
        "Remove" => {
            if rest.is_empty() {
                return Err(corrupt(format!("action '{text}' is missing an item")));
            }
            Action::remove_from_inventory(strip_phrase(rest, " from inventory"))
        }
        _ => return Err(corrupt(format!("unknown action '{text}'"))),
    };
    action.map_err(|error| corrupt(format!("action '{text}': {error}")))
}

enum Unit {
    Gold,
    Health,
    Points,
}

fn unit(token: Option<&str>, text: &str, line_number: usize) -> Result<Unit, FormatError> {
    match token {
        Some("gold") => Ok(Unit::Gold),
        Some("health") => Ok(Unit::Health),
        Some("points") => Ok(Unit::Points),
        Some(other) => Err(FormatError::corrupt(
            line_number,
            format!("action '{text}' has unknown unit '{other}'"),
        )),
        None => Err(FormatError::corrupt(
            line_number,
            format!("action '{text}' is missing a unit"),
        )),
    }
}

/// `Some` for integer tokens, `None` for anything else
///
/// Integers outside the `i32` range are corrupt rather than item names.
fn parse_amount(token: &str, text: &str, line_number: usize) -> Result<Option<i32>, FormatError> {
    if !is_integer(token) {
        return Ok(None);
    }
    token.parse::<i32>().map(Some).map_err(|_| {
        FormatError::corrupt(
            line_number,
            format!("action '{text}' has an out of range amount '{token}'"),
        )
    })
}

fn is_no_links_marker(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .is_some_and(|(text, _)| text == NO_LINKS_TEXT)
}

pub(crate) fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn strip_phrase<'a>(rest: &'a str, phrase: &str) -> &'a str {
    rest.strip_suffix(phrase).unwrap_or(rest).trim()
}

/// Story titles are letters and spaces only
pub(crate) fn is_valid_story_title(title: &str) -> bool {
    !title.trim().is_empty() && title.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Join story lines into file content, one line per row with a final newline
pub fn save_story_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

/// Split file content into story lines
pub fn read_story_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

/// Reads and writes stories in the `.paths` file format
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryFileFormatter;

impl StoryFileFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_story<S: AsRef<str>>(&self, lines: &[S]) -> Result<Story, FormatError> {
        parse(lines)
    }

    pub fn format_story(&self, story: &Story) -> Result<Vec<String>, FormatError> {
        format(story)
    }

    pub fn parse_link(&self, line: &str, line_number: usize) -> Result<Link, FormatError> {
        parse_link(line, line_number)
    }

    pub fn parse_action(&self, text: &str, line_number: usize) -> Result<Action, FormatError> {
        parse_action(text, line_number)
    }

    pub fn format_link(&self, link: &Link) -> Result<String, FormatError> {
        format_link(link)
    }

    pub fn format_action(&self, action: &Action) -> Result<String, FormatError> {
        format_action(action)
    }
}

struct StoryFileParser<'a> {
    lines: Vec<&'a str>,
    current_line: usize,
}

impl<'a> StoryFileParser<'a> {
    fn new<S: AsRef<str>>(lines: &'a [S]) -> Self {
        Self {
            lines: lines.iter().map(AsRef::as_ref).collect(),
            current_line: 0,
        }
    }

    fn parse(mut self) -> Result<Story, FormatError> {
        if self.lines.is_empty() {
            return Err(FormatError::Empty);
        }

        self.skip_blank_lines();
        let title = self.parse_title()?;

        let mut story: Option<Story> = None;
        loop {
            self.skip_blank_lines();
            let Some(line) = self.peek() else {
                break;
            };
            if !line.starts_with(PASSAGE_PREFIX) {
                return Err(FormatError::corrupt(
                    self.line_number(),
                    format!("expected a passage starting with '{PASSAGE_PREFIX}', found '{line}'"),
                ));
            }

            let passage = self.parse_passage()?;
            story = Some(match story.take() {
                None => Story::new(title, passage)?,
                Some(mut story) => {
                    story.add_passage(passage)?;
                    story
                }
            });
        }

        story.ok_or_else(|| {
            FormatError::corrupt(self.lines.len(), format!("story '{title}' has no passages"))
        })
    }

    fn parse_title(&mut self) -> Result<&'a str, FormatError> {
        let line = self.peek().ok_or(FormatError::Empty)?;
        if !is_valid_story_title(line) {
            return Err(FormatError::corrupt(
                self.line_number(),
                format!("story title '{line}' may only contain letters and spaces"),
            ));
        }
        self.current_line += 1;
        Ok(line)
    }

    fn parse_passage(&mut self) -> Result<Passage, FormatError> {
        let header_line = self.line_number();
        let header = self.next_line().unwrap_or_default();
        let title = header.strip_prefix(PASSAGE_PREFIX).unwrap_or(header);

        let content = self.next_line().ok_or_else(|| {
            FormatError::corrupt(header_line, format!("passage '{title}' has no content line"))
        })?;
        let mut passage = Passage::new(title, content)
            .map_err(|error| FormatError::corrupt(header_line, error.to_string()))?;
        trace!("Parsed passage '{}' at line {}", title, header_line);

        while let Some(line) = self.peek() {
            if line.trim().is_empty() {
                break;
            }
            let line_number = self.line_number();
            self.current_line += 1;

            // `[no_links]` ends the passage whatever follows the brackets
            if is_no_links_marker(line) {
                break;
            }
            if !line.starts_with('[') {
                return Err(FormatError::corrupt(
                    line_number,
                    format!("expected a link or a blank line after passage '{title}', found '{line}'"),
                ));
            }
            let link = parse_link(line, line_number)?;
            trace!("Parsed link to '{}' at line {}", link.reference(), line_number);
            passage.add_link(link);
        }

        Ok(passage)
    }

    fn skip_blank_lines(&mut self) {
        while self.peek().is_some_and(|line| line.trim().is_empty()) {
            self.current_line += 1;
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.current_line).copied()
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.current_line += 1;
        Some(line)
    }

    /// 1-based number of the line under the cursor
    fn line_number(&self) -> usize {
        self.current_line + 1
    }
}
