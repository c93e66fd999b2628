//! CUI player mode for running stories
//!
//! This module provides an interactive player mode where users can
//! play a story in the terminal.

use crate::domain::game::Game;
use crate::domain::goal::Goal;
use crate::domain::passage::Passage;
use crate::domain::player::Player;
use crate::domain::story::Story;
use std::io::{self, BufRead, Write};

/// Score needed to win when a story is played from the command line
pub const DEFAULT_SCORE_GOAL: i32 = 100;

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// An ending passage (or a passage without links) was reached
    Finished,
    /// The player's health dropped to zero
    Died,
    /// The player quit or input ran out
    Quit,
}

/// Run the player mode on stdin/stdout
pub fn run_play(story: Story, debug: bool) -> anyhow::Result<PlayOutcome> {
    let game = new_game(story)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = play(game, &mut stdin.lock(), &mut stdout.lock(), debug)?;
    Ok(outcome)
}

/// Set up a game with the default player and goal
pub fn new_game(story: Story) -> anyhow::Result<Game> {
    let player = Player::builder().build()?;
    let goal = Goal::score(DEFAULT_SCORE_GOAL)?
        .with_description(format!("Finish with at least {DEFAULT_SCORE_GOAL} points"))?;
    Ok(Game::new(player, story, vec![goal])?)
}

/// Drive `game` with choices read from `input`
pub fn play<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    out: &mut W,
    debug: bool,
) -> anyhow::Result<PlayOutcome> {
    writeln!(out, "=== {} ===", game.story().title())?;
    for intro in [game.story().intro1(), game.story().intro2()] {
        if !intro.is_empty() {
            writeln!(out, "{intro}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Controls:")?;
    writeln!(out, "  1-9:   select choice")?;
    writeln!(out, "  q:     quit")?;
    writeln!(out)?;

    let mut passage = game.begin().clone();

    // Main game loop
    loop {
        show_passage(&passage, out)?;
        if debug {
            display_debug_info(game.player(), out)?;
        }

        if game.player().is_dead() {
            writeln!(out, "You died.")?;
            show_goals(&game, out)?;
            return Ok(PlayOutcome::Died);
        }
        if passage.is_ending_passage() || !passage.has_links() {
            writeln!(out, "== THE END ==")?;
            show_goals(&game, out)?;
            return Ok(PlayOutcome::Finished);
        }

        show_choices(&passage, out)?;
        loop {
            let Some(choice) = get_input("Select:", input, out)? else {
                writeln!(out, "Goodbye!")?;
                return Ok(PlayOutcome::Quit);
            };

            if choice == "q" {
                writeln!(out, "Goodbye!")?;
                return Ok(PlayOutcome::Quit);
            }

            let link = match choice.parse::<usize>() {
                Ok(index) if (1..=passage.links().len()).contains(&index) => {
                    passage.links()[index - 1].clone()
                }
                _ => {
                    writeln!(
                        out,
                        "Invalid input. Enter 1-{} or 'q'.",
                        passage.links().len()
                    )?;
                    continue;
                }
            };

            match game.take(&link) {
                Ok(next) => {
                    passage = next.clone();
                    break;
                }
                Err(error) => writeln!(out, "[Cannot go there: {error}]")?,
            }
        }
    }
}

fn show_passage<W: Write>(passage: &Passage, out: &mut W) -> io::Result<()> {
    writeln!(out, "[{}]", passage.title())?;
    writeln!(out, "{}", passage.content())?;
    writeln!(out)
}

fn show_choices<W: Write>(passage: &Passage, out: &mut W) -> io::Result<()> {
    writeln!(out, "--- Choice ---")?;
    for (i, link) in passage.links().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, link.text())?;
    }
    writeln!(out)
}

fn show_goals<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    for goal in game.goals() {
        let mark = if goal.is_fulfilled(game.player()) { "x" } else { " " };
        writeln!(out, "[{mark}] {}", goal.description())?;
    }
    Ok(())
}

/// Display player state (only when --debug is set)
fn display_debug_info<W: Write>(player: &Player, out: &mut W) -> io::Result<()> {
    writeln!(out, "[debug]")?;
    writeln!(
        out,
        "health={} score={} gold={}",
        player.health(),
        player.score(),
        player.gold()
    )?;
    writeln!(out, "inventory={:?}", player.inventory())?;
    writeln!(out)
}

/// Read one trimmed line; `None` at end of input
fn get_input<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{prompt} ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
