//! # paths
//!
//! A narrative-graph engine: stories made of passages connected by links,
//! links that change a player's state when taken, goals that check that
//! state, and a line-oriented `.paths` file format with a validating parser
//! and a formatter.
//!
//! ## Quick Start
//!
//! ```rust
//! use paths::{Game, Goal, Player, parse};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lines = [
//!     "Treasure Hunt",
//!     "",
//!     "::Beach",
//!     "A map is half buried in the sand.",
//!     "[Dig] (Chest) {Add 50 gold, Add 10 points to score}",
//!     "",
//!     "::Chest",
//!     "The chest is full of coins.",
//!     "[no_links]",
//! ];
//! let story = parse(&lines)?;
//!
//! let player = Player::builder().with_name("Alice").build()?;
//! let mut game = Game::new(player, story, vec![Goal::gold(50)?])?;
//!
//! let dig = game.begin().links()[0].clone();
//! let chest = game.take(&dig)?;
//! assert_eq!(chest.title(), "Chest");
//! assert!(game.all_goals_fulfilled());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod library;
pub mod lint;
pub mod parser;
pub mod storage;

pub use domain::{
    Action, BrokenLinks, DomainError, ErrorKind, Game, Goal, GoalKind, ImageHandle, Link, Passage,
    Player, PlayerBuilder, Story,
};
pub use infrastructure::{
    FileSystemStoryRepository, InMemoryStoryRepository, RepositoryError, StoryRepository,
};
pub use library::{StoryLibrary, troll_adventure};
pub use parser::{FormatError, StoryFileFormatter, format, parse};
pub use storage::{load, save};
