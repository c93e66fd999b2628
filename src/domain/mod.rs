//! Domain layer - Story graph, player state and the rules that connect them
//!
//! This layer has no knowledge of files, terminals or persistence; the
//! parser, repositories and CLI build on top of it.

pub mod action;
pub mod errors;
pub mod game;
pub mod goal;
pub mod link;
pub mod passage;
pub mod player;
pub mod story;
pub mod value_objects;

pub use action::{Action, execute_all};
pub use errors::{DomainError, ErrorKind};
pub use game::Game;
pub use goal::{Goal, GoalKind};
pub use link::Link;
pub use passage::Passage;
pub use player::{Player, PlayerBuilder};
pub use story::{BrokenLinks, Story};
pub use value_objects::ImageHandle;
