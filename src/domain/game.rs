//! Game - Binds a player, a story and the goals of one play-through

use crate::domain::action::execute_all;
use crate::domain::errors::DomainError;
use crate::domain::goal::Goal;
use crate::domain::link::Link;
use crate::domain::passage::Passage;
use crate::domain::player::Player;
use crate::domain::story::Story;
use log::debug;

/// A play-through of a story
///
/// The story must have no broken links and at least one goal is required.
#[derive(Debug, Clone)]
pub struct Game {
    player: Player,
    story: Story,
    goals: Vec<Goal>,
}

impl Game {
    pub fn new(player: Player, story: Story, goals: Vec<Goal>) -> Result<Self, DomainError> {
        let broken = story.broken_links().len();
        if broken > 0 {
            return Err(DomainError::BrokenLinks { count: broken });
        }
        if goals.is_empty() {
            return Err(DomainError::GoalsEmpty);
        }
        Ok(Self {
            player,
            story,
            goals,
        })
    }

    /// The passage the game starts at
    pub fn begin(&self) -> &Passage {
        self.story.opening_passage()
    }

    /// The passage `link` leads to, without touching the player
    pub fn go(&self, link: &Link) -> Result<&Passage, DomainError> {
        self.story.get_passage(link)
    }

    /// Follow `link`: run its actions on the player, then resolve the destination
    ///
    /// Actions that ran before a failing one are not rolled back.
    pub fn take(&mut self, link: &Link) -> Result<&Passage, DomainError> {
        debug!(
            "Taking link to '{}' with {} action(s)",
            link.reference(),
            link.actions().len()
        );
        execute_all(link.actions(), &mut self.player)?;
        self.story.get_passage(link)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn fulfilled_goals(&self) -> impl Iterator<Item = &Goal> + '_ {
        self.goals
            .iter()
            .filter(|goal| goal.is_fulfilled(&self.player))
    }

    pub fn all_goals_fulfilled(&self) -> bool {
        self.goals.iter().all(|goal| goal.is_fulfilled(&self.player))
    }
}
