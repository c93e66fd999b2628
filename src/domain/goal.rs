//! Goals - Player-state predicates that declare story objectives

use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::value_objects::{ImageHandle, require_non_blank, require_positive};
use serde::{Deserialize, Serialize};

/// The condition a [`Goal`] checks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    /// Player gold at least this amount
    Gold(i32),
    /// Player health at least this amount
    Health(i32),
    /// Player score at least this amount
    Score(i32),
    /// Player carries this item
    Item(String),
}

/// A target value or result related to the player's state, with display data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    kind: GoalKind,
    image: Option<ImageHandle>,
    description: String,
}

impl Goal {
    fn from_kind(kind: GoalKind) -> Self {
        Self {
            kind,
            image: None,
            description: String::new(),
        }
    }

    pub fn gold(minimum_gold: i32) -> Result<Self, DomainError> {
        let minimum = require_positive(minimum_gold, "Minimum gold of a gold goal")?;
        Ok(Self::from_kind(GoalKind::Gold(minimum)))
    }

    pub fn health(minimum_health: i32) -> Result<Self, DomainError> {
        let minimum = require_positive(minimum_health, "Minimum health of a health goal")?;
        Ok(Self::from_kind(GoalKind::Health(minimum)))
    }

    pub fn score(minimum_points: i32) -> Result<Self, DomainError> {
        let minimum = require_positive(minimum_points, "Minimum points of a score goal")?;
        Ok(Self::from_kind(GoalKind::Score(minimum)))
    }

    pub fn item(mandatory_item: impl Into<String>) -> Result<Self, DomainError> {
        let item = require_non_blank(mandatory_item, "Mandatory item")?;
        Ok(Self::from_kind(GoalKind::Item(item)))
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    pub fn is_fulfilled(&self, player: &Player) -> bool {
        match &self.kind {
            GoalKind::Gold(minimum) => player.gold() >= *minimum,
            GoalKind::Health(minimum) => player.health() >= *minimum,
            GoalKind::Score(minimum) => player.score() >= *minimum,
            GoalKind::Item(item) => player.has_item(item),
        }
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageHandle) {
        self.image = Some(image);
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.set_image(image);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        self.description = require_non_blank(description, "Description")?;
        Ok(())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, DomainError> {
        self.set_description(description)?;
        Ok(self)
    }
}
