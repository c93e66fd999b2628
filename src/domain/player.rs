//! Player state mutated by actions and queried by goals

use crate::domain::errors::DomainError;
use crate::domain::goal::Goal;
use crate::domain::value_objects::{require_non_blank, require_positive};
use serde::{Deserialize, Serialize};

pub const MIN_HEALTH: i32 = 0;
pub const MAX_HEALTH: i32 = 100;
pub const DEFAULT_NAME: &str = "Rogelio";

/// A player with health, score, gold, an inventory and a list of goals
///
/// - health is always within `0..=100`
/// - score is never negative
/// - gold is unbounded; a negative amount means the player is in debt
///
/// Construct with [`PlayerBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerBuilder")]
pub struct Player {
    name: String,
    health: i32,
    score: i32,
    gold: i32,
    inventory: Vec<String>,
    goals: Vec<Goal>,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Add health, capping at 100
    pub fn add_health(&mut self, health: i32) -> Result<(), DomainError> {
        let health = require_positive(health, "Health to be added")?;
        self.health = self.health.saturating_add(health).min(MAX_HEALTH);
        Ok(())
    }

    /// Reduce health, flooring at 0
    pub fn reduce_health(&mut self, health: i32) -> Result<(), DomainError> {
        let health = require_positive(health, "Health to be reduced")?;
        self.health = self.health.saturating_sub(health).max(MIN_HEALTH);
        Ok(())
    }

    pub fn add_score(&mut self, points: i32) -> Result<(), DomainError> {
        let points = require_positive(points, "Points to be added")?;
        self.score = self.score.saturating_add(points);
        Ok(())
    }

    /// Reduce score, flooring at 0
    pub fn reduce_score(&mut self, points: i32) -> Result<(), DomainError> {
        let points = require_positive(points, "Points to be reduced")?;
        self.score = self.score.saturating_sub(points).max(0);
        Ok(())
    }

    pub fn add_gold(&mut self, gold: i32) -> Result<(), DomainError> {
        let gold = require_positive(gold, "Gold to be added")?;
        self.gold = self.gold.saturating_add(gold);
        Ok(())
    }

    pub fn reduce_gold(&mut self, gold: i32) -> Result<(), DomainError> {
        let gold = require_positive(gold, "Gold to be reduced")?;
        self.gold = self.gold.saturating_sub(gold);
        Ok(())
    }

    pub fn add_to_inventory(&mut self, item: &str) -> Result<(), DomainError> {
        let item = require_non_blank(item, "Item")?;
        if self.has_item(&item) {
            return Err(DomainError::ItemAlreadyInInventory { item });
        }
        self.inventory.push(item);
        Ok(())
    }

    pub fn remove_from_inventory(&mut self, item: &str) -> Result<(), DomainError> {
        let item = require_non_blank(item, "Item to be removed")?;
        let position = self
            .inventory
            .iter()
            .position(|owned| *owned == item)
            .ok_or(DomainError::ItemNotInInventory { item })?;
        self.inventory.remove(position);
        Ok(())
    }

    pub fn is_dead(&self) -> bool {
        self.health == MIN_HEALTH
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|owned| owned == item)
    }

    /// Restore score, gold, inventory and health to their defaults; goals are kept
    pub fn reset_stats(&mut self) {
        self.score = 0;
        self.gold = 0;
        self.inventory.clear();
        self.health = MAX_HEALTH;
    }

    pub fn reset_goals(&mut self) {
        self.goals.clear();
    }

    pub fn fulfilled_goals(&self) -> impl Iterator<Item = &Goal> + '_ {
        self.goals.iter().filter(|goal| goal.is_fulfilled(self))
    }

    /// True when every assigned goal is fulfilled (vacuously true without goals)
    pub fn all_goals_fulfilled(&self) -> bool {
        self.goals.iter().all(|goal| goal.is_fulfilled(self))
    }
}

/// Builder for [`Player`]; values are validated in [`PlayerBuilder::build`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBuilder {
    name: String,
    health: i32,
    score: i32,
    gold: i32,
    inventory: Vec<String>,
    goals: Vec<Goal>,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            health: MAX_HEALTH,
            score: 0,
            gold: 0,
            inventory: Vec::new(),
            goals: Vec::new(),
        }
    }
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_inventory(mut self, inventory: Vec<String>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    pub fn build(self) -> Result<Player, DomainError> {
        let name = require_non_blank(self.name, "Name")?;
        if !(MIN_HEALTH..=MAX_HEALTH).contains(&self.health) {
            return Err(DomainError::invalid_argument(format!(
                "Health must be between {MIN_HEALTH} and {MAX_HEALTH}, got {}",
                self.health
            )));
        }
        if self.score < 0 {
            return Err(DomainError::invalid_argument(format!(
                "Score cannot be less than 0, got {}",
                self.score
            )));
        }

        let mut inventory: Vec<String> = Vec::with_capacity(self.inventory.len());
        for item in self.inventory {
            let item = require_non_blank(item, "Item")?;
            if inventory.contains(&item) {
                return Err(DomainError::ItemAlreadyInInventory { item });
            }
            inventory.push(item);
        }

        Ok(Player {
            name,
            health: self.health,
            score: self.score,
            gold: self.gold,
            inventory,
            goals: self.goals,
        })
    }
}

impl TryFrom<PlayerBuilder> for Player {
    type Error = DomainError;

    fn try_from(builder: PlayerBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
