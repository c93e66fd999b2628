//! Actions - Player-state mutations carried by links

use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::value_objects::{require_non_blank, require_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single change to a player's state, applied when a link is taken
///
/// Payloads are validated once by the constructors (amounts are at least 1,
/// items are non-blank); the variants are otherwise immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    AddGold(i32),
    AddHealth(i32),
    AddScore(i32),
    AddToInventory(String),
    ReduceGold(i32),
    ReduceHealth(i32),
    ReduceScore(i32),
    RemoveFromInventory(String),
}

impl Action {
    pub fn add_gold(gold: i32) -> Result<Self, DomainError> {
        Ok(Self::AddGold(require_positive(gold, "Gold to be added")?))
    }

    pub fn add_health(health: i32) -> Result<Self, DomainError> {
        Ok(Self::AddHealth(require_positive(health, "Health to be added")?))
    }

    pub fn add_score(points: i32) -> Result<Self, DomainError> {
        Ok(Self::AddScore(require_positive(points, "Points to be added")?))
    }

    pub fn add_to_inventory(item: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::AddToInventory(require_non_blank(item, "Item")?))
    }

    pub fn reduce_gold(gold: i32) -> Result<Self, DomainError> {
        Ok(Self::ReduceGold(require_positive(gold, "Gold to be reduced")?))
    }

    pub fn reduce_health(health: i32) -> Result<Self, DomainError> {
        Ok(Self::ReduceHealth(require_positive(health, "Health to be reduced")?))
    }

    pub fn reduce_score(points: i32) -> Result<Self, DomainError> {
        Ok(Self::ReduceScore(require_positive(points, "Points to be reduced")?))
    }

    pub fn remove_from_inventory(item: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::RemoveFromInventory(require_non_blank(item, "Item")?))
    }

    /// The numeric payload, if this is a gold/health/score action
    pub fn amount(&self) -> Option<i32> {
        match self {
            Self::AddGold(n)
            | Self::AddHealth(n)
            | Self::AddScore(n)
            | Self::ReduceGold(n)
            | Self::ReduceHealth(n)
            | Self::ReduceScore(n) => Some(*n),
            Self::AddToInventory(_) | Self::RemoveFromInventory(_) => None,
        }
    }

    /// The item payload, if this is an inventory action
    pub fn item(&self) -> Option<&str> {
        match self {
            Self::AddToInventory(item) | Self::RemoveFromInventory(item) => Some(item),
            _ => None,
        }
    }

    /// Apply this action to `player`
    ///
    /// Errors from the player (for instance adding an item that is already
    /// carried) are returned unchanged.
    pub fn execute(&self, player: &mut Player) -> Result<(), DomainError> {
        match self {
            Self::AddGold(gold) => player.add_gold(*gold),
            Self::AddHealth(health) => player.add_health(*health),
            Self::AddScore(points) => player.add_score(*points),
            Self::AddToInventory(item) => player.add_to_inventory(item),
            Self::ReduceGold(gold) => player.reduce_gold(*gold),
            Self::ReduceHealth(health) => player.reduce_health(*health),
            Self::ReduceScore(points) => player.reduce_score(*points),
            Self::RemoveFromInventory(item) => player.remove_from_inventory(item),
        }
    }
}

/// Execute `actions` in order, stopping at the first failure
///
/// Not transactional: actions before the failing one stay applied.
pub fn execute_all(actions: &[Action], player: &mut Player) -> Result<(), DomainError> {
    for action in actions {
        action.execute(player)?;
    }
    Ok(())
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddGold(gold) => write!(f, "Add {gold} gold"),
            Self::AddHealth(health) => write!(f, "Add {health} health"),
            Self::AddScore(points) => write!(f, "Add {points} points to score"),
            Self::AddToInventory(item) => write!(f, "Add {item} to inventory"),
            Self::ReduceGold(gold) => write!(f, "Reduce {gold} gold"),
            Self::ReduceHealth(health) => write!(f, "Reduce {health} health"),
            Self::ReduceScore(points) => write!(f, "Reduce {points} points from score"),
            Self::RemoveFromInventory(item) => write!(f, "Remove {item} from inventory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::builder().build().unwrap()
    }

    #[test]
    fn constructors_validate_payload() {
        assert!(Action::add_gold(0).is_err());
        assert!(Action::add_health(-2).is_err());
        assert!(Action::add_score(0).is_err());
        assert!(Action::reduce_gold(0).is_err());
        assert!(Action::reduce_health(0).is_err());
        assert!(Action::reduce_score(-1).is_err());
        assert!(Action::add_to_inventory("").is_err());
        assert!(Action::remove_from_inventory("   ").is_err());
    }

    #[test]
    fn each_variant_mutates_one_attribute() {
        let mut player = Player::builder().with_health(50).build().unwrap();

        Action::add_gold(30).unwrap().execute(&mut player).unwrap();
        Action::reduce_gold(10).unwrap().execute(&mut player).unwrap();
        assert_eq!(player.gold(), 20);

        Action::add_health(20).unwrap().execute(&mut player).unwrap();
        Action::reduce_health(5).unwrap().execute(&mut player).unwrap();
        assert_eq!(player.health(), 65);

        Action::add_score(100).unwrap().execute(&mut player).unwrap();
        Action::reduce_score(40).unwrap().execute(&mut player).unwrap();
        assert_eq!(player.score(), 60);

        Action::add_to_inventory("Lamp").unwrap().execute(&mut player).unwrap();
        assert!(player.has_item("Lamp"));
        Action::remove_from_inventory("Lamp").unwrap().execute(&mut player).unwrap();
        assert!(!player.has_item("Lamp"));
    }

    #[test]
    fn player_errors_propagate() {
        let mut player = player();
        let add = Action::add_to_inventory("Sword").unwrap();
        add.execute(&mut player).unwrap();
        assert_eq!(
            add.execute(&mut player),
            Err(DomainError::ItemAlreadyInInventory {
                item: "Sword".to_string()
            })
        );

        let remove = Action::remove_from_inventory("Shield").unwrap();
        assert!(remove.execute(&mut player).is_err());
    }

    #[test]
    fn execute_all_is_not_transactional() {
        let mut player = player();
        let actions = vec![
            Action::add_gold(10).unwrap(),
            Action::remove_from_inventory("Missing").unwrap(),
            Action::add_score(5).unwrap(),
        ];

        assert!(execute_all(&actions, &mut player).is_err());
        assert_eq!(player.gold(), 10);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn payload_accessors() {
        assert_eq!(Action::add_gold(3).unwrap().amount(), Some(3));
        assert_eq!(Action::add_gold(3).unwrap().item(), None);
        assert_eq!(Action::add_to_inventory("Rope").unwrap().item(), Some("Rope"));
        assert_eq!(Action::remove_from_inventory("Rope").unwrap().amount(), None);
    }

    #[test]
    fn display_uses_file_templates() {
        let rendered: Vec<String> = [
            Action::add_gold(300).unwrap(),
            Action::add_health(5).unwrap(),
            Action::add_score(500).unwrap(),
            Action::add_to_inventory("shield").unwrap(),
            Action::reduce_gold(1).unwrap(),
            Action::reduce_health(2).unwrap(),
            Action::reduce_score(3).unwrap(),
            Action::remove_from_inventory("sword").unwrap(),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(
            rendered,
            vec![
                "Add 300 gold",
                "Add 5 health",
                "Add 500 points to score",
                "Add shield to inventory",
                "Reduce 1 gold",
                "Reduce 2 health",
                "Reduce 3 points from score",
                "Remove sword from inventory",
            ]
        );
    }
}
