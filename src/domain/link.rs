//! Links - Directed connections from a passage to another passage

use crate::domain::action::Action;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::require_non_blank;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A choice shown to the player, pointing at a passage by title
///
/// Two links are equal when their references are equal; text and actions
/// are not compared. A `HashSet<Link>` therefore keeps one link per
/// destination.
#[derive(Debug, Clone)]
pub struct Link {
    text: String,
    reference: String,
    actions: Vec<Action>,
}

impl Link {
    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            text: require_non_blank(text, "Link text")?,
            reference: require_non_blank(reference, "Link reference")?,
            actions: Vec::new(),
        })
    }

    pub fn with_actions(
        text: impl Into<String>,
        reference: impl Into<String>,
        actions: Vec<Action>,
    ) -> Result<Self, DomainError> {
        if actions.is_empty() {
            return Err(DomainError::invalid_argument("List of actions cannot be empty"));
        }
        let mut link = Self::new(text, reference)?;
        link.actions = actions;
        Ok(link)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({})", self.text, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_link_has_no_actions() {
        let link = Link::new("Open the door", "Hall").unwrap();
        assert_eq!(link.text(), "Open the door");
        assert_eq!(link.reference(), "Hall");
        assert!(link.actions().is_empty());
    }

    #[test]
    fn blank_parts_are_rejected() {
        assert!(Link::new(" ", "Hall").is_err());
        assert!(Link::new("Open", "").is_err());
        assert!(Link::with_actions("Open", "Hall", Vec::new()).is_err());
    }

    #[test]
    fn add_action_appends_in_order() {
        let mut link = Link::new("Loot", "Vault").unwrap();
        link.add_action(Action::add_gold(5).unwrap());
        link.add_action(Action::add_to_inventory("Gem").unwrap());
        assert_eq!(
            link.actions(),
            &[
                Action::add_gold(5).unwrap(),
                Action::add_to_inventory("Gem").unwrap()
            ]
        );
    }

    #[test]
    fn equality_only_considers_reference() {
        let plain = Link::new("Go left", "Cave").unwrap();
        let other_text = Link::with_actions(
            "Sneak into the dark",
            "Cave",
            vec![Action::reduce_health(10).unwrap()],
        )
        .unwrap();
        let elsewhere = Link::new("Go left", "River").unwrap();

        assert_eq!(plain, other_text);
        assert_ne!(plain, elsewhere);

        let set: HashSet<Link> = [plain, other_text, elsewhere].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
