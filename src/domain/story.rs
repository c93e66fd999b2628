//! Story - The passage graph with its opening passage and display metadata

use crate::domain::errors::DomainError;
use crate::domain::link::Link;
use crate::domain::passage::Passage;
use crate::domain::value_objects::{ImageHandle, require_non_blank};
use log::{debug, warn};
use std::collections::HashMap;

/// Outcome of a broken-link scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenLinks<'a> {
    /// Every link resolves to a passage
    None,
    /// Links whose reference matches no passage title, in passage order
    Found(Vec<&'a Link>),
}

impl<'a> BrokenLinks<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Found(links) => links.len(),
        }
    }

    pub fn links(&self) -> &[&'a Link] {
        match self {
            Self::None => &[],
            Self::Found(links) => links,
        }
    }
}

/// A titled collection of passages keyed by title
///
/// The opening passage is one of the stored passages and always has at least
/// one link. Passages are kept in insertion order so iteration and
/// formatting are deterministic.
#[derive(Debug, Clone)]
pub struct Story {
    title: String,
    opening: String,
    passages: HashMap<String, Passage>,
    order: Vec<String>,
    icon: Option<ImageHandle>,
    background: Option<ImageHandle>,
    dark_background: Option<ImageHandle>,
    intro1: String,
    intro2: String,
}

impl Story {
    pub fn new(title: impl Into<String>, opening_passage: Passage) -> Result<Self, DomainError> {
        let title = require_non_blank(title, "Title")?;
        if !opening_passage.has_links() {
            return Err(DomainError::OpeningPassageWithoutLinks {
                title: opening_passage.title().to_string(),
            });
        }

        let opening = opening_passage.title().to_string();
        let mut passages = HashMap::new();
        passages.insert(opening.clone(), opening_passage);

        Ok(Self {
            title,
            order: vec![opening.clone()],
            opening,
            passages,
            icon: None,
            background: None,
            dark_background: None,
            intro1: String::new(),
            intro2: String::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn opening_passage(&self) -> &Passage {
        // the opening passage can be replaced but never removed
        &self.passages[&self.opening]
    }

    pub fn opening_passage_title(&self) -> &str {
        &self.opening
    }

    /// Store `passage` under its title, replacing any passage with that title
    pub fn add_passage(&mut self, passage: Passage) -> Result<(), DomainError> {
        self.check_replacement(&passage)?;
        self.insert(passage);
        Ok(())
    }

    /// Add a batch of passages, all or nothing
    ///
    /// Same batch rules as [`Passage::add_all_links`]: at least two entries
    /// and no `None`.
    pub fn add_all_passages<I, T>(&mut self, passages: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Passage>>,
    {
        let batch: Vec<Option<Passage>> = passages.into_iter().map(Into::into).collect();
        if batch.len() < 2 {
            return Err(DomainError::invalid_argument(format!(
                "At least two passages are needed to add them all at once, got {}",
                batch.len()
            )));
        }
        let passages: Vec<Passage> = batch.into_iter().collect::<Option<Vec<_>>>().ok_or_else(|| {
            DomainError::invalid_passages("List of passages contains a missing passage")
        })?;
        for passage in &passages {
            self.check_replacement(passage)?;
        }

        for passage in passages {
            self.insert(passage);
        }
        Ok(())
    }

    fn check_replacement(&self, passage: &Passage) -> Result<(), DomainError> {
        if passage.title() == self.opening && !passage.has_links() {
            return Err(DomainError::OpeningPassageWithoutLinks {
                title: self.opening.clone(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, passage: Passage) {
        let title = passage.title().to_string();
        if self.passages.insert(title.clone(), passage).is_some() {
            warn!("Passage '{}' replaced an existing passage with the same title", title);
        } else {
            debug!("Added passage '{}' to story '{}'", title, self.title);
            self.order.push(title);
        }
    }

    /// Resolve `link` to the passage it points at
    pub fn get_passage(&self, link: &Link) -> Result<&Passage, DomainError> {
        self.passages
            .get(link.reference())
            .ok_or_else(|| DomainError::passage_not_found(link.reference()))
    }

    pub fn passage(&self, title: &str) -> Option<&Passage> {
        self.passages.get(title)
    }

    /// All passages, opening passage first, in insertion order
    pub fn passages(&self) -> impl Iterator<Item = &Passage> + '_ {
        self.order.iter().filter_map(|title| self.passages.get(title))
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn does_link_refer_to_passage(&self, link: &Link) -> bool {
        self.passages.contains_key(link.reference())
    }

    /// True when any passage (including `passage` itself) links to its title
    pub fn do_other_passages_link_to(&self, passage: &Passage) -> bool {
        self.passages
            .values()
            .flat_map(Passage::links)
            .any(|link| link.reference() == passage.title())
    }

    /// Remove the passage `link` points at
    ///
    /// Fails when the passage is missing, still linked to, or is the opening
    /// passage.
    pub fn remove_passage(&mut self, link: &Link) -> Result<Passage, DomainError> {
        let passage = self.get_passage(link)?;
        if self.do_other_passages_link_to(passage) {
            return Err(DomainError::PassageStillReferenced {
                title: passage.title().to_string(),
            });
        }
        if passage.title() == self.opening {
            return Err(DomainError::OpeningPassageRemoval {
                title: self.opening.clone(),
            });
        }

        let title = link.reference();
        self.order.retain(|candidate| candidate != title);
        self.passages
            .remove(title)
            .ok_or_else(|| DomainError::passage_not_found(title))
    }

    /// Every link whose reference matches no passage title
    pub fn broken_links(&self) -> BrokenLinks<'_> {
        let broken: Vec<&Link> = self
            .passages()
            .flat_map(Passage::links)
            .filter(|link| !self.does_link_refer_to_passage(link))
            .collect();
        if broken.is_empty() {
            BrokenLinks::None
        } else {
            BrokenLinks::Found(broken)
        }
    }

    pub fn has_broken_links(&self) -> bool {
        !self.broken_links().is_none()
    }

    pub fn icon(&self) -> Option<&ImageHandle> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: ImageHandle) {
        self.icon = Some(icon);
    }

    pub fn background(&self) -> Option<&ImageHandle> {
        self.background.as_ref()
    }

    pub fn set_background(&mut self, background: ImageHandle) {
        self.background = Some(background);
    }

    pub fn dark_background(&self) -> Option<&ImageHandle> {
        self.dark_background.as_ref()
    }

    pub fn set_dark_background(&mut self, background: ImageHandle) {
        self.dark_background = Some(background);
    }

    pub fn intro1(&self) -> &str {
        &self.intro1
    }

    pub fn set_intro1(&mut self, intro: impl Into<String>) -> Result<(), DomainError> {
        self.intro1 = require_non_blank(intro, "Intro")?;
        Ok(())
    }

    pub fn intro2(&self) -> &str {
        &self.intro2
    }

    pub fn set_intro2(&mut self, intro: impl Into<String>) -> Result<(), DomainError> {
        self.intro2 = require_non_blank(intro, "Intro")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(reference: &str) -> Link {
        Link::new(format!("Go to {reference}"), reference).unwrap()
    }

    fn passage(title: &str, links: &[&str]) -> Passage {
        let mut passage = Passage::new(title, format!("You are at the {title}.")).unwrap();
        for reference in links {
            passage.add_link(link(reference));
        }
        passage
    }

    fn story() -> Story {
        let mut story = Story::new("Haunted House", passage("Porch", &["Hall"])).unwrap();
        story.add_passage(passage("Hall", &["Attic", "Porch"])).unwrap();
        story.add_passage(passage("Attic", &[])).unwrap();
        story
    }

    #[test]
    fn opening_passage_needs_links() {
        let result = Story::new("Haunted House", passage("Porch", &[]));
        assert!(matches!(
            result,
            Err(DomainError::OpeningPassageWithoutLinks { .. })
        ));
        assert!(Story::new(" ", passage("Porch", &["Hall"])).is_err());
    }

    #[test]
    fn opening_passage_is_stored_with_the_rest() {
        let story = story();
        assert_eq!(story.opening_passage().title(), "Porch");
        assert_eq!(story.opening_passage_title(), "Porch");
        assert!(story.passage("Porch").is_some());
        assert_eq!(story.len(), 3);
    }

    #[test]
    fn passages_iterate_in_insertion_order() {
        let story = story();
        let titles: Vec<&str> = story.passages().map(Passage::title).collect();
        assert_eq!(titles, vec!["Porch", "Hall", "Attic"]);
    }

    #[test]
    fn same_title_replaces_previous_passage() {
        let mut story = story();
        story.add_passage(passage("Attic", &["Hall"])).unwrap();
        assert_eq!(story.len(), 3);
        assert!(story.passage("Attic").unwrap().has_links());
        let titles: Vec<&str> = story.passages().map(Passage::title).collect();
        assert_eq!(titles, vec!["Porch", "Hall", "Attic"]);
    }

    #[test]
    fn opening_passage_cannot_lose_its_links() {
        let mut story = story();
        assert!(matches!(
            story.add_passage(passage("Porch", &[])),
            Err(DomainError::OpeningPassageWithoutLinks { .. })
        ));
        story.add_passage(passage("Porch", &["Attic"])).unwrap();
        assert_eq!(story.opening_passage().links()[0].reference(), "Attic");
    }

    #[test]
    fn add_all_passages_is_atomic() {
        let mut story = story();
        let result = story.add_all_passages(vec![Some(passage("Cellar", &[])), None]);
        assert!(matches!(result, Err(DomainError::InvalidPassages { .. })));
        assert!(story.passage("Cellar").is_none());

        assert!(matches!(
            story.add_all_passages(vec![passage("Cellar", &[])]),
            Err(DomainError::InvalidArgument { .. })
        ));

        let result = story.add_all_passages(vec![passage("Cellar", &[]), passage("Porch", &[])]);
        assert!(result.is_err());
        assert!(story.passage("Cellar").is_none());

        story
            .add_all_passages(vec![passage("Cellar", &[]), passage("Garden", &[])])
            .unwrap();
        assert_eq!(story.len(), 5);
    }

    #[test]
    fn get_passage_resolves_links() {
        let story = story();
        assert_eq!(story.get_passage(&link("Hall")).unwrap().title(), "Hall");
        assert_eq!(
            story.get_passage(&link("Basement")).unwrap_err(),
            DomainError::passage_not_found("Basement")
        );
        assert!(story.does_link_refer_to_passage(&link("Attic")));
        assert!(!story.does_link_refer_to_passage(&link("Basement")));
    }

    #[test]
    fn broken_links_are_reported() {
        let mut story = story();
        assert_eq!(story.broken_links(), BrokenLinks::None);
        assert!(!story.has_broken_links());

        story.add_passage(passage("Attic", &["Basement", "Roof"])).unwrap();
        let broken = story.broken_links();
        assert_eq!(broken.len(), 2);
        let references: Vec<&str> = broken.links().iter().map(|link| link.reference()).collect();
        assert_eq!(references, vec!["Basement", "Roof"]);
        assert!(story.has_broken_links());
    }

    #[test]
    fn referenced_passage_cannot_be_removed() {
        let mut story = story();
        assert!(story.do_other_passages_link_to(story.passage("Attic").unwrap()));
        assert!(matches!(
            story.remove_passage(&link("Attic")),
            Err(DomainError::PassageStillReferenced { .. })
        ));
        assert_eq!(story.len(), 3);
    }

    #[test]
    fn unreferenced_passage_is_removed() {
        let mut story = story();
        story.add_passage(passage("Cellar", &[])).unwrap();
        let removed = story.remove_passage(&link("Cellar")).unwrap();
        assert_eq!(removed.title(), "Cellar");
        assert!(story.passage("Cellar").is_none());
        assert_eq!(story.passages().count(), 3);

        assert!(matches!(
            story.remove_passage(&link("Cellar")),
            Err(DomainError::PassageNotFound { .. })
        ));
    }

    #[test]
    fn opening_passage_cannot_be_removed() {
        let mut story = Story::new("Loop", passage("Start", &["End"])).unwrap();
        story.add_passage(passage("End", &[])).unwrap();
        assert!(matches!(
            story.remove_passage(&link("Start")),
            Err(DomainError::OpeningPassageRemoval { .. })
        ));
    }

    #[test]
    fn display_metadata() {
        let mut story = story();
        assert!(story.icon().is_none());
        assert_eq!(story.intro1(), "");

        story.set_icon(ImageHandle::from("images/icons/house.png"));
        story.set_background(ImageHandle::from("images/bg/house.png"));
        story.set_dark_background(ImageHandle::from("images/bg/house_dark.png"));
        story.set_intro1("A storm is coming.").unwrap();
        story.set_intro2("The door creaks open.").unwrap();
        assert!(story.set_intro2("  ").is_err());

        assert_eq!(story.icon().unwrap().as_str(), "images/icons/house.png");
        assert_eq!(story.dark_background().unwrap().as_str(), "images/bg/house_dark.png");
        assert!(story.background().is_some());
        assert_eq!(story.intro1(), "A storm is coming.");
        assert_eq!(story.intro2(), "The door creaks open.");
    }
}
