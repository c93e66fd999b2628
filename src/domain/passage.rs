//! Passages - Nodes of the story graph

use crate::domain::errors::DomainError;
use crate::domain::link::Link;
use crate::domain::value_objects::{ImageHandle, require_non_blank};
use std::hash::{Hash, Hasher};

/// A titled piece of story content with outgoing links
///
/// Equality and hashing use the content and the links only. Two passages
/// with different titles but the same text and links compare equal.
#[derive(Debug, Clone)]
pub struct Passage {
    title: String,
    content: String,
    links: Vec<Link>,
    ending_passage: bool,
    background_image: Option<ImageHandle>,
}

impl Passage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            title: require_non_blank(title, "Title")?,
            content: require_non_blank(content, "Content")?,
            links: Vec::new(),
            ending_passage: false,
            background_image: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Append a link; duplicates are kept
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Attach a batch of links, all or nothing
    ///
    /// The batch must hold at least two entries and none of them may be
    /// `None`. Nothing is attached when validation fails.
    pub fn add_all_links<I, T>(&mut self, links: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<Link>>,
    {
        let batch: Vec<Option<Link>> = links.into_iter().map(Into::into).collect();
        if batch.len() < 2 {
            return Err(DomainError::invalid_argument(format!(
                "At least two links are needed to add them all at once, got {}",
                batch.len()
            )));
        }
        let links: Vec<Link> = batch
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DomainError::invalid_links("List of links contains a missing link"))?;

        self.links.extend(links);
        Ok(())
    }

    /// Remove the first link equal to `link` (same reference)
    pub fn remove_link(&mut self, link: &Link) -> Result<(), DomainError> {
        let position = self
            .links
            .iter()
            .position(|candidate| candidate == link)
            .ok_or_else(|| DomainError::LinkNotFound {
                reference: link.reference().to_string(),
            })?;
        self.links.remove(position);
        Ok(())
    }

    pub fn is_ending_passage(&self) -> bool {
        self.ending_passage
    }

    pub fn set_ending_passage(&mut self, ending_passage: bool) {
        self.ending_passage = ending_passage;
    }

    pub fn background_image(&self) -> Option<&ImageHandle> {
        self.background_image.as_ref()
    }

    pub fn set_background_image(&mut self, image: ImageHandle) {
        self.background_image = Some(image);
    }
}

impl PartialEq for Passage {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.links == other.links
    }
}

impl Eq for Passage {}

impl Hash for Passage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
        self.links.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(reference: &str) -> Link {
        Link::new(format!("Go to {reference}"), reference).unwrap()
    }

    #[test]
    fn new_passage_defaults() {
        let passage = Passage::new("Gate", "A rusty gate blocks the road.").unwrap();
        assert_eq!(passage.title(), "Gate");
        assert!(!passage.has_links());
        assert!(!passage.is_ending_passage());
        assert!(passage.background_image().is_none());
    }

    #[test]
    fn blank_title_or_content_is_rejected() {
        assert!(Passage::new("", "text").is_err());
        assert!(Passage::new("Gate", "  ").is_err());
    }

    #[test]
    fn add_link_keeps_duplicates() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        passage.add_link(link("Road"));
        passage.add_link(link("Road"));
        assert_eq!(passage.links().len(), 2);
    }

    #[test]
    fn add_all_links_attaches_batch() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        passage.add_all_links(vec![link("Road"), link("Forest")]).unwrap();
        let references: Vec<&str> = passage.links().iter().map(Link::reference).collect();
        assert_eq!(references, vec!["Road", "Forest"]);
    }

    #[test]
    fn add_all_links_needs_two_entries() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        assert!(matches!(
            passage.add_all_links(vec![link("Road")]),
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(matches!(
            passage.add_all_links(Vec::<Link>::new()),
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(!passage.has_links());
    }

    #[test]
    fn add_all_links_is_atomic() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        let result = passage.add_all_links(vec![Some(link("Road")), None, Some(link("Forest"))]);
        assert!(matches!(result, Err(DomainError::InvalidLinks { .. })));
        assert!(passage.links().is_empty());
    }

    #[test]
    fn remove_link_removes_first_match_only() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        passage.add_link(link("Road"));
        passage.add_link(link("Forest"));
        passage.add_link(link("Road"));

        passage.remove_link(&link("Road")).unwrap();
        let references: Vec<&str> = passage.links().iter().map(Link::reference).collect();
        assert_eq!(references, vec!["Forest", "Road"]);

        assert!(matches!(
            passage.remove_link(&link("Castle")),
            Err(DomainError::LinkNotFound { .. })
        ));
    }

    #[test]
    fn ending_flag_is_independent_of_links() {
        let mut passage = Passage::new("Gate", "text").unwrap();
        passage.add_link(link("Road"));
        passage.set_ending_passage(true);
        assert!(passage.is_ending_passage());
        assert!(passage.has_links());
    }

    #[test]
    fn equality_ignores_title() {
        let mut first = Passage::new("First", "Same words").unwrap();
        let mut second = Passage::new("Second", "Same words").unwrap();
        first.add_link(link("Road"));
        second.add_link(link("Road"));
        assert_eq!(first, second);

        second.add_link(link("Forest"));
        assert_ne!(first, second);

        let different = Passage::new("First", "Other words").unwrap();
        assert_ne!(Passage::new("First", "Same words").unwrap(), different);
    }
}
