//! Story repositories - Loading and saving stories as `.paths` files

use crate::domain::story::Story;
use crate::parser::{self, FormatError, STORY_FILE_EXTENSION};
use async_trait::async_trait;
use log::info;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Repository for story persistence, addressed by story title
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Load a story by title
    async fn load_story(&self, name: &str) -> Result<Story, RepositoryError>;

    /// Save a story under its title, replacing any previous version
    async fn save_story(&self, story: &Story) -> Result<(), RepositoryError>;

    /// Check if a story exists
    async fn story_exists(&self, name: &str) -> Result<bool, RepositoryError>;

    /// List the titles of all stored stories, sorted
    async fn list_stories(&self) -> Result<Vec<String>, RepositoryError>;

    /// Delete a story
    async fn delete_story(&self, name: &str) -> Result<(), RepositoryError>;
}

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Story not found: {name}")]
    NotFound { name: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid story file: {0}")]
    Format(#[from] FormatError),
}

impl RepositoryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

/// File system implementation of StoryRepository
///
/// Each story lives in `<base_path>/<title>.paths`.
pub struct FileSystemStoryRepository {
    base_path: PathBuf,
}

impl FileSystemStoryRepository {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn story_path(&self, name: &str) -> PathBuf {
        self.base_path
            .join(format!("{name}.{STORY_FILE_EXTENSION}"))
    }
}

#[async_trait]
impl StoryRepository for FileSystemStoryRepository {
    async fn load_story(&self, name: &str) -> Result<Story, RepositoryError> {
        let path = self.story_path(name);

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RepositoryError::not_found(name),
                _ => RepositoryError::io(
                    format!("Failed to read story file {}", path.display()),
                    e,
                ),
            })?;

        let story = parser::parse(&parser::read_story_lines(&content))?;
        info!("Loaded story '{}' from {}", story.title(), path.display());
        Ok(story)
    }

    async fn save_story(&self, story: &Story) -> Result<(), RepositoryError> {
        // Format first so nothing is written for unrepresentable stories
        let lines = parser::format(story)?;
        let path = self.story_path(story.title());

        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| RepositoryError::io("Failed to create story directory", e))?;

        tokio::fs::write(&path, parser::save_story_lines(&lines))
            .await
            .map_err(|e| {
                RepositoryError::io(
                    format!("Failed to write story file {}", path.display()),
                    e,
                )
            })?;

        info!("Saved story '{}' to {}", story.title(), path.display());
        Ok(())
    }

    async fn story_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        let path = self.story_path(name);
        tokio::fs::try_exists(&path).await.map_err(|e| {
            RepositoryError::io(format!("Failed to check story file {}", path.display()), e)
        })
    }

    async fn list_stories(&self) -> Result<Vec<String>, RepositoryError> {
        let mut stories = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(stories),
            Err(e) => {
                return Err(RepositoryError::io(
                    format!("Failed to read directory {}", self.base_path.display()),
                    e,
                ));
            }
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::io("Failed to read directory entry", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(STORY_FILE_EXTENSION)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                stories.push(stem.to_string());
            }
        }

        stories.sort();
        Ok(stories)
    }

    async fn delete_story(&self, name: &str) -> Result<(), RepositoryError> {
        let path = self.story_path(name);

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RepositoryError::not_found(name),
                _ => RepositoryError::io(
                    format!("Failed to delete story file {}", path.display()),
                    e,
                ),
            })?;

        info!("Deleted story '{}'", name);
        Ok(())
    }
}

/// In-memory implementation for testing
///
/// Stories are kept as formatted lines, so saving checks that a story can
/// be written to a file and loading parses it again.
#[derive(Default)]
pub struct InMemoryStoryRepository {
    stories: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemoryStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn stories(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.stories.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn load_story(&self, name: &str) -> Result<Story, RepositoryError> {
        let lines = self
            .stories()
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(name))?;
        Ok(parser::parse(&lines)?)
    }

    async fn save_story(&self, story: &Story) -> Result<(), RepositoryError> {
        let lines = parser::format(story)?;
        self.stories().insert(story.title().to_string(), lines);
        Ok(())
    }

    async fn story_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.stories().contains_key(name))
    }

    async fn list_stories(&self) -> Result<Vec<String>, RepositoryError> {
        let mut names: Vec<String> = self.stories().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn delete_story(&self, name: &str) -> Result<(), RepositoryError> {
        self.stories()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(name))
    }
}
