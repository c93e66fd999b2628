//! Integration tests for story repositories

use paths::{
    FileSystemStoryRepository, InMemoryStoryRepository, RepositoryError, StoryRepository,
    troll_adventure,
};
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("paths-it-{}-{}", std::process::id(), name))
}

async fn store_and_reload(repository: &dyn StoryRepository) {
    let story = troll_adventure().unwrap();
    repository.save_story(&story).await.unwrap();

    let loaded = repository.load_story(story.title()).await.unwrap();
    assert_eq!(loaded.title(), story.title());
    assert_eq!(loaded.len(), story.len());
    assert_eq!(loaded.opening_passage(), story.opening_passage());
    assert!(!loaded.passage("Victory").unwrap().has_links());
    assert!(!loaded.has_broken_links());

    assert_eq!(
        repository.list_stories().await.unwrap(),
        vec![story.title().to_string()]
    );

    repository.delete_story(story.title()).await.unwrap();
    assert!(!repository.story_exists(story.title()).await.unwrap());
}

/// Integration test: The built-in story is stored and reloaded from disk
#[tokio::test]
async fn file_system_repository_keeps_builtin_story() {
    let dir = temp_dir("builtin");
    let repository = FileSystemStoryRepository::new(&dir);

    store_and_reload(&repository).await;

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

/// Integration test: The in-memory repository behaves like the file system one
#[tokio::test]
async fn in_memory_repository_keeps_builtin_story() {
    let repository = InMemoryStoryRepository::new();
    store_and_reload(&repository).await;
}

/// Integration test: Missing stories are reported as not found
#[tokio::test]
async fn missing_story_is_not_found() {
    let repositories: Vec<Box<dyn StoryRepository>> = vec![
        Box::new(FileSystemStoryRepository::new(temp_dir("missing"))),
        Box::new(InMemoryStoryRepository::new()),
    ];

    for repository in &repositories {
        assert!(!repository.story_exists("Nowhere").await.unwrap());
        assert!(matches!(
            repository.load_story("Nowhere").await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
