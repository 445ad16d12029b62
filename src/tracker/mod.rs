//! Story tracker services
//!
//! Provides the interface for fetching stories from the tracking service.

mod clubhouse;

pub use clubhouse::ClubhouseClient;

use crate::error::Result;
use crate::types::Story;
use async_trait::async_trait;

/// Story tracker trait
///
/// Abstracts the tracking-service API so the linking logic can be exercised
/// against a mock in tests.
#[async_trait]
pub trait StoryTracker: Send + Sync {
    /// Fetch a single story by id
    async fn fetch_story(&self, story_id: &str) -> Result<Story>;
}
