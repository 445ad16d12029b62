//! Code-hosting platform services
//!
//! Provides the interface for the pull-request write operations.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::PlatformConfig;
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// This trait abstracts the code-hosting API so the linking logic can be
/// exercised against a mock in tests.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Overwrite the title and body of a pull request
    async fn update_pull_request(&self, pr_number: u64, title: &str, body: &str) -> Result<()>;

    /// Attach labels to a pull request's issue record
    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
