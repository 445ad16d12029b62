//! Core types for clubhouse-pr

use serde::Deserialize;

/// The pull request snapshot read from the trigger payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title (`-` is the "no title" placeholder)
    pub title: String,
    /// PR body, absent when the PR was opened without a description
    pub body: Option<String>,
    /// Head branch reference
    pub head: HeadRef,
}

/// Head branch of a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_field: String,
}

/// The repository the pull request belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: RepoOwner,
}

/// Owner of a repository
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    /// User or organization login
    pub login: String,
}

/// A story fetched from the tracker
///
/// The tracker returns far more fields; only the two this tool reads are
/// deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    /// Story display name
    pub name: String,
    /// Story category ("feature", "bug", "chore")
    pub story_type: String,
}

/// Story ids reconciled across branch name, title, and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryIds {
    /// The id chosen as primary (title takes precedence, then body, then
    /// branch); `None` when no source contained an id
    pub main: Option<String>,
    /// Ids found in body or branch but absent from the title, in first
    /// appearance order
    pub missing_from_title: Vec<String>,
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// Result of one linking run
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    /// The computed title (unchanged when no story ids were found)
    pub title: String,
    /// The story id the fetched story was resolved from
    pub main_story_id: Option<String>,
    /// Per-operation write results; `None` when the run performed no writes
    /// (dry run or no story ids)
    pub writes: Option<WriteReport>,
}

/// Outcome of the two independent write operations
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// Result of the title/body update
    pub pull_request: WriteStatus,
    /// Result of the label addition
    pub labels: WriteStatus,
}

impl WriteReport {
    /// Whether both writes were applied
    pub fn all_applied(&self) -> bool {
        self.pull_request == WriteStatus::Applied && self.labels == WriteStatus::Applied
    }
}

/// Status of a single write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    /// The write was applied
    Applied,
    /// The write failed with the given message
    Failed(String),
}
