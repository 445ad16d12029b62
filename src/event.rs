//! Trigger payload loading
//!
//! GitHub Actions writes the triggering event to the file named by
//! `GITHUB_EVENT_PATH`; only the `pull_request` and `repository` fields are
//! read.

use crate::error::{Error, Result};
use crate::types::{PullRequest, Repository};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The raw event payload as written by the runner
#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
    repository: Option<Repository>,
}

/// Read and validate the trigger payload
///
/// Missing `pull_request` or `repository` fields are a fatal input error:
/// the workflow was attached to an event this tool cannot process.
pub fn load_event(path: &Path) -> Result<(PullRequest, Repository)> {
    let raw = fs::read_to_string(path)?;
    parse_event(&raw)
}

fn parse_event(raw: &str) -> Result<(PullRequest, Repository)> {
    let payload: EventPayload = serde_json::from_str(raw)?;

    let pull_request = payload
        .pull_request
        .ok_or_else(|| Error::Payload("missing pull_request field".to_string()))?;
    let repository = payload
        .repository
        .ok_or_else(|| Error::Payload("missing repository field".to_string()))?;

    Ok((pull_request, repository))
}
