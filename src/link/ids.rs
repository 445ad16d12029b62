//! Story id extraction and reconciliation

use crate::types::{PullRequest, StoryIds};
use regex::Regex;
use tracing::{debug, info};

/// Find all story ids in some text
///
/// An id is a run of 1-7 digits preceded by the case-insensitive marker
/// `ch`, with an optional hyphen between marker and digits. Only the digits
/// are returned, duplicate-free, in first-occurrence order. Runs longer than
/// 7 digits are cut at the seventh: `ch1234567890` yields `1234567`.
pub fn extract_story_ids(content: &str) -> Vec<String> {
    let re = Regex::new(r"(?i)ch-?([0-9]{1,7})").unwrap();

    let mut ids: Vec<String> = Vec::new();
    for caps in re.captures_iter(content) {
        let id = caps[1].to_string();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Combine per-source id lists into a single decision
///
/// The main id is the first of title ++ body ++ branch: a human-authored
/// title is the most deliberate signal. `missing_from_title` is the ordered
/// dedup of body ++ branch minus anything already in the title.
pub fn reconcile_story_ids(
    title_ids: &[String],
    body_ids: &[String],
    branch_ids: &[String],
) -> StoryIds {
    let main = title_ids
        .iter()
        .chain(body_ids)
        .chain(branch_ids)
        .next()
        .cloned();

    let mut missing_from_title = Vec::new();
    for id in body_ids.iter().chain(branch_ids) {
        if !title_ids.contains(id) && !missing_from_title.contains(id) {
            missing_from_title.push(id.clone());
        }
    }

    StoryIds {
        main,
        missing_from_title,
    }
}

/// Extract and reconcile story ids from a pull request's three text sources
pub fn story_ids_for_pull_request(pull_request: &PullRequest) -> StoryIds {
    debug!("branch name: {}", pull_request.head.ref_field);
    debug!("PR title: {}", pull_request.title);
    debug!("PR body: {:?}", pull_request.body);

    let branch_ids = extract_story_ids(&pull_request.head.ref_field);
    if !branch_ids.is_empty() {
        info!("found story id(s) in branch name: {}", branch_ids.join(", "));
    }

    let title_ids = extract_story_ids(&pull_request.title);
    if !title_ids.is_empty() {
        info!("found story id(s) in PR title: {}", title_ids.join(", "));
    }

    let body_ids = extract_story_ids(pull_request.body.as_deref().unwrap_or_default());
    if !body_ids.is_empty() {
        info!("found story id(s) in PR body: {}", body_ids.join(", "));
    }

    let ids = reconcile_story_ids(&title_ids, &body_ids, &branch_ids);
    if let Some(main) = &ids.main {
        info!("main story is {main}");
    }
    if !ids.missing_from_title.is_empty() {
        info!(
            "missing from PR title: {}",
            ids.missing_from_title.join(", ")
        );
    }
    ids
}
