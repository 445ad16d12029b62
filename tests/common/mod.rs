//! Shared test utilities

pub mod mock_platform;

use clubhouse_pr::types::{HeadRef, PullRequest};

/// Build a pull request snapshot for tests
pub fn make_pull_request(number: u64, branch: &str, title: &str, body: Option<&str>) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: body.map(ToString::to_string),
        head: HeadRef {
            ref_field: branch.to_string(),
        },
    }
}
