//! Story linking
//!
//! The core of the tool: find story ids in a pull request, decide which one
//! is primary, and compose the retitled/annotated PR fields.

mod compose;
mod execute;
mod ids;

pub use compose::{annotate_body, generate_pr_title};
pub use execute::link_pull_request;
pub use ids::{extract_story_ids, reconcile_story_ids, story_ids_for_pull_request};
