//! Linking orchestration
//!
//! Sequences extraction, story fetch, composition, and the two external
//! writes.

use crate::error::Result;
use crate::link::compose::{annotate_body, generate_pr_title};
use crate::link::ids::story_ids_for_pull_request;
use crate::platform::PlatformService;
use crate::tracker::StoryTracker;
use crate::types::{LinkOutcome, PullRequest, WriteReport, WriteStatus};
use tracing::{error, info};

/// Link a pull request to its story
///
/// Finds story ids, fetches the main story, and computes the new title and
/// annotated body. Unless `dry_run` is set, the PR is updated and labeled
/// with the story's category; the two writes are independent and each
/// outcome is reported separately in the returned [`WriteReport`].
///
/// A failed story fetch aborts the run before anything is composed or
/// written. Finding no story ids at all is not an error: the original title
/// is returned and no external call is made.
pub async fn link_pull_request(
    pull_request: &PullRequest,
    tracker: &dyn StoryTracker,
    platform: &dyn PlatformService,
    dry_run: bool,
) -> Result<LinkOutcome> {
    let ids = story_ids_for_pull_request(pull_request);

    let Some(main_story_id) = ids.main else {
        info!("no story id(s) found");
        return Ok(LinkOutcome {
            title: pull_request.title.clone(),
            main_story_id: None,
            writes: None,
        });
    };

    let story = tracker.fetch_story(&main_story_id).await?;

    let new_title = generate_pr_title(&ids.missing_from_title, &story.name, &pull_request.title);
    let new_body = annotate_body(pull_request.body.as_deref().unwrap_or_default());

    if dry_run {
        info!("dry run - not updating PR #{}", pull_request.number);
        return Ok(LinkOutcome {
            title: new_title,
            main_story_id: Some(main_story_id),
            writes: None,
        });
    }

    info!("updating title: {new_title}");
    let pr_status = match platform
        .update_pull_request(pull_request.number, &new_title, &new_body)
        .await
    {
        Ok(()) => WriteStatus::Applied,
        Err(e) => {
            error!("failed to update PR #{}: {e}", pull_request.number);
            WriteStatus::Failed(e.to_string())
        }
    };

    info!("updating labels: {}", story.story_type);
    let label_status = match platform
        .add_labels(pull_request.number, std::slice::from_ref(&story.story_type))
        .await
    {
        Ok(()) => WriteStatus::Applied,
        Err(e) => {
            error!("failed to add labels to PR #{}: {e}", pull_request.number);
            WriteStatus::Failed(e.to_string())
        }
    };

    Ok(LinkOutcome {
        title: new_title,
        main_story_id: Some(main_story_id),
        writes: Some(WriteReport {
            pull_request: pr_status,
            labels: label_status,
        }),
    })
}
