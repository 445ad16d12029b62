//! Title and body composition

use fancy_regex::Regex;

/// Build the new pull request title
///
/// Each missing id becomes a `[ch-<id>]` tag, joined by single spaces in the
/// supplied order. A title of exactly `-` is the "no title" placeholder and
/// is replaced by the story name. With no missing ids the trimmed base title
/// is returned unchanged, which makes re-running over an already tagged
/// title a no-op.
pub fn generate_pr_title(missing_ids: &[String], story_name: &str, current_title: &str) -> String {
    let tags = missing_ids
        .iter()
        .map(|id| format!("[ch-{id}]"))
        .collect::<Vec<_>>()
        .join(" ");

    let base = if current_title == "-" {
        story_name
    } else {
        current_title
    };

    format!("{base} {tags}").trim().to_string()
}

/// Bracket every unbracketed story id mention in the body
///
/// Marker case and hyphen presence are preserved; mentions already enclosed
/// in square brackets are left alone, so the transform is idempotent.
pub fn annotate_body(body: &str) -> String {
    let re = Regex::new(r"(?i)(?<!\[)(ch-?[0-9]{1,7})(?!\])").unwrap();
    re.replace_all(body, "[$1]").into_owned()
}
