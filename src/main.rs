//! clubhouse-pr - link Clubhouse stories to GitHub pull requests
//!
//! CI binary: reads the pull request event, retitles and annotates the PR,
//! and labels it with the story's category.

use anyhow::Result;
use clap::Parser;
use clubhouse_pr::config::Config;
use clubhouse_pr::error::Error;
use clubhouse_pr::event::load_event;
use clubhouse_pr::link::link_pull_request;
use clubhouse_pr::platform::GitHubService;
use clubhouse_pr::tracker::ClubhouseClient;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clubhouse-pr")]
#[command(about = "Link Clubhouse stories to GitHub pull requests")]
#[command(version)]
struct Cli {
    /// Path to the trigger payload (defaults to $GITHUB_EVENT_PATH)
    #[arg(long)]
    event: Option<PathBuf>,

    /// Dry run - compute the new title without making changes
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    let event_path = cli
        .event
        .or_else(|| env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from))
        .ok_or_else(|| {
            Error::Config("no event payload: pass --event or set GITHUB_EVENT_PATH".to_string())
        })?;
    let (pull_request, repository) = load_event(&event_path)?;

    let tracker = ClubhouseClient::new(&config.tracker_token);
    let platform = GitHubService::new(
        &config.gh_token,
        repository.owner.login.clone(),
        repository.name.clone(),
        config.gh_host.clone(),
    )?;

    let outcome = link_pull_request(&pull_request, &tracker, &platform, cli.dry_run).await?;

    info!("PR title: {}", outcome.title);

    if let Some(writes) = &outcome.writes {
        if !writes.all_applied() {
            anyhow::bail!("one or more pull request updates failed");
        }
    }

    Ok(())
}
