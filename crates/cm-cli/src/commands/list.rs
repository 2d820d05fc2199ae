//! List command
//!
//! Read-only view of the pending submission queue.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use cm_backend::FormsClient;
use cm_core::queue::SubmissionQueue;

use super::{load_config, BackendArgs};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    args.backend.apply(&mut config);
    config.validate()?;

    let client = FormsClient::new(&config.backend);
    let submissions = client
        .list_pending()
        .context("Could not fetch the pending submission queue")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&submissions)?);
        return Ok(());
    }

    if submissions.is_empty() {
        println!("No new comments available");
        return Ok(());
    }

    println!(
        "{} pending comment(s) for site {}",
        submissions.len().to_string().green(),
        config.backend.site_id.yellow()
    );
    println!();
    for submission in &submissions {
        println!(
            "{}  {}  {}  {}",
            submission.id.dimmed(),
            submission.display_date(),
            submission.target_path.yellow(),
            submission.name
        );
    }
    Ok(())
}
