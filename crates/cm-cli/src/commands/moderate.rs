//! Moderate command
//!
//! Interactive triage of the pending submission queue.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use cm_backend::FormsClient;
use cm_core::queue::SubmissionQueue;
use cm_core::template::CommentTemplate;
use cm_core::triage::Moderator;
use cm_storage::FileCommentStore;

use super::{load_config, BackendArgs};
use crate::console::ConsoleOperator;

/// Arguments for the moderate command
#[derive(Debug, Args)]
pub struct ModerateArgs {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Directory approved comments are written under
    #[arg(long, env = "COMMENTS_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Template file for approved comment records
    #[arg(long, env = "COMMENT_TEMPLATE")]
    pub template: Option<PathBuf>,
}

/// Execute the moderate command
pub fn execute(args: ModerateArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    args.backend.apply(&mut config);
    if let Some(dir) = &args.content_dir {
        config.store.content_root = dir.clone();
    }
    if let Some(template) = &args.template {
        config.store.template_path = Some(template.clone());
    }
    config.validate()?;

    // A broken template override would fail every approval; surface it now
    let template = match &config.store.template_path {
        Some(path) => CommentTemplate::from_file(path)?,
        None => CommentTemplate::builtin(),
    };
    let store = FileCommentStore::new(&config.store.content_root, template);
    let client = FormsClient::new(&config.backend);

    println!(
        "{} {}",
        "Fetching pending comments for site".cyan(),
        config.backend.site_id.yellow()
    );
    let submissions = client
        .list_pending()
        .context("Could not fetch the pending submission queue")?;
    tracing::info!("Fetched {} pending submissions", submissions.len());

    let operator = ConsoleOperator::new();
    let report = Moderator::new(&client, &store).run(&submissions, &operator)?;

    if report.total() > 0 {
        println!();
        println!(
            "{} {} approved, {} rejected, {} skipped, {} failed",
            "Done:".bold(),
            report.approved.to_string().green(),
            report.rejected.to_string().red(),
            report.skipped,
            report.failed
        );
    }
    Ok(())
}
