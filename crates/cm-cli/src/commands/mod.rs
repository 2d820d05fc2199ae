//! CLI commands module

pub mod list;
pub mod moderate;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cm_core::config::Config;

/// comment-mod - moderate form-submitted blog comments
#[derive(Debug, Parser)]
#[command(name = "comment-mod")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Triage pending comment submissions interactively
    Moderate(moderate::ModerateArgs),

    /// List pending comment submissions without deciding anything
    List(list::ListArgs),
}

/// Backend connection options, shared by all commands that talk to the
/// remote queue. Flags override the config file; env vars fill the gaps.
#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Site the pending queue belongs to
    #[arg(long, env = "NETLIFY_SITE_ID")]
    pub site_id: Option<String>,

    /// Bearer token for the backend API
    #[arg(long, env = "NETLIFY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Backend API base URL
    #[arg(long, env = "NETLIFY_API_URL")]
    pub api_url: Option<String>,
}

impl BackendArgs {
    /// Apply command-line/env overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(site_id) = &self.site_id {
            config.backend.site_id = site_id.clone();
        }
        if let Some(token) = &self.token {
            config.backend.token = token.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.backend.api_base_url = api_url.clone();
        }
    }
}

/// Load the config file if one was given, otherwise start from defaults
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load(path)?;
            tracing::debug!("Loaded configuration from {:?}", path);
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Moderate(args) => moderate::execute(args, cli.config.as_deref()),
        Commands::List(args) => list::execute(args, cli.config.as_deref()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_backend_args_override_config() {
        let mut config = Config::default();
        config.backend.site_id = "from-file".to_string();

        let args = BackendArgs {
            site_id: Some("from-flag".to_string()),
            token: None,
            api_url: None,
        };
        args.apply(&mut config);

        assert_eq!(config.backend.site_id, "from-flag");
        assert_eq!(
            config.backend.api_base_url,
            Config::default().backend.api_base_url
        );
    }
}
