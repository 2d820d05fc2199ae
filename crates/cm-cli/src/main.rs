//! comment-mod - Blog Comment Moderation CLI
//!
//! An offline triage tool for form-submitted blog comments: fetches the
//! pending queue from the form backend, asks for a decision per comment,
//! saves approved comments into the content directory and removes
//! approved/rejected submissions from the remote queue.
//!
//! ## Quick Start
//!
//! ```bash
//! export NETLIFY_SITE_ID=...
//! export NETLIFY_TOKEN=...
//!
//! # See what is waiting
//! comment-mod list
//!
//! # Triage the queue interactively
//! comment-mod moderate
//! ```

mod commands;
mod console;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
