//! cm-core - Core library for comment-mod
//!
//! This crate provides the core moderation logic for the blog comment
//! triage tool: the submission model, the record template, the decision
//! loop, and the traits the backend client and the comment store implement.

pub mod config;
pub mod error;
pub mod queue;
pub mod submission;
pub mod template;
pub mod triage;
pub mod writer;

pub use config::Config;
pub use error::{ModError, Result};
pub use queue::SubmissionQueue;
pub use submission::Submission;
pub use template::CommentTemplate;
pub use triage::{Decision, Moderator, Operator, Outcome, TriageReport};
pub use writer::CommentWriter;
