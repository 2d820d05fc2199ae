//! Persistence writer abstraction

use crate::error::Result;
use crate::submission::Submission;
use std::path::PathBuf;

/// Writes an approved submission as a durable comment record.
///
/// Implemented over the filesystem by `cm-storage`.
pub trait CommentWriter {
    /// Render and persist the submission, returning the final record path.
    ///
    /// Must be idempotent: writing the same submission twice overwrites
    /// the same path with identical contents.
    fn write(&self, submission: &Submission) -> Result<PathBuf>;
}
