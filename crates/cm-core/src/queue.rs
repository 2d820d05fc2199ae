//! Remote submission queue abstraction

use crate::error::Result;
use crate::submission::Submission;

/// The remote backend's pending-submission queue.
///
/// Implemented over HTTP by `cm-backend`; tests substitute an in-memory
/// fake to assert call sequencing.
pub trait SubmissionQueue {
    /// Snapshot the pending submissions for the configured site.
    ///
    /// Order is whatever the backend returns; callers must not re-sort.
    /// Failure here is fatal to the run.
    fn list_pending(&self) -> Result<Vec<Submission>>;

    /// Delete a submission from the remote queue.
    ///
    /// Called on approve (after a successful write) and on reject.
    /// Failure is reported per-submission and never aborts the batch.
    fn delete(&self, id: &str) -> Result<()>;
}
