//! Interactive triage of pending submissions
//!
//! The moderation loop walks the fetched queue one submission at a time,
//! asks the operator for a decision, and dispatches to the comment writer
//! or the remote deletion call. A failure while handling one submission is
//! reported and the loop moves on; only fetching the queue itself (done by
//! the caller, before the loop starts) is fatal.

use crate::error::Result;
use crate::queue::SubmissionQueue;
use crate::submission::Submission;
use crate::writer::CommentWriter;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Operator decision for a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the submission pending; it reappears on the next run
    Skip,
    /// Persist the comment record, then delete the remote submission
    Approve,
    /// Delete the remote submission without persisting anything
    Reject,
}

impl Decision {
    /// Parse a menu choice. Anything outside `1`/`2`/`3` is invalid and
    /// must be re-prompted by the caller.
    pub fn parse(input: &str) -> Option<Decision> {
        match input.trim() {
            "1" => Some(Decision::Skip),
            "2" => Some(Decision::Approve),
            "3" => Some(Decision::Reject),
            _ => None,
        }
    }
}

/// The human (or scripted stand-in) driving the triage session
pub trait Operator {
    /// Present a submission and collect a decision.
    ///
    /// Implementations own the re-prompt loop: invalid input is reported
    /// and asked again, never returned as an error.
    fn review(&self, submission: &Submission) -> Result<Decision>;

    /// Block until the operator confirms, before advancing to the next
    /// submission.
    fn acknowledge(&self) -> Result<()>;

    /// Report an outcome or error message to the operator.
    fn notify(&self, message: &str);
}

/// What happened to a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Approved {
        path: PathBuf,
        /// False when the local write succeeded but the remote deletion
        /// failed; the submission stays pending remotely until re-approved
        /// or cleared by hand.
        remote_deleted: bool,
    },
    Rejected,
}

/// Tally of a completed triage run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TriageReport {
    pub skipped: usize,
    pub approved: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl TriageReport {
    /// Total submissions seen
    pub fn total(&self) -> usize {
        self.skipped + self.approved + self.rejected + self.failed
    }
}

/// The sequential moderation loop
pub struct Moderator<'a, Q, W> {
    queue: &'a Q,
    writer: &'a W,
}

impl<'a, Q, W> Moderator<'a, Q, W>
where
    Q: SubmissionQueue,
    W: CommentWriter,
{
    pub fn new(queue: &'a Q, writer: &'a W) -> Self {
        Self { queue, writer }
    }

    /// Triage a snapshot of pending submissions, in source order.
    ///
    /// Returns the tally; errors from the operator itself (a closed input
    /// stream) are the only thing that aborts the loop.
    pub fn run<O: Operator>(&self, submissions: &[Submission], operator: &O) -> Result<TriageReport> {
        let mut report = TriageReport::default();

        if submissions.is_empty() {
            operator.notify("No new comments available");
            return Ok(report);
        }

        for submission in submissions {
            let decision = operator.review(submission)?;
            debug!("Submission {}: {:?}", submission.id, decision);

            match self.dispatch(submission, decision, operator) {
                Ok(Outcome::Skipped) => report.skipped += 1,
                Ok(Outcome::Approved { .. }) => report.approved += 1,
                Ok(Outcome::Rejected) => report.rejected += 1,
                Err(err) => {
                    warn!("Submission {} failed: {}", submission.id, err);
                    operator.notify(&format!("Error: {err}"));
                    report.failed += 1;
                }
            }

            operator.acknowledge()?;
        }

        operator.notify("No more comments available");
        Ok(report)
    }

    fn dispatch<O: Operator>(
        &self,
        submission: &Submission,
        decision: Decision,
        operator: &O,
    ) -> Result<Outcome> {
        match decision {
            Decision::Skip => {
                operator.notify("Current comment was skipped");
                Ok(Outcome::Skipped)
            }
            Decision::Approve => self.approve(submission, operator),
            Decision::Reject => {
                self.queue.delete(&submission.id)?;
                operator.notify("Comment successfully deleted");
                Ok(Outcome::Rejected)
            }
        }
    }

    /// Write first, delete second. A failed write must leave the remote
    /// submission untouched so the comment is never lost.
    fn approve<O: Operator>(&self, submission: &Submission, operator: &O) -> Result<Outcome> {
        let path = self.writer.write(submission)?;
        operator.notify(&format!("Comment successfully saved in: {}", path.display()));

        match self.queue.delete(&submission.id) {
            Ok(()) => {
                operator.notify("Comment deleted from the remote queue");
                Ok(Outcome::Approved {
                    path,
                    remote_deleted: true,
                })
            }
            Err(err) => {
                // The record is already durable; leave the remote copy
                // pending rather than failing the approval.
                warn!("Remote deletion failed for {}: {}", submission.id, err);
                operator.notify(&format!(
                    "Comment saved, but the remote submission was not removed: {err}"
                ));
                Ok(Outcome::Approved {
                    path,
                    remote_deleted: false,
                })
            }
        }
    }
}
