//! File system comment store

use cm_core::error::{ModError, Result};
use cm_core::submission::Submission;
use cm_core::template::CommentTemplate;
use cm_core::writer::CommentWriter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes approved comments as records under a content root, where the
/// static-site generator picks them up as page-associated content.
pub struct FileCommentStore {
    /// Root directory records are written under
    content_root: PathBuf,
    /// Template an approved submission is rendered through
    template: CommentTemplate,
}

impl FileCommentStore {
    /// Create a store rooted at `content_root`
    pub fn new(content_root: impl Into<PathBuf>, template: CommentTemplate) -> Self {
        Self {
            content_root: content_root.into(),
            template,
        }
    }

    /// The directory a submission's record belongs in.
    ///
    /// The form submits `target_path` as an absolute site path (e.g.
    /// `/blog/intro`); the leading slash is stripped so the record always
    /// lands under the content root.
    fn record_dir(&self, submission: &Submission) -> PathBuf {
        let relative = submission.target_path.trim_start_matches('/');
        self.content_root.join(relative)
    }

    /// The full path a submission's record is written to
    pub fn record_path(&self, submission: &Submission) -> PathBuf {
        self.record_dir(submission).join(submission.record_file_name())
    }

    fn ensure_dir(dir: &Path) -> Result<()> {
        // create_dir_all is a no-op when the directory already exists
        fs::create_dir_all(dir).map_err(|e| ModError::Write {
            path: dir.to_path_buf(),
            source: e,
        })
    }
}

impl CommentWriter for FileCommentStore {
    fn write(&self, submission: &Submission) -> Result<PathBuf> {
        let contents = self.template.render(submission)?;

        let dir = self.record_dir(submission);
        Self::ensure_dir(&dir)?;

        let path = dir.join(submission.record_file_name());
        fs::write(&path, contents).map_err(|e| ModError::Write {
            path: path.clone(),
            source: e,
        })?;

        debug!("Saved comment record {} to {:?}", submission.id, path);
        Ok(path)
    }
}
