//! cm-storage - Content store for comment-mod
//!
//! This crate persists approved comment submissions as records on the
//! local filesystem.

mod comment_store;

pub use comment_store::FileCommentStore;
