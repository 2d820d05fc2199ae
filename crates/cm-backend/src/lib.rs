//! cm-backend - Remote form-backend client for comment-mod
//!
//! This crate talks to the form backend that holds the canonical pending
//! comment queue.

mod client;

pub use client::FormsClient;
