//! Pending submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending comment submission fetched from the remote form backend.
///
/// The backend owns the canonical copy; this is a transient snapshot taken
/// at the start of a run. `id` and `created_at` are backend-assigned and
/// treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Backend-assigned unique identifier
    pub id: String,
    /// Commenter name (may be empty)
    #[serde(default)]
    pub name: String,
    /// Comment content
    #[serde(default)]
    pub body: String,
    /// Backend timestamp, passed through verbatim
    pub created_at: String,
    /// Page the comment belongs to, from the `path` form field
    pub target_path: String,
}

impl Submission {
    /// Timestamp formatted for display.
    ///
    /// The backend sends RFC 3339; anything else is shown as-is.
    pub fn display_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }

    /// File name of the record this submission would be saved as
    pub fn record_file_name(&self) -> String {
        format!("entry-{}.md", self.id)
    }
}

/// Wire format of a form submission as returned by the backend.
///
/// The target page lives in the free-form `data` object captured from the
/// comment form; every other field is top-level.
#[derive(Debug, Deserialize)]
pub struct WireSubmission {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub data: WireFormData,
}

/// Captured form fields; only `path` is meaningful to moderation
#[derive(Debug, Default, Deserialize)]
pub struct WireFormData {
    #[serde(default)]
    pub path: String,
}

impl From<WireSubmission> for Submission {
    fn from(wire: WireSubmission) -> Self {
        Submission {
            id: wire.id,
            name: wire.name,
            body: wire.body,
            created_at: wire.created_at,
            target_path: wire.data.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Submission {
        Submission {
            id: "42".to_string(),
            name: "Ada".to_string(),
            body: "Great post!".to_string(),
            created_at: "2023-01-01".to_string(),
            target_path: "/blog/intro".to_string(),
        }
    }

    #[test]
    fn test_wire_deserialization() {
        let json = r#"{
            "id": "5f8a9b2c",
            "name": "Ada",
            "body": "Great post!",
            "created_at": "2023-01-01T10:30:00Z",
            "data": { "path": "/blog/intro", "email": "ada@example.com" }
        }"#;
        let wire: WireSubmission = serde_json::from_str(json).unwrap();
        let submission: Submission = wire.into();
        assert_eq!(submission.id, "5f8a9b2c");
        assert_eq!(submission.target_path, "/blog/intro");
        assert_eq!(submission.created_at, "2023-01-01T10:30:00Z");
    }

    #[test]
    fn test_wire_missing_optional_fields() {
        let json = r#"{ "id": "1", "created_at": "2023-01-01" }"#;
        let wire: WireSubmission = serde_json::from_str(json).unwrap();
        let submission: Submission = wire.into();
        assert_eq!(submission.name, "");
        assert_eq!(submission.body, "");
        assert_eq!(submission.target_path, "");
    }

    #[test]
    fn test_display_date_rfc3339() {
        let mut s = sample();
        s.created_at = "2023-01-01T10:30:00Z".to_string();
        assert_eq!(s.display_date(), "2023-01-01 10:30 UTC");
    }

    #[test]
    fn test_display_date_opaque_fallback() {
        let s = sample();
        assert_eq!(s.display_date(), "2023-01-01");
    }

    #[test]
    fn test_record_file_name() {
        assert_eq!(sample().record_file_name(), "entry-42.md");
    }
}
