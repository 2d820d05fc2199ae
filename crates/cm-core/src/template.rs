//! Record template rendering
//!
//! An approved submission is rendered through a plain substitution template
//! into the text blob that gets persisted. Rendering is pure: fields in,
//! text out, no I/O.

use crate::error::{ModError, Result};
use crate::submission::Submission;
use std::path::Path;
use tera::{Context, Tera};

/// Built-in record template: frontmatter the site generator reads back,
/// followed by the comment body.
pub const DEFAULT_TEMPLATE: &str = "\
---
name: {{ name }}
slug: {{ slug }}
date: {{ date }}
---

{{ comment }}
";

const TEMPLATE_NAME: &str = "record";

/// A compiled substitution template for approved comment records
#[derive(Debug, Clone)]
pub struct CommentTemplate {
    tera: Tera,
}

impl CommentTemplate {
    /// Compile a template from source text
    pub fn new(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| ModError::Template(e.to_string()))?;
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Compile the built-in template
    pub fn builtin() -> Self {
        // The built-in source is static and known-good
        Self::new(DEFAULT_TEMPLATE).expect("built-in template must compile")
    }

    /// Compile a template from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(ModError::Io)
            .map_err(|e| e.with_context(format!("Failed to read template {}", path.display())))?;
        Self::new(&source)
    }

    /// Render a submission into record text
    pub fn render(&self, submission: &Submission) -> Result<String> {
        let mut context = Context::new();
        context.insert("name", &submission.name);
        context.insert("slug", &submission.target_path);
        context.insert("date", &submission.created_at);
        context.insert("comment", &submission.body);
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| ModError::Template(e.to_string()))
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
    fn test_builtin_render() {
        let template = CommentTemplate::builtin();
        let text = template.render(&sample()).unwrap();
        assert_eq!(
            text,
            "---\nname: Ada\nslug: /blog/intro\ndate: 2023-01-01\n---\n\nGreat post!\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = CommentTemplate::builtin();
        let submission = sample();
        assert_eq!(
            template.render(&submission).unwrap(),
            template.render(&submission).unwrap()
        );
    }

    #[test]
    fn test_custom_template() {
        let template = CommentTemplate::new("{{ name }} said: {{ comment }}").unwrap();
        let text = template.render(&sample()).unwrap();
        assert_eq!(text, "Ada said: Great post!");
    }

    #[test]
    fn test_markdown_body_is_not_escaped() {
        let template = CommentTemplate::new("{{ comment }}").unwrap();
        let mut submission = sample();
        submission.body = "a < b & \"quotes\"".to_string();
        assert_eq!(template.render(&submission).unwrap(), "a < b & \"quotes\"");
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let err = CommentTemplate::new("{{ name ").unwrap_err();
        assert!(matches!(err, ModError::Template(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.mdx");
        std::fs::write(&path, "by {{ name }}").unwrap();
        let template = CommentTemplate::from_file(&path).unwrap();
        assert_eq!(template.render(&sample()).unwrap(), "by Ada");
    }

    #[test]
    fn test_missing_template_file() {
        let err = CommentTemplate::from_file(Path::new("/nonexistent/t.mdx")).unwrap_err();
        assert!(err.to_string().contains("Failed to read template"));
    }
}
