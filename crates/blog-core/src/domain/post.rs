use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = i32;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Validated title and content, accepted by both create and update.
///
/// The only way to obtain one is [`PostDraft::new`], so a draft handed to a
/// repository always carries two non-blank fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Check that both fields are present and not blank.
    ///
    /// Every offending field is reported, not just the first one.
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        let title = required("title", title, &mut errors);
        let content = required("content", content, &mut errors);

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(Self { title, content }),
            _ => Err(DomainError::Validation(errors)),
        }
    }

    /// Split into `(title, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

fn required(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None => {
            errors.push(format!("{field} is required"));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(format!("{field} must not be empty"));
            None
        }
        Some(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_title_and_content() {
        let draft = PostDraft::new(Some("A".into()), Some("B".into())).unwrap();
        assert_eq!(draft.into_parts(), ("A".to_string(), "B".to_string()));
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let draft = PostDraft::new(Some(" A ".into()), Some("B\n".into())).unwrap();
        assert_eq!(draft.into_parts(), (" A ".to_string(), "B\n".to_string()));
    }

    #[test]
    fn rejects_missing_title() {
        let err = PostDraft::new(None, Some("B".into())).unwrap_err();
        match err {
            DomainError::Validation(errors) => assert_eq!(errors, vec!["title is required"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_content() {
        let err = PostDraft::new(Some("A".into()), Some("   ".into())).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors, vec!["content must not be empty"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reports_every_missing_field() {
        let err = PostDraft::new(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: title is required, content is required"
        );
    }

    #[test]
    fn post_serializes_timestamp_as_rfc3339() {
        let created_at = DateTime::parse_from_rfc3339("2026-10-19T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let post = Post {
            id: 7,
            title: "A".into(),
            content: "B".into(),
            created_at,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["created_at"], "2026-10-19T08:30:00Z");
    }
}
