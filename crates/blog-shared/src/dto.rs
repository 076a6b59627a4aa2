//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of create and update requests.
///
/// Fields are optional on the wire so a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_missing_fields() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("A"));
        assert!(payload.content.is_none());
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_str::<PostPayload>(r#"{"title":1,"content":"B"}"#).is_err());
    }
}
