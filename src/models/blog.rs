//! Blog post model and its create request.

use serde::{Deserialize, Serialize};

/// A blog post as returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Assigned by the store on insert
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// Request body for creating a new blog post.
///
/// Presence of each field is enforced by the store's column constraints; a
/// missing field surfaces as a validation error on insert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Omitted and `null` both mean zero
    #[serde(default)]
    pub likes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_may_be_omitted() {
        let request: CreateBlogRequest =
            serde_json::from_str(r#"{"title":"T","author":"A","url":"U"}"#).unwrap();
        assert_eq!(request.likes, None);
        assert_eq!(request.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_null_likes_is_accepted() {
        let request: CreateBlogRequest =
            serde_json::from_str(r#"{"title":"T","author":"A","url":"U","likes":null}"#).unwrap();
        assert_eq!(request.likes, None);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let request: CreateBlogRequest = serde_json::from_str(r#"{"likes":3}"#).unwrap();
        assert!(request.title.is_none());
        assert!(request.author.is_none());
        assert!(request.url.is_none());
        assert_eq!(request.likes, Some(3));
    }
}
