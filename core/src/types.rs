//! Domain DTOs for the blog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names follow the backend's camelCase wire format; integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type PostId = u64;
pub type CommentId = u64;

/// An author. Only `id` and `name` drive the UI; the rest is carried along.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Request payload for creating a comment: a `Comment` without its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_foreign_key() {
        let post: Post =
            serde_json::from_str(r#"{"id":3,"userId":1,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(post.user_id, 1);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 1);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn user_tolerates_missing_extra_fields() {
        let user: User = serde_json::from_str(r#"{"id":7,"name":"Ann"}"#).unwrap();
        assert_eq!(user.name, "Ann");
        assert!(user.email.is_empty());
    }

    #[test]
    fn user_ignores_unknown_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Leanne","address":{"city":"Gwenborough"}}"#,
        )
        .unwrap();
        assert_eq!(user.id, 1);
    }

    #[test]
    fn new_comment_has_no_id() {
        let input = NewComment {
            post_id: 5,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "Hi".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["postId"], 5);
    }
}
