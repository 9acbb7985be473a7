//! Stateless HTTP request builder and response parser for the blog API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, CommentId, NewComment, Post, PostId, User, UserId};

/// Synchronous, stateless client for the blog API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_users(&self) -> HttpRequest {
        self.get("/users".to_string())
    }

    pub fn build_list_posts(&self, user_id: UserId) -> HttpRequest {
        self.get(format!("/posts?userId={user_id}"))
    }

    pub fn build_list_comments(&self, post_id: PostId) -> HttpRequest {
        self.get(format!("/comments?postId={post_id}"))
    }

    pub fn build_create_comment(&self, input: &NewComment) -> Result<HttpRequest, TransportError> {
        let body = serde_json::to_string(input).map_err(|e| TransportError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/comments", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_comment(&self, id: CommentId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/comments/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, TransportError> {
        parse_json(response)
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, TransportError> {
        parse_json(response)
    }

    pub fn parse_list_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, TransportError> {
        parse_json(response)
    }

    pub fn parse_create_comment(&self, response: HttpResponse) -> Result<Comment, TransportError> {
        parse_json(response)
    }

    /// The body of a delete acknowledgement is ignored; it may be empty or `{}`.
    pub fn parse_delete_comment(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }

    fn get(&self, path_and_query: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path_and_query}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, TransportError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| TransportError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_posts_filters_by_user() {
        let req = client().build_list_posts(4);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts?userId=4");
    }

    #[test]
    fn build_list_comments_filters_by_post() {
        let req = client().build_list_comments(12);
        assert_eq!(req.path, "http://localhost:3000/comments?postId=12");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_comment_produces_correct_request() {
        let input = NewComment {
            post_id: 1,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "Hello".to_string(),
        };
        let req = client().build_create_comment(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/comments");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["postId"], 1);
        assert_eq!(body["body"], "Hello");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_comment_produces_correct_request() {
        let req = client().build_delete_comment(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/comments/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_users_success() {
        let users = client()
            .parse_list_users(response(200, r#"[{"id":1,"name":"Leanne Graham","email":"l@g.com"}]"#))
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Leanne Graham");
    }

    #[test]
    fn parse_list_posts_server_error() {
        let err = client().parse_list_posts(response(500, "boom")).unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[test]
    fn parse_list_comments_bad_json() {
        let err = client().parse_list_comments(response(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }

    #[test]
    fn parse_create_comment_accepts_any_2xx() {
        let body = r#"{"id":501,"postId":1,"name":"Ann","email":"a@b.com","body":"Hi"}"#;
        let created = client().parse_create_comment(response(201, body)).unwrap();
        assert_eq!(created.id, 501);
        let created = client().parse_create_comment(response(200, body)).unwrap();
        assert_eq!(created.post_id, 1);
    }

    #[test]
    fn parse_delete_comment_ignores_ack_body() {
        assert!(client().parse_delete_comment(response(204, "")).is_ok());
        assert!(client().parse_delete_comment(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_comment_not_found() {
        let err = client().parse_delete_comment(response(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BlogClient::new("http://localhost:3000//");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_list_users().path, "http://localhost:3000/users");
    }
}
