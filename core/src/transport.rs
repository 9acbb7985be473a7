//! The I/O seam between the core and its host.
//!
//! A host implements [`Transport`] once; [`Api`] pairs it with a
//! [`BlogClient`] so callers get typed results for each backend operation.

use log::debug;

use crate::client::BlogClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Comment, CommentId, NewComment, Post, PostId, User, UserId};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as data; only failures that
/// produced no response at all belong in `Err`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Typed facade over the blog API. No retries.
#[derive(Debug, Clone)]
pub struct Api<T> {
    client: BlogClient,
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(client: BlogClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_users(&self) -> Result<Vec<User>, TransportError> {
        let response = self.send(self.client.build_list_users())?;
        self.client.parse_list_users(response)
    }

    pub fn list_posts(&self, user_id: UserId) -> Result<Vec<Post>, TransportError> {
        let response = self.send(self.client.build_list_posts(user_id))?;
        self.client.parse_list_posts(response)
    }

    pub fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, TransportError> {
        let response = self.send(self.client.build_list_comments(post_id))?;
        self.client.parse_list_comments(response)
    }

    pub fn create_comment(&self, input: &NewComment) -> Result<Comment, TransportError> {
        let response = self.send(self.client.build_create_comment(input)?)?;
        self.client.parse_create_comment(response)
    }

    pub fn delete_comment(&self, id: CommentId) -> Result<(), TransportError> {
        let response = self.send(self.client.build_delete_comment(id))?;
        self.client.parse_delete_comment(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.execute(request)?;
        debug!("-> {}", response.status);
        Ok(response)
    }
}
