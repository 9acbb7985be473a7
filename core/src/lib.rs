//! Client core for the blog reader.
//!
//! # Overview
//! Talks to a JSON API of users, posts and comments, and keeps the state of
//! the reader's four views: the user picker, the post list, the post detail
//! panel and the new-comment form.
//!
//! # Design
//! - `BlogClient` is stateless; each operation is split into `build_*`
//!   (produces a request) and `parse_*` (consumes a response), so the I/O
//!   boundary is explicit. Hosts plug their HTTP stack in through
//!   [`Transport`].
//! - View state lives in [`view`]. User actions return [`Command`]s instead
//!   of doing I/O; the host runs them with [`perform`] and hands the
//!   resulting [`Message`]s back to [`App::apply`].
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod effect;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use client::BlogClient;
pub use effect::{perform, Command, Message};
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Api, Transport};
pub use types::{Comment, CommentId, NewComment, Post, PostId, User, UserId};
pub use view::App;
