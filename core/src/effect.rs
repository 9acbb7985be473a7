//! Requests the view state asks for, and the responses it gets back.
//!
//! # Design
//! User actions on [`App`](crate::view::App) never touch the network. They
//! return `Command` values; the host runs each one through [`perform`] and
//! feeds the resulting `Message` back with `App::apply`. Messages are applied
//! in arrival order and none is ever dropped for being stale, so when two
//! fetches race the last one to arrive wins.

use crate::error::TransportError;
use crate::transport::{Api, Transport};
use crate::types::{Comment, CommentId, NewComment, Post, PostId, User, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadUsers,
    LoadPosts { user_id: UserId },
    LoadComments { post_id: PostId },
    CreateComment(NewComment),
    DeleteComment { comment_id: CommentId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    UsersLoaded(Result<Vec<User>, TransportError>),
    PostsLoaded {
        user_id: UserId,
        result: Result<Vec<Post>, TransportError>,
    },
    CommentsLoaded {
        post_id: PostId,
        result: Result<Vec<Comment>, TransportError>,
    },
    CommentCreated(Result<Comment, TransportError>),
    CommentDeleted {
        comment_id: CommentId,
        result: Result<(), TransportError>,
    },
}

/// Execute exactly one request for `command`.
pub fn perform<T: Transport>(api: &Api<T>, command: Command) -> Message {
    match command {
        Command::LoadUsers => Message::UsersLoaded(api.list_users()),
        Command::LoadPosts { user_id } => Message::PostsLoaded {
            user_id,
            result: api.list_posts(user_id),
        },
        Command::LoadComments { post_id } => Message::CommentsLoaded {
            post_id,
            result: api.list_comments(post_id),
        },
        Command::CreateComment(input) => Message::CommentCreated(api.create_comment(&input)),
        Command::DeleteComment { comment_id } => Message::CommentDeleted {
            comment_id,
            result: api.delete_comment(comment_id),
        },
    }
}
