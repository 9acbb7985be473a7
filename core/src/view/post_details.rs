//! Side panel for the selected post: body, comments and the comment form.

use log::debug;

use crate::effect::Command;
use crate::error::TransportError;
use crate::types::{Comment, CommentId, Post};

use super::comment_form::{CommentForm, FormError};
use super::ignore_failure;

pub const LOAD_COMMENTS_ERROR: &str = "Something went wrong";

/// What the comment area shows, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsContent<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List(&'a [Comment]),
}

#[derive(Debug, Clone)]
pub struct PostDetails {
    post: Post,
    comments: Vec<Comment>,
    is_loading: bool,
    error: Option<String>,
    form: Option<CommentForm>,
}

impl PostDetails {
    /// Open the panel on `post` and request its comments.
    pub fn open(post: Post) -> (Self, Command) {
        let command = Command::LoadComments { post_id: post.id };
        let details = Self {
            post,
            comments: Vec::new(),
            is_loading: true,
            error: None,
            form: None,
        };
        (details, command)
    }

    /// Switch to another post. The form is hidden and the comments are
    /// fetched again; the old list stays until the new one arrives.
    pub fn show_post(&mut self, post: Post) -> Command {
        debug!("post details switched to post {}", post.id);
        self.post = post;
        self.form = None;
        self.error = None;
        self.is_loading = true;
        Command::LoadComments { post_id: self.post.id }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn title(&self) -> String {
        format!("#{}: {}", self.post.id, self.post.title)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn content(&self) -> CommentsContent<'_> {
        if self.is_loading {
            CommentsContent::Loading
        } else if let Some(error) = &self.error {
            CommentsContent::Error(error)
        } else if self.comments.is_empty() {
            CommentsContent::Empty
        } else {
            CommentsContent::List(&self.comments)
        }
    }

    pub fn is_write_button_visible(&self) -> bool {
        self.form.is_none() && !self.is_loading
    }

    pub fn form(&self) -> Option<&CommentForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CommentForm> {
        self.form.as_mut()
    }

    /// "Write a comment". A form that is already open is left as it is.
    pub fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(CommentForm::default());
        }
    }

    /// Validate the open form and produce the create request.
    pub fn submit_form(&mut self) -> Option<Result<Command, FormError>> {
        let post_id = self.post.id;
        let form = self.form.as_mut()?;
        Some(form.submit(post_id).map(Command::CreateComment))
    }

    pub fn reset_form(&mut self) {
        if let Some(form) = &mut self.form {
            form.reset();
        }
    }

    pub fn delete_comment(&self, comment_id: CommentId) -> Command {
        Command::DeleteComment { comment_id }
    }

    /// Apply a comment fetch. Responses are not matched against the current
    /// post, so the last one to arrive wins.
    pub fn comments_loaded(&mut self, result: Result<Vec<Comment>, TransportError>) {
        self.is_loading = false;
        match result {
            Ok(comments) => self.comments = comments,
            Err(err) => {
                debug!("loading comments failed: {err}");
                self.error = Some(LOAD_COMMENTS_ERROR.to_string());
            }
        }
    }

    /// Apply a create response. Only the form that submitted is settled; a
    /// form opened after a post switch is left untouched.
    pub fn comment_created(&mut self, result: Result<Comment, TransportError>) {
        if let Ok(comment) = &result {
            let mut comments = self.comments.clone();
            comments.push(comment.clone());
            self.comments = comments;
        }
        match &mut self.form {
            Some(form) if form.is_submitting() => form.finish(result.as_ref()),
            _ => {
                if let Err(err) = &result {
                    ignore_failure("create comment", err);
                }
            }
        }
    }

    pub fn comment_deleted(&mut self, comment_id: CommentId, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                self.comments = self
                    .comments
                    .iter()
                    .filter(|comment| comment.id != comment_id)
                    .cloned()
                    .collect();
            }
            Err(err) => ignore_failure("delete comment", &err),
        }
    }
}
