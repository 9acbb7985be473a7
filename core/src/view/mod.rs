//! Headless view state for the reader.
//!
//! Each view owns its own state and exposes what should be drawn as plain
//! values; hosts decide how to draw them. Lists are only ever replaced,
//! appended to, or filtered, never edited in place.

mod app;
mod comment_form;
mod post_details;
mod post_list;
mod user_selector;

pub use app::{App, MainContent, LOAD_ERROR};
pub use comment_form::{CommentForm, Field, FieldErrors, FormError};
pub use post_details::{CommentsContent, PostDetails, LOAD_COMMENTS_ERROR};
pub use post_list::{rows, toggle_selection, PostRow, RowAction};
pub use user_selector::{UserSelector, UserSelectorItem};

use log::warn;

use crate::error::TransportError;

/// Failures that are deliberately kept off screen.
///
/// Creating and deleting comments has no error presentation: the failure is
/// logged and otherwise discarded, leaving visible state as it was.
pub(crate) fn ignore_failure(operation: &str, err: &TransportError) {
    warn!("ignored {operation} failure: {err}");
}
