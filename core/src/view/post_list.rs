//! Post list: pure rendering plus the select/close toggle.

use crate::types::{Post, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Open,
    Close,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Open => "Open",
            RowAction::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow<'a> {
    pub id: PostId,
    pub title: &'a str,
    pub action: RowAction,
}

/// Selection after `clicked` is pressed: clicking the selected post clears
/// the selection, any other post replaces it.
pub fn toggle_selection(current: Option<&Post>, clicked: &Post) -> Option<Post> {
    match current {
        Some(post) if post.id == clicked.id => None,
        _ => Some(clicked.clone()),
    }
}

pub fn rows<'a>(posts: &'a [Post], selected: Option<&Post>) -> Vec<PostRow<'a>> {
    posts
        .iter()
        .map(|post| PostRow {
            id: post.id,
            title: &post.title,
            action: if selected.is_some_and(|s| s.id == post.id) {
                RowAction::Close
            } else {
                RowAction::Open
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("post {id}"),
            body: String::new(),
        }
    }

    #[test]
    fn selecting_selected_post_deselects() {
        let p = post(1);
        assert_eq!(toggle_selection(Some(&p), &p), None);
    }

    #[test]
    fn selecting_other_post_replaces_selection() {
        let p = post(1);
        let q = post(2);
        assert_eq!(toggle_selection(Some(&p), &q), Some(q.clone()));
        assert_eq!(toggle_selection(None, &q), Some(q));
    }

    #[test]
    fn only_selected_row_offers_close() {
        let posts = vec![post(1), post(2), post(3)];

        let rows = rows(&posts, Some(&posts[1]));

        let actions: Vec<_> = rows.iter().map(|r| r.action).collect();
        assert_eq!(actions, vec![RowAction::Open, RowAction::Close, RowAction::Open]);
        assert_eq!(rows[2].title, "post 3");
    }
}
