//! Application shell: the selected user, their posts, the selected post and
//! the panels hanging off them.

use log::debug;

use crate::effect::{Command, Message};
use crate::types::{Post, PostId, User, UserId};

use super::ignore_failure;
use super::post_details::PostDetails;
use super::post_list::toggle_selection;
use super::user_selector::{UserSelector, UserSelectorItem};

pub const LOAD_ERROR: &str = "Something went wrong!";

/// The main content area, first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContent<'a> {
    NoSelectedUser,
    Loading,
    Error(&'a str),
    NoPosts,
    Posts(&'a [Post]),
}

#[derive(Debug, Clone, Default)]
pub struct App {
    users: Vec<User>,
    selector: UserSelector,
    selected_user: Option<User>,
    posts: Vec<Post>,
    is_loading: bool,
    error: Option<String>,
    details: Option<PostDetails>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load of the user list. Issued once, when the app starts.
    pub fn mount(&mut self) -> Command {
        self.error = None;
        Command::LoadUsers
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.selected_user.as_ref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts currently on screen. Empty while loading or showing an error,
    /// even if an earlier list is still held.
    pub fn visible_posts(&self) -> &[Post] {
        match self.main_content() {
            MainContent::Posts(posts) => posts,
            _ => &[],
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.details.as_ref().map(PostDetails::post)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selector(&self) -> &UserSelector {
        &self.selector
    }

    pub fn selector_label(&self) -> &str {
        self.selector.label(self.selected_user.as_ref())
    }

    pub fn selector_items(&self) -> Vec<UserSelectorItem<'_>> {
        self.selector.items(&self.users, self.selected_user.as_ref())
    }

    pub fn toggle_user_menu(&mut self) {
        self.selector.toggle();
    }

    /// The side panel is shown exactly when a post is selected.
    pub fn is_sidebar_open(&self) -> bool {
        self.details.is_some()
    }

    pub fn details(&self) -> Option<&PostDetails> {
        self.details.as_ref()
    }

    pub fn details_mut(&mut self) -> Option<&mut PostDetails> {
        self.details.as_mut()
    }

    /// Choose an author from the dropdown and request their posts.
    ///
    /// The selected post and its panel are kept across user changes.
    pub fn select_user(&mut self, user_id: UserId) -> Option<Command> {
        let Some(user) = self.users.iter().find(|u| u.id == user_id).cloned() else {
            debug!("ignoring selection of unknown user {user_id}");
            return None;
        };
        self.selected_user = Some(user);
        self.selector.close();
        self.error = None;
        self.is_loading = true;
        Some(Command::LoadPosts { user_id })
    }

    /// Press the open/close action of a post in the list.
    pub fn select_post(&mut self, post_id: PostId) -> Option<Command> {
        let Some(clicked) = self.visible_posts().iter().find(|p| p.id == post_id).cloned() else {
            debug!("ignoring selection of post {post_id}: not listed");
            return None;
        };
        let Some(post) = toggle_selection(self.selected_post(), &clicked) else {
            self.details = None;
            return None;
        };
        match &mut self.details {
            Some(details) => Some(details.show_post(post)),
            None => {
                let (details, command) = PostDetails::open(post);
                self.details = Some(details);
                Some(command)
            }
        }
    }

    /// What the main content area shows.
    pub fn main_content(&self) -> MainContent<'_> {
        if self.selected_user.is_none() && self.error.is_none() {
            MainContent::NoSelectedUser
        } else if self.is_loading {
            MainContent::Loading
        } else if let Some(error) = &self.error {
            MainContent::Error(error)
        } else if self.posts.is_empty() {
            MainContent::NoPosts
        } else {
            MainContent::Posts(&self.posts)
        }
    }

    /// Apply a completed response.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::UsersLoaded(result) => match result {
                Ok(users) => self.users = users,
                Err(err) => {
                    debug!("loading users failed: {err}");
                    self.error = Some(LOAD_ERROR.to_string());
                }
            },
            Message::PostsLoaded { user_id, result } => {
                self.is_loading = false;
                match result {
                    Ok(posts) => self.posts = posts,
                    Err(err) => {
                        debug!("loading posts of user {user_id} failed: {err}");
                        self.error = Some(LOAD_ERROR.to_string());
                    }
                }
            }
            Message::CommentsLoaded { post_id, result } => match &mut self.details {
                Some(details) => details.comments_loaded(result),
                None => debug!("dropping comments of post {post_id}: panel closed"),
            },
            Message::CommentCreated(result) => match (&mut self.details, result) {
                (Some(details), result) => details.comment_created(result),
                (None, Err(err)) => ignore_failure("create comment", &err),
                (None, Ok(comment)) => debug!("comment {} created after panel closed", comment.id),
            },
            Message::CommentDeleted { comment_id, result } => match (&mut self.details, result) {
                (Some(details), result) => details.comment_deleted(comment_id, result),
                (None, Err(err)) => ignore_failure("delete comment", &err),
                (None, Ok(())) => {}
            },
        }
    }
}
