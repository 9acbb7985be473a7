//! Author dropdown: open flag, button label and menu entries.

use crate::types::{User, UserId};

const PLACEHOLDER: &str = "Choose a user";

/// Dropdown of authors. Only tracks whether the menu is open; the list and
/// the selection belong to the shell.
#[derive(Debug, Clone, Default)]
pub struct UserSelector {
    is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelectorItem<'a> {
    pub id: UserId,
    pub name: &'a str,
    pub is_active: bool,
}

impl UserSelector {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Text on the dropdown trigger.
    pub fn label<'a>(&self, selected: Option<&'a User>) -> &'a str {
        selected.map_or(PLACEHOLDER, |user| user.name.as_str())
    }

    /// Menu entries; empty while the menu is closed.
    pub fn items<'a>(&self, users: &'a [User], selected: Option<&User>) -> Vec<UserSelectorItem<'a>> {
        if !self.is_open {
            return Vec::new();
        }
        users
            .iter()
            .map(|user| UserSelectorItem {
                id: user.id,
                name: &user.name,
                is_active: selected.is_some_and(|s| s.id == user.id),
            })
            .collect()
    }
}
