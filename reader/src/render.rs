//! Plain-text drawing of the reader's views.

use blog_core::view::{rows, CommentForm, CommentsContent, Field, MainContent, PostDetails};
use blog_core::App;

pub fn render(app: &App) -> String {
    let mut lines = Vec::new();
    user_selector(app, &mut lines);
    lines.push(String::new());
    main_content(app, &mut lines);
    if let Some(details) = app.details() {
        lines.push(String::new());
        sidebar(details, &mut lines);
    }
    lines.join("\n")
}

fn user_selector(app: &App, lines: &mut Vec<String>) {
    lines.push(format!("[ {} v ]", app.selector_label()));
    for item in app.selector_items() {
        let marker = if item.is_active { '*' } else { ' ' };
        lines.push(format!("  {marker} {} ({})", item.name, item.id));
    }
}

fn main_content(app: &App, lines: &mut Vec<String>) {
    match app.main_content() {
        MainContent::NoSelectedUser => lines.push("No user selected".to_string()),
        MainContent::Loading => lines.push("Loading...".to_string()),
        MainContent::Error(message) => lines.push(format!("! {message}")),
        MainContent::NoPosts => lines.push("No posts yet".to_string()),
        MainContent::Posts(posts) => {
            for row in rows(posts, app.selected_post()) {
                lines.push(format!("  #{:<4} [{:<5}] {}", row.id, row.action.label(), row.title));
            }
        }
    }
}

fn sidebar(details: &PostDetails, lines: &mut Vec<String>) {
    lines.push(format!("== {} ==", details.title()));
    lines.push(details.post().body.clone());
    lines.push(String::new());

    match details.content() {
        CommentsContent::Loading => lines.push("Loading...".to_string()),
        CommentsContent::Error(message) => lines.push(format!("! {message}")),
        CommentsContent::Empty => lines.push("No comments yet".to_string()),
        CommentsContent::List(comments) => {
            lines.push("Comments:".to_string());
            for comment in comments {
                lines.push(format!("  [{}] {} <{}>", comment.id, comment.name, comment.email));
                lines.push(format!("      {}", comment.body));
            }
        }
    }

    if details.is_write_button_visible() {
        lines.push("[Write a comment]".to_string());
    }
    if let Some(form) = details.form() {
        comment_form(form, lines);
    }
}

fn comment_form(form: &CommentForm, lines: &mut Vec<String>) {
    for (label, field) in [
        ("Author Name", Field::Name),
        ("Author Email", Field::Email),
        ("Comment Text", Field::Body),
    ] {
        let mut line = format!("  {label}: {}", form.value(field));
        if let Some(message) = form.error_message(field) {
            line.push_str(&format!("  ! {message}"));
        }
        lines.push(line);
    }
    let add = if form.is_submitting() { "[Add ...]" } else { "[Add]" };
    lines.push(format!("  {add} [Clear]"));
}
