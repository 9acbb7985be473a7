//! Line-oriented front end: parse a command, update the view state, run the
//! requests it asks for, redraw.

use std::io::{BufRead, Write};
use std::str::FromStr;

use blog_core::view::{CommentForm, CommentsContent, Field, FormError};
use blog_core::{perform, Api, App, Command, CommentId, PostId, Transport, UserId};
use log::debug;
use thiserror::Error;

use crate::render::render;

pub const HELP: &str = "\
commands:
  users              open or close the author menu
  user <id>          choose an author
  post <id>          open or close a post
  write              show the comment form
  name <text>        set the author name
  email <text>       set the author email
  body <text>        set the comment text
  add                submit the comment
  clear              clear the comment form
  delete <id>        delete a comment
  show               redraw
  help               this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    ToggleUsers,
    SelectUser(UserId),
    TogglePost(PostId),
    Write,
    Edit(Field, String),
    Add,
    Clear,
    Delete(CommentId),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs a numeric id")]
    MissingId(&'static str),
}

impl FromStr for ReplCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let id = |name: &'static str| -> Result<u64, ParseError> {
            rest.parse().map_err(|_| ParseError::MissingId(name))
        };

        Ok(match word {
            "users" => ReplCommand::ToggleUsers,
            "user" => ReplCommand::SelectUser(id("user")?),
            "post" => ReplCommand::TogglePost(id("post")?),
            "write" => ReplCommand::Write,
            "name" => ReplCommand::Edit(Field::Name, rest.to_string()),
            "email" => ReplCommand::Edit(Field::Email, rest.to_string()),
            "body" => ReplCommand::Edit(Field::Body, rest.to_string()),
            "add" => ReplCommand::Add,
            "clear" => ReplCommand::Clear,
            "delete" => ReplCommand::Delete(id("delete")?),
            "show" | "" => ReplCommand::Show,
            "help" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Notice(&'static str),
    Help,
    Quit,
}

/// The reader's state plus the API it talks to.
pub struct Session<T> {
    app: App,
    api: Api<T>,
}

impl<T: Transport> Session<T> {
    pub fn new(api: Api<T>) -> Self {
        Self { app: App::new(), api }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Load the author list.
    pub fn mount(&mut self) {
        let command = self.app.mount();
        self.run([command]);
    }

    pub fn handle(&mut self, command: ReplCommand) -> Outcome {
        match command {
            ReplCommand::ToggleUsers => self.app.toggle_user_menu(),
            ReplCommand::SelectUser(id) => match self.app.select_user(id) {
                Some(command) => self.run([command]),
                None => return Outcome::Notice("no such user"),
            },
            ReplCommand::TogglePost(id) => {
                if !self.app.visible_posts().iter().any(|p| p.id == id) {
                    return Outcome::Notice("no such post");
                }
                let command = self.app.select_post(id);
                self.run(command);
            }
            ReplCommand::Write => match self.app.details_mut() {
                Some(details) if details.is_write_button_visible() => details.open_form(),
                Some(_) => return Outcome::Notice("the comment form is not available right now"),
                None => return Outcome::Notice("select a post first"),
            },
            ReplCommand::Edit(field, value) => match self.form_mut() {
                Some(form) => form.set(field, value),
                None => return Outcome::Notice("open the form with `write` first"),
            },
            ReplCommand::Add => {
                let Some(submission) = self.app.details_mut().and_then(|d| d.submit_form()) else {
                    return Outcome::Notice("open the form with `write` first");
                };
                match submission {
                    Ok(command) => self.run([command]),
                    Err(FormError::Invalid(_)) => {}
                    Err(FormError::Busy) => return Outcome::Notice("already submitting"),
                }
            }
            ReplCommand::Clear => match self.app.details_mut() {
                Some(details) if details.form().is_some() => details.reset_form(),
                _ => return Outcome::Notice("open the form with `write` first"),
            },
            ReplCommand::Delete(id) => match self.app.details() {
                Some(details) => {
                    let listed = matches!(
                        details.content(),
                        CommentsContent::List(comments) if comments.iter().any(|c| c.id == id)
                    );
                    if !listed {
                        return Outcome::Notice("no such comment");
                    }
                    let command = details.delete_comment(id);
                    self.run([command]);
                }
                None => return Outcome::Notice("select a post first"),
            },
            ReplCommand::Show => {}
            ReplCommand::Help => return Outcome::Help,
            ReplCommand::Quit => return Outcome::Quit,
        }
        Outcome::Redraw
    }

    fn form_mut(&mut self) -> Option<&mut CommentForm> {
        self.app.details_mut().and_then(|d| d.form_mut())
    }

    /// Execute requests one after another, applying each response before
    /// the next request goes out.
    fn run(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            debug!("running {command:?}");
            let message = perform(&self.api, command);
            self.app.apply(message);
        }
    }
}

/// Read commands from `input` until it ends or `quit` is entered.
pub fn run<T: Transport>(
    session: &mut Session<T>,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    session.mount();
    writeln!(output, "{}", render(session.app()))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<ReplCommand>() {
            Ok(command) => match session.handle(command) {
                Outcome::Redraw => writeln!(output, "{}", render(session.app()))?,
                Outcome::Notice(notice) => writeln!(output, "{notice}")?,
                Outcome::Help => writeln!(output, "{HELP}")?,
                Outcome::Quit => return Ok(()),
            },
            Err(err) => writeln!(output, "{err}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
