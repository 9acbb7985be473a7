//! New-comment form.
//!
//! All three fields are required. Validation happens on submit, after
//! trimming; every empty field gets its own error flag and nothing is sent
//! unless all three pass.

use thiserror::Error;

use crate::error::TransportError;
use crate::types::{Comment, NewComment, PostId};

use super::ignore_failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Body,
}

impl Field {
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Body => "Enter some text",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub body: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.name || self.email || self.body
    }

    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Body => self.body,
        }
    }

    fn set(&mut self, field: Field, value: bool) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Body => self.body = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required fields are empty")]
    Invalid(FieldErrors),
    #[error("a comment is already being submitted")]
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    name: String,
    email: String,
    body: String,
    errors: FieldErrors,
    is_submitting: bool,
}

impl CommentForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Body => &self.body,
        }
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    /// Inline message for `field`, present only while it is marked invalid.
    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field).then(|| field.error_message())
    }

    /// Submit control is disabled while this is set.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Editing a field clears its error flag.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Body => self.body = value,
        }
        self.errors.set(field, false);
    }

    /// Validate and, when every field is filled, mark the form as submitting
    /// and return the payload to create.
    pub fn submit(&mut self, post_id: PostId) -> Result<NewComment, FormError> {
        if self.is_submitting {
            return Err(FormError::Busy);
        }

        let name = self.name.trim();
        let email = self.email.trim();
        let body = self.body.trim();

        self.errors = FieldErrors {
            name: name.is_empty(),
            email: email.is_empty(),
            body: body.is_empty(),
        };
        if self.errors.any() {
            return Err(FormError::Invalid(self.errors));
        }

        let input = NewComment {
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        };
        self.is_submitting = true;
        Ok(input)
    }

    /// Settle a submission. Success clears only the body so the same author
    /// can post again right away; failure is ignored.
    pub fn finish(&mut self, result: Result<&Comment, &TransportError>) {
        self.is_submitting = false;
        match result {
            Ok(_) => self.body.clear(),
            Err(err) => ignore_failure("create comment", err),
        }
    }

    /// Clear all fields and errors. Nothing is sent to the server.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body.clear();
        self.errors = FieldErrors::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CommentForm {
        let mut form = CommentForm::default();
        form.set(Field::Name, "Ann");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Body, "hi");
        form
    }

    fn comment(body: &str) -> Comment {
        Comment {
            id: 77,
            post_id: 1,
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_name_marks_only_name() {
        let mut form = filled();
        form.set(Field::Name, "");

        let err = form.submit(1).unwrap_err();

        assert_eq!(
            err,
            FormError::Invalid(FieldErrors {
                name: true,
                email: false,
                body: false
            })
        );
        assert_eq!(form.error_message(Field::Name), Some("Name is required"));
        assert_eq!(form.error_message(Field::Email), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        let mut form = CommentForm::default();
        form.set(Field::Name, "  ");
        form.set(Field::Email, "\t");
        form.set(Field::Body, "\n ");

        let err = form.submit(1).unwrap_err();

        assert_eq!(
            err,
            FormError::Invalid(FieldErrors {
                name: true,
                email: true,
                body: true
            })
        );
        assert_eq!(form.error_message(Field::Body), Some("Enter some text"));
    }

    #[test]
    fn valid_submit_trims_and_disables() {
        let mut form = CommentForm::default();
        form.set(Field::Name, "  Ann ");
        form.set(Field::Email, " a@b.com");
        form.set(Field::Body, "hi  ");

        let input = form.submit(4).unwrap();

        assert_eq!(
            input,
            NewComment {
                post_id: 4,
                name: "Ann".to_string(),
                email: "a@b.com".to_string(),
                body: "hi".to_string(),
            }
        );
        assert!(form.is_submitting());
        assert_eq!(form.submit(4), Err(FormError::Busy));
    }

    #[test]
    fn editing_field_clears_its_error() {
        let mut form = CommentForm::default();
        let _ = form.submit(1);
        assert!(form.errors().email);

        form.set(Field::Email, "x");

        assert!(!form.errors().email);
        assert!(form.errors().name);
    }

    #[test]
    fn success_clears_body_and_keeps_author() {
        let mut form = filled();
        form.submit(1).unwrap();

        form.finish(Ok(&comment("hi")));

        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Body), "");
        assert_eq!(form.value(Field::Name), "Ann");
        assert_eq!(form.value(Field::Email), "a@b.com");
    }

    #[test]
    fn failure_keeps_fields_and_shows_nothing() {
        let mut form = filled();
        form.submit(1).unwrap();

        form.finish(Err(&TransportError::Network("down".to_string())));

        assert!(!form.is_submitting());
        assert_eq!(form.value(Field::Body), "hi");
        assert!(!form.errors().any());
    }

    #[test]
    fn reset_clears_fields_and_every_error() {
        let mut form = CommentForm::default();
        let _ = form.submit(1);
        form.set(Field::Body, "draft");

        form.reset();

        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Body), "");
        assert_eq!(form.errors(), FieldErrors::default());
    }
}
