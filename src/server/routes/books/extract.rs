//! Form extraction for the add-book endpoint.

use std::borrow::Borrow;

use axum::{
    Form,
    extract::{FromRequest, Request},
};
use serde::Deserialize;

use crate::db::BookCreate;
use crate::error::ShelfError;
use crate::server::router::ShelfState;

/// Raw `/add_book` payload in the progress-tracking configuration.
/// `pages_read` stays optional at the serde level so a missing field maps to
/// its own explicit error rather than a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub pages_read: Option<i64>,
}

/// Raw `/add_book` payload in the plain configuration. `pages_read` is not
/// part of the type, so a submitted value is ignored whatever it contains.
#[derive(Debug, Deserialize)]
pub struct PlainBookForm {
    pub title: String,
    pub author: String,
}

/// A fully resolved book submission, ready for insertion.
///
/// Wraps [`Form`] extraction and applies the progress-tracking rules: with
/// tracking enabled `pages_read` is required, without it the field is never
/// read and every book starts at zero.
#[derive(Debug)]
pub struct BookSubmission(pub BookCreate);

impl<S> FromRequest<S> for BookSubmission
where
    S: Send + Sync + Borrow<ShelfState>,
{
    type Rejection = ShelfError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let state: &ShelfState = state.borrow();
        if state.track_progress {
            // Non-numeric pages_read (or a malformed body) fails here with
            // the form rejection.
            let Form(form) = Form::<AddBookForm>::from_request(req, &()).await?;
            let pages_read = form.pages_read.ok_or(ShelfError::MissingFormField("pages_read"))?;
            Ok(BookSubmission(BookCreate {
                title: form.title,
                author: form.author,
                pages_read,
            }))
        } else {
            let Form(form) = Form::<PlainBookForm>::from_request(req, &()).await?;
            Ok(BookSubmission(BookCreate {
                title: form.title,
                author: form.author,
                pages_read: 0,
            }))
        }
    }
}
