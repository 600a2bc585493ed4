//! Handlers for the book endpoints.
//!
//! Every mutation redirects back to `/` with 303 See Other, so the browser
//! re-fetches the listing and the visible page is always a fresh read.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{Html, Redirect},
};
use tracing::debug;

use super::{extract::BookSubmission, render};
use crate::error::ShelfError;
use crate::server::router::ShelfState;

/// GET `/` - the listing page.
pub async fn book_list_handler(
    State(state): State<ShelfState>,
) -> Result<Html<String>, ShelfError> {
    let books = state.books.list().await?;
    Ok(Html(render::book_list_page(&books, state.track_progress)))
}

/// POST `/add_book` - insert one book from the submitted form.
pub async fn add_book_handler(
    State(state): State<ShelfState>,
    BookSubmission(create): BookSubmission,
) -> Result<Redirect, ShelfError> {
    let id = state.books.insert(create).await?;
    debug!(id, "book added");
    Ok(Redirect::to("/"))
}

/// GET `/delete_book/{book_id}` - remove a book. Absent ids are a no-op.
pub async fn delete_book_handler(
    State(state): State<ShelfState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ShelfError> {
    let Path(book_id) = book_id?;
    state.books.delete(book_id).await?;
    Ok(Redirect::to("/"))
}

/// GET `/done_today/{book_id}` - reset a book's pages-read counter after a
/// day of reading. Absent ids are a no-op.
pub async fn done_today_handler(
    State(state): State<ShelfState>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, ShelfError> {
    let Path(book_id) = book_id?;
    state.books.reset_pages_read(book_id).await?;
    Ok(Redirect::to("/"))
}
