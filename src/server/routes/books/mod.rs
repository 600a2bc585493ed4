//! Book routes: listing, add, delete and the daily progress reset.

pub mod extract;
pub mod handlers;
pub mod render;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::router::ShelfState;
use handlers::{add_book_handler, book_list_handler, delete_book_handler, done_today_handler};

/// Build the book router.
///
/// `/done_today/{book_id}` is only mounted when progress tracking is
/// enabled; in the plain configuration it falls through to the 404
/// fallback like any unknown path.
pub fn router(track_progress: bool) -> Router<ShelfState> {
    let router = Router::new()
        .route("/", get(book_list_handler))
        .route("/add_book", post(add_book_handler))
        .route("/delete_book/{book_id}", get(delete_book_handler));

    if track_progress {
        router.route("/done_today/{book_id}", get(done_today_handler))
    } else {
        router
    }
}
