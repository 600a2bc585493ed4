mod shelf;

pub use shelf::{ApiErrorBody, ApiErrorObject, ShelfError};
