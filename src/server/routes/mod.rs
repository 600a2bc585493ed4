//! Route groups, one module per area of the app.

pub mod books;
