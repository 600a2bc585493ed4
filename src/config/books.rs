use serde::{Deserialize, Serialize};

/// Book-tracking behavior managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BooksConfig {
    /// Enable the reading-progress surface: the `pages_read` form field, the
    /// progress column on the listing page, and the `/done_today/{id}` route.
    /// When disabled the service runs as a plain catalog on the same schema.
    /// TOML: `books.track_progress`. Default: `true`.
    #[serde(default = "default_track_progress")]
    pub track_progress: bool,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            track_progress: default_track_progress(),
        }
    }
}

fn default_track_progress() -> bool {
    true
}
