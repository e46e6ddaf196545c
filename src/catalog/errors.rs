//! Error types for catalog loading.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON{location}: {message}\n{snippet}")]
    Parse {
        /// `" at path 'courses[3].course_title' (line 12 col 9)"`, or empty.
        location: String,
        message: String,
        snippet: String,
    },
}
