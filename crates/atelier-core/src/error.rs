use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the fixture store.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("fixture document '{document}' is malformed: {source}")]
    Fixture {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read fixture file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
