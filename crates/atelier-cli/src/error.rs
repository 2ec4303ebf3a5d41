use atelier_core::{CoreError, DeskError};
use atelier_web::AppError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    NotFound(#[from] DeskError),

    #[error("failed to load fixtures: {0}")]
    Fixture(#[from] CoreError),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Server(#[from] AppError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 3,
            Self::Serialization(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Fixture(_) => 6,
            Self::Server(AppError::Core(_)) => 6,
            Self::Io(_) => 10,
            Self::Server(_) => 10,
        }
    }
}
