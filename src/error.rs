use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Template configuration error: {0}")]
    Template(String),

    #[error("Could not determine the home directory for a user-scoped command")]
    HomeDir,

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    /// The user backed out of an interactive step. Reported, but not a failure.
    #[error("{0}")]
    InteractiveAbort(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InteractiveAbort(_) => 0,
            _ => 1,
        }
    }
}
