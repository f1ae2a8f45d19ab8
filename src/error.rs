/// Application-level errors
///
/// `NotFound` is the only condition the engine itself raises: an unknown user
/// or recipe identity supplied by the caller. Empty results are not errors --
/// a user with no interactions or a corpus with no matches simply produces an
/// empty list. `Storage` wraps failures bubbling up from the persistence
/// collaborator; the engine performs no retry or partial recovery.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
