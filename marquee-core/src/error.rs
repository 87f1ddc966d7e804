use thiserror::Error;

/// Failures surfaced by the movie store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
