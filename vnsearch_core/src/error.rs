use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures from the slug store. Matching itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
