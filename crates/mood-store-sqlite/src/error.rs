//! Error type for `mood-store-sqlite`.

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] mood_core::Error),

  /// The connection could not be opened or a statement failed.
  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  /// The row was rejected by a table constraint, e.g. a sentiment outside the
  /// allowed set. Nothing was written.
  #[error("constraint violation: {0}")]
  Constraint(String),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
      ffi,
      message,
    )) = &e
      && ffi.code == ErrorCode::ConstraintViolation
    {
      return Error::Constraint(
        message.clone().unwrap_or_else(|| ffi.to_string()),
      );
    }
    Error::Database(e)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
