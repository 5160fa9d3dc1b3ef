//! SQLite backend for the mood review store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on dedicated threads
//! without blocking the async runtime. Every [`SqliteConn`] owns its own
//! connection; nothing is shared between requests.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{SqliteConn, SqliteStore};
