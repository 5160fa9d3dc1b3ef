//! The `ReviewStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `mood-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::review::{NewReview, Review, Sentiment};

/// Abstraction over a review storage backend.
///
/// The store itself is only a factory for connections. Every operation takes
/// an explicit [`ReviewStore::Conn`] handle that the caller acquires at the
/// start of a unit of work and drops when it is done; dropping the handle
/// releases the underlying resource on every exit path.
///
/// Reviews are append-only: there is no update or delete operation.
pub trait ReviewStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// A scoped connection handle. Never shared between requests.
  type Conn: Send + Sync;

  /// Open a fresh connection handle.
  fn acquire(
    &self,
  ) -> impl Future<Output = Result<Self::Conn, Self::Error>> + Send + '_;

  /// Create the review table and its sentiment index if they do not exist.
  ///
  /// Idempotent; safe to call on every process start.
  fn initialize<'a>(
    &'a self,
    conn: &'a Self::Conn,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Atomically append one review and return its assigned id.
  ///
  /// Ids are strictly increasing and never reused. A sentiment the storage
  /// layer does not accept is reported as an error and leaves no row behind.
  fn insert<'a>(
    &'a self,
    conn: &'a Self::Conn,
    review: &'a NewReview,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// Return reviews in ascending id order, restricted to `sentiment` when it
  /// is `Some`.
  fn list<'a>(
    &'a self,
    conn: &'a Self::Conn,
    sentiment: Option<Sentiment>,
  ) -> impl Future<Output = Result<Vec<Review>, Self::Error>> + Send + 'a;
}
