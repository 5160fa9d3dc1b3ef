//! JSON REST API for mood.
//!
//! Exposes an axum [`Router`] backed by any [`mood_core::store::ReviewStore`].
//! Every request acquires its own store connection and drops it before the
//! response is sent. TLS, tracing layers, and listening are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = mood_api::api_router(ApiState::new(store, lexicon));
//! ```

pub mod error;
pub mod reviews;

use std::sync::Arc;

use axum::{Router, routing::get};
use mood_core::{Lexicon, store::ReviewStore};

pub use error::ApiError;

// ─── State ───────────────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store:   Arc<S>,
  pub lexicon: Arc<Lexicon>,
}

impl<S> ApiState<S> {
  pub fn new(store: S, lexicon: Lexicon) -> Self {
    Self { store: Arc::new(store), lexicon: Arc::new(lexicon) }
  }
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), lexicon: Arc::clone(&self.lexicon) }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: ReviewStore + 'static,
{
  Router::new()
    .route("/reviews", get(reviews::list::<S>).post(reviews::create::<S>))
    .with_state(state)
}
