//! Core types and trait definitions for the mood review service.
//!
//! This crate has no HTTP or database dependencies. It owns
//! the sentiment vocabulary, the lexical classifier, and the storage contract
//! that backends implement.

pub mod classify;
pub mod error;
pub mod review;
pub mod store;

pub use classify::{Lexicon, classify};
pub use error::{Error, Result};
pub use review::{NewReview, Review, Sentiment};
