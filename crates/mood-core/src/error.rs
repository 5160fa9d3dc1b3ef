//! Error types for `mood-core`.

use strum::VariantNames as _;
use thiserror::Error;

use crate::review::Sentiment;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "unknown sentiment {0:?}, expected one of: {labels}",
    labels = Sentiment::VARIANTS.join(", ")
  )]
  InvalidSentiment(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
