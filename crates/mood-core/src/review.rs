//! Review types — the persisted unit of the mood store.
//!
//! A review is written once and never updated or deleted. Its sentiment is
//! assigned at creation and is always one of the three [`Sentiment`] values.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{Error, Result};

// ─── Sentiment ───────────────────────────────────────────────────────────────

/// The coarse sentiment label attached to every review.
///
/// The lower-case string form (`"positive"`, …) is used both on the wire and
/// in the `sentiment` database column.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
  Positive,
  Negative,
  Neutral,
}

impl Sentiment {
  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse the exact lower-case label. Any other string is rejected.
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::InvalidSentiment(s.to_owned()))
  }
}

// ─── Review ──────────────────────────────────────────────────────────────────

/// A stored review. Field order matches the JSON shape returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
  /// Store-assigned, strictly increasing, never reused.
  pub id:         i64,
  pub sentiment:  Sentiment,
  pub text:       String,
  /// Server clock at creation.
  pub created_at: DateTime<Utc>,
}

// ─── NewReview ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReviewStore::insert`]. The `id` is assigned by the
/// store.
#[derive(Debug, Clone)]
pub struct NewReview {
  pub text:       String,
  pub sentiment:  Sentiment,
  pub created_at: DateTime<Utc>,
}

impl NewReview {
  /// Attach the id the store assigned to this input.
  pub fn into_review(self, id: i64) -> Review {
    Review {
      id,
      sentiment: self.sentiment,
      text: self.text,
      created_at: self.created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn parse_accepts_every_label() {
    for s in Sentiment::iter() {
      assert_eq!(Sentiment::parse(s.as_str()).unwrap(), s);
    }
  }

  #[test]
  fn parse_is_exact() {
    assert!(matches!(
      Sentiment::parse("Positive"),
      Err(Error::InvalidSentiment(ref s)) if s == "Positive"
    ));
    assert!(Sentiment::parse("").is_err());
    assert!(Sentiment::parse("mixed").is_err());
  }

  #[test]
  fn invalid_sentiment_message_lists_labels() {
    let err = Sentiment::parse("mixed").unwrap_err();
    assert_eq!(
      err.to_string(),
      r#"unknown sentiment "mixed", expected one of: positive, negative, neutral"#
    );
  }

  #[test]
  fn serde_uses_lowercase_labels() {
    let json = serde_json::to_string(&Sentiment::Negative).unwrap();
    assert_eq!(json, "\"negative\"");
    assert_eq!(Sentiment::Neutral.to_string(), "neutral");
  }

  #[test]
  fn review_json_field_order() {
    let review = NewReview {
      text:       "хорошо".into(),
      sentiment:  Sentiment::Positive,
      created_at: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc),
    }
    .into_review(7);

    let json = serde_json::to_string(&review).unwrap();
    assert_eq!(
      json,
      r#"{"id":7,"sentiment":"positive","text":"хорошо","created_at":"2024-05-01T10:00:00Z"}"#
    );
  }
}
