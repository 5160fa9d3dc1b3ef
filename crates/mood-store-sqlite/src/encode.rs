//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; sentiments as their lower-case
//! label.

use chrono::{DateTime, Utc};
use mood_core::review::{Review, Sentiment};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Sentiment ───────────────────────────────────────────────────────────────

pub fn encode_sentiment(s: Sentiment) -> &'static str { s.as_str() }

pub fn decode_sentiment(s: &str) -> Result<Sentiment> {
  Ok(Sentiment::parse(s)?)
}

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// A `reviews` row as read from SQLite, before decoding.
pub struct RawReview {
  pub id:         i64,
  pub sentiment:  String,
  pub text:       String,
  pub created_at: String,
}

impl RawReview {
  pub const COLUMNS: &'static str = "id, sentiment, text, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      sentiment:  row.get(1)?,
      text:       row.get(2)?,
      created_at: row.get(3)?,
    })
  }

  pub fn into_review(self) -> Result<Review> {
    Ok(Review {
      id:         self.id,
      sentiment:  decode_sentiment(&self.sentiment)?,
      text:       self.text,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
