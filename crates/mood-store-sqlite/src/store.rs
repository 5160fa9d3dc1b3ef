//! [`SqliteStore`] — the SQLite implementation of [`ReviewStore`].

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use mood_core::{
  review::{NewReview, Review, Sentiment},
  store::ReviewStore,
};
use uuid::Uuid;

use crate::{
  Result,
  encode::{RawReview, encode_dt, encode_sentiment},
  schema::{BUSY_TIMEOUT_MS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A connection factory for one SQLite database.
///
/// Cloning is cheap. Each call to [`ReviewStore::acquire`] opens a new
/// [`SqliteConn`]; the store itself never runs queries.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  target: PathBuf,
  /// Keeps a shared-cache in-memory database alive between connections.
  _anchor: Option<tokio_rusqlite::Connection>,
}

impl SqliteStore {
  /// Target the database file at `path`. The file is created on first
  /// connection if it does not exist.
  pub fn open(path: impl AsRef<Path>) -> Self {
    Self { target: path.as_ref().to_path_buf(), _anchor: None }
  }

  /// Target a private in-memory database — useful for testing.
  ///
  /// The database is shared by every connection acquired from this store (and
  /// its clones) and disappears when the last of them is dropped.
  pub async fn open_in_memory() -> Result<Self> {
    let target =
      PathBuf::from(format!("file:mood-{}?mode=memory&cache=shared", Uuid::new_v4()));
    let anchor = tokio_rusqlite::Connection::open(&target).await?;
    Ok(Self { target, _anchor: Some(anchor) })
  }
}

// ─── Connection ──────────────────────────────────────────────────────────────

/// One open SQLite connection, scoped to a single unit of work.
///
/// The connection (and its background thread) closes when this is dropped.
pub struct SqliteConn {
  conn: tokio_rusqlite::Connection,
}

impl SqliteConn {
  /// Insert pre-encoded column values in a single transaction.
  async fn insert_row(
    &self,
    text: String,
    sentiment: String,
    created_at: String,
  ) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO reviews (text, sentiment, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![text, sentiment, created_at],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
      })
      .await?;
    Ok(id)
  }

  #[cfg(test)]
  pub(crate) async fn insert_raw(
    &self,
    text: &str,
    sentiment: &str,
    created_at: &str,
  ) -> Result<i64> {
    self
      .insert_row(text.to_owned(), sentiment.to_owned(), created_at.to_owned())
      .await
  }

  #[cfg(test)]
  pub(crate) async fn count_rows(&self) -> Result<i64> {
    Ok(
      self
        .conn
        .call(|conn| {
          Ok(conn.query_row("SELECT COUNT(*) FROM reviews", [], |r| r.get(0))?)
        })
        .await?,
    )
  }
}

// ─── ReviewStore impl ────────────────────────────────────────────────────────

impl ReviewStore for SqliteStore {
  type Conn = SqliteConn;
  type Error = crate::Error;

  async fn acquire(&self) -> Result<SqliteConn> {
    let conn = tokio_rusqlite::Connection::open(&self.target).await?;
    conn
      .call(|conn| {
        conn.busy_timeout(Duration::from_millis(BUSY_TIMEOUT_MS))?;
        Ok(())
      })
      .await?;
    Ok(SqliteConn { conn })
  }

  async fn initialize(&self, conn: &SqliteConn) -> Result<()> {
    conn
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!(db = %self.target.display(), "review schema ready");
    Ok(())
  }

  async fn insert(&self, conn: &SqliteConn, review: &NewReview) -> Result<i64> {
    let text       = review.text.clone();
    let sentiment  = encode_sentiment(review.sentiment).to_owned();
    let created_at = encode_dt(review.created_at);

    conn.insert_row(text, sentiment, created_at).await
  }

  async fn list(
    &self,
    conn: &SqliteConn,
    sentiment: Option<Sentiment>,
  ) -> Result<Vec<Review>> {
    let sentiment_str = sentiment.map(encode_sentiment).map(str::to_owned);

    let raws: Vec<RawReview> = conn
      .conn
      .call(move |conn| {
        let rows = if let Some(s) = sentiment_str {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reviews WHERE sentiment = ?1 ORDER BY id",
            RawReview::COLUMNS
          ))?;
          stmt
            .query_map(rusqlite::params![s], RawReview::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM reviews ORDER BY id",
            RawReview::COLUMNS
          ))?;
          stmt
            .query_map([], RawReview::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReview::into_review).collect()
  }
}
