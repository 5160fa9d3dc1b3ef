//! SQL schema for the mood SQLite store.
//!
//! There are no migrations: the schema is created in full if absent and left
//! alone otherwise.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Reviews are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS reviews (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    text        TEXT NOT NULL,
    sentiment   TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    CHECK (sentiment IN ('positive', 'negative', 'neutral'))
);

CREATE INDEX IF NOT EXISTS reviews_sentiment_idx ON reviews(sentiment);
";

/// Applied to every connection as it is opened.
pub const BUSY_TIMEOUT_MS: u64 = 5_000;
