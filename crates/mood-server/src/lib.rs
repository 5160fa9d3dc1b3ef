//! Server wiring for mood: configuration, store startup, and the HTTP app.
//!
//! The binary in `main.rs` is a thin shell over these functions so they can
//! be exercised in tests without binding a socket.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::Router;
use mood_api::{ApiState, api_router};
use mood_core::{Lexicon, store::ReviewStore};
use mood_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `MOOD_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file; a leading `~/` is expanded.
  pub database_path: PathBuf,
  /// Stem lists for the classifier. Missing fields use the built-in lexicon.
  pub lexicon:       Lexicon,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          5000,
      database_path: PathBuf::from("reviews.db"),
      lexicon:       Lexicon::default(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional config file under `MOOD_*` environment overrides.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("MOOD"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Open the review database and make sure its schema exists.
///
/// Any failure here means the server cannot serve correct reads or writes, so
/// it is returned to the caller to abort startup.
pub async fn open_store(path: &Path) -> anyhow::Result<SqliteStore> {
  let store_path = expand_tilde(path);
  let store = SqliteStore::open(&store_path);

  let conn = store
    .acquire()
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  store
    .initialize(&conn)
    .await
    .with_context(|| format!("failed to initialise schema at {store_path:?}"))?;

  tracing::info!(path = %store_path.display(), "review store initialised");
  Ok(store)
}

/// The full HTTP application: API routes plus request tracing.
pub fn app<S>(store: S, lexicon: Lexicon) -> Router
where
  S: ReviewStore + 'static,
{
  api_router(ApiState::new(store, lexicon)).layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests;
