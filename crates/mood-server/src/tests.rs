use std::path::{Path, PathBuf};

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use mood_core::{Lexicon, Sentiment};
use tower::ServiceExt as _;

use super::*;

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("mood-server-{}-{name}", std::process::id()))
}

#[test]
fn missing_config_file_uses_defaults() {
  let cfg = ServerConfig::load(Path::new("/nonexistent/mood/config.toml")).unwrap();
  assert_eq!(cfg.host, "127.0.0.1");
  assert_eq!(cfg.port, 5000);
  assert_eq!(cfg.database_path, PathBuf::from("reviews.db"));
  assert_eq!(cfg.lexicon, Lexicon::default());
  assert_eq!(cfg.address(), "127.0.0.1:5000");
}

#[test]
fn config_file_overrides_fields_and_lexicon() {
  let path = temp_path("config.toml");
  std::fs::write(
    &path,
    r#"
host = "0.0.0.0"
port = 8088
database_path = "/var/lib/mood/reviews.db"

[lexicon]
positive = ["good", "great"]
negative = ["bad"]
"#,
  )
  .unwrap();

  let cfg = ServerConfig::load(&path).unwrap();
  std::fs::remove_file(&path).unwrap();

  assert_eq!(cfg.address(), "0.0.0.0:8088");
  assert_eq!(cfg.database_path, PathBuf::from("/var/lib/mood/reviews.db"));
  assert_eq!(cfg.lexicon.positive_stems(), ["good", "great"]);
  assert_eq!(cfg.lexicon.classify("not good"), Sentiment::Positive);
  assert_eq!(cfg.lexicon.classify("не bad"), Sentiment::Positive);
}

#[test]
fn expand_tilde_uses_home() {
  let home = std::env::var("HOME").unwrap_or_default();
  if home.is_empty() {
    return;
  }
  assert_eq!(
    expand_tilde(Path::new("~/mood/reviews.db")),
    PathBuf::from(home).join("mood/reviews.db")
  );
  assert_eq!(
    expand_tilde(Path::new("/tmp/reviews.db")),
    PathBuf::from("/tmp/reviews.db")
  );
}

#[tokio::test]
async fn open_store_initialises_file_database() {
  let path = temp_path("reviews.db");
  let store = open_store(&path).await.unwrap();
  // A second start against the same file must also succeed.
  open_store(&path).await.unwrap();

  let resp = app(store, Lexicon::default())
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/reviews")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text":"Прекрасно"}"#))
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  let review: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
  assert_eq!(review["sentiment"], "positive");

  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}

#[tokio::test]
async fn open_store_fails_for_unusable_path() {
  let err = open_store(Path::new("/nonexistent/dir/reviews.db"))
    .await
    .unwrap_err();
  assert!(err.to_string().contains("failed to"), "{err:#}");
}
