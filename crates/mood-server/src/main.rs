//! mood-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! review store, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p mood-server -- --config config.toml
//! MOOD_PORT=8080 cargo run -p mood-server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use mood_server::{ServerConfig, app, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Review sentiment server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  // Refuse to serve without a usable schema.
  let store = match open_store(&server_cfg.database_path).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = ?e, "store initialisation failed");
      return Err(e);
    }
  };

  let app = app(store, server_cfg.lexicon.clone());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
