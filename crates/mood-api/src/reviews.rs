//! Handlers for `/reviews` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/reviews` | Optional `?sentiment=positive\|negative\|neutral`; empty means all |
//! | `POST` | `/reviews` | Body: `{"text":"..."}`; returns the stored review |

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
};
use chrono::Utc;
use mood_core::{
  review::{NewReview, Review, Sentiment},
  store::ReviewStore,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Sentiment label to filter on. Trimmed and lower-cased; empty or absent
  /// returns every review.
  pub sentiment: Option<String>,
}

/// Validate a raw `sentiment` query value before it reaches the store.
pub fn parse_filter(raw: Option<&str>) -> Result<Option<Sentiment>, ApiError> {
  let value = raw.unwrap_or_default().trim().to_lowercase();
  if value.is_empty() {
    return Ok(None);
  }
  Sentiment::parse(&value)
    .map(Some)
    .map_err(|e| ApiError::Validation(e.to_string()))
}

/// `GET /reviews[?sentiment=<label>]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Review>>, ApiError>
where
  S: ReviewStore,
{
  let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
  let filter = parse_filter(params.sentiment.as_deref())?;

  let conn = state.store.acquire().await.map_err(ApiError::store)?;
  let reviews = state
    .store
    .list(&conn, filter)
    .await
    .map_err(ApiError::store)?;

  tracing::debug!(
    filter = filter.map(Sentiment::as_str),
    count = reviews.len(),
    "listed reviews"
  );
  Ok(Json(reviews))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /reviews`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub text: String,
}

/// `POST /reviews` — classifies the text and returns the stored [`Review`].
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<Json<Review>, ApiError>
where
  S: ReviewStore,
{
  let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

  let text = body.text.trim();
  if text.is_empty() {
    return Err(ApiError::Validation("text must not be empty".to_owned()));
  }

  let input = NewReview {
    text:       text.to_owned(),
    sentiment:  state.lexicon.classify(text),
    created_at: Utc::now(),
  };

  let conn = state.store.acquire().await.map_err(ApiError::store)?;
  let id = state
    .store
    .insert(&conn, &input)
    .await
    .map_err(ApiError::store)?;

  tracing::info!(id, sentiment = %input.sentiment, "review recorded");
  Ok(Json(input.into_review(id)))
}
