//! Deck share endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use flipdeck_core::parser;

/// POST /deck
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateDeckRequest>, JsonRejection>,
) -> Result<Json<CreateDeckResponse>> {
    let Json(payload) = payload.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(e.body_text()),
        _ => ApiError::BadRequest(e.body_text()),
    })?;

    let text = payload
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing or empty text field".to_string()))?;

    if text.len() > state.config.max_deck_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "deck is {} bytes, limit is {}",
            text.len(),
            state.config.max_deck_bytes
        )));
    }

    let bytes = text.len();
    let id = state.store.put(text).await;
    tracing::info!(%id, bytes, "deck stored");

    Ok(Json(CreateDeckResponse { id }))
}

/// GET /deck/:id
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeckResponse>> {
    let deck = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    Ok(Json(DeckResponse {
        text: deck.text,
        created_at: deck.created_at,
    }))
}

/// GET /deck/:id/preview
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeckPreview>> {
    let deck = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    let groups = parser::parse(&deck.text);
    Ok(Json(DeckPreview::from_groups(&groups)))
}
