use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use super::{AppState, CompareParams, error_response};
use crate::api::models::PlayerListItem;
use crate::domain;
use crate::services::comparison::{ComparisonService, split_names};

pub async fn compare_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Response {
    let Some(raw) = params.players.filter(|p| !p.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Please provide player names");
    };

    let service = ComparisonService::new(state.provider.clone(), state.config.scoring.clone());
    match service.compare(&split_names(&raw)).await {
        Ok(comparison) => Json(comparison).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn search_players(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    let roster = match state.provider.fetch_roster().await {
        Ok(roster) => roster,
        Err(e) => {
            error!("Player search failed: {:?}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch player data");
        }
    };

    let matches: Vec<PlayerListItem> = domain::search(&roster, &name)
        .into_iter()
        .map(PlayerListItem::from)
        .collect();

    if matches.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "Player not found");
    }
    Json(matches).into_response()
}
