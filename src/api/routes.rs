use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    league::{get_defense_rankings, get_scores},
    players::{compare_players, search_players},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/compare", get(compare_players))
        .route("/api/player/:name", get(search_players))
        .route("/api/defense", get(get_defense_rankings))
        .route("/api/scores", get(get_scores))
        .with_state(state)
}
