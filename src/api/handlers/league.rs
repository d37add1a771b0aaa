use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use super::{AppState, DefenseParams, error_response};
use crate::services::defense::DefenseService;

/// Defense strength rankings for inspection; defaults to every completed week
pub async fn get_defense_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DefenseParams>,
) -> Response {
    let season = match state.provider.fetch_current_week().await {
        Ok(season) => season,
        Err(e) => {
            error!("Defense rankings failed: {:?}", e);
            return error_response(StatusCode::BAD_GATEWAY, "Failed to analyze defenses");
        }
    };

    let Some(range) = season.completed_weeks(params.from, params.to) else {
        let last = season.last_completed_week();
        return error_response(
            StatusCode::BAD_REQUEST,
            format!(
                "Invalid week range {}-{}",
                params.from.unwrap_or(1),
                params.to.unwrap_or(last)
            ),
        );
    };

    let weeks: Vec<u32> = range.collect();
    let service = DefenseService::new(state.provider.clone(), state.config.scoring.clone());
    Json(service.analyze(&season.season, &weeks).await).into_response()
}

pub async fn get_scores(State(state): State<Arc<AppState>>) -> Response {
    match state.provider.fetch_scoreboard().await {
        Ok(scoreboard) => Json(scoreboard).into_response(),
        Err(e) => {
            error!("Scoreboard fetch failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch scores")
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::handlers::AppState;
    use crate::api::routes::create_router;
    use crate::config::settings::AppConfig;
    use crate::domain::Position;
    use crate::fetchers::fixtures::{StaticProvider, player};

    async fn get(provider: StaticProvider, uri: &str) -> (StatusCode, Value) {
        let app = create_router(Arc::new(AppState {
            provider: Arc::new(provider),
            config: AppConfig::new(),
        }));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn provider() -> StaticProvider {
        StaticProvider::new(4)
            .with_player(player("te1", "Trey McBride", "ARI", Position::TE))
            .with_game(1, "ARI", "SEA")
            .with_game(3, "ARI", "SF")
            .with_points(1, "te1", 15.0)
            .with_points(3, "te1", 9.0)
    }

    #[tokio::test]
    async fn test_defense_rankings_default_to_completed_weeks() {
        let (status, body) = get(provider(), "/api/defense").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["leagueAverage"]["TE"], 12.0);
        assert_eq!(body["rankings"]["SEA"]["TE"]["difficulty"], "Favorable");
        assert_eq!(body["rankings"]["SF"]["TE"]["vsLeague"], -3.0);
    }

    #[tokio::test]
    async fn test_defense_rankings_respect_range() {
        let (status, body) = get(provider(), "/api/defense?from=2&to=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["leagueAverage"]["TE"], 9.0);
        assert!(body["rankings"].get("SEA").is_none());
    }

    #[tokio::test]
    async fn test_defense_rankings_reject_inverted_range() {
        let (status, body) = get(provider(), "/api/defense?from=5&to=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid week range 5-2");
    }

    #[tokio::test]
    async fn test_defense_rankings_reject_weeks_not_yet_played() {
        let provider = Arc::new(provider());
        let app = create_router(Arc::new(AppState {
            provider: provider.clone(),
            config: AppConfig::new(),
        }));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/defense?from=1&to=50000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid week range 1-50000");
        // only the season state lookup
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_defense_rankings_reject_future_upper_bound() {
        let (status, body) = get(provider(), "/api/defense?to=4").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid week range 1-4");
    }

    #[tokio::test]
    async fn test_scores_pass_through() {
        let (status, body) = get(provider(), "/api/scores").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["events"].is_array());

        let (status, body) = get(provider().with_roster_down(), "/api/scores").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch scores");
    }
}
