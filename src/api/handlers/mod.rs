use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, warn};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::models::ErrorBody;
use crate::config::settings::AppConfig;
use crate::errors::AdvisorError;
use crate::fetchers::DataProvider;

pub mod league;
pub mod players;

pub struct AppState {
    pub provider: Arc<dyn DataProvider>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct CompareParams {
    pub players: Option<String>,
}

#[derive(Deserialize)]
pub struct DefenseParams {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            warn!("Rejected comparison: {}", self);
            StatusCode::BAD_REQUEST
        } else {
            error!("Comparison failed upstream: {:?}", self);
            StatusCode::BAD_GATEWAY
        };
        error_response(status, self.to_string())
    }
}
