use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::{AppConfig, ServerSettings};
use crate::fetchers::LiveProvider;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let provider = LiveProvider::new(&self.config.provider)?;

        let state = Arc::new(AppState {
            provider: Arc::new(provider),
            config: self.config.clone(),
        });

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(&self.config.server)?),
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

fn build_cors(settings: &ServerSettings) -> Result<CorsLayer> {
    if settings.allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = settings
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("CORS restricted to {:?}", settings.allowed_origins);
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_credentials(true))
}
