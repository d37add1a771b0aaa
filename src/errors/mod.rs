use thiserror::Error;

/// Failures a comparison request can end with
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("One or more players not found: {0}")]
    PlayerNotFound(String),

    #[error("'{query}' matches several players: {}", candidates.join(", "))]
    AmbiguousPlayer {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Failed to compare players")]
    UpstreamUnavailable(#[source] anyhow::Error),
}

impl AdvisorError {
    /// Whether the caller can fix the request, as opposed to an upstream outage
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AdvisorError::UpstreamUnavailable(_))
    }
}

/// Add context to provider fetch errors
pub fn fetch_context(what: &str, url: &str) -> String {
    format!("Failed to fetch {} from: {}", what, url)
}
