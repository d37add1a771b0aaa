use anyhow::{Context, Result};
use log::info;

use crate::domain::{Roster, SeasonState, WeekStats};
use crate::errors::fetch_context;
use crate::http::HttpClient;

/// Sleeper API client: roster, league state and weekly stats
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: HttpClient,
    base_url: String,
}

impl SleeperClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every NFL player Sleeper knows about
    pub async fn fetch_players(&self) -> Result<Roster> {
        let url = self.build_players_url();
        let roster: Roster = self
            .http
            .get_json(&url)
            .await
            .with_context(|| fetch_context("roster", &url))?;

        info!("Fetched {} players from Sleeper", roster.len());
        Ok(roster)
    }

    /// Fetch the current season and week
    pub async fn fetch_state(&self) -> Result<SeasonState> {
        let url = self.build_state_url();
        self.http
            .get_json(&url)
            .await
            .with_context(|| fetch_context("NFL state", &url))
    }

    /// Fetch per-player regular season stats for one week
    pub async fn fetch_week_stats(&self, season: &str, week: u32) -> Result<WeekStats> {
        let url = self.build_week_stats_url(season, week);
        let stats: WeekStats = self
            .http
            .get_json(&url)
            .await
            .with_context(|| fetch_context("weekly stats", &url))?;

        info!("Fetched {} stat lines for {} week {}", stats.len(), season, week);
        Ok(stats)
    }

    // --- Helper Methods ---

    fn build_players_url(&self) -> String {
        format!("{}/players/nfl", self.base_url)
    }

    fn build_state_url(&self) -> String {
        format!("{}/state/nfl", self.base_url)
    }

    fn build_week_stats_url(&self, season: &str, week: u32) -> String {
        format!("{}/stats/nfl/regular/{}/{}", self.base_url, season, week)
    }
}
