use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::DataProvider;
use crate::api::espn_client::EspnClient;
use crate::api::sleeper_client::SleeperClient;
use crate::config::ProviderSettings;
use crate::domain::{Roster, ScheduleMap, SeasonState, WeekStats};
use crate::http::HttpClient;

/// Sleeper for players and stats, ESPN for schedules
#[derive(Debug, Clone)]
pub struct LiveProvider {
    sleeper: SleeperClient,
    espn: EspnClient,
}

impl LiveProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let http = HttpClient::from_settings(settings)?;
        Ok(Self {
            sleeper: SleeperClient::new(http.clone(), &settings.sleeper_api_url),
            espn: EspnClient::new(http, &settings.espn_api_url),
        })
    }
}

#[async_trait]
impl DataProvider for LiveProvider {
    async fn fetch_roster(&self) -> Result<Roster> {
        self.sleeper.fetch_players().await
    }

    async fn fetch_current_week(&self) -> Result<SeasonState> {
        self.sleeper.fetch_state().await
    }

    async fn fetch_week_stats(&self, season: &str, week: u32) -> Result<WeekStats> {
        self.sleeper.fetch_week_stats(season, week).await
    }

    async fn fetch_week_schedule(&self, season: &str, week: u32) -> Result<ScheduleMap> {
        self.espn.fetch_week_schedule(season, week).await
    }

    async fn fetch_scoreboard(&self) -> Result<Value> {
        self.espn.fetch_scoreboard().await
    }
}
