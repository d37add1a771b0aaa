use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use crate::domain::{ScheduleMap, ScoreboardResponse};
use crate::errors::fetch_context;
use crate::http::HttpClient;

/// ESPN regular season, as used by the scoreboard `seasontype` parameter
const REGULAR_SEASON: u8 = 2;

/// ESPN public scoreboard client
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: HttpClient,
    base_url: String,
}

impl EspnClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current scoreboard exactly as ESPN returns it
    pub async fn fetch_scoreboard(&self) -> Result<Value> {
        let url = format!("{}/scoreboard", self.base_url);
        self.http
            .get_json(&url)
            .await
            .with_context(|| fetch_context("scoreboard", &url))
    }

    /// Who plays whom in a given regular season week
    pub async fn fetch_week_schedule(&self, season: &str, week: u32) -> Result<ScheduleMap> {
        let url = self.build_week_scoreboard_url(season, week);
        let scoreboard: ScoreboardResponse = self
            .http
            .get_json(&url)
            .await
            .with_context(|| fetch_context("schedule", &url))?;

        let schedule = scoreboard.into_schedule();
        info!("Fetched {} games for {} week {}", schedule.len() / 2, season, week);
        Ok(schedule)
    }

    fn build_week_scoreboard_url(&self, season: &str, week: u32) -> String {
        format!(
            "{}/scoreboard?seasontype={}&week={}&dates={}",
            self.base_url, REGULAR_SEASON, week, season
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_week_schedule() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/scoreboard")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("seasontype".into(), "2".into()),
                Matcher::UrlEncoded("week".into(), "9".into()),
                Matcher::UrlEncoded("dates".into(), "2025".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"events": [{"competitions": [{"competitors": [
                    {"homeAway": "home", "team": {"abbreviation": "KC"}},
                    {"homeAway": "away", "team": {"abbreviation": "BUF"}}
                ]}]}]}"#,
            )
            .create_async()
            .await;

        let client = EspnClient::new(HttpClient::new("test-agent", 5).unwrap(), &server.url());
        let schedule = client.fetch_week_schedule("2025", 9).await.unwrap();

        assert_eq!(schedule["KC"], "BUF");
        assert_eq!(schedule["BUF"], "KC");
    }

    #[tokio::test]
    async fn test_fetch_scoreboard_passes_json_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/scoreboard")
            .with_status(200)
            .with_body(r#"{"leagues": [{"abbreviation": "NFL"}], "events": []}"#)
            .create_async()
            .await;

        let client = EspnClient::new(HttpClient::new("test-agent", 5).unwrap(), &server.url());
        let scoreboard = client.fetch_scoreboard().await.unwrap();

        assert_eq!(scoreboard["leagues"][0]["abbreviation"], "NFL");
    }
}
