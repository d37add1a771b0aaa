pub mod live;
#[cfg(test)]
pub mod fixtures;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Roster, ScheduleMap, SeasonState, WeekStats};

pub use live::LiveProvider;

/// Upstream sources the scoring engine reads from
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_roster(&self) -> Result<Roster>;

    async fn fetch_current_week(&self) -> Result<SeasonState>;

    async fn fetch_week_stats(&self, season: &str, week: u32) -> Result<WeekStats>;

    /// Callers treat a failure here as an empty schedule
    async fn fetch_week_schedule(&self, season: &str, week: u32) -> Result<ScheduleMap>;

    /// Live scoreboard, passed through untouched
    async fn fetch_scoreboard(&self) -> Result<Value>;
}
