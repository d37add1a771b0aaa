use futures::future::join_all;
use log::{info, warn};
use std::sync::Arc;

use crate::config::ScoringSettings;
use crate::domain::Roster;
use crate::fetchers::DataProvider;
use crate::scoring::{self, DefenseReport, WeekData};

/// Defense strength over a range of weeks. Never fails: missing data shrinks the report.
#[derive(Clone)]
pub struct DefenseService {
    provider: Arc<dyn DataProvider>,
    settings: ScoringSettings,
}

impl DefenseService {
    pub fn new(provider: Arc<dyn DataProvider>, settings: ScoringSettings) -> Self {
        Self { provider, settings }
    }

    pub async fn analyze(&self, season: &str, weeks: &[u32]) -> DefenseReport {
        info!("Analyzing defenses for {} weeks {:?}", season, weeks);

        let (roster, week_data) =
            tokio::join!(self.provider.fetch_roster(), self.fetch_weeks(season, weeks));

        match roster {
            Ok(roster) => scoring::build_report(&roster, &week_data, &self.settings),
            Err(e) => {
                warn!("Defense analysis skipped, roster unavailable: {:?}", e);
                DefenseReport::default()
            }
        }
    }

    /// Same analysis against a roster the caller already holds
    pub async fn analyze_with_roster(
        &self,
        roster: &Roster,
        season: &str,
        weeks: &[u32],
    ) -> DefenseReport {
        info!("Analyzing defenses for {} weeks {:?}", season, weeks);

        let week_data = self.fetch_weeks(season, weeks).await;
        scoring::build_report(roster, &week_data, &self.settings)
    }

    async fn fetch_weeks(&self, season: &str, weeks: &[u32]) -> Vec<WeekData> {
        join_all(weeks.iter().map(|&week| self.fetch_week(season, week))).await
    }

    async fn fetch_week(&self, season: &str, week: u32) -> WeekData {
        let (stats, schedule) = tokio::join!(
            self.provider.fetch_week_stats(season, week),
            self.provider.fetch_week_schedule(season, week),
        );

        let stats = stats.unwrap_or_else(|e| {
            warn!("Week {} stats unavailable, treating as empty: {:?}", week, e);
            Default::default()
        });
        let schedule = schedule.unwrap_or_else(|e| {
            warn!("Week {} schedule unavailable, treating as empty: {:?}", week, e);
            Default::default()
        });

        WeekData {
            week,
            stats,
            schedule,
        }
    }
}
