use futures::future::try_join_all;
use log::{info, warn};
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::config::ScoringSettings;
use crate::domain::{self, PlayerRecord, Resolution, Roster, SeasonState};
use crate::errors::AdvisorError;
use crate::fetchers::DataProvider;
use crate::scoring::{self, Comparison};
use crate::services::defense::DefenseService;

/// Weeks a comparison looks at, anchored on the last completed week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationWindow {
    pub last_completed: u32,
    pub upcoming: u32,
    pub trailing: RangeInclusive<u32>,
    pub analyzed: RangeInclusive<u32>,
}

impl EvaluationWindow {
    pub fn new(state: &SeasonState, trailing_weeks: u32) -> Self {
        let last_completed = state.last_completed_week();
        let first_trailing = (last_completed + 1).saturating_sub(trailing_weeks.max(1)).max(1);
        Self {
            last_completed,
            upcoming: state.upcoming_week(),
            trailing: first_trailing..=last_completed,
            analyzed: 1..=last_completed,
        }
    }
}

/// Start/sit comparison of two or more players
pub struct ComparisonService {
    provider: Arc<dyn DataProvider>,
    settings: ScoringSettings,
    defense: DefenseService,
}

impl ComparisonService {
    pub fn new(provider: Arc<dyn DataProvider>, settings: ScoringSettings) -> Self {
        let defense = DefenseService::new(provider.clone(), settings.clone());
        Self {
            provider,
            settings,
            defense,
        }
    }

    pub async fn compare(&self, names: &[String]) -> Result<Comparison, AdvisorError> {
        let queries = Self::validate(names)?;

        let (roster, state) = tokio::try_join!(
            self.provider.fetch_roster(),
            self.provider.fetch_current_week(),
        )
        .map_err(AdvisorError::UpstreamUnavailable)?;

        let players = self.resolve_players(&roster, &queries)?;
        let window = EvaluationWindow::new(&state, self.settings.trailing_weeks);
        info!(
            "Comparing {} players over weeks {:?}, upcoming week {}",
            players.len(),
            window.trailing,
            window.upcoming
        );

        let analyzed: Vec<u32> = window.analyzed.clone().collect();
        let (upcoming, report, trailing) = tokio::join!(
            self.provider.fetch_week_schedule(&state.season, window.upcoming),
            self.defense.analyze_with_roster(&roster, &state.season, &analyzed),
            try_join_all(
                window
                    .trailing
                    .clone()
                    .map(|week| self.provider.fetch_week_stats(&state.season, week))
            ),
        );

        let trailing = trailing.map_err(AdvisorError::UpstreamUnavailable)?;
        let upcoming = upcoming.unwrap_or_else(|e| {
            warn!("Week {} schedule unavailable, matchups skipped: {:?}", window.upcoming, e);
            Default::default()
        });

        let scored = players
            .iter()
            .map(|player| {
                let points = scoring::recent_points(&player.player_id, &trailing);
                let matchup = scoring::resolve_matchup(player, &upcoming, &report);
                scoring::score_player(player, points, matchup, &self.settings)
            })
            .collect();

        scoring::rank(scored, &self.settings).ok_or_else(|| {
            AdvisorError::InvalidInput("Please provide at least 2 players to compare".to_string())
        })
    }

    fn validate(names: &[String]) -> Result<Vec<&str>, AdvisorError> {
        let queries: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        if queries.len() < 2 {
            return Err(AdvisorError::InvalidInput(
                "Please provide at least 2 players to compare".to_string(),
            ));
        }
        Ok(queries)
    }

    fn resolve_players<'a>(
        &self,
        roster: &'a Roster,
        queries: &[&str],
    ) -> Result<Vec<&'a PlayerRecord>, AdvisorError> {
        queries
            .iter()
            .map(|&query| match domain::resolve(roster, query, self.settings.strict_name_matching) {
                Resolution::Found(player) => Ok(player),
                Resolution::NotFound => Err(AdvisorError::PlayerNotFound(query.to_string())),
                Resolution::Ambiguous(candidates) => Err(AdvisorError::AmbiguousPlayer {
                    query: query.to_string(),
                    candidates: candidates
                        .iter()
                        .map(|p| format!("{} ({})", p.name(), p.team_label()))
                        .collect(),
                }),
            })
            .collect()
    }
}

/// Splits a comma-joined player list the way the request layer receives it
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',').map(|n| n.trim().to_string()).collect()
}
