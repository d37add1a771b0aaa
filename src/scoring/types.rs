use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{Position, ScheduleMap, WeekStats};

pub type Week = u32;

/// Team -> position -> week -> total PPR points that defense allowed
pub type DefenseStat = BTreeMap<String, BTreeMap<Position, BTreeMap<Week, f64>>>;

pub type DefenseRankings = BTreeMap<String, BTreeMap<Position, PositionDifficulty>>;
pub type LeagueAverages = BTreeMap<Position, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Tough,
    Favorable,
}

impl Difficulty {
    /// Ties with the league average go to the offense
    pub fn classify(avg: f64, league_average: f64) -> Self {
        if avg < league_average {
            Difficulty::Tough
        } else {
            Difficulty::Favorable
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Tough => "Tough",
            Difficulty::Favorable => "Favorable",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDifficulty {
    pub avg: f64,
    pub difficulty: Difficulty,
    pub vs_league: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefenseReport {
    pub rankings: DefenseRankings,
    pub league_average: LeagueAverages,
}

impl DefenseReport {
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty() && self.league_average.is_empty()
    }

    pub fn lookup(&self, team: &str, position: &Position) -> Option<&PositionDifficulty> {
        self.rankings.get(team)?.get(position)
    }
}

/// Stats and schedule fetched for one analyzed week
#[derive(Debug, Clone, Default)]
pub struct WeekData {
    pub week: Week,
    pub stats: WeekStats,
    pub schedule: ScheduleMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataStatus {
    #[serde(rename = "Limited data - stats may be updating")]
    Limited,
    #[serde(rename = "Complete data")]
    Complete,
}

impl DataStatus {
    pub fn from_weeks_recorded(recorded: usize, window: u32) -> Self {
        if recorded < window as usize {
            DataStatus::Limited
        } else {
            DataStatus::Complete
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub description: String,
    pub score: f64,
}

impl Matchup {
    pub fn unavailable() -> Self {
        Self {
            description: "No matchup data".to_string(),
            score: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlayer {
    pub name: String,
    pub position: String,
    pub team: String,
    pub score: i64,
    pub recent_avg: f64,
    pub games_played: usize,
    pub weekly_points: Vec<f64>,
    pub matchup: String,
    pub matchup_score: f64,
    pub data_status: DataStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub recommendation: String,
    pub reason: String,
    pub comparison: Vec<ScoredPlayer>,
}
