use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

/// Team label used when a player has no NFL team
pub const FREE_AGENT: &str = "Free Agent";

/// Offensive or special-teams roster position
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    Other(String),
}

impl Position {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "TE" => Position::TE,
            "K" => Position::K,
            "DEF" => Position::DEF,
            other => Position::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::Other(raw) => raw,
        }
    }

    /// Kickers and team defenses never count toward points allowed
    pub fn counts_against_defense(&self) -> bool {
        !matches!(self, Position::K | Position::DEF)
    }
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        Position::parse(&raw)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player snapshot from the Sleeper players endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default, deserialize_with = "bool_or_null")]
    pub active: bool,
}

fn bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl PlayerRecord {
    pub fn name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or(FREE_AGENT)
    }

    pub fn is_rostered(&self) -> bool {
        self.team.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Rostered and flagged active, the only players a comparison may pick
    pub fn is_eligible(&self) -> bool {
        self.active && self.is_rostered()
    }
}

/// All known players, in the order the provider returned them
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        let index = players
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.player_id.clone(), idx))
            .collect();
        Self { players, index }
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.index.get(player_id).map(|&idx| &self.players[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RosterVisitor)
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of player id to player record")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut players = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, mut record)) = access.next_entry::<String, PlayerRecord>()? {
            record.player_id = id;
            players.push(record);
        }
        Ok(Roster::new(players))
    }
}

/// One player's line for one week; only PPR points matter here
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatLine {
    #[serde(default)]
    pub pts_ppr: Option<f64>,
}

impl StatLine {
    pub fn points(&self) -> f64 {
        self.pts_ppr.unwrap_or(0.0)
    }
}

pub type WeekStats = HashMap<String, StatLine>;

/// Team abbreviation to opponent abbreviation for one week, both directions present
pub type ScheduleMap = HashMap<String, String>;

/// NFL state response from Sleeper
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonState {
    pub season: String,
    pub week: u32,
}

impl SeasonState {
    pub fn last_completed_week(&self) -> u32 {
        self.week.saturating_sub(1).max(1)
    }

    /// Week whose games are still to be played; Sleeper reports 0 before week 1
    pub fn upcoming_week(&self) -> u32 {
        self.week.max(1)
    }

    /// Requested analysis range, bounded by the completed weeks.
    ///
    /// Defaults to `1..=last_completed_week()`. `None` for an empty range or one
    /// reaching past the last completed week.
    pub fn completed_weeks(&self, from: Option<u32>, to: Option<u32>) -> Option<RangeInclusive<u32>> {
        let last = self.last_completed_week();
        let from = from.unwrap_or(1);
        let to = to.unwrap_or(last);
        (from >= 1 && from <= to && to <= last).then_some(from..=to)
    }
}

// --- ESPN scoreboard ---

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardEvent {
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Deserialize)]
pub struct Competitor {
    pub team: CompetitorTeam,
}

#[derive(Debug, Deserialize)]
pub struct CompetitorTeam {
    pub abbreviation: String,
}

impl ScoreboardResponse {
    pub fn into_schedule(self) -> ScheduleMap {
        let mut schedule = ScheduleMap::new();
        for competition in self.events.into_iter().flat_map(|e| e.competitions) {
            if let [home, away] = competition.competitors.as_slice() {
                let home = normalize_team(&home.team.abbreviation);
                let away = normalize_team(&away.team.abbreviation);
                schedule.insert(home.clone(), away.clone());
                schedule.insert(away, home);
            }
        }
        schedule
    }
}

/// ESPN and Sleeper disagree on a few abbreviations
pub fn normalize_team(abbreviation: &str) -> String {
    match abbreviation.to_uppercase().as_str() {
        "WSH" => "WAS".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_keeps_provider_order_and_ids() {
        let json = r#"{
            "4046": {"full_name": "Patrick Mahomes", "team": "KC", "position": "QB", "active": true},
            "KC": {"team": "KC", "position": "DEF", "active": true},
            "1234": {"full_name": "Retired Guy", "team": null, "position": "WR", "active": null}
        }"#;

        let roster: Roster = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = roster.iter().map(|p| p.player_id.as_str()).collect();

        assert_eq!(ids, vec!["4046", "KC", "1234"]);
        assert_eq!(roster.get("4046").unwrap().position, Some(Position::QB));
        assert_eq!(roster.get("KC").unwrap().position, Some(Position::DEF));
        assert!(!roster.get("1234").unwrap().active);
        assert_eq!(roster.get("1234").unwrap().team_label(), FREE_AGENT);
    }

    #[test]
    fn test_unknown_positions_are_preserved() {
        let position: Position = serde_json::from_str(r#""LB""#).unwrap();
        assert_eq!(position, Position::Other("LB".to_string()));
        assert_eq!(serde_json::to_string(&position).unwrap(), r#""LB""#);
        assert!(position.counts_against_defense());
        assert!(!Position::K.counts_against_defense());
        assert!(!Position::DEF.counts_against_defense());
    }

    #[test]
    fn test_stat_line_without_ppr_is_zero() {
        let stats: WeekStats =
            serde_json::from_str(r#"{"1": {"pts_ppr": 12.5, "rec": 4}, "2": {"gp": 1}}"#).unwrap();
        assert_eq!(stats["1"].points(), 12.5);
        assert_eq!(stats["2"].points(), 0.0);
    }

    #[test]
    fn test_last_completed_week_is_floored() {
        let state = |week| SeasonState { season: "2025".into(), week };
        assert_eq!(state(7).last_completed_week(), 6);
        assert_eq!(state(1).last_completed_week(), 1);
        assert_eq!(state(0).last_completed_week(), 1);
    }

    #[test]
    fn test_upcoming_week_before_kickoff() {
        let state = |week| SeasonState { season: "2025".into(), week };
        assert_eq!(state(0).upcoming_week(), 1);
        assert_eq!(state(1).upcoming_week(), 1);
        assert_eq!(state(9).upcoming_week(), 9);
    }

    #[test]
    fn test_completed_weeks_stay_within_season_progress() {
        let state = SeasonState { season: "2025".into(), week: 5 };
        assert_eq!(state.completed_weeks(None, None), Some(1..=4));
        assert_eq!(state.completed_weeks(Some(2), Some(3)), Some(2..=3));
        assert_eq!(state.completed_weeks(Some(4), None), Some(4..=4));
        assert_eq!(state.completed_weeks(Some(0), Some(3)), None);
        assert_eq!(state.completed_weeks(Some(3), Some(2)), None);
        assert_eq!(state.completed_weeks(None, Some(5)), None);
        assert_eq!(state.completed_weeks(Some(1), Some(4_000_000_000)), None);
    }

    #[test]
    fn test_scoreboard_becomes_symmetric_schedule() {
        let json = r#"{"events": [
            {"competitions": [{"competitors": [
                {"homeAway": "home", "team": {"abbreviation": "NE"}},
                {"homeAway": "away", "team": {"abbreviation": "WSH"}}
            ]}]},
            {"competitions": [{"competitors": [
                {"team": {"abbreviation": "KC"}}
            ]}]}
        ]}"#;

        let scoreboard: ScoreboardResponse = serde_json::from_str(json).unwrap();
        let schedule = scoreboard.into_schedule();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule["NE"], "WAS");
        assert_eq!(schedule["WAS"], "NE");
        assert!(!schedule.contains_key("KC"));
    }
}
