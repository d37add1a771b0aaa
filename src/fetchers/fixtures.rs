use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::DataProvider;
use crate::domain::{PlayerRecord, Position, Roster, ScheduleMap, SeasonState, StatLine, WeekStats};

/// In-memory provider for service and route tests
#[derive(Default)]
pub struct StaticProvider {
    players: Vec<PlayerRecord>,
    current_week: u32,
    stats: HashMap<u32, WeekStats>,
    schedules: HashMap<u32, ScheduleMap>,
    failing_stats: HashSet<u32>,
    failing_schedules: HashSet<u32>,
    roster_down: bool,
    calls: AtomicUsize,
}

pub fn player(id: &str, name: &str, team: &str, position: Position) -> PlayerRecord {
    PlayerRecord {
        player_id: id.to_string(),
        full_name: Some(name.to_string()),
        team: Some(team.to_string()),
        position: Some(position),
        active: true,
    }
}

impl StaticProvider {
    pub fn new(current_week: u32) -> Self {
        Self {
            current_week,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: PlayerRecord) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_points(mut self, week: u32, player_id: &str, pts: f64) -> Self {
        self.stats
            .entry(week)
            .or_default()
            .insert(player_id.to_string(), StatLine { pts_ppr: Some(pts) });
        self
    }

    pub fn with_game(mut self, week: u32, home: &str, away: &str) -> Self {
        let schedule = self.schedules.entry(week).or_default();
        schedule.insert(home.to_string(), away.to_string());
        schedule.insert(away.to_string(), home.to_string());
        self
    }

    pub fn with_failing_stats(mut self, week: u32) -> Self {
        self.failing_stats.insert(week);
        self
    }

    pub fn with_failing_schedule(mut self, week: u32) -> Self {
        self.failing_schedules.insert(week);
        self
    }

    pub fn with_roster_down(mut self) -> Self {
        self.roster_down = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn fetch_roster(&self) -> Result<Roster> {
        self.record_call();
        if self.roster_down {
            bail!("roster provider unavailable");
        }
        Ok(Roster::new(self.players.clone()))
    }

    async fn fetch_current_week(&self) -> Result<SeasonState> {
        self.record_call();
        Ok(SeasonState {
            season: "2025".to_string(),
            week: self.current_week,
        })
    }

    async fn fetch_week_stats(&self, _season: &str, week: u32) -> Result<WeekStats> {
        self.record_call();
        if self.failing_stats.contains(&week) {
            bail!("stats for week {} unavailable", week);
        }
        Ok(self.stats.get(&week).cloned().unwrap_or_default())
    }

    async fn fetch_week_schedule(&self, _season: &str, week: u32) -> Result<ScheduleMap> {
        self.record_call();
        if self.failing_schedules.contains(&week) {
            bail!("schedule for week {} unavailable", week);
        }
        Ok(self.schedules.get(&week).cloned().unwrap_or_default())
    }

    async fn fetch_scoreboard(&self) -> Result<Value> {
        self.record_call();
        if self.roster_down {
            bail!("scoreboard unavailable");
        }
        Ok(json!({ "events": [] }))
    }
}
