use log::{debug, info};
use std::collections::BTreeMap;

use super::types::{
    DefenseRankings, DefenseReport, DefenseStat, Difficulty, LeagueAverages, PositionDifficulty,
    WeekData,
};
use super::weighting::{mean, round_one_decimal};
use crate::config::ScoringSettings;
use crate::domain::{Position, Roster};

/// Builds per-team, per-position defense strength from a set of analyzed weeks
pub fn build_report(roster: &Roster, weeks: &[WeekData], settings: &ScoringSettings) -> DefenseReport {
    let allowed = accumulate_allowed_points(roster, weeks, settings);
    let league_average = league_averages(&allowed);
    let rankings = rank_defenses(&allowed, &league_average);

    info!(
        "Ranked {} defenses across {} positions from {} weeks",
        rankings.len(),
        league_average.len(),
        weeks.len()
    );

    DefenseReport {
        rankings,
        league_average,
    }
}

/// Sums the points every qualifying player scored against their opponent that week
pub fn accumulate_allowed_points(
    roster: &Roster,
    weeks: &[WeekData],
    settings: &ScoringSettings,
) -> DefenseStat {
    let mut allowed = DefenseStat::new();

    for week_data in weeks {
        for (player_id, line) in &week_data.stats {
            let points = line.points();
            if points < settings.min_allowed_points {
                continue;
            }

            let Some((team, position)) = qualifying_player(roster, player_id) else {
                continue;
            };

            let Some(opponent) = week_data.schedule.get(team) else {
                debug!("No opponent for {} in week {}", team, week_data.week);
                continue;
            };

            *allowed
                .entry(opponent.clone())
                .or_default()
                .entry(position.clone())
                .or_default()
                .entry(week_data.week)
                .or_default() += points;
        }
    }

    allowed
}

fn qualifying_player<'a>(roster: &'a Roster, player_id: &str) -> Option<(&'a str, &'a Position)> {
    let player = roster.get(player_id)?;
    let team = player.team.as_deref().filter(|t| !t.is_empty())?;
    let position = player.position.as_ref()?;

    if !player.active || !position.counts_against_defense() {
        return None;
    }

    Some((team, position))
}

/// Mean of every team's every weekly total, per position
pub fn league_averages(allowed: &DefenseStat) -> LeagueAverages {
    let mut pools: BTreeMap<Position, Vec<f64>> = BTreeMap::new();

    for by_position in allowed.values() {
        for (position, by_week) in by_position {
            pools
                .entry(position.clone())
                .or_default()
                .extend(by_week.values().copied());
        }
    }

    pools
        .into_iter()
        .filter_map(|(position, pool)| mean(&pool).map(|avg| (position, round_one_decimal(avg))))
        .collect()
}

pub fn rank_defenses(allowed: &DefenseStat, league_average: &LeagueAverages) -> DefenseRankings {
    let mut rankings = DefenseRankings::new();

    for (team, by_position) in allowed {
        for (position, by_week) in by_position {
            let totals: Vec<f64> = by_week.values().copied().collect();
            let Some(team_avg) = mean(&totals) else {
                continue;
            };

            let avg = round_one_decimal(team_avg);
            let baseline = league_average.get(position).copied().unwrap_or(avg);

            rankings.entry(team.clone()).or_default().insert(
                position.clone(),
                PositionDifficulty {
                    avg,
                    difficulty: Difficulty::classify(avg, baseline),
                    vs_league: round_one_decimal(avg - baseline),
                },
            );
        }
    }

    rankings
}
