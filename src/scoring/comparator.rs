use super::types::{Comparison, DataStatus, DefenseReport, Matchup, ScoredPlayer};
use super::weighting::{composite_score, mean, round_one_decimal};
use crate::config::ScoringSettings;
use crate::domain::{PlayerRecord, ScheduleMap, WeekStats};

/// Points per played week across the trailing window; empty weeks are dropped, not zero-padded
pub fn recent_points(player_id: &str, trailing: &[WeekStats]) -> Vec<f64> {
    trailing
        .iter()
        .filter_map(|week| week.get(player_id))
        .map(|line| line.points())
        .filter(|&pts| pts > 0.0)
        .collect()
}

pub fn resolve_matchup(
    player: &PlayerRecord,
    upcoming: &ScheduleMap,
    report: &DefenseReport,
) -> Matchup {
    let found = player
        .team
        .as_deref()
        .and_then(|team| upcoming.get(team))
        .zip(player.position.as_ref())
        .and_then(|(opponent, position)| {
            report
                .lookup(opponent, position)
                .map(|strength| (opponent, strength))
        });

    match found {
        Some((opponent, strength)) => Matchup {
            description: format!(
                "vs {} ({}, {} pts allowed)",
                opponent, strength.difficulty, strength.avg
            ),
            score: strength.vs_league,
        },
        None => Matchup::unavailable(),
    }
}

pub fn score_player(
    player: &PlayerRecord,
    weekly_points: Vec<f64>,
    matchup: Matchup,
    settings: &ScoringSettings,
) -> ScoredPlayer {
    let recent_avg = mean(&weekly_points).unwrap_or(0.0);
    let score = composite_score(recent_avg, matchup.score, player.active, settings);

    ScoredPlayer {
        name: player.name().to_string(),
        position: player
            .position
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default(),
        team: player.team_label().to_string(),
        score,
        recent_avg: round_one_decimal(recent_avg),
        games_played: weekly_points.len(),
        data_status: DataStatus::from_weeks_recorded(weekly_points.len(), settings.trailing_weeks),
        weekly_points,
        matchup: matchup.description,
        matchup_score: round_one_decimal(matchup.score),
    }
}

/// Orders by score, highest first. The sort is stable, so ties keep the input order.
pub fn rank(mut players: Vec<ScoredPlayer>, settings: &ScoringSettings) -> Option<Comparison> {
    players.sort_by(|a, b| b.score.cmp(&a.score));

    let top = players.first()?;
    let reason = format!(
        "Averaged {} fantasy points over last {} weeks",
        top.recent_avg, settings.trailing_weeks
    );

    Some(Comparison {
        recommendation: top.name.clone(),
        reason,
        comparison: players,
    })
}
