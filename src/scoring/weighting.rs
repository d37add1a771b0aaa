use crate::config::ScoringSettings;

/// Rounds halves toward positive infinity so -2.25 becomes -2.2 and 2.25 becomes 2.3
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Recent form weighted against matchup deviation; inactive players always score 0
pub fn composite_score(
    recent_avg: f64,
    matchup_score: f64,
    active: bool,
    settings: &ScoringSettings,
) -> i64 {
    if !active {
        return 0;
    }
    let raw = recent_avg * settings.recency_weight + matchup_score * settings.matchup_weight;
    round_half_up(raw) as i64
}
