use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub trailing_weeks: u32,
    pub recency_weight: f64,
    pub matchup_weight: f64,
    pub min_allowed_points: f64,
    pub strict_name_matching: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            trailing_weeks: 3,
            recency_weight: 4.0,
            matchup_weight: 10.0,
            // Below this a stat line is treated as a garbage-time or backup appearance
            min_allowed_points: 2.0,
            strict_name_matching: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub sleeper_api_url: String,
    pub espn_api_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            user_agent: "StartSitAdvisor/1.0".to_string(),
            timeout_secs: 30,
            sleeper_api_url: "https://api.sleeper.app/v1".to_string(),
            espn_api_url: "https://site.api.espn.com/apis/site/v2/sports/football/nfl".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerSettings {
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub provider: ProviderSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            provider: ProviderSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Defaults overridden by process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup("SLEEPER_API_URL") {
            config.provider.sleeper_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("ESPN_API_URL") {
            config.provider.espn_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(agent) = lookup("PROVIDER_USER_AGENT") {
            config.provider.user_agent = agent;
        }
        if let Some(secs) = parse_var(&lookup, "PROVIDER_TIMEOUT_SECS") {
            config.provider.timeout_secs = secs;
        }
        if let Some(strict) = parse_var(&lookup, "STRICT_NAME_MATCHING") {
            config.scoring.strict_name_matching = strict;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.server.allowed_origins = split_list(&origins);
        }

        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
