pub mod comparator;
pub mod defense;
pub mod types;
pub mod weighting;

pub use comparator::{rank, recent_points, resolve_matchup, score_player};
pub use defense::build_report;
pub use types::*;
