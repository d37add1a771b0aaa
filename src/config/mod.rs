pub mod settings;

pub use settings::{AppConfig, ProviderSettings, ScoringSettings, ServerSettings};
