use serde::Serialize;

use crate::domain::PlayerRecord;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListItem {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub position: Option<String>,
    pub active: bool,
}

impl From<&PlayerRecord> for PlayerListItem {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            player_id: player.player_id.clone(),
            name: player.name().to_string(),
            team: player.team_label().to_string(),
            position: player.position.as_ref().map(|p| p.to_string()),
            active: player.active,
        }
    }
}
