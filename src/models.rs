use crate::core::{GameChangeType, Snapshot};
use crate::highscore::HighscoreEntry;

pub struct GameRenderState {
    pub snapshot: Snapshot,
    pub level_id: String,
    pub player_name: String,
    pub elapsed_seconds: f64,
    pub last_change: Option<GameChangeType>,
    /// Present once the level is complete and the score was recorded.
    pub standings: Option<Vec<HighscoreEntry>>,
}
