use serde::{Deserialize, Serialize};

/// The tag of a single grid cell. Exactly one applies to each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the playable area.
    #[default]
    Empty,
    Floor,
    Wall,
    Goal,
    CrateOnFloor,
    CrateOnGoal,
}

/// Grid coordinate; `i` is the row, `j` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Player {
    pub position: Vec2,
    pub facing: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrateMove {
    pub from: Vec2,
    pub to: Vec2,
}

/// One executed move, enough to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub player: Player,
    pub pushed: Option<CrateMove>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunStats {
    pub moves: u32,
    pub pushes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Playing,
    Completed { elapsed_seconds: f64 },
}

/// Outcome of a single command, as reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
    Blocked,
    Undone,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameUpdate {
    pub change: GameChangeType,
    pub completed_now: bool,
}

/// Finished-run record handed to the score reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub level: String,
    pub time: f64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub column: i32,
    pub row: i32,
    pub facing: Direction,
    pub is_pushing: bool,
}

/// Read-only view of the board handed to renderers after every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub grid: Vec<Vec<Cell>>,
    pub player: PlayerView,
    pub stats: RunStats,
    pub completed: bool,
}
