mod bounded_grid;
mod bounds;
mod clock;
mod consts;
mod model_helpers;
mod models;
mod reporter;
mod session;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use clock::{Clock, FakeClock, SystemClock};
pub use consts::*;
pub use models::{
    Cell, CrateMove, Direction, GameChangeType, GameUpdate, HistoryEntry, Player, PlayerView,
    RunStats, ScoreSubmission, SessionState, Snapshot, UserAction, Vec2,
};
pub use reporter::{NullReporter, ScoreReporter};
pub use session::Session;
