use std::time::Duration;

use tracing::info;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::{
    Cell, Clock, GameChangeType, HistoryEntry, Player, PlayerView, RunStats, ScoreReporter,
    SessionState, Snapshot, SystemClock,
};
use crate::level::Level;

/// One play session over one level.
///
/// Owns the grid, the player, the move history and the run statistics. All of
/// them are replaced wholesale by [`Session::load`].
pub struct Session<R: ScoreReporter, C: Clock = SystemClock> {
    pub(crate) level_id: String,
    pub(crate) grid: BoundedGrid<Cell>,
    pub(crate) player: Player,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) stats: RunStats,
    pub(crate) state: SessionState,
    pub(crate) started_at: Duration,
    pub(crate) last_change: Option<GameChangeType>,
    pub(crate) player_name: String,
    pub(crate) reporter: R,
    pub(crate) clock: C,
}

impl<R: ScoreReporter> Session<R, SystemClock> {
    pub fn new(level: &Level, player_name: impl Into<String>, reporter: R) -> Self {
        Session::with_clock(level, player_name, reporter, SystemClock::new())
    }
}

impl<R: ScoreReporter, C: Clock> Session<R, C> {
    pub fn with_clock(level: &Level, player_name: impl Into<String>, reporter: R, clock: C) -> Self {
        let mut session = Session {
            level_id: String::new(),
            grid: level.grid.clone(),
            player: Player::default(),
            history: Vec::new(),
            stats: RunStats::default(),
            state: SessionState::Playing,
            started_at: Duration::ZERO,
            last_change: None,
            player_name: player_name.into(),
            reporter,
            clock,
        };
        session.load(level);
        session
    }

    /// Replaces the board with a freshly parsed level and restarts the run.
    pub fn load(&mut self, level: &Level) {
        self.level_id = level.id.clone();
        self.grid = level.grid.clone();
        self.player = Player {
            position: level.player,
            facing: Default::default(),
        };
        self.history.clear();
        self.stats = RunStats::default();
        self.state = SessionState::Playing;
        self.started_at = self.clock.now();
        self.last_change = None;

        info!(level = %self.level_id, goals = self.goal_count(), "level loaded");
        // a board with no open goal is already solved
        self.check_completion();
    }

    pub fn snapshot(&self) -> Snapshot {
        let grid = self.grid.rows().map(|row| row.to_vec()).collect();
        Snapshot {
            grid,
            player: PlayerView {
                column: self.player.position.j,
                row: self.player.position.i,
                facing: self.player.facing,
                is_pushing: self.last_change == Some(GameChangeType::PlayerAndBoxMove),
            },
            stats: self.stats,
            completed: self.is_completed(),
        }
    }

    pub fn level_id(&self) -> &str {
        &self.level_id
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Seconds since the level was loaded, frozen once the level is complete.
    pub fn elapsed_seconds(&self) -> f64 {
        match self.state {
            SessionState::Completed { elapsed_seconds } => elapsed_seconds,
            SessionState::Playing => self.clock.now().saturating_sub(self.started_at).as_secs_f64(),
        }
    }

    /// Number of goal markers, with or without a crate on them.
    pub fn goal_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_goal()).count()
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }
}
