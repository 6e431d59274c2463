use tracing::{debug, info, warn};

use crate::core::{
    Cell, Clock, CrateMove, Direction, GameChangeType, GameUpdate, HistoryEntry,
    ScoreReporter, ScoreSubmission, Session, SessionState, UserAction, Vec2,
};

const IGNORED: GameUpdate = GameUpdate {
    change: GameChangeType::Ignored,
    completed_now: false,
};

impl<R: ScoreReporter, C: Clock> Session<R, C> {
    pub fn step(&mut self, action: UserAction) -> GameUpdate {
        match action {
            UserAction::Move(direction) => self.move_player(direction),
            UserAction::Undo => self.undo(),
        }
    }

    /// Walks or pushes one cell in `direction`. Blocked moves only turn the
    /// player to face `direction`.
    pub fn move_player(&mut self, direction: Direction) -> GameUpdate {
        if self.is_completed() {
            return IGNORED;
        }

        let before = self.player;
        let target = before.position + direction;
        let beyond = target + direction;
        let target_cell = self.cell_at(&target);

        self.player.facing = direction;

        let change = if target_cell.is_walkable() {
            self.history.push(HistoryEntry { player: before, pushed: None });
            self.player.position = target;
            self.stats.moves += 1;
            GameChangeType::PlayerMove
        } else if target_cell.is_crate() && self.cell_at(&beyond).is_walkable() {
            self.history.push(HistoryEntry {
                player: before,
                pushed: Some(CrateMove { from: target, to: beyond }),
            });
            self.grid[&target] = target_cell.without_crate();
            self.grid[&beyond] = self.grid[&beyond].with_crate();
            self.player.position = target;
            self.stats.moves += 1;
            self.stats.pushes += 1;
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::Blocked
        };

        self.last_change = Some(change);
        debug!(?direction, ?change, moves = self.stats.moves, pushes = self.stats.pushes, "move");

        let completed_now = self.check_completion();
        GameUpdate { change, completed_now }
    }

    /// Reverses the most recent executed move. No-op on an empty history.
    pub fn undo(&mut self) -> GameUpdate {
        if self.is_completed() {
            return IGNORED;
        }
        let Some(entry) = self.history.pop() else {
            return IGNORED;
        };

        self.player = entry.player;
        if let Some(CrateMove { from, to }) = entry.pushed {
            self.grid[&to] = self.grid[&to].without_crate();
            self.grid[&from] = self.grid[&from].with_crate();
            self.stats.pushes -= 1;
        }
        self.stats.moves -= 1;
        self.last_change = Some(GameChangeType::Undone);

        debug!(moves = self.stats.moves, pushes = self.stats.pushes, "undo");
        GameUpdate {
            change: GameChangeType::Undone,
            completed_now: false,
        }
    }

    pub fn is_won(&self) -> bool {
        !self.grid.iter().any(|&c| c == Cell::Goal)
    }

    pub(crate) fn cell_at(&self, pos: &Vec2) -> Cell {
        self.grid.get(pos).copied().unwrap_or(Cell::Empty)
    }

    pub(super) fn check_completion(&mut self) -> bool {
        if !self.is_won() {
            return false;
        }

        let elapsed_seconds = self.clock.now().saturating_sub(self.started_at).as_secs_f64();
        self.state = SessionState::Completed { elapsed_seconds };
        info!(
            level = %self.level_id,
            elapsed_seconds,
            moves = self.stats.moves,
            pushes = self.stats.pushes,
            "level completed"
        );

        let submission = ScoreSubmission {
            level: self.level_id.clone(),
            time: elapsed_seconds,
            name: self.player_name.clone(),
        };
        if let Err(err) = self.reporter.report(&submission) {
            warn!(error = %err, level = %submission.level, "failed to report score");
        }
        true
    }
}
