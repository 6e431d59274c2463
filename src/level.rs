//! Level text parsing and the numbered level directory.
//!
//! Symbols: `#` wall, `.` goal, `$` crate, `%` crate on goal, `-` floor,
//! `@` player standing on floor. Anything else, and the remainder of a short
//! line, is empty space outside the playable area.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::core::{BoundedGrid, Cell, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, Vec2};
use crate::error::LevelError;

/// A validated level, ready to be loaded into a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub id: String,
    pub grid: BoundedGrid<Cell>,
    pub player: Vec2,
}

impl Level {
    /// Parses into the default 30x30 grid.
    pub fn parse(id: impl Into<String>, text: &str) -> Result<Level, LevelError> {
        Level::parse_sized(id, text, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH)
    }

    pub fn parse_sized(
        id: impl Into<String>,
        text: &str,
        rows: i32,
        columns: i32,
    ) -> Result<Level, LevelError> {
        if rows < 1 || columns < 1 {
            return Err(LevelError::InvalidGridSize { rows, columns });
        }
        let mut grid = BoundedGrid::new_with_size(rows, columns, Cell::Empty);
        let mut player: Option<Vec2> = None;

        let line_count = text.lines().count();
        if line_count > rows as usize {
            return Err(LevelError::TooTall { rows: line_count, max: rows as usize });
        }

        for (i, line) in text.lines().enumerate() {
            let width = line.chars().count();
            if width > columns as usize {
                return Err(LevelError::TooWide { row: i, columns: width, max: columns as usize });
            }

            for (j, ch) in line.chars().enumerate() {
                let pos = Vec2 { i: i as i32, j: j as i32 };
                grid[&pos] = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Goal,
                    '$' => Cell::CrateOnFloor,
                    '%' => Cell::CrateOnGoal,
                    '-' => Cell::Floor,
                    '@' => {
                        if player.is_some() {
                            return Err(LevelError::MultiplePlayers { row: i, column: j });
                        }
                        player = Some(pos);
                        Cell::Floor
                    }
                    _ => Cell::Empty,
                };
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        Ok(Level {
            id: id.into(),
            grid,
            player,
        })
    }
}

/// Levels stored one per file as `<root>/<n>.lvl`, numbered from 1.
#[derive(Clone, Debug)]
pub struct LevelDirectory {
    root: PathBuf,
    rows: i32,
    columns: i32,
}

impl LevelDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LevelDirectory::with_grid_size(root, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH)
    }

    pub fn with_grid_size(root: impl Into<PathBuf>, rows: i32, columns: i32) -> Self {
        LevelDirectory {
            root: root.into(),
            rows,
            columns,
        }
    }

    pub fn path_of(&self, number: u32) -> PathBuf {
        self.root.join(format!("{number}.lvl"))
    }

    pub fn exists(&self, number: u32) -> bool {
        self.path_of(number).is_file()
    }

    pub fn load(&self, number: u32) -> Result<Level, LevelError> {
        let path = self.path_of(number);
        let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LevelError::NotFound(number.to_string()),
            _ => LevelError::Read { path: path.clone(), source },
        })?;
        debug!(path = %path.display(), "read level file");
        Level::parse_sized(number.to_string(), &text, self.rows, self.columns)
    }

    /// The level that follows `number`, wrapping to level 1 after the last one.
    pub fn next_after(&self, number: u32) -> u32 {
        let next = number + 1;
        if self.exists(next) { next } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn test_parse_maps_every_symbol() {
        let level = Level::parse_sized("t", "#.$%-@ x", 1, 8).unwrap();
        let row: Vec<Cell> = level.grid.rows().next().unwrap().to_vec();

        assert_eq!(
            row,
            vec![
                Cell::Wall,
                Cell::Goal,
                Cell::CrateOnFloor,
                Cell::CrateOnGoal,
                Cell::Floor,
                Cell::Floor,
                Cell::Empty,
                Cell::Empty,
            ]
        );
        assert_eq!(level.player, Vec2 { i: 0, j: 5 });
    }

    #[test]
    fn test_short_lines_leave_rest_of_row_empty() {
        let level = Level::parse("t", "#####\n#@#\n#####").unwrap();

        assert_eq!(level.grid.size().rows(), 30);
        assert_eq!(level.grid.size().columns(), 30);
        assert_eq!(level.grid[&Vec2 { i: 1, j: 2 }], Cell::Wall);
        assert_eq!(level.grid[&Vec2 { i: 1, j: 3 }], Cell::Empty);
        assert_eq!(level.grid[&Vec2 { i: 3, j: 0 }], Cell::Empty);
    }

    #[test]
    fn test_crlf_line_endings_are_ignored() {
        let level = Level::parse_sized("t", "###\r\n#@#\r\n###\r\n", 3, 3).unwrap();
        assert_eq!(level.player, Vec2 { i: 1, j: 1 });
        assert_eq!(level.grid[&Vec2 { i: 1, j: 2 }], Cell::Wall);
    }

    #[test]
    fn test_missing_player_is_rejected() {
        let err = Level::parse("t", "#####\n#-$.#\n#####").unwrap_err();
        assert!(matches!(err, LevelError::MissingPlayer));
    }

    #[test]
    fn test_second_player_is_rejected() {
        let err = Level::parse("t", "#@-@#").unwrap_err();
        assert!(matches!(err, LevelError::MultiplePlayers { row: 0, column: 3 }));
    }

    #[test]
    fn test_oversized_text_is_rejected() {
        let err = Level::parse_sized("t", "#@--#", 1, 4).unwrap_err();
        assert!(matches!(err, LevelError::TooWide { row: 0, columns: 5, max: 4 }));

        let err = Level::parse_sized("t", "#@#\n###", 1, 3).unwrap_err();
        assert!(matches!(err, LevelError::TooTall { rows: 2, max: 1 }));
    }

    #[test]
    fn test_non_positive_grid_size_is_rejected() {
        let err = Level::parse_sized("t", "#@#", 1, -3).unwrap_err();
        assert!(matches!(err, LevelError::InvalidGridSize { rows: 1, columns: -3 }));

        let err = Level::parse_sized("t", "", 0, 5).unwrap_err();
        assert!(matches!(err, LevelError::InvalidGridSize { rows: 0, columns: 5 }));
    }

    #[test]
    fn test_directory_loads_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fs::File::create(dir.path().join("1.lvl")).unwrap();
        write!(f, "#####\n#@$.#\n#####").unwrap();

        let levels = LevelDirectory::new(dir.path());
        let level = levels.load(1).unwrap();

        assert_eq!(level.id, "1");
        assert_eq!(level.player, Vec2 { i: 1, j: 1 });
        assert!(matches!(levels.load(2), Err(LevelError::NotFound(id)) if id == "2"));
    }

    #[test]
    fn test_shipped_levels_are_playable() {
        let levels = LevelDirectory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("levels"));

        for number in 1..=3 {
            let level = levels.load(number).unwrap();
            let crates = level.grid.iter().filter(|c| c.is_crate()).count();
            let goals = level.grid.iter().filter(|c| c.is_goal()).count();
            assert!(goals > 0, "level {number} has no goals");
            assert_eq!(crates, goals, "level {number} crates and goals differ");
        }
        assert_eq!(levels.next_after(3), 1);
    }

    #[test]
    fn test_next_after_wraps_past_last_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.lvl"), "#@#").unwrap();
        fs::write(dir.path().join("2.lvl"), "#@#").unwrap();

        let levels = LevelDirectory::new(dir.path());

        assert_eq!(levels.next_after(1), 2);
        assert_eq!(levels.next_after(2), 1);
    }
}
