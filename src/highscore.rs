use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DEFAULT_TOP_N, ScoreReporter, ScoreSubmission};
use crate::error::HighscoreError;

/// A stored finished run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HighscoreRecord {
    pub level: String,
    pub name: String,
    pub time: f64,
}

/// One line of a level's standings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HighscoreEntry {
    pub name: String,
    pub time: f64,
}

/// Per-level best times, optionally persisted to a JSON file.
#[derive(Debug)]
pub struct HighscoreBoard {
    path: Option<PathBuf>,
    top_n: usize,
    records: Vec<HighscoreRecord>,
    last_standings: Option<Vec<HighscoreEntry>>,
}

impl HighscoreBoard {
    pub fn in_memory(top_n: usize) -> Self {
        HighscoreBoard {
            path: None,
            top_n,
            records: Vec::new(),
            last_standings: None,
        }
    }

    /// Opens the store at `path`. A missing file is an empty board.
    pub fn open(path: impl AsRef<Path>, top_n: usize) -> Result<Self, HighscoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| HighscoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(HighscoreError::Store { path, source }),
        };
        debug!(path = %path.display(), "opened highscore store");

        Ok(HighscoreBoard {
            path: Some(path),
            top_n,
            records,
            last_standings: None,
        })
    }

    /// Records a finished run and returns the level's updated standings.
    pub fn submit(&mut self, submission: &ScoreSubmission) -> Result<Vec<HighscoreEntry>, HighscoreError> {
        validate(submission)?;

        self.records.push(HighscoreRecord {
            level: submission.level.clone(),
            name: submission.name.clone(),
            time: submission.time,
        });
        if let Err(err) = self.save() {
            self.records.pop();
            return Err(err);
        }
        info!(level = %submission.level, name = %submission.name, time = submission.time, "highscore recorded");

        let standings = self.standings(&submission.level);
        self.last_standings = Some(standings.clone());
        Ok(standings)
    }

    /// The fastest runs on `level`, at most `top_n`, ascending by time.
    pub fn standings(&self, level: &str) -> Vec<HighscoreEntry> {
        let mut entries: Vec<HighscoreEntry> = self
            .records
            .iter()
            .filter(|r| r.level == level)
            .map(|r| HighscoreEntry {
                name: r.name.clone(),
                time: r.time,
            })
            .collect();
        entries.sort_by(|a, b| a.time.total_cmp(&b.time));
        entries.truncate(self.top_n);
        entries
    }

    /// Standings returned by the most recent successful submission.
    pub fn last_standings(&self) -> Option<&[HighscoreEntry]> {
        self.last_standings.as_deref()
    }

    /// Like [`HighscoreBoard::last_standings`], but clears them so a later
    /// failed submission cannot show stale results.
    pub fn take_last_standings(&mut self) -> Option<Vec<HighscoreEntry>> {
        self.last_standings.take()
    }

    pub fn save(&self) -> Result<(), HighscoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json).map_err(|source| HighscoreError::Store {
            path: path.clone(),
            source,
        })
    }
}

impl Default for HighscoreBoard {
    fn default() -> Self {
        HighscoreBoard::in_memory(DEFAULT_TOP_N)
    }
}

impl ScoreReporter for HighscoreBoard {
    type Error = HighscoreError;

    fn report(&mut self, submission: &ScoreSubmission) -> Result<(), HighscoreError> {
        self.submit(submission).map(|_| ())
    }
}

fn validate(submission: &ScoreSubmission) -> Result<(), HighscoreError> {
    if submission.level.trim().is_empty() {
        return Err(HighscoreError::MissingField("level"));
    }
    if submission.name.trim().is_empty() {
        return Err(HighscoreError::MissingField("name"));
    }
    if !submission.time.is_finite() || submission.time <= 0.0 {
        return Err(HighscoreError::InvalidTime(submission.time));
    }
    Ok(())
}
