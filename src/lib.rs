//! Sokobox: a push-block puzzle engine with a terminal front end.
//!
//! The [`core::Session`] owns one level's board, player, move history and run
//! statistics. Levels come from [`level`], finished runs go to a
//! [`core::ScoreReporter`] such as [`highscore::HighscoreBoard`], and
//! renderers draw from [`core::Session::snapshot`].

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod highscore;
pub mod level;
pub mod models;

#[cfg(test)]
mod test;
