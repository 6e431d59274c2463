// Sokobox in the terminal, drawn with ratatui
// Controls: W/A/S/D or arrow keys (immediate response), Z to undo. Q to quit.
// Tiles: '#' wall, '-' floor, '.' goal, '$' crate, '%' crate on goal; the player is drawn facing its direction.

use clap::{Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokobox::config::{AppConfig, ConfigSource};
use sokobox::console_interface::ConsoleInput::*;
use sokobox::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use sokobox::core::{DEFAULT_PLAYER_NAME, GameChangeType, Session};
use sokobox::highscore::{HighscoreBoard, HighscoreEntry};
use sokobox::level::LevelDirectory;
use sokobox::models::GameRenderState;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sokobox")]
#[command(about = "Sokobox - push every crate onto a goal", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when it does not exist
    #[arg(long, value_name = "FILE", default_value = "sokobox.toml")]
    config: PathBuf,

    /// Directory holding the numbered level files (overrides the config)
    #[arg(long, value_name = "DIR")]
    levels_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, advancing to the next level after each win
    Play {
        /// Level number to start from
        #[arg(long)]
        level: Option<u32>,

        /// Display name recorded with highscores
        #[arg(long)]
        name: Option<String>,
    },
    /// Print a level's best times
    Scores {
        #[arg(long, default_value_t = 1)]
        level: u32,
    },
}

type SokoboxSession = Session<HighscoreBoard>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (mut config, config_source) = AppConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.levels_dir {
        config.levels.dir = dir;
    }
    init_tracing(&config.log_file)?;
    if config_source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(config = %cli.config.display(), levels = %config.levels.dir.display(), "starting");

    let board = HighscoreBoard::open(&config.highscores.path, config.highscores.top_n)?;

    match cli.command.unwrap_or(Commands::Play { level: None, name: None }) {
        Commands::Scores { level } => {
            print_scores(&board, level);
            Ok(())
        }
        Commands::Play { level, name } => {
            let levels = LevelDirectory::with_grid_size(&config.levels.dir, config.grid.height, config.grid.width);
            let level_number = level.unwrap_or(config.levels.start_level);
            let first_level = levels.load(level_number)?;
            let player_name = resolve_player_name(name.or(config.player.name.clone()))?;

            let mut session = Session::new(&first_level, player_name, board);
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&levels, &mut session, level_number, &mut terminal);
            cleanup_terminal()?;
            if let Err(err) = &result {
                error!(error = %err, "interactive session failed");
            }
            result
        }
    }
}

fn init_tracing(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn print_scores(board: &HighscoreBoard, level: u32) {
    let standings = board.standings(&level.to_string());
    if standings.is_empty() {
        println!("No scores for level {level} yet.");
        return;
    }
    println!("Top scores for level {level}:");
    for (rank, entry) in standings.iter().enumerate() {
        println!("{:>2}. {:<20} {:>8.1}s", rank + 1, entry.name, entry.time);
    }
}

fn resolve_player_name(configured: Option<String>) -> io::Result<String> {
    if let Some(name) = configured.filter(|n| !n.trim().is_empty()) {
        return Ok(name);
    }
    print!("Enter your nickname for the highscore: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();
    Ok(if name.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        name.to_string()
    })
}

fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &SokoboxSession,
    last_change: Option<GameChangeType>,
    standings: Option<Vec<HighscoreEntry>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = GameRenderState {
        snapshot: session.snapshot(),
        level_id: session.level_id().to_string(),
        player_name: session.player_name().to_string(),
        elapsed_seconds: session.elapsed_seconds(),
        last_change,
        standings,
    };
    render_game(terminal, &state)
}

fn run_interactive(
    levels: &LevelDirectory,
    session: &mut SokoboxSession,
    mut level_number: u32,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_change = None;
    render_session(terminal, session, last_change, None)?;

    loop {
        match handle_input()? {
            Quit => break,
            UserAction(user_action) => {
                let update = session.step(user_action);
                last_change = Some(update.change);
                // also catches a level that was already solved when loaded
                if !session.is_completed() {
                    render_session(terminal, session, last_change, None)?;
                    continue;
                }

                let standings = session.reporter_mut().take_last_standings();
                render_session(terminal, session, last_change, standings)?;

                // Keep showing the win screen until user inputs
                loop {
                    match handle_input()? {
                        Timeout => {}
                        Quit => return Ok(()),
                        _ => break,
                    }
                }

                level_number = levels.next_after(level_number);
                let level = levels.load(level_number)?;
                session.load(&level);
                last_change = None;
                render_session(terminal, session, last_change, None)?;
            }
            Timeout => {
                // Redraw so the running time stays current
                render_session(terminal, session, last_change, None)?;
            }
            Unknown => {}
        }
    }

    Ok(())
}
