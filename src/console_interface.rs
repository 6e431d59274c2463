use crate::core::{Cell, Direction, Snapshot, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let footer_height = match &state.standings {
        Some(standings) => standings.len() as u16 + 5,
        None => 3,
    };

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
            .split(f.area());

        let title = format!("Sokobox - level {}", state.level_id);
        let game_paragraph = Paragraph::new(render_game_lines(&state.snapshot))
            .block(Block::default().borders(Borders::ALL).title(title))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = format!(
            "Moves: {} | Pushes: {} | Time: {:.1}s",
            state.snapshot.stats.moves, state.snapshot.stats.pushes, state.elapsed_seconds
        );

        let (text, title) = if state.snapshot.completed {
            let mut lines = vec![format!("Level complete! Your time: {:.1}s ({status})", state.elapsed_seconds)];
            if let Some(standings) = &state.standings {
                lines.push("Top scores:".to_string());
                for (rank, entry) in standings.iter().enumerate() {
                    let marker = if entry.name == state.player_name && entry.time == state.elapsed_seconds {
                        " <"
                    } else {
                        ""
                    };
                    lines.push(format!("{}. {} {:.1}s{}", rank + 1, entry.name, entry.time, marker));
                }
            }
            lines.push("Press any key to continue, Q to quit".to_string());
            (lines.join("\n"), "Level Complete")
        } else {
            let controls = "Controls: WASD or Arrow keys to move, Z to undo, Q to quit";
            let text = match &state.last_change {
                Some(change) => format!("{status} | Last: {change:?}\n{controls}"),
                None => format!("{status}\n{controls}"),
            };
            (text, "Instructions")
        };

        let instruction_paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Level-format symbol for a cell; `Empty` renders as a space.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Floor => '-',
        Cell::Wall => '#',
        Cell::Goal => '.',
        Cell::CrateOnFloor => '$',
        Cell::CrateOnGoal => '%',
    }
}

fn player_glyph(facing: Direction) -> char {
    match facing {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty | Cell::Floor => Style::default().fg(Color::DarkGray),
        Cell::Wall => Style::default().fg(Color::White),
        Cell::Goal => Style::default().fg(Color::Yellow),
        Cell::CrateOnFloor => Style::default().fg(Color::LightRed),
        Cell::CrateOnGoal => Style::default().fg(Color::Green),
    }
}

fn render_game_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let player = &snapshot.player;
    visible_rows(snapshot)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .enumerate()
                .map(|(j, &cell)| {
                    if i as i32 == player.row && j as i32 == player.column {
                        let mut style = Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD);
                        if player.is_pushing {
                            style = style.bg(Color::Blue);
                        }
                        Span::styled(player_glyph(player.facing).to_string(), style)
                    } else {
                        Span::styled(cell_symbol(cell).to_string(), cell_style(cell))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Rows trimmed of trailing empty space, and trailing empty rows dropped.
fn visible_rows(snapshot: &Snapshot) -> Vec<&[Cell]> {
    let mut rows: Vec<&[Cell]> = snapshot
        .grid
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut len = row.iter().rposition(|&c| c != Cell::Empty).map_or(0, |p| p + 1);
            if i as i32 == snapshot.player.row {
                len = len.max(snapshot.player.column as usize + 1);
            }
            &row[..len]
        })
        .collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    rows
}

/// Board as level-format text: `@` marks the player, `+` the player on a goal.
pub fn render_game_to_string(snapshot: &Snapshot) -> String {
    let player = &snapshot.player;
    let mut result = String::new();
    for (i, row) in visible_rows(snapshot).iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            let ch = if i as i32 == player.row && j as i32 == player.column {
                if cell.is_goal() { '+' } else { '@' }
            } else {
                cell_symbol(cell)
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('u') | KeyCode::Char('U') => {
                    ConsoleInput::UserAction(UserAction::Undo)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{PlayerView, RunStats};

    fn snapshot(rows: &[&[Cell]], row: i32, column: i32) -> Snapshot {
        Snapshot {
            grid: rows.iter().map(|r| r.to_vec()).collect(),
            player: PlayerView {
                column,
                row,
                facing: Direction::Up,
                is_pushing: false,
            },
            stats: RunStats::default(),
            completed: false,
        }
    }

    #[test]
    fn render_trims_empty_space() {
        use Cell::*;
        let snapshot = snapshot(
            &[&[Wall, Floor, Goal, Empty, Empty], &[Empty, Empty, Empty, Empty, Empty]],
            0,
            1,
        );

        assert_eq!(render_game_to_string(&snapshot), "#@.\n");
    }

    #[test]
    fn render_marks_player_on_goal() {
        use Cell::*;
        let snapshot = snapshot(&[&[Wall, Goal, CrateOnGoal, Wall]], 0, 1);

        assert_eq!(render_game_to_string(&snapshot), "#+%#\n");
    }
}
