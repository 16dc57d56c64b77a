use crate::game::{GameResult, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;
use super::Palette;

/// What the game screen shows besides the game itself.
pub struct ViewState<'a> {
    pub selected_column: usize,
    pub message: Option<&'a str>,
    pub computer_note: Option<&'a str>,
}

pub fn render(frame: &mut Frame, game_state: &GameState, palette: &Palette, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_area_height(game_state.height())), // Board
            Constraint::Length(4), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, palette, chunks[0]);
    render_board(frame, game_state, palette, view.selected_column, chunks[1]);
    render_message(frame, view, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Rows needed for the board: the cells plus column labels, frame, and marker.
fn board_area_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

fn render_header(frame: &mut Frame, game_state: &GameState, palette: &Palette, area: Rect) {
    let (status, color) = match game_state.result() {
        GameResult::InProgress => {
            let player = game_state.current_player();
            (format!("Current Player: {player}"), palette.color(player))
        }
        GameResult::Won(player) => (format!("Game Over: {player} won!"), palette.color(player)),
        GameResult::Tie => ("Game Over: Tie!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    palette: &Palette,
    selected_column: usize,
    area: Rect,
) {
    let winning = game_state
        .result()
        .winner()
        .and_then(|player| game_state.winning_cells(player));
    let highlight = winning.as_ref().map_or(&[][..], |cells| &cells[..]);

    // Hide the selector once no more moves are accepted
    let selected = (!game_state.is_terminal()).then_some(selected_column);

    let lines = board_lines(game_state.board(), palette, selected, highlight);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, view: &ViewState, area: Rect) {
    let mut lines = vec![Line::styled(
        view.message.unwrap_or("").to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(note) = view.computer_note {
        lines.push(Line::styled(
            format!("Computer: {note}"),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }

    let msg_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "\u{2190}/\u{2192}: Move  |  1-9: Column  |  Enter: Drop  |  R: New Game  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
