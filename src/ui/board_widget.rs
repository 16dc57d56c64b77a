use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::Palette;
use crate::game::{Board, Cell, Position};

const PIECE: &str = " \u{25cf} ";
const WINNING_PIECE: &str = " \u{25c6} ";
const EMPTY: &str = " . ";

/// Board lines with column numbers, a frame, and the selection marker.
/// Cells in `highlight` are drawn as the winning line.
pub fn board_lines(
    board: &Board,
    palette: &Palette,
    selected_column: Option<usize>,
    highlight: &[Position],
) -> Vec<Line<'static>> {
    let width = board.width();
    let inner = "\u{2550}".repeat(width * 3 + 1);
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  \u{2554}{inner}\u{2557}")));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  \u{2551}")];
        for (col, &cell) in cells.iter().enumerate() {
            row_spans.push(cell_span(cell, palette, highlight.contains(&Position::new(row, col))));
        }
        row_spans.push(Span::raw(" \u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  \u{255a}{inner}\u{255d}")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn cell_span(cell: Cell, palette: &Palette, winning: bool) -> Span<'static> {
    match cell.player() {
        None => Span::styled(EMPTY, Style::default().fg(Color::DarkGray)),
        Some(player) if winning => Span::styled(
            WINNING_PIECE,
            Style::default()
                .fg(palette.color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Some(player) => Span::styled(PIECE, Style::default().fg(palette.color(player))),
    }
}
