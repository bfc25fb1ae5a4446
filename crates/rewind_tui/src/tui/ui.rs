//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_core::{Board, GameView, Mark, Position, Square, WinningLine};

use super::app::App;

const KEY_HELP: &str = "arrows/1-9 play  [ ] history  Home/End  s sort  r reset  q quit";

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.store().view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(12),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_board(frame, body[0], &view, app.board_cursor());
    draw_moves(frame, body[1], &view);

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            view.status.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(app.message()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let block = Block::default()
        .title(format!(" Move #{} ", view.cursor))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(board_area);

    let line = view.status.winning_line();
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ])
            .split(*row_area);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cols[col * 2], &view.board, pos, cursor, line);
            }
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    cursor: Position,
    line: Option<&WinningLine>,
) {
    let (symbol, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if line.is_some_and(|l| l.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(cell, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.description(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Sort: {} ", view.sort_order.label()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
