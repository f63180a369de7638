use crate::config::PlayersConfig;
use crate::game::{Board, GameEngine, GameStatus, Player, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = engine.board().height() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, players, chunks[0]);
    render_board(
        frame,
        engine.board(),
        engine.winning_line(),
        (!engine.is_over()).then_some(selected_column),
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, players: &PlayersConfig, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.active_player();
            (
                format!("Current Player: {}", players.name(player)),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("Game Over  |  {} wins", players.name(player)),
            player_color(player),
        ),
        GameStatus::Tied => ("Game Over  |  Draw".to_string(), Color::White),
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
    board: &Board,
    winning_line: Option<&WinningLine>,
    selected_column: Option<usize>,
    area: Rect,
) {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
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

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, cell) in cells.iter().enumerate() {
            let span = match cell.occupant() {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning_line.is_some_and(|line| line.contains(row, col)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter/1-9: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
