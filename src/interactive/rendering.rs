//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the Numberle game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Color as Feedback, EQUATION_LENGTH, MAX_ATTEMPTS};
use crate::output::formatters::attempts_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const ORANGE: Color = Color::Rgb(255, 135, 0);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn feedback_style(color: Feedback) -> Style {
    let bg = match color {
        Feedback::Green => Color::Green,
        Feedback::Orange => ORANGE,
        Feedback::Grey => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn cell(symbol: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {symbol} "), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBERLE - Guess the Equation")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let empty = Style::default().fg(Color::DarkGray);
    let typing = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::default()];
    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some((guess, feedback)) = history.get(row) {
            guess
                .text()
                .chars()
                .zip(feedback.colors())
                .map(|(symbol, &color)| cell(symbol, feedback_style(color)))
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let mut typed: Vec<char> = app.input_buffer.chars().collect();
            typed.resize(EQUATION_LENGTH, '_');
            typed.into_iter().map(|symbol| cell(symbol, typing)).collect()
        } else {
            (0..EQUATION_LENGTH).map(|_| cell('·', empty)).collect()
        };

        let mut line = Vec::with_capacity(spans.len() * 2);
        for span in spans {
            line.push(span);
            line.push(Span::raw(" "));
        }
        lines.push(Line::from(line));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.button_colors();
    let unseen = Style::default().fg(Color::White).bg(Color::Black);

    let key_row = |symbols: &[u8]| -> Line<'static> {
        let mut spans = Vec::with_capacity(symbols.len() * 2);
        for &symbol in symbols {
            let style = keyboard.get(symbol).map_or(unseen, feedback_style);
            spans.push(cell(char::from(symbol), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let (digits, signs) = ALPHABET.split_at(10);
    let content = vec![Line::default(), key_row(digits), Line::default(), key_row(signs)];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Equation (0-9 + - * / =) | Enter: Submit | Backspace: Delete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts: {} {}",
        app.session.remaining_attempts(),
        attempts_bar(app.session.remaining_attempts(), MAX_ATTEMPTS)
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;
    use crate::game::{GameConfig, GameSession};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol().to_string())
            .collect()
    }

    #[test]
    fn renders_played_guess_and_input() {
        let corpus = vec![Equation::new("1+2+3=6").unwrap()];
        let mut app = App::new(GameSession::new(corpus, GameConfig::fixed()).unwrap());
        for ch in "12+3=15".chars() {
            app.push_symbol(ch);
        }
        app.submit();
        for ch in "1+2".chars() {
            app.push_symbol(ch);
        }

        let screen = render(&app);
        assert!(screen.contains("NUMBERLE"));
        assert!(screen.contains(" 1   2   +   3   =   1   5 "));
        assert!(screen.contains(" 1   +   2   _ "));
        assert!(screen.contains("Attempts: 5"));
    }

    #[test]
    fn feedback_styles_use_distinct_backgrounds() {
        assert_eq!(feedback_style(Feedback::Green).bg, Some(Color::Green));
        assert_eq!(feedback_style(Feedback::Orange).bg, Some(ORANGE));
        assert_eq!(feedback_style(Feedback::Grey).bg, Some(Color::DarkGray));
    }
}
