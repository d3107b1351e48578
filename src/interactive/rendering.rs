//! TUI rendering with ratatui
//!
//! Caption, cards, guess box and hints for the current session.

use super::app::App;
use crate::game::{Card, HINT_COUNT, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        render_no_puzzle(f, f.area());
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Cards
            Constraint::Length(3), // Guess box
            Constraint::Min(6),    // Hints
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, session, chunks[0]);
    render_cards(f, session, chunks[1]);
    render_guess(f, session, chunks[2]);
    render_hints(f, session, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, session: &Session, area: Rect) {
    let color = if session.state().won {
        Color::Green
    } else {
        Color::Cyan
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("hold'gram #{}  ", session.identifier()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(session.caption(), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .style(Style::default().fg(color))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(header, area);
}

fn card_span(card: &Card) -> Span<'static> {
    match card.visible_symbol() {
        Some(symbol) => Span::styled(
            format!(" {} ", symbol.to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("   ", Style::default().bg(Color::Red)),
    }
}

fn render_cards(f: &mut Frame, session: &Session, area: Rect) {
    let cards = session.cards();

    let mut row = Vec::with_capacity(cards.len() * 2);
    let mut numbers = Vec::with_capacity(cards.len() * 2);
    for (i, card) in cards.iter().enumerate() {
        row.push(card_span(card));
        row.push(Span::raw(" "));
        numbers.push(Span::styled(
            format!("{:^3} ", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(row), Line::from(numbers)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Cards ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_guess(f: &mut Frame, session: &Session, area: Rect) {
    let state = session.state();
    let content = if state.guess.is_empty() {
        Span::styled(
            state.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            state.guess.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let title = format!(" Guess ({} letters) ", session.expected_length());
    let guess = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(guess, area);
}

fn render_hints(f: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let level = session.state().hint;
    let percent = u16::try_from(level * 100 / HINT_COUNT).unwrap_or(100);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent)
        .label(session.hint_label());
    f.render_widget(gauge, chunks[0]);

    let hints: Vec<ListItem> = session
        .hints()
        .into_iter()
        .enumerate()
        .map(|(i, hint)| ListItem::new(format!("{}. {hint}", i + 1)))
        .collect();

    let list = List::new(hints)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title(" Hints ").borders(Borders::ALL));
    f.render_widget(list, chunks[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let share = Paragraph::new(app.share_status.label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(share, chunks[0]);

    let help = Paragraph::new("type: guess | 1-9: card | ?: hint | ⌫: del | Del: clear | ^S: share | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_no_puzzle(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from("dictionary spelunking…"),
        Line::from("no puzzle today."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" hold'gram ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}
