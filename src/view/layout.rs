//! Search bar, status line and key hint rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::model::{AuthState, SearchStatus, ViewSnapshot};

pub fn render_search_bar(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    let (text, style) = if snapshot.query.is_empty() {
        ("Search for an artist...", Style::default().fg(Color::DarkGray))
    } else {
        (snapshot.query.as_str(), Style::default().fg(Color::White))
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(search, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    let (status_text, status_style) = match &snapshot.status {
        SearchStatus::Idle => (
            "Type an artist name and press Enter".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        SearchStatus::Loading => ("Searching...".to_string(), Style::default().fg(Color::Yellow)),
        SearchStatus::NoMatch => (
            "No artist matched".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        SearchStatus::Empty => (
            "Artist has no albums".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        SearchStatus::Populated => (
            format!("{} albums", snapshot.albums.len()),
            Style::default().fg(Color::Green),
        ),
        SearchStatus::Failed(kind) => (
            format!("Search failed: {}", kind.label()),
            Style::default().fg(Color::Red),
        ),
    };

    let mut spans = vec![
        Span::raw(" Sort: "),
        Span::styled(
            snapshot.sort_order.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(status_text, status_style),
    ];

    match &snapshot.auth_state {
        AuthState::Pending => {
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled(
                "Authorizing...",
                Style::default().fg(Color::Yellow),
            ));
        }
        AuthState::Failed(message) => {
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled(
                format!("Auth failed: {message} - search disabled"),
                Style::default().fg(Color::Red),
            ));
        }
        AuthState::Ready => {}
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(" Enter search | Tab sort order | Up/Down scroll | Esc clear | Ctrl+Q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
