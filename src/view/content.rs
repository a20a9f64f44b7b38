//! Album card grid rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::model::{Album, SearchStatus, ViewSnapshot};

const CARD_WIDTH: u16 = 38;
const CARD_HEIGHT: u16 = 6;

pub fn render_album_grid(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if snapshot.albums.is_empty() {
        render_placeholder(frame, area, snapshot);
        return;
    }

    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = snapshot.albums.len().div_ceil(columns);
    let first_row = snapshot.scroll.min(total_rows.saturating_sub(1));

    for (screen_row, grid_row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let y = area.y + screen_row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }

        for column in 0..columns {
            let Some(album) = snapshot.albums.get(grid_row * columns + column) else {
                break;
            };
            let card_area = Rect {
                x: area.x + column as u16 * CARD_WIDTH,
                y,
                width: CARD_WIDTH.min(area.width),
                height,
            };
            render_album_card(frame, card_area, album);
        }
    }
}

fn render_album_card(frame: &mut Frame, area: Rect, album: &Album) {
    let released = if album.release_date.is_empty() {
        "Released: unknown".to_string()
    } else {
        format!("Released: {}", album.release_date)
    };

    let mut lines = vec![Line::from(Span::styled(
        released,
        Style::default().fg(Color::White),
    ))];
    if let Some(cover_url) = &album.cover_url {
        lines.push(Line::from(Span::styled(
            cover_url.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        album.spotify_url.clone(),
        Style::default().fg(Color::Cyan),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", album.name))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(card, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    let message = match &snapshot.status {
        SearchStatus::Idle => "Search for an artist to browse their albums",
        SearchStatus::Loading => "Searching...",
        SearchStatus::NoMatch => "No artist matched that search",
        SearchStatus::Empty => "That artist has no album releases",
        SearchStatus::Populated => "",
        SearchStatus::Failed(_) => "Search failed, see the status line",
    };

    let placeholder = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Albums "));
    frame.render_widget(placeholder, area);
}
