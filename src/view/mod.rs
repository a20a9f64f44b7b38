//! View module - UI rendering
//!
//! All rendering happens against an immutable [`ViewSnapshot`] cloned out of
//! the model once per frame.
//!
//! - `layout`: search bar, status line, key hints
//! - `content`: the album card grid and its empty-state messages

mod content;
mod layout;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::ViewSnapshot;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &ViewSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Length(1), // Sort order + search status
                Constraint::Min(0),    // Album grid
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], snapshot);
        layout::render_status_line(frame, chunks[1], snapshot);
        content::render_album_grid(frame, chunks[2], snapshot);
        layout::render_key_hints(frame, chunks[3]);
    }
}
