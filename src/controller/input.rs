//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.model.lock().await.set_should_quit();
            }
            KeyCode::Enter => {
                self.submit_search().await;
            }
            KeyCode::Esc => {
                self.model.lock().await.clear_query();
            }
            KeyCode::Backspace => {
                self.model.lock().await.backspace_query();
            }
            KeyCode::Tab => {
                self.model.lock().await.toggle_sort_order();
            }
            KeyCode::Up => {
                self.model.lock().await.scroll_up();
            }
            KeyCode::Down => {
                self.model.lock().await.scroll_down();
            }
            KeyCode::Char(c) => {
                self.model.lock().await.push_query_char(c);
            }
            _ => {}
        }

        Ok(())
    }
}
