mod auth;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::Mutex;

use controller::{AppController, CatalogSlot};
use model::{AppModel, Catalog, SpotifyClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Discography Browser Starting ===");

    let model = Arc::new(Mutex::new(AppModel::new()));
    let catalog: CatalogSlot = Arc::new(Mutex::new(None));

    // Acquire the session token in the background so the TUI comes up
    // immediately; until it lands, searches are no-ops.
    let catalog_init = catalog.clone();
    let model_for_init = model.clone();
    tokio::spawn(async move {
        let token_result = match auth::credentials_from_env() {
            Ok(credentials) => auth::request_session_token(credentials).await,
            Err(e) => Err(e),
        };
        match token_result {
            Ok(client) => {
                *catalog_init.lock().await =
                    Some(Arc::new(SpotifyClient::new(client)) as Arc<dyn Catalog>);
                model_for_init.lock().await.set_auth_ready();
            }
            Err(e) => {
                tracing::error!(error = %e, "authentication failed, search disabled for this session");
                model_for_init.lock().await.set_auth_failed(e.to_string());
            }
        }
    });

    let controller = AppController::new(model.clone(), catalog);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Discography Browser shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let snapshot = model.lock().await.view_snapshot();

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        // Short poll keeps the UI responsive to background search results
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if model.lock().await.should_quit() {
            break;
        }
    }

    Ok(())
}
