//! Controller module - Application logic and event handling
//!
//! - `input`: key event handling
//! - `search`: the dependent artist-then-albums request flow

mod input;
mod search;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::{AppModel, Catalog};

/// Shared slot for the catalog client. Empty until the background token
/// fetch completes, and stays empty for the session if it fails.
pub type CatalogSlot = Arc<Mutex<Option<Arc<dyn Catalog>>>>;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    catalog: CatalogSlot,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, catalog: CatalogSlot) -> Self {
        Self { model, catalog }
    }

    /// Submit the current query. Blank queries and a missing token are
    /// no-ops; otherwise the two-request search runs in a spawned task and
    /// reports back under the sequence number it was given here.
    pub async fn submit_search(&self) {
        let query = self.model.lock().await.query().to_string();
        if query.trim().is_empty() {
            return;
        }

        let Some(catalog) = self.catalog.lock().await.clone() else {
            tracing::debug!("no session token yet, ignoring search");
            return;
        };

        let seq = self.model.lock().await.begin_search();
        tracing::info!(seq, query = %query, "search submitted");

        let controller = self.clone();
        tokio::spawn(async move {
            controller.execute_search(seq, catalog, &query).await;
        });
    }

    pub(crate) async fn execute_search(&self, seq: u64, catalog: Arc<dyn Catalog>, query: &str) {
        let result = search::run_search(catalog.as_ref(), query).await;
        if let Err(error) = &result {
            tracing::error!(seq, error = %error, "search failed");
        }
        self.model.lock().await.apply_search_result(seq, result);
    }
}
