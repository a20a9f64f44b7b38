//! Catalog abstraction over the music API
//!
//! The controller only needs two operations from the catalog: resolve a
//! free-text query to an artist, and list that artist's albums. Keeping them
//! behind a trait lets the search orchestration be exercised against a
//! scripted catalog in tests.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Album, ArtistMatch, SearchErrorKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("spotify api error: {0}")]
    Api(#[from] rspotify::ClientError),
    #[error("invalid artist id: {0}")]
    InvalidId(#[from] rspotify::model::IdError),
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl CatalogError {
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            CatalogError::Api(_) => SearchErrorKind::Api,
            CatalogError::InvalidId(_) | CatalogError::MalformedResponse(_) => {
                SearchErrorKind::MalformedResponse
            }
        }
    }
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Artist-type search for the raw query string. Returns the first item
    /// of the match list, or `None` when nothing matched.
    async fn find_artist(&self, query: &str) -> Result<Option<ArtistMatch>, CatalogError>;

    /// Album-type releases for an artist, first page only.
    async fn artist_albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError>;
}
