//! The dependent two-request search flow
//!
//! A search resolves the query to an artist first; the albums request is
//! only issued once that resolution comes back with a match. The raw query
//! string goes to the API as-is, with nothing beyond transport URL-encoding.

use crate::model::{Catalog, CatalogError, SearchOutcome};

pub async fn run_search(catalog: &dyn Catalog, query: &str) -> Result<SearchOutcome, CatalogError> {
    let Some(artist) = catalog.find_artist(query).await? else {
        tracing::info!(query, "no artist matched");
        return Ok(SearchOutcome::NoMatch);
    };

    tracing::debug!(artist_id = %artist.id, artist_name = %artist.name, "artist resolved");
    let albums = catalog.artist_albums(&artist.id).await?;
    tracing::info!(artist_id = %artist.id, count = albums.len(), "albums fetched");

    Ok(SearchOutcome::Albums(albums))
}
