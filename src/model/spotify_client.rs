//! Spotify implementation of the catalog trait

use async_trait::async_trait;
use rspotify::{
    ClientCredsSpotify,
    model::{AlbumType, ArtistId, Country, Market, SearchResult, SearchType, SimplifiedAlbum},
    prelude::*,
};

use super::catalog::{Catalog, CatalogError};
use super::types::{Album, ArtistMatch};

/// Fixed page size for the albums request; there is no follow-up paging.
const ALBUM_PAGE_LIMIT: u32 = 50;

/// Catalog client backed by the client-credentials Spotify API
pub struct SpotifyClient {
    client: ClientCredsSpotify,
}

impl SpotifyClient {
    pub fn new(client: ClientCredsSpotify) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn find_artist(&self, query: &str) -> Result<Option<ArtistMatch>, CatalogError> {
        tracing::debug!(query, "API: artist search");
        let result = self
            .client
            .search(query, SearchType::Artist, None, None, None, None)
            .await?;

        match result {
            SearchResult::Artists(page) => Ok(page.items.into_iter().next().map(|artist| {
                ArtistMatch {
                    id: artist.id.id().to_string(),
                    name: artist.name,
                }
            })),
            other => Err(CatalogError::MalformedResponse(format!(
                "artist search returned a non-artist page: {other:?}"
            ))),
        }
    }

    async fn artist_albums(&self, artist_id: &str) -> Result<Vec<Album>, CatalogError> {
        tracing::debug!(artist_id, "API: artist albums");
        let id = ArtistId::from_id(artist_id.to_owned())?;
        let page = self
            .client
            .artist_albums_manual(
                id,
                Some(AlbumType::Album),
                Some(Market::Country(Country::UnitedStates)),
                Some(ALBUM_PAGE_LIMIT),
                None,
            )
            .await?;

        tracing::debug!(count = page.items.len(), "API: artist albums fetched");
        Ok(page.items.into_iter().map(album_from_api).collect())
    }
}

fn album_from_api(album: SimplifiedAlbum) -> Album {
    Album {
        id: album.id.map(|id| id.id().to_string()).unwrap_or_default(),
        name: album.name,
        release_date: album.release_date.unwrap_or_default(),
        cover_url: album.images.first().map(|image| image.url.clone()),
        spotify_url: album
            .external_urls
            .get("spotify")
            .cloned()
            .unwrap_or_default(),
    }
}
