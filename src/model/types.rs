//! Core type definitions for the application

/// A single album-type release, as returned by the catalog.
///
/// The release date is kept as the raw string the API returned; the catalog
/// delivers variable precision (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) and the
/// sort view parses it on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub cover_url: Option<String>,
    pub spotify_url: String,
}

/// The artist resolved from a free-text query. Only lives long enough to
/// issue the follow-up albums request.
#[derive(Clone, Debug)]
pub struct ArtistMatch {
    pub id: String,
    pub name: String,
}

/// Release-date ordering applied to the displayed album list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
        }
    }
}

/// Lifecycle of the most recent search invocation, rendered in the status
/// line so failures and empty results are distinguishable from each other.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    /// The artist search returned no items
    NoMatch,
    /// The artist resolved but has no album-type releases
    Empty,
    Populated,
    Failed(SearchErrorKind),
}

/// Coarse failure classification surfaced to the view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// Network, non-2xx or response-decoding failure from the API client
    Api,
    /// The API returned something the client could not interpret
    MalformedResponse,
}

impl SearchErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            SearchErrorKind::Api => "request failed",
            SearchErrorKind::MalformedResponse => "unexpected response",
        }
    }
}

/// Startup credential state. The token is requested once per session in a
/// background task; there is no refresh and no recovery short of a restart.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Pending,
    Ready,
    Failed(String),
}
