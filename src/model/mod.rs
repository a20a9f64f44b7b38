//! Model module - Application state and data types
//!
//! - `types`: core type definitions (albums, sort order, status enums)
//! - `sort`: the derived release-date ordering over the album collection
//! - `catalog`: the catalog trait the controller talks to
//! - `spotify_client`: Spotify-backed catalog implementation
//! - `app_model`: main application model with state management methods

mod app_model;
mod catalog;
mod sort;
mod spotify_client;
mod types;

pub use types::{Album, ArtistMatch, AuthState, SearchErrorKind, SearchStatus, SortOrder};

pub use catalog::{Catalog, CatalogError};

pub use spotify_client::SpotifyClient;

pub use app_model::{AppModel, SearchOutcome, ViewSnapshot};
