//! Main application model with state management

use super::catalog::CatalogError;
use super::sort::sorted_albums;
use super::types::{Album, AuthState, SearchStatus, SortOrder};

/// What a completed search produced. Failures travel separately as
/// `CatalogError`.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// The artist search matched nothing
    NoMatch,
    /// The resolved artist's albums, in API order
    Albums(Vec<Album>),
}

/// Everything the view renders, cloned out of the model once per frame.
/// `albums` is already the derived, sorted view.
#[derive(Clone, Debug)]
pub struct ViewSnapshot {
    pub query: String,
    pub sort_order: SortOrder,
    pub status: SearchStatus,
    pub auth_state: AuthState,
    pub albums: Vec<Album>,
    pub scroll: usize,
}

/// All session state: query input, the album collection from the last
/// applied search, sort order, and the bookkeeping for in-flight searches.
///
/// Albums are stored in the order the API returned them; ordering for
/// display is always derived in `view_snapshot`, never applied in place.
pub struct AppModel {
    query: String,
    sort_order: SortOrder,
    albums: Vec<Album>,
    status: SearchStatus,
    auth_state: AuthState,
    /// Monotonically increasing id of the latest submitted search. Results
    /// carrying an older id lost the race and are dropped.
    search_seq: u64,
    scroll: usize,
    should_quit: bool,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            sort_order: SortOrder::default(),
            albums: Vec::new(),
            status: SearchStatus::default(),
            auth_state: AuthState::default(),
            search_seq: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    // ========================================================================
    // Query input
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace_query(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    // ========================================================================
    // Sort order and scrolling
    // ========================================================================

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.albums().len() {
            self.scroll += 1;
        }
    }

    // ========================================================================
    // Search lifecycle
    // ========================================================================

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Register a new in-flight search and return its sequence number.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.status = SearchStatus::Loading;
        self.search_seq
    }

    /// Apply a completed search. Results from a superseded invocation are
    /// discarded so overlapping searches cannot clobber a newer result. A
    /// fresh album list replaces the collection wholesale; no-match and
    /// failure outcomes keep the previous albums on screen.
    pub fn apply_search_result(&mut self, seq: u64, result: Result<SearchOutcome, CatalogError>) {
        if seq != self.search_seq {
            tracing::debug!(seq, latest = self.search_seq, "discarding stale search result");
            return;
        }

        match result {
            Ok(SearchOutcome::Albums(albums)) => {
                self.status = if albums.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Populated
                };
                self.albums = albums;
                self.scroll = 0;
            }
            Ok(SearchOutcome::NoMatch) => {
                self.status = SearchStatus::NoMatch;
            }
            Err(error) => {
                self.status = SearchStatus::Failed(error.kind());
            }
        }
    }

    // ========================================================================
    // Auth and lifecycle flags
    // ========================================================================

    pub fn auth_state(&self) -> &AuthState {
        &self.auth_state
    }

    pub fn set_auth_ready(&mut self) {
        self.auth_state = AuthState::Ready;
    }

    pub fn set_auth_failed(&mut self, message: String) {
        self.auth_state = AuthState::Failed(message);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view_snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            query: self.query.clone(),
            sort_order: self.sort_order,
            status: self.status().clone(),
            auth_state: self.auth_state.clone(),
            albums: sorted_albums(&self.albums, self.sort_order),
            scroll: self.scroll,
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::types::SearchErrorKind;

    fn album(id: &str, release_date: &str) -> Album {
        Album {
            id: id.to_string(),
            name: id.to_string(),
            release_date: release_date.to_string(),
            cover_url: None,
            spotify_url: String::new(),
        }
    }

    #[test]
    fn fresh_albums_replace_collection_wholesale() {
        let mut model = AppModel::new();
        let seq = model.begin_search();
        model.apply_search_result(seq, Ok(SearchOutcome::Albums(vec![album("a", "2001")])));
        assert_eq!(model.status(), &SearchStatus::Populated);

        let seq = model.begin_search();
        model.apply_search_result(
            seq,
            Ok(SearchOutcome::Albums(vec![
                album("b", "2002"),
                album("c", "2003"),
            ])),
        );
        assert_eq!(
            model.albums().iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut model = AppModel::new();
        let first = model.begin_search();
        let second = model.begin_search();

        // The first search finishes after the second was submitted.
        model.apply_search_result(first, Ok(SearchOutcome::Albums(vec![album("old", "1999")])));
        assert!(model.albums().is_empty());
        assert_eq!(model.status(), &SearchStatus::Loading);

        model.apply_search_result(second, Ok(SearchOutcome::Albums(vec![album("new", "2020")])));
        assert_eq!(model.albums().len(), 1);
        assert_eq!(model.albums()[0].id, "new");
        assert_eq!(model.status(), &SearchStatus::Populated);
    }

    #[test]
    fn no_match_keeps_previous_albums() {
        let mut model = AppModel::new();
        let seq = model.begin_search();
        model.apply_search_result(seq, Ok(SearchOutcome::Albums(vec![album("kept", "2010")])));

        let seq = model.begin_search();
        model.apply_search_result(seq, Ok(SearchOutcome::NoMatch));

        assert_eq!(model.status(), &SearchStatus::NoMatch);
        assert_eq!(model.albums().len(), 1);
        assert_eq!(model.albums()[0].id, "kept");
    }

    #[test]
    fn failure_keeps_previous_albums_and_reports_kind() {
        let mut model = AppModel::new();
        let seq = model.begin_search();
        model.apply_search_result(seq, Ok(SearchOutcome::Albums(vec![album("kept", "2010")])));

        let seq = model.begin_search();
        model.apply_search_result(
            seq,
            Err(CatalogError::MalformedResponse("bad page".to_string())),
        );

        assert_eq!(
            model.status(),
            &SearchStatus::Failed(SearchErrorKind::MalformedResponse)
        );
        assert_eq!(model.albums().len(), 1);
    }

    #[test]
    fn empty_album_list_is_a_distinct_state() {
        let mut model = AppModel::new();
        let seq = model.begin_search();
        model.apply_search_result(seq, Ok(SearchOutcome::Albums(vec![])));
        assert_eq!(model.status(), &SearchStatus::Empty);
    }

    #[test]
    fn snapshot_albums_follow_sort_order() {
        let mut model = AppModel::new();
        let seq = model.begin_search();
        model.apply_search_result(
            seq,
            Ok(SearchOutcome::Albums(vec![
                album("a", "2020-01-01"),
                album("b", "2022-06-15"),
                album("c", "2019-03-01"),
            ])),
        );

        let newest: Vec<String> = model
            .view_snapshot()
            .albums
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(newest, vec!["b", "a", "c"]);

        model.toggle_sort_order();
        let oldest: Vec<String> = model
            .view_snapshot()
            .albums
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(oldest, vec!["c", "a", "b"]);

        // The stored collection itself stays in API order.
        assert_eq!(
            model.albums().iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
