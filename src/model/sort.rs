//! Derived, sorted view over the album collection
//!
//! The stored collection keeps the API's order; sorting happens here on a
//! copy, every time the view renders. The catalog reports release dates with
//! variable precision (`2020`, `2020-06`, `2020-06-15`) and no normalization
//! is applied beyond defaulting the missing components, so a year-only date
//! compares equal to January 1st of that year. Ties keep input order.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::types::{Album, SortOrder};

/// Parse a catalog release date, defaulting missing month/day to 1.
/// Returns `None` for anything that is not `YYYY[-MM[-DD]]`.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = match parts.next() {
        Some(month) => month.parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Stable sort of the albums by release date. Never mutates the input;
/// albums without a parseable date go last in either order.
pub fn sorted_albums(albums: &[Album], order: SortOrder) -> Vec<Album> {
    let mut sorted = albums.to_vec();
    sorted.sort_by(|a, b| {
        match (
            parse_release_date(&a.release_date),
            parse_release_date(&b.release_date),
        ) {
            (Some(a), Some(b)) => match order {
                SortOrder::Newest => b.cmp(&a),
                SortOrder::Oldest => a.cmp(&b),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn album(id: &str, release_date: &str) -> Album {
        Album {
            id: id.to_string(),
            name: format!("Album {id}"),
            release_date: release_date.to_string(),
            cover_url: None,
            spotify_url: format!("https://open.spotify.com/album/{id}"),
        }
    }

    fn ids(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn parses_all_precisions() {
        assert_eq!(
            parse_release_date("2020-06-15"),
            NaiveDate::from_ymd_opt(2020, 6, 15)
        );
        assert_eq!(
            parse_release_date("2020-06"),
            NaiveDate::from_ymd_opt(2020, 6, 1)
        );
        assert_eq!(
            parse_release_date("2020"),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("not-a-date"), None);
    }

    #[test]
    fn newest_puts_most_recent_first() {
        let albums = vec![
            album("a", "2020-01-01"),
            album("b", "2022-06-15"),
            album("c", "2019-03-01"),
        ];

        let newest = sorted_albums(&albums, SortOrder::Newest);
        assert_eq!(ids(&newest), vec!["b", "a", "c"]);

        let oldest = sorted_albums(&albums, SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["c", "a", "b"]);
    }

    #[test]
    fn equal_dates_keep_input_order_in_both_directions() {
        let albums = vec![
            album("first", "2021-05-01"),
            album("second", "2021-05-01"),
            album("third", "2021-05-01"),
        ];

        for order in [SortOrder::Newest, SortOrder::Oldest] {
            let sorted = sorted_albums(&albums, order);
            assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn newest_reversed_equals_oldest_for_distinct_dates() {
        let albums = vec![
            album("a", "1997-05-21"),
            album("b", "2003-11-01"),
            album("c", "1988-02-09"),
            album("d", "2015-08-28"),
        ];

        let mut newest = sorted_albums(&albums, SortOrder::Newest);
        newest.reverse();
        assert_eq!(newest, sorted_albums(&albums, SortOrder::Oldest));
    }

    #[test]
    fn input_collection_is_untouched() {
        let albums = vec![
            album("a", "2020-01-01"),
            album("b", "2022-06-15"),
            album("c", "2019-03-01"),
        ];
        let before = albums.clone();

        let _ = sorted_albums(&albums, SortOrder::Newest);
        assert_eq!(albums, before);
    }

    #[test]
    fn year_only_ties_with_january_first() {
        // "2020" parses identically to "2020-01-01", so input order decides.
        let albums = vec![album("year", "2020"), album("full", "2020-01-01")];

        let sorted = sorted_albums(&albums, SortOrder::Oldest);
        assert_eq!(ids(&sorted), vec!["year", "full"]);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let albums = vec![
            album("undated", ""),
            album("a", "2020-01-01"),
            album("b", "2019-01-01"),
        ];

        let newest = sorted_albums(&albums, SortOrder::Newest);
        assert_eq!(ids(&newest), vec!["a", "b", "undated"]);

        let oldest = sorted_albums(&albums, SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["b", "a", "undated"]);
    }
}
