//! Live champion filtering.
//!
//! Filtering is a case-insensitive substring match of the query against each
//! champion's display name. It is recomputed on every keystroke, so the query
//! is lower-cased once per call and each name is matched with `str::contains`,
//! which runs in linear time.

use crate::domain::Champion;

/// Returns the champions whose display name contains `query`, ignoring case.
///
/// An empty query matches every champion. The original relative order is kept
/// and the input is never modified.
///
/// # Examples
///
/// ```
/// use draftboard::domain::{filter, Champion};
///
/// let champions = vec![
///     Champion::new("Aatrox", "Aatrox", "u1"),
///     Champion::new("Ahri", "Ahri", "u2"),
/// ];
/// let visible = filter(&champions, "AHR");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].display_name, "Ahri");
/// ```
#[must_use]
pub fn filter<'a>(champions: &'a [Champion], query: &str) -> Vec<&'a Champion> {
    matching_indices(champions, query)
        .into_iter()
        .map(|idx| &champions[idx])
        .collect()
}

/// Same as [`filter`], returning positions into `champions` instead of references.
#[must_use]
pub fn matching_indices(champions: &[Champion], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..champions.len()).collect();
    }

    let needle = query.to_lowercase();
    champions
        .iter()
        .enumerate()
        .filter(|(_, champion)| champion.display_name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Locates the first case-insensitive occurrence of `query` in `name`.
///
/// Returns a `(start, end)` range of character indices (exclusive end) for
/// highlighting. Returns `None` for an empty query, for no match, or when
/// lower-casing `name` changes its character count so indices cannot be
/// mapped back.
#[must_use]
pub fn match_span(name: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let needle: Vec<char> = query.to_lowercase().chars().collect();
    let mut haystack = Vec::with_capacity(name.len());
    for c in name.chars() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(single), None) => haystack.push(single),
            _ => return None,
        }
    }

    if needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Champion> {
        ["Aatrox", "Ahri", "Akali", "Kai'Sa", "Nautilus", "Xin Zhao"]
            .iter()
            .map(|name| Champion::new(name.replace(['\'', ' '], ""), *name, format!("https://cdn/{name}.png")))
            .collect()
    }

    fn names(champions: &[&Champion]) -> Vec<String> {
        champions.iter().map(|c| c.display_name.clone()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let champions = roster();
        let visible: Vec<Champion> = filter(&champions, "").into_iter().cloned().collect();
        assert_eq!(visible, champions);
    }

    #[test]
    fn matches_substrings_ignoring_case() {
        let champions = roster();
        assert_eq!(names(&filter(&champions, "a")), ["Aatrox", "Ahri", "Akali", "Kai'Sa", "Nautilus", "Xin Zhao"]);
        assert_eq!(names(&filter(&champions, "AK")), ["Akali"]);
        assert_eq!(names(&filter(&champions, "i'S")), ["Kai'Sa"]);
        assert_eq!(names(&filter(&champions, "n z")), ["Xin Zhao"]);
        assert!(filter(&champions, "zed").is_empty());
    }

    #[test]
    fn keeps_original_order() {
        let champions = roster();
        let visible = matching_indices(&champions, "i");
        assert_eq!(visible, [1, 2, 3, 4, 5]);
        assert!(visible.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let champions = roster();
        for query in ["", "a", "AL", "x", "zzz"] {
            let once: Vec<Champion> = filter(&champions, query).into_iter().cloned().collect();
            let twice: Vec<Champion> = filter(&once, query).into_iter().cloned().collect();
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn does_not_mutate_input() {
        let champions = roster();
        let before = champions.clone();
        let _ = filter(&champions, "ahri");
        assert_eq!(champions, before);
    }

    #[test]
    fn match_span_uses_char_indices() {
        assert_eq!(match_span("Ahri", "ahri"), Some((0, 4)));
        assert_eq!(match_span("Kai'Sa", "SA"), Some((4, 6)));
        assert_eq!(match_span("Éowyn", "ow"), Some((1, 3)));
        assert_eq!(match_span("Ahri", ""), None);
        assert_eq!(match_span("Ahri", "zed"), None);
        assert_eq!(match_span("Vi", "vix"), None);
    }
}
