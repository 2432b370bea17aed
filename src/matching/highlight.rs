//! Match highlighting for result rows.
//!
//! Computes the character ranges of a display string that the search query
//! matched, so widgets can emphasize them. Ranges are `(start, end)` in
//! character indices with an exclusive end, sorted and non-overlapping.

use crate::app::modes::SearchMode;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Returns the ranges of `text` matched by `query` under `mode`.
///
/// `contains` mode marks every non-overlapping case-insensitive occurrence of
/// the whole query. `fuzzy` mode marks the characters each whitespace token
/// matched. An empty query highlights nothing.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str, mode: SearchMode) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    match mode {
        SearchMode::Contains => substring_ranges(text, query),
        SearchMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            let mut indices: Vec<usize> = query
                .split_whitespace()
                .filter_map(|token| matcher.fuzzy_indices(text, &token.to_lowercase()))
                .flat_map(|(_score, indices)| indices)
                .collect();
            indices.sort_unstable();
            indices.dedup();
            coalesce(&indices)
        }
    }
}

fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        let hit = window
            .iter()
            .zip(&needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if hit {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}

/// Collapses sorted character indices into contiguous ranges.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for &idx in indices {
        current = match current {
            Some((start, end)) if idx == end => Some((start, end + 1)),
            Some(range) => {
                ranges.push(range);
                Some((idx, idx + 1))
            }
            None => Some((idx, idx + 1)),
        };
    }

    ranges.extend(current);
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_marks_every_occurrence() {
        assert_eq!(
            highlight_ranges("Shoe shoes", "SHOE", SearchMode::Contains),
            vec![(0, 4), (5, 9)]
        );
    }

    #[test]
    fn contains_uses_character_indices() {
        assert_eq!(highlight_ranges("Crème brûlée", "brû", SearchMode::Contains), vec![(6, 9)]);
    }

    #[test]
    fn fuzzy_coalesces_adjacent_indices() {
        let ranges = highlight_ranges("green shoes", "gre sh", SearchMode::Fuzzy);
        assert_eq!(ranges.first(), Some(&(0, 3)));
        assert!(ranges.contains(&(6, 8)));
    }

    #[test]
    fn empty_query_highlights_nothing() {
        assert!(highlight_ranges("anything", "", SearchMode::Fuzzy).is_empty());
    }
}
