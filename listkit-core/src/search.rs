//! Case-insensitive substring matching for the search stage
//!
//! Also provides match ranges and highlight segments so a consumer can mark
//! the matched part of a field.

use std::ops::Range;

/// Lowercase char by char so every folded char maps back to one source char
///
/// `str::to_lowercase` is context sensitive (final sigma) and would let
/// matching disagree with [`match_ranges`].
fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Check whether `haystack` contains `term`, ignoring case
///
/// An empty term matches everything.
pub fn matches_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    fold(haystack).contains(&fold(term))
}

/// Byte ranges in `text` of every non-overlapping case-insensitive
/// occurrence of `term`, left to right
pub fn match_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = fold(term).chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    // Lowercased chars tagged with the byte span of the source char they came from
    let folded: Vec<(char, Range<usize>)> = text
        .char_indices()
        .flat_map(|(idx, c)| {
            let span = idx..idx + c.len_utf8();
            c.to_lowercase().map(move |lc| (lc, span.clone()))
        })
        .collect();

    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= folded.len() {
        let window = &folded[pos..pos + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            let start = window[0].1.start;
            let end = window[needle.len() - 1].1.end;
            ranges.push(start..end);
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

/// Split `text` into `(segment, is_match)` pieces for highlighting
pub fn highlight(text: &str, term: &str) -> Vec<(String, bool)> {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;

    for range in ranges {
        // Two ranges can share a source char whose lowercase form is several chars
        if range.start < cursor {
            continue;
        }
        if range.start > cursor {
            segments.push((text[cursor..range.start].to_string(), false));
        }
        segments.push((text[range.clone()].to_string(), true));
        cursor = range.end;
    }

    if cursor < text.len() {
        segments.push((text[cursor..].to_string(), false));
    }

    segments
}
