//! Locating search matches in article text for highlighting

use std::ops::Range;

/// Text segment for rendering with highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Normal(String),
    Highlighted(String),
}

/// Find every case-insensitive occurrence of `query` in `text`.
///
/// Ranges are byte offsets into `text` and always fall on char boundaries,
/// even when lowercasing changes the length of a character.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let query_lower = query.to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    // Lowercased text plus, for each of its bytes, the offset of the source char
    let mut lowered = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            lowered.push(lower);
            origins.resize(lowered.len(), offset);
        }
    }

    let source_end = |lowered_end: usize| -> usize {
        match origins.get(lowered_end) {
            Some(&origin) if lowered_end > 0 && origins[lowered_end - 1] == origin => {
                // Match ends inside an expanded char, include all of it
                next_char_boundary(text, origin)
            }
            Some(&origin) => origin,
            None => text.len(),
        }
    };

    let mut ranges = Vec::new();
    let mut start = 0;
    while let Some(pos) = lowered[start..].find(&query_lower) {
        let lowered_start = start + pos;
        let lowered_end = lowered_start + query_lower.len();

        let range = origins[lowered_start]..source_end(lowered_end);
        if ranges.last().map_or(true, |last: &Range<usize>| last.end <= range.start) {
            ranges.push(range);
        }

        start = lowered_end;
    }

    ranges
}

/// Split text into normal and highlighted runs
pub fn segments(text: &str, ranges: &[Range<usize>]) -> Vec<TextSegment> {
    if ranges.is_empty() {
        return vec![TextSegment::Normal(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut last_end = 0;

    for range in ranges {
        if range.start < last_end || range.end > text.len() {
            continue;
        }

        if range.start > last_end {
            segments.push(TextSegment::Normal(text[last_end..range.start].to_string()));
        }

        segments.push(TextSegment::Highlighted(text[range.clone()].to_string()));
        last_end = range.end;
    }

    if last_end < text.len() {
        segments.push(TextSegment::Normal(text[last_end..].to_string()));
    }

    segments
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    text[offset..]
        .chars()
        .next()
        .map_or(text.len(), |c| offset + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        let ranges = match_ranges("Hello world hello", "HELLO");
        assert_eq!(ranges, vec![0..5, 12..17]);
    }

    #[test]
    fn test_match_ranges_empty_query() {
        assert!(match_ranges("Hello", "").is_empty());
        assert!(match_ranges("", "a").is_empty());
    }

    #[test]
    fn test_match_ranges_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "Ünïcode ÜNÏCODE";
        let ranges = match_ranges(text, "ünï");
        assert_eq!(ranges.len(), 2);
        for range in &ranges {
            assert_eq!(text[range.clone()].to_lowercase(), "ünï");
        }
    }

    #[test]
    fn test_match_ranges_expanding_lowercase() {
        // 'İ' lowercases to two chars
        let text = "xİy";
        let ranges = match_ranges(text, "i");
        assert_eq!(ranges, vec![1..3]);
        assert_eq!(&text[ranges[0].clone()], "İ");
    }

    #[test]
    fn test_segments() {
        let text = "hello world hello";
        let segments = segments(text, &match_ranges(text, "hello"));
        assert_eq!(
            segments,
            vec![
                TextSegment::Highlighted("hello".to_string()),
                TextSegment::Normal(" world ".to_string()),
                TextSegment::Highlighted("hello".to_string()),
            ]
        );
    }

    #[test]
    fn test_segments_without_matches() {
        assert_eq!(
            segments("plain", &[]),
            vec![TextSegment::Normal("plain".to_string())]
        );
    }
}
