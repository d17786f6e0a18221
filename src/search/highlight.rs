//! Query highlighting for rendered text

use regex::RegexBuilder;

/// A run of text, flagged when it matched the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split `text` around case-insensitive occurrences of `query`
///
/// The query is matched literally. An empty or whitespace-only query gives
/// back the whole text as one unmatched segment.
///
/// ```
/// use smartsearch::search::highlight_segments;
///
/// let segments = highlight_segments("Savings (sav)", "SAV");
/// let matched: Vec<_> = segments.iter().filter(|s| s.matched).map(|s| s.text.as_str()).collect();
/// assert_eq!(matched, ["Sav", "sav"]);
/// ```
#[must_use]
pub fn highlight_segments(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.trim().is_empty() {
        return vec![Segment::new(text, false)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::new(text, false)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::new(&text[cursor..found.start()], false));
        }
        segments.push(Segment::new(found.as_str(), true));
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::new(&text[cursor..], false));
    }
    segments
}
