//! Content-level leak detection: private path fragments mentioned in prose.

/// A forbidden fragment found in a text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentHit {
    pub fragment: String,
    /// 1-based line of the first occurrence.
    pub line: u32,
}

/// Scan `text` for each fragment (case-sensitive substring), reporting the first
/// line each one appears on. Hits follow the order of `fragments`.
pub fn scan(text: &str, fragments: &[String]) -> Vec<ContentHit> {
    fragments
        .iter()
        .filter_map(|fragment| {
            text.lines()
                .position(|line| line.contains(fragment.as_str()))
                .map(|idx| ContentHit {
                    fragment: fragment.clone(),
                    line: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                })
        })
        .collect()
}
