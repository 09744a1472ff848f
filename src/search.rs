//! Full-text and filename search over the document index.
//!
//! Case-insensitive substring matching, recomputed in full on every query
//! change. Filename matches are produced before content matches, so when a
//! file matches both ways the dedup keeps the filename tag.

use crate::vfs::{DocumentIndex, Vfs};

/// Hard cap on the number of results; anything past it is silently dropped.
pub const MAX_RESULTS: usize = 50;

/// How a file matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Filename,
    Content,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Filename => "filename",
            MatchKind::Content => "content",
        }
    }
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub path: String,
    pub matched: MatchKind,
}

/// Run a query against every file in the index.
///
/// An empty or all-whitespace query yields no results. Folders are never
/// included. Results are filename hits in index order, then content hits in
/// index order, deduplicated by path, capped at [`MAX_RESULTS`].
pub fn search(query: &str, vfs: &Vfs, index: &DocumentIndex) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();
    let mut push = |path: &String, matched: MatchKind, hits: &mut Vec<SearchHit>| {
        if hits.len() >= MAX_RESULTS {
            return;
        }
        if hits.iter().any(|h| &h.path == path) {
            return;
        }
        hits.push(SearchHit {
            path: path.clone(),
            matched,
        });
    };

    for path in index.all_file_paths() {
        if path.to_lowercase().contains(&query) {
            push(path, MatchKind::Filename, &mut hits);
        }
    }
    for path in index.all_file_paths() {
        let content = index
            .resolve(vfs, path)
            .and_then(|n| n.content())
            .unwrap_or("");
        if content.to_lowercase().contains(&query) {
            push(path, MatchKind::Content, &mut hits);
        }
    }
    hits
}
