//! Word-window text chunker.
//!
//! Splits document text on whitespace and groups consecutive words into
//! windows of `chunk_size` words. The final window may be shorter. Each
//! window becomes one [`Chunk`], the unit of embedding and retrieval.
//!
//! # Example
//!
//! ```rust
//! use legal_rag_core::chunk::chunk_words;
//!
//! let chunks = chunk_words("one two three four five", 2);
//! assert_eq!(chunks, vec!["one two", "three four", "five"]);
//! ```

use crate::models::Chunk;

/// Default number of words per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Split `text` into chunks of at most `chunk_size` whitespace-separated words.
///
/// Words inside a chunk are joined by a single space, so joining the chunks
/// with single spaces reproduces the whitespace-normalized input. Empty or
/// whitespace-only input yields an empty vector.
///
/// A `chunk_size` of 0 is treated as 1.
pub fn chunk_words(text: &str, chunk_size: usize) -> Vec<String> {
    let size = chunk_size.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(size).map(|window| window.join(" ")).collect()
}

/// Chunk a document's text and attach identity (`source`, contiguous `index`).
pub fn chunk_document(source: &str, text: &str, chunk_size: usize) -> Vec<Chunk> {
    chunk_words(text, chunk_size)
        .into_iter()
        .enumerate()
        .map(|(index, text)| Chunk {
            source: source.to_string(),
            index,
            text,
        })
        .collect()
}
