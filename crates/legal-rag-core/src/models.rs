//! Core data models shared by the ingestion and query pipelines.
//!
//! A [`Document`] only lives for the duration of one ingestion request. It is
//! split into [`Chunk`]s, which are embedded and persisted as
//! [`IndexEntry`] rows. Queries come back as [`ScoredEntry`] values ordered
//! best-first.

use serde::{Deserialize, Serialize};

/// An uploaded document: raw bytes plus the filename it arrived under.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// An ordered segment of a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Filename of the document this chunk came from.
    pub source: String,
    /// 0-based position within the document.
    pub index: usize,
    pub text: String,
}

impl Chunk {
    /// Index key for this chunk: `<source>_<index>`.
    ///
    /// Two uploads with the same filename produce the same keys.
    pub fn id(&self) -> String {
        chunk_id(&self.source, self.index)
    }

    pub fn metadata(&self) -> ChunkMetadata {
        ChunkMetadata {
            text: self.text.clone(),
            source: self.source.clone(),
        }
    }
}

/// Build the index key for chunk `index` of `source`.
pub fn chunk_id(source: &str, index: usize) -> String {
    format!("{}_{}", source, index)
}

/// Metadata persisted alongside each embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub text: String,
    pub source: String,
}

/// A persisted `(id, embedding, metadata)` tuple.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub id: String,
    pub embedding: Vec<f32>,
    pub metadata: ChunkMetadata,
}

/// An entry returned from a similarity query.
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub id: String,
    /// Cosine similarity to the query vector; higher is closer.
    pub score: f32,
    pub metadata: ChunkMetadata,
}

/// A question against the index, optionally carrying an inline excerpt of
/// the document the user is looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub question: String,
    #[serde(default, rename = "fileContent")]
    pub file_content: String,
}

impl Query {
    pub fn new(question: impl Into<String>, file_content: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            file_content: file_content.into(),
        }
    }

    /// A query needs a question, inline content, or both.
    pub fn is_empty(&self) -> bool {
        self.question.trim().is_empty() && self.file_content.trim().is_empty()
    }
}
