//! # Legal RAG Core
//!
//! Runtime-independent logic for Legal RAG: data models, word-window
//! chunking, prompt composition, the vector store abstraction, and the
//! embedding trait.
//!
//! This crate contains no tokio, sqlx, HTTP, or filesystem I/O. Concrete
//! collaborators (SQLite store, embedding backends, the generation client)
//! live in the `legal-rag` app crate.

pub mod chunk;
pub mod embedding;
pub mod models;
pub mod prompt;
pub mod store;
