//! # URAG Core
//!
//! Core library for the URAG tiered retrieval engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Vector`] - Dense vector with cosine similarity
//! - [`HashingVectorizer`] - Deterministic bag-of-hashed-words [`Embedder`]
//! - [`search_similar`] / [`SearchIndex`] - Threshold-gated ranked search
//! - [`FaqItem`], [`Document`], [`Corpus`] - The read-only data the engine searches
//!
//! ## Example
//!
//! ```rust
//! use urag_core::{search_similar, FaqItem, HashingVectorizer};
//!
//! let faqs = vec![
//!     FaqItem::new("faq-1", "Is there a hostel facility available?", "Yes."),
//!     FaqItem::new("faq-2", "What is the fee structure?", "About 1.5 lakh per year."),
//! ];
//!
//! let vectorizer = HashingVectorizer::default();
//! let results = search_similar(&vectorizer, "Is there a hostel facility available?", &faqs, 0.7, 3).unwrap();
//! assert_eq!(results[0].item.id, "faq-1");
//! ```

pub mod corpus;
pub mod error;
pub mod loader;
pub mod sample;
pub mod search;
pub mod vector;
pub mod vectorizer;

pub use corpus::{Corpus, CorpusStats, Document, DocumentMetadata, FaqItem};
pub use error::{Error, Result};
pub use loader::{load_corpus, parse_corpus};
pub use sample::sample_corpus;
pub use search::{search_similar, Hit, Ranked, SearchIndex, Searchable};
pub use vector::{cosine_similarity, Vector};
pub use vectorizer::{token_hash, Embedder, HashingVectorizer, DEFAULT_DIM};
