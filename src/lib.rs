//! # URAG
//!
//! A tiered retrieval engine for a college-admissions assistant.
//!
//! Every question resolves to exactly one answer, tried in order:
//!
//! 1. **FAQ** - the answer of the curated question most similar to the query
//! 2. **Document** - a response synthesized from the most similar documents
//! 3. **Fallback** - a generic redirect to official channels
//!
//! Similarity is cosine over deterministic hashed bag-of-words vectors, so
//! resolution needs no model, network or index build step.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! urag ask "Is there a hostel facility available?"
//! urag --corpus ./corpus.json --seed 7 ask "What courses are offered at SFIT?"
//! urag stats
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use urag::prelude::*;
//!
//! let corpus = sample_corpus().unwrap();
//! let resolver = TieredResolver::builder(corpus)
//!     .picker(std::sync::Arc::new(FixedPicker(0)))
//!     .build()
//!     .unwrap();
//!
//! let result = resolver.resolve("What are the admission requirements for engineering programs?");
//! assert_eq!(result.kind(), ResultKind::Faq);
//! assert!(result.confidence() >= 0.7);
//! ```
//!
//! ## Crate Structure
//!
//! - `urag-core` - Vectors, the hashing vectorizer, ranked search and the corpus model
//! - `urag-engine` - Resolver configuration, the tiered resolver, synthesis and fallback

// Re-export core types
pub use urag_core::{
    cosine_similarity, load_corpus, parse_corpus, sample_corpus, search_similar, token_hash,
    Corpus, CorpusStats, Document, DocumentMetadata, Embedder, Error, FaqItem, HashingVectorizer,
    Hit, Ranked, Result, SearchIndex, Searchable, Vector, DEFAULT_DIM,
};

// Re-export engine
pub use urag_engine::{
    FallbackResponder, FixedPicker, QueryRequest, QueryResponse, RandomPicker, ResolverBuilder,
    ResolverConfig, ResultKind, SearchResult, SeededPicker, Synthesizer, TemplatePicker,
    TemplateSynthesizer, TieredResolver, ERROR_CONFIDENCE, FALLBACK_CONFIDENCE,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_corpus, sample_corpus, Corpus, Document, Embedder, Error, FaqItem, FixedPicker,
        HashingVectorizer, QueryResponse, ResolverConfig, Result, ResultKind, SearchResult,
        SeededPicker, Synthesizer, TemplatePicker, TieredResolver, Vector,
    };
}
