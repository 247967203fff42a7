//! # URAG Engine
//!
//! Tiered query resolution on top of [`urag_core`]: a query is answered from
//! the FAQ set if one is similar enough, otherwise synthesized from the most
//! similar documents, otherwise answered with a generic fallback.
//!
//! ## Example
//!
//! ```rust
//! use urag_core::sample_corpus;
//! use urag_engine::{ResolverConfig, ResultKind, TieredResolver};
//!
//! let resolver = TieredResolver::new(sample_corpus().unwrap(), ResolverConfig::default()).unwrap();
//! let result = resolver.resolve("Is there a hostel facility available?");
//! assert_eq!(result.kind(), ResultKind::Faq);
//! ```

pub mod config;
pub mod fallback;
pub mod picker;
pub mod resolver;
pub mod result;
pub mod synthesis;

pub use config::ResolverConfig;
pub use fallback::{FallbackResponder, ERROR_CONFIDENCE, FALLBACK_CONFIDENCE};
pub use picker::{FixedPicker, RandomPicker, SeededPicker, TemplatePicker};
pub use resolver::{ResolverBuilder, TieredResolver};
pub use result::{QueryRequest, QueryResponse, ResultKind, SearchResult};
pub use synthesis::{Synthesizer, TemplateSynthesizer};
