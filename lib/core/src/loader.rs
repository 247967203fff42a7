//! Corpus loading from JSON
//!
//! Expected layout:
//!
//! ```json
//! {
//!   "faqs": [{ "id": "faq-1", "question": "...", "answer": "...", "variations": ["..."] }],
//!   "documents": [{
//!     "id": "doc-1", "content": "...", "augmentedContent": "...", "summary": "...",
//!     "metadata": { "url": "...", "title": "...", "section": "..." }
//!   }]
//! }
//! ```
//!
//! Either collection may be omitted. Duplicate ids fail the load.

use crate::{Corpus, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let corpus = parse_corpus(&raw)?;

    debug!(
        "Loaded corpus from {:?}: {} FAQs, {} documents",
        path,
        corpus.faqs().len(),
        corpus.documents().len()
    );
    Ok(corpus)
}

pub fn parse_corpus(json: &str) -> Result<Corpus> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_corpus_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "faqs": [{{
                    "id": "faq-1",
                    "question": "Is there a hostel?",
                    "answer": "Yes.",
                    "variations": ["Hostel available?"]
                }}]
            }}"#
        )
        .unwrap();

        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.faqs().len(), 1);
        assert!(corpus.documents().is_empty());
        assert_eq!(corpus.stats().total_variations, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = parse_corpus("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_empty_object_is_empty_corpus() {
        let corpus = parse_corpus("{}").unwrap();
        assert!(corpus.is_empty());
    }
}
