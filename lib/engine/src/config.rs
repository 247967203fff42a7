//! Resolver configuration
//!
//! Thresholds gate each tier; limits bound how many ranked candidates a tier
//! keeps. Missing fields in a JSON config take the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use urag_core::{Error, Result, DEFAULT_DIM};

pub const DEFAULT_FAQ_THRESHOLD: f32 = 0.7;
pub const DEFAULT_DOC_THRESHOLD: f32 = 0.5;
pub const DEFAULT_FAQ_LIMIT: usize = 3;
pub const DEFAULT_DOC_LIMIT: usize = 2;
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum similarity for an FAQ to answer a query
    pub faq_threshold: f32,
    /// Minimum similarity for a document to be used as context
    pub doc_threshold: f32,
    pub faq_limit: usize,
    pub doc_limit: usize,
    /// Dimension of the default hashing vectorizer
    pub vector_dim: usize,
    /// Characters of document context kept by the template synthesizer
    pub max_context_chars: usize,
    /// Also match queries against FAQ paraphrase variations
    pub match_variations: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            faq_threshold: DEFAULT_FAQ_THRESHOLD,
            doc_threshold: DEFAULT_DOC_THRESHOLD,
            faq_limit: DEFAULT_FAQ_LIMIT,
            doc_limit: DEFAULT_DOC_LIMIT,
            vector_dim: DEFAULT_DIM,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            match_variations: false,
        }
    }
}

impl ResolverConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("faq_threshold", self.faq_threshold),
            ("doc_threshold", self.doc_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.faq_limit == 0 || self.doc_limit == 0 {
            return Err(Error::InvalidConfig(
                "faq_limit and doc_limit must be at least 1".to_string(),
            ));
        }

        if self.vector_dim == 0 {
            return Err(Error::InvalidConfig(
                "vector_dim must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ResolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.faq_threshold, 0.7);
        assert_eq!(config.doc_threshold, 0.5);
        assert_eq!(config.faq_limit, 3);
        assert_eq!(config.doc_limit, 2);
        assert_eq!(config.vector_dim, 100);
        assert!(!config.match_variations);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = ResolverConfig {
            faq_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = ResolverConfig {
            doc_threshold: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ResolverConfig {
            doc_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = ResolverConfig {
            doc_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "faq_threshold": 0.9, "match_variations": true }"#).unwrap();
        assert_eq!(config.faq_threshold, 0.9);
        assert!(config.match_variations);
        assert_eq!(config.doc_threshold, DEFAULT_DOC_THRESHOLD);
        assert_eq!(config.doc_limit, DEFAULT_DOC_LIMIT);
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "faq_limit": 0 }}"#).unwrap();
        assert!(ResolverConfig::load(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "doc_limit": 4 }}"#).unwrap();
        let config = ResolverConfig::load(file.path()).unwrap();
        assert_eq!(config.doc_limit, 4);
    }
}
