use crate::search::Searchable;
use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A curated question/answer pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    /// Canonical question; the only text matched against queries unless
    /// variation matching is enabled on the resolver
    pub question: String,
    pub answer: String,
    /// Alternate phrasings of the same question
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl FaqItem {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            variations: Vec::new(),
            confidence: None,
        }
    }

    #[must_use]
    pub fn with_variations<I, S>(mut self, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variations = variations.into_iter().map(Into::into).collect();
        self
    }
}

impl Searchable for FaqItem {
    fn searchable_text(&self) -> &str {
        &self.question
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetadata {
    pub url: String,
    pub title: String,
    pub section: String,
}

/// A source document with its precomputed augmented content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub content: String,
    /// `content` extended with a synthesized contextual summary
    pub augmented_content: String,
    pub summary: String,
    pub metadata: DocumentMetadata,
}

impl Searchable for Document {
    fn searchable_text(&self) -> &str {
        &self.content
    }
}

/// Counts reported for a loaded corpus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusStats {
    pub faq_count: usize,
    pub total_variations: usize,
    pub document_count: usize,
    pub section_count: usize,
}

/// The read-only FAQ and document collections searched by the resolver.
///
/// Identifiers are unique within each collection; this is checked once at
/// construction and there is no way to mutate the collections afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCorpus")]
pub struct Corpus {
    faqs: Vec<FaqItem>,
    documents: Vec<Document>,
}

#[derive(Deserialize)]
struct RawCorpus {
    #[serde(default)]
    faqs: Vec<FaqItem>,
    #[serde(default)]
    documents: Vec<Document>,
}

impl TryFrom<RawCorpus> for Corpus {
    type Error = Error;

    fn try_from(raw: RawCorpus) -> Result<Self> {
        Corpus::new(raw.faqs, raw.documents)
    }
}

impl Corpus {
    pub fn new(faqs: Vec<FaqItem>, documents: Vec<Document>) -> Result<Self> {
        ensure_unique("faq", faqs.iter().map(|f| f.id.as_str()))?;
        ensure_unique("document", documents.iter().map(|d| d.id.as_str()))?;
        Ok(Self { faqs, documents })
    }

    #[must_use]
    pub fn faqs(&self) -> &[FaqItem] {
        &self.faqs
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn faq(&self, id: &str) -> Option<&FaqItem> {
        self.faqs.iter().find(|f| f.id == id)
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty() && self.documents.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CorpusStats {
        let sections: AHashSet<&str> = self
            .documents
            .iter()
            .map(|d| d.metadata.section.as_str())
            .collect();

        CorpusStats {
            faq_count: self.faqs.len(),
            total_variations: self.faqs.iter().map(|f| f.variations.len()).sum(),
            document_count: self.documents.len(),
            section_count: sections.len(),
        }
    }
}

fn ensure_unique<'a>(collection: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = AHashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
