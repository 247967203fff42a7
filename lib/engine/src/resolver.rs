//! Tiered resolver
//!
//! Resolves a query in strict priority order:
//!
//! ```text
//! FAQ_SEARCH --no match--> DOCUMENT_SEARCH --no match--> FALLBACK
//!     |                         |
//!     +--------- error ---------+-----------------------> ERROR FALLBACK
//! ```
//!
//! The first tier that produces a result wins. Errors inside the FAQ or
//! document tier are logged and turned into a low-confidence fallback;
//! [`TieredResolver::resolve`] itself never fails.

use crate::config::ResolverConfig;
use crate::fallback::FallbackResponder;
use crate::picker::{RandomPicker, TemplatePicker};
use crate::result::SearchResult;
use crate::synthesis::{Synthesizer, TemplateSynthesizer};
use std::sync::Arc;
use tracing::{debug, info, warn};
use urag_core::{
    Corpus, CorpusStats, Document, Embedder, FaqItem, HashingVectorizer, Hit, Ranked, Result,
    SearchIndex, Vector,
};

/// The retrieval engine. Built once from a loaded [`Corpus`]; shareable
/// across threads (`resolve` takes `&self` and mutates nothing).
pub struct TieredResolver {
    corpus: Corpus,
    config: ResolverConfig,
    embedder: Arc<dyn Embedder>,
    synthesizer: Arc<dyn Synthesizer>,
    fallback: FallbackResponder,
    faq_index: SearchIndex,
    doc_index: SearchIndex,
}

impl TieredResolver {
    /// Resolver with the hashing vectorizer, template synthesis and random
    /// template choice.
    pub fn new(corpus: Corpus, config: ResolverConfig) -> Result<Self> {
        ResolverBuilder::new(corpus).config(config).build()
    }

    pub fn builder(corpus: Corpus) -> ResolverBuilder {
        ResolverBuilder::new(corpus)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn stats(&self) -> CorpusStats {
        self.corpus.stats()
    }

    /// Resolve `query` to exactly one result.
    pub fn resolve(&self, query: &str) -> SearchResult {
        match self.try_tiers(query) {
            Ok(Some(result)) => result,
            Ok(None) => {
                debug!("No FAQ or document match, using fallback");
                self.fallback.respond()
            }
            Err(e) => {
                warn!("Resolution failed, returning error fallback: {}", e);
                self.fallback.error_result()
            }
        }
    }

    /// Every FAQ above the FAQ threshold, best first, up to the FAQ limit.
    /// [`resolve`](Self::resolve) only reports the first of these.
    pub fn faq_matches(&self, query: &str) -> Result<Vec<Ranked<'_, FaqItem>>> {
        let hits = self.search_faq_index(&self.embedder.embed(query))?;
        Ok(to_ranked(self.corpus.faqs(), hits))
    }

    /// Every document above the document threshold, best first, up to the
    /// document limit.
    pub fn document_matches(&self, query: &str) -> Result<Vec<Ranked<'_, Document>>> {
        let hits = self.search_doc_index(&self.embedder.embed(query))?;
        Ok(to_ranked(self.corpus.documents(), hits))
    }

    fn try_tiers(&self, query: &str) -> Result<Option<SearchResult>> {
        let query_vector = self.embedder.embed(query);

        if let Some(result) = self.search_faqs(&query_vector)? {
            return Ok(Some(result));
        }
        self.search_documents(query, &query_vector)
    }

    fn search_faq_index(&self, query_vector: &Vector) -> Result<Vec<Hit>> {
        self.faq_index
            .search(query_vector, self.config.faq_threshold, self.config.faq_limit)
    }

    fn search_doc_index(&self, query_vector: &Vector) -> Result<Vec<Hit>> {
        self.doc_index
            .search(query_vector, self.config.doc_threshold, self.config.doc_limit)
    }

    fn search_faqs(&self, query_vector: &Vector) -> Result<Option<SearchResult>> {
        let hits = self.search_faq_index(query_vector)?;
        let Some(top) = hits.first() else {
            return Ok(None);
        };

        let faq = &self.corpus.faqs()[top.index];
        debug!("FAQ hit {} with confidence {:.3}", faq.id, top.similarity);

        Ok(Some(SearchResult::Faq {
            content: faq.answer.clone(),
            confidence: clamp_confidence(top.similarity),
            faq_id: faq.id.clone(),
            matched_question: faq.question.clone(),
        }))
    }

    fn search_documents(&self, query: &str, query_vector: &Vector) -> Result<Option<SearchResult>> {
        let hits = self.search_doc_index(query_vector)?;
        let Some(top) = hits.first() else {
            return Ok(None);
        };

        let documents: Vec<&Document> = hits
            .iter()
            .map(|hit| &self.corpus.documents()[hit.index])
            .collect();

        let context = documents
            .iter()
            .map(|doc| doc.augmented_content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let content = self.synthesizer.synthesize(query, &context)?;

        debug!(
            "Document hit with confidence {:.3} from {} document(s)",
            top.similarity,
            documents.len()
        );

        Ok(Some(SearchResult::Document {
            content,
            confidence: clamp_confidence(top.similarity),
            sources: documents.iter().map(|d| d.metadata.url.clone()).collect(),
            document_ids: documents.iter().map(|d| d.id.clone()).collect(),
        }))
    }
}

fn clamp_confidence(similarity: f32) -> f32 {
    similarity.clamp(0.0, 1.0)
}

fn to_ranked<T>(items: &[T], hits: Vec<Hit>) -> Vec<Ranked<'_, T>> {
    hits.into_iter()
        .map(|hit| Ranked {
            item: &items[hit.index],
            similarity: hit.similarity,
        })
        .collect()
}

/// Builder for [`TieredResolver`].
///
/// Unset parts default to: hashing vectorizer of `config.vector_dim`,
/// [`TemplateSynthesizer`] and [`RandomPicker`]. The picker is shared by the
/// template synthesizer and the fallback responder.
pub struct ResolverBuilder {
    corpus: Corpus,
    config: ResolverConfig,
    embedder: Option<Arc<dyn Embedder>>,
    synthesizer: Option<Arc<dyn Synthesizer>>,
    picker: Arc<dyn TemplatePicker>,
}

impl ResolverBuilder {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            config: ResolverConfig::default(),
            embedder: None,
            synthesizer: None,
            picker: Arc::new(RandomPicker),
        }
    }

    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn synthesizer(mut self, synthesizer: Arc<dyn Synthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn picker(mut self, picker: Arc<dyn TemplatePicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn build(self) -> Result<TieredResolver> {
        self.config.validate()?;

        let embedder: Arc<dyn Embedder> = match self.embedder {
            Some(embedder) => embedder,
            None => Arc::new(HashingVectorizer::new(self.config.vector_dim)?),
        };
        let synthesizer = self.synthesizer.unwrap_or_else(|| {
            Arc::new(TemplateSynthesizer::new(
                self.config.max_context_chars,
                self.picker.clone(),
            ))
        });

        let faq_index = build_faq_index(
            embedder.as_ref(),
            self.corpus.faqs(),
            self.config.match_variations,
        );
        let doc_index = SearchIndex::from_items(embedder.as_ref(), self.corpus.documents());

        info!(
            "Resolver ready: {} FAQs ({} indexed phrasings), {} documents, dim {}",
            self.corpus.faqs().len(),
            faq_index.len(),
            self.corpus.documents().len(),
            embedder.dim()
        );

        Ok(TieredResolver {
            corpus: self.corpus,
            config: self.config,
            embedder,
            synthesizer,
            fallback: FallbackResponder::new(self.picker),
            faq_index,
            doc_index,
        })
    }
}

fn build_faq_index(embedder: &dyn Embedder, faqs: &[FaqItem], match_variations: bool) -> SearchIndex {
    if !match_variations {
        return SearchIndex::from_items(embedder, faqs);
    }

    let surfaces = faqs.iter().enumerate().flat_map(|(index, faq)| {
        std::iter::once(faq.question.as_str())
            .chain(faq.variations.iter().map(String::as_str))
            .map(move |text| (index, text))
    });
    SearchIndex::from_surfaces(embedder, surfaces)
}
