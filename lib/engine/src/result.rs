//! Resolution results and the request/response envelope around them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tier produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Faq,
    Document,
    Fallback,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Faq => write!(f, "faq"),
            ResultKind::Document => write!(f, "document"),
            ResultKind::Fallback => write!(f, "fallback"),
        }
    }
}

/// The answer to one query, tagged by the tier that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Faq {
        content: String,
        confidence: f32,
        faq_id: String,
        matched_question: String,
    },
    Document {
        content: String,
        confidence: f32,
        /// Source URLs, positionally matching `document_ids`
        sources: Vec<String>,
        document_ids: Vec<String>,
    },
    Fallback {
        content: String,
        confidence: f32,
    },
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Faq { .. } => ResultKind::Faq,
            SearchResult::Document { .. } => ResultKind::Document,
            SearchResult::Fallback { .. } => ResultKind::Fallback,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            SearchResult::Faq { content, .. }
            | SearchResult::Document { content, .. }
            | SearchResult::Fallback { content, .. } => content,
        }
    }

    pub fn confidence(&self) -> f32 {
        match self {
            SearchResult::Faq { confidence, .. }
            | SearchResult::Document { confidence, .. }
            | SearchResult::Fallback { confidence, .. } => *confidence,
        }
    }
}

/// Incoming question. `conversation_id` is accepted for envelope
/// compatibility; resolution is single-turn and ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Flat response envelope for callers that serialize results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub confidence: f32,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub faq_id: Option<String>,
    #[serde(default)]
    pub document_ids: Vec<String>,
    #[serde(default)]
    pub matched_question: Option<String>,
}

impl From<SearchResult> for QueryResponse {
    fn from(result: SearchResult) -> Self {
        let kind = result.kind();
        match result {
            SearchResult::Faq {
                content,
                confidence,
                faq_id,
                matched_question,
            } => QueryResponse {
                response: content,
                kind,
                confidence,
                sources: Vec::new(),
                faq_id: Some(faq_id),
                document_ids: Vec::new(),
                matched_question: Some(matched_question),
            },
            SearchResult::Document {
                content,
                confidence,
                sources,
                document_ids,
            } => QueryResponse {
                response: content,
                kind,
                confidence,
                sources,
                faq_id: None,
                document_ids,
                matched_question: None,
            },
            SearchResult::Fallback { content, confidence } => QueryResponse {
                response: content,
                kind,
                confidence,
                sources: Vec::new(),
                faq_id: None,
                document_ids: Vec::new(),
                matched_question: None,
            },
        }
    }
}
