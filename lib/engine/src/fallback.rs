use crate::picker::{RandomPicker, TemplatePicker};
use crate::result::SearchResult;
use std::sync::Arc;

pub const FALLBACK_CONFIDENCE: f32 = 0.3;
pub const ERROR_CONFIDENCE: f32 = 0.1;

pub const FALLBACK_RESPONSES: [&str; 3] = [
    "I understand you're asking about college admissions. For the most accurate and up-to-date information, please contact our admissions office directly or visit our official website.",
    "That's a great question about our college. I recommend reaching out to our admissions counselors who can provide you with detailed information specific to your situation.",
    "I want to make sure you get the most accurate information. Please check our official admissions portal or contact our help desk for specific details about this query.",
];

pub const DISCLAIMER: &str = "*Disclaimer: This is a general response. Please verify with official sources for the most current information.*";

pub const ERROR_RESPONSE: &str = "I apologize, but I encountered an error processing your question. Please try again or contact our admissions office directly.";

/// Last tier: a generic redirect when neither FAQs nor documents match,
/// and the error answer when a tier fails.
pub struct FallbackResponder {
    picker: Arc<dyn TemplatePicker>,
}

impl FallbackResponder {
    pub fn new(picker: Arc<dyn TemplatePicker>) -> Self {
        Self { picker }
    }

    pub fn respond(&self) -> SearchResult {
        let index = self.picker.pick(FALLBACK_RESPONSES.len()) % FALLBACK_RESPONSES.len();
        let response = FALLBACK_RESPONSES[index];
        SearchResult::Fallback {
            content: format!("{response}\n\n{DISCLAIMER}"),
            confidence: FALLBACK_CONFIDENCE,
        }
    }

    pub fn error_result(&self) -> SearchResult {
        SearchResult::Fallback {
            content: ERROR_RESPONSE.to_string(),
            confidence: ERROR_CONFIDENCE,
        }
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new(Arc::new(RandomPicker))
    }
}
