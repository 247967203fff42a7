//! Document-tier answer synthesis
//!
//! [`Synthesizer`] turns the retrieved context into an answer. The bundled
//! [`TemplateSynthesizer`] does not generate anything: it truncates the
//! context and wraps it in a phrasing template. A summarizer or LLM backend
//! plugs in through the same trait.

use crate::config::DEFAULT_MAX_CONTEXT_CHARS;
use crate::picker::{RandomPicker, TemplatePicker};
use std::sync::Arc;
use urag_core::Result;

pub trait Synthesizer: Send + Sync {
    /// Produce an answer to `query` from `context` (ranked augmented
    /// document contents joined by blank lines).
    fn synthesize(&self, query: &str, context: &str) -> Result<String>;
}

pub const RESPONSE_PREFIXES: [&str; 3] = [
    "Based on the available information:",
    "According to our records:",
    "From the official documentation:",
];

pub struct TemplateSynthesizer {
    max_context_chars: usize,
    picker: Arc<dyn TemplatePicker>,
}

impl TemplateSynthesizer {
    pub fn new(max_context_chars: usize, picker: Arc<dyn TemplatePicker>) -> Self {
        Self {
            max_context_chars,
            picker,
        }
    }
}

impl Default for TemplateSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTEXT_CHARS, Arc::new(RandomPicker))
    }
}

impl Synthesizer for TemplateSynthesizer {
    fn synthesize(&self, _query: &str, context: &str) -> Result<String> {
        let excerpt = truncate_chars(context, self.max_context_chars);
        let index = self.picker.pick(RESPONSE_PREFIXES.len()) % RESPONSE_PREFIXES.len();
        let prefix = RESPONSE_PREFIXES[index];
        Ok(format!("{prefix} {excerpt}..."))
    }
}

/// Longest prefix of `text` with at most `max_chars` characters
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::FixedPicker;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 0), "");
        // multi-byte characters are never split
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹");
    }

    #[test]
    fn test_template_synthesizer_fixed_prefix() {
        let synth = TemplateSynthesizer::new(200, Arc::new(FixedPicker(1)));
        let answer = synth.synthesize("q", "SFIT placement cell.").unwrap();
        assert_eq!(answer, "According to our records: SFIT placement cell....");
    }

    #[test]
    fn test_template_synthesizer_truncates_context() {
        let context = "x".repeat(500);
        let synth = TemplateSynthesizer::new(200, Arc::new(FixedPicker(0)));
        let answer = synth.synthesize("q", &context).unwrap();

        let expected = format!("Based on the available information: {}...", "x".repeat(200));
        assert_eq!(answer, expected);
    }

    /// Ignores the requested range
    struct OutOfRangePicker;

    impl TemplatePicker for OutOfRangePicker {
        fn pick(&self, _len: usize) -> usize {
            usize::MAX
        }
    }

    #[test]
    fn test_out_of_range_pick_wraps() {
        let synth = TemplateSynthesizer::new(200, Arc::new(OutOfRangePicker));
        let answer = synth.synthesize("q", "ctx").unwrap();
        // usize::MAX % 3 == 0 on 32- and 64-bit targets
        assert_eq!(answer, "Based on the available information: ctx...");
    }

    #[test]
    fn test_random_prefix_is_one_of_templates() {
        let synth = TemplateSynthesizer::default();
        for _ in 0..20 {
            let answer = synth.synthesize("q", "ctx").unwrap();
            assert!(RESPONSE_PREFIXES.iter().any(|p| answer.starts_with(p)));
        }
    }
}
