//! Embedded SFIT admissions corpus, used by the CLI when no corpus file is
//! given and by tests.

use crate::loader::parse_corpus;
use crate::{Corpus, Result};

const SAMPLE_CORPUS_JSON: &str = include_str!("../data/sample_corpus.json");

pub fn sample_corpus() -> Result<Corpus> {
    parse_corpus(SAMPLE_CORPUS_JSON)
}
