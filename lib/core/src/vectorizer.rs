//! Text vectorization
//!
//! Maps text to a fixed-size, unit-length vector. The default
//! [`HashingVectorizer`] is a bag of hashed words: lossy and collision-prone,
//! but deterministic. Anything implementing [`Embedder`] can replace it, as
//! long as it produces fixed-dimension, length-normalized vectors and maps
//! token-less text to the zero vector.

use crate::{Error, Result, Vector};

/// Default number of hash buckets
pub const DEFAULT_DIM: usize = 100;

/// Trait for text embedders used by ranked search
pub trait Embedder: Send + Sync {
    /// Output dimension; every vector returned by [`embed`](Self::embed) has this length
    fn dim(&self) -> usize;

    /// Embed a piece of text
    fn embed(&self, text: &str) -> Vector;
}

/// Bag-of-hashed-words vectorizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingVectorizer {
    dim: usize,
}

impl HashingVectorizer {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidConfig(
                "vectorizer dimension must be greater than zero".to_string(),
            ));
        }
        Ok(Self { dim })
    }

    /// Vectorize `text`:
    /// 1. lower-case and split on whitespace
    /// 2. hash each token into one of `dim` buckets, counting occurrences
    /// 3. L2-normalize (the zero vector stays zero)
    pub fn vectorize(&self, text: &str) -> Vector {
        let mut vector = Vector::zeros(self.dim);
        let lowered = text.to_lowercase();

        let slots = vector.as_mut_slice();
        for token in lowered.split_whitespace() {
            let bucket = token_hash(token).unsigned_abs() as usize % self.dim;
            slots[bucket] += 1.0;
        }

        vector.normalize();
        vector
    }
}

impl Default for HashingVectorizer {
    fn default() -> Self {
        Self { dim: DEFAULT_DIM }
    }
}

impl Embedder for HashingVectorizer {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Vector {
        self.vectorize(text)
    }
}

/// Polynomial string hash over UTF-16 code units with 32-bit wraparound:
/// `a = (a << 5) - a + c`
pub fn token_hash(token: &str) -> i32 {
    token.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit))
    })
}
