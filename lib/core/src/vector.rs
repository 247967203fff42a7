use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A dense vector of floating point numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// True when every component is exactly zero (no tokens were vectorized)
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.0)
    }

    /// Euclidean norm
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        norm(&self.data)
    }

    /// Cosine similarity with another vector.
    ///
    /// Returns `Ok(0.0)` when either vector has zero magnitude, so callers
    /// never see NaN. Vectors of different dimension are rejected.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f32> {
        cosine_similarity(&self.data, &other.data)
    }

    /// Normalize the vector to unit length. A zero vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            let inv_norm = 1.0 / norm;
            for x in &mut self.data {
                *x *= inv_norm;
            }
        }
    }
}

/// Cosine similarity between two equal-length slices.
///
/// `dot(a, b) / (|a| * |b|)`, or `0.0` if either magnitude is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::InvalidDimension {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product(a, b) / (norm_a * norm_b))
}

/// Dot product with two accumulators for better pipelining.
/// Callers guarantee equal lengths.
#[inline]
fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    let mut dot0 = 0.0f32;
    let mut dot1 = 0.0f32;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();

    for (a_chunk, b_chunk) in chunks.zip(b.chunks_exact(4)) {
        dot0 += a_chunk[0] * b_chunk[0] + a_chunk[1] * b_chunk[1];
        dot1 += a_chunk[2] * b_chunk[2] + a_chunk[3] * b_chunk[3];
    }

    let tail = a.len() - remainder.len();
    for (x, y) in remainder.iter().zip(&b[tail..]) {
        dot0 += x * y;
    }

    dot0 + dot1
}

#[inline]
fn norm(v: &[f32]) -> f32 {
    dot_product(v, v).sqrt()
}
