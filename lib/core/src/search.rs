//! Threshold-gated ranked search
//!
//! Scores candidates against a query by cosine similarity, drops those
//! below a threshold, sorts by similarity descending (stable, so ties keep
//! input order) and truncates to a limit.
//!
//! Two policies are provided:
//! - [`search_similar`] re-vectorizes every candidate on each call.
//! - [`SearchIndex`] vectorizes candidates once and reuses the vectors.
//!   Candidates are immutable after load, so results are identical.
//!
//! A zero-magnitude vector on either side (no tokens) never matches, even at
//! threshold 0.

use crate::vectorizer::Embedder;
use crate::{Error, Result, Vector};

/// Anything that exposes text to match a query against
pub trait Searchable {
    fn searchable_text(&self) -> &str;
}

/// A candidate that survived the threshold, with its similarity
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub similarity: f32,
}

/// Position of a matching item in the indexed collection, with its similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub similarity: f32,
}

/// Rank `candidates` against `query` without caching candidate vectors.
pub fn search_similar<'a, T: Searchable>(
    embedder: &dyn Embedder,
    query: &str,
    candidates: &'a [T],
    threshold: f32,
    limit: usize,
) -> Result<Vec<Ranked<'a, T>>> {
    let query_vector = embedder.embed(query);
    if query_vector.is_zero() {
        return Ok(Vec::new());
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let vector = embedder.embed(candidate.searchable_text());
        let similarity = query_vector.cosine_similarity(&vector)?;
        if !vector.is_zero() {
            scored.push(Hit { index, similarity });
        }
    }

    Ok(rank(scored, threshold, limit)
        .into_iter()
        .map(|hit| Ranked {
            item: &candidates[hit.index],
            similarity: hit.similarity,
        })
        .collect())
}

/// Filter, stable-sort descending and truncate.
fn rank(mut hits: Vec<Hit>, threshold: f32, limit: usize) -> Vec<Hit> {
    hits.retain(|hit| hit.similarity >= threshold);
    hits.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(limit);
    hits
}

#[derive(Debug, Clone)]
struct Surface {
    item: usize,
    vector: Vector,
}

/// Precomputed candidate vectors.
///
/// Each entry ("surface") maps one text back to an item index. An item may
/// have several surfaces (e.g. an FAQ question and its paraphrases); it is
/// scored by its best surface.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    dim: usize,
    /// One past the highest item index
    item_count: usize,
    surfaces: Vec<Surface>,
}

impl SearchIndex {
    /// Index one surface per candidate, using its searchable text.
    pub fn from_items<T: Searchable>(embedder: &dyn Embedder, items: &[T]) -> Self {
        Self::from_surfaces(
            embedder,
            items
                .iter()
                .enumerate()
                .map(|(index, item)| (index, item.searchable_text())),
        )
    }

    /// Index arbitrary `(item index, text)` pairs.
    pub fn from_surfaces<'t, I>(embedder: &dyn Embedder, surfaces: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'t str)>,
    {
        let surfaces: Vec<Surface> = surfaces
            .into_iter()
            .map(|(item, text)| Surface {
                item,
                vector: embedder.embed(text),
            })
            .collect();
        let item_count = surfaces.iter().map(|s| s.item + 1).max().unwrap_or(0);

        Self {
            dim: embedder.dim(),
            item_count,
            surfaces,
        }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of indexed surfaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Rank indexed items against an already-vectorized query.
    ///
    /// Items are scored by their best surface; ties keep item order.
    pub fn search(&self, query: &Vector, threshold: f32, limit: usize) -> Result<Vec<Hit>> {
        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }
        if query.is_zero() {
            return Ok(Vec::new());
        }

        let mut best: Vec<Option<f32>> = vec![None; self.item_count];
        for surface in &self.surfaces {
            let similarity = query.cosine_similarity(&surface.vector)?;
            if surface.vector.is_zero() {
                continue;
            }
            let slot = &mut best[surface.item];
            if slot.map_or(true, |current| similarity > current) {
                *slot = Some(similarity);
            }
        }

        let hits = best
            .into_iter()
            .enumerate()
            .filter_map(|(index, similarity)| similarity.map(|similarity| Hit { index, similarity }))
            .collect();

        Ok(rank(hits, threshold, limit))
    }
}
