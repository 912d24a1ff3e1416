//! Cosine top-k retrieval over a persisted vector store.
//!
//! Both index variants store unit-norm document rows, so cosine similarity
//! is a plain dot product. The query side mirrors whichever analyzer built
//! the store: the sentence encoder for dense indexes, the TF-IDF analyzer
//! (with document frequencies recovered from the stored matrix) for sparse
//! ones.

use std::collections::{BTreeMap, HashMap};

use jyutliu_core::Lang;

use crate::embed::SentenceEncoder;
use crate::error::{IndexError, Result};
use crate::store::{VectorIndex, VectorStore};
use crate::tfidf::TfidfAnalyzer;

/// One ranked retrieval result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Row index of the matched entry in the store.
    pub index: usize,
    /// Cosine similarity against the query, in `[-1, 1]`.
    pub score: f32,
    /// Matched text.
    pub text: String,
    /// Label of the matched entry.
    pub lang: Lang,
}

/// Returns the `k` entries of `store` most similar to `query`.
///
/// Dense stores need the `encoder` that built them; sparse stores need
/// none. Ties rank by ascending row index and `k` is clamped to the
/// corpus size.
pub fn search(
    store: &VectorStore,
    encoder: Option<&SentenceEncoder>,
    query: &str,
    k: usize,
) -> Result<Vec<SearchHit>> {
    let scored = match &store.index {
        VectorIndex::Sbert { embeddings, .. } => {
            let encoder = encoder.ok_or_else(|| {
                IndexError::ModelLoad("dense index requires the embedding model".into())
            })?;
            let query_vec = encoder.encode(query)?;
            dense_scores(embeddings, &query_vec)
        }
        VectorIndex::Tfidf {
            vocab,
            indptr,
            indices,
            data,
        } => sparse_scores(vocab, indptr, indices, data, query)?,
    };

    let hits = rank(scored, k)
        .into_iter()
        .filter_map(|(index, score)| {
            store.items.get(index).map(|entry| SearchHit {
                index,
                score,
                text: entry.text.clone(),
                lang: entry.lang,
            })
        })
        .collect();
    Ok(hits)
}

fn dense_scores(embeddings: &[Vec<f32>], query_vec: &[f32]) -> Vec<(usize, f32)> {
    embeddings
        .iter()
        .enumerate()
        .map(|(row, vec)| {
            let dot = vec.iter().zip(query_vec).map(|(a, b)| a * b).sum();
            (row, dot)
        })
        .collect()
}

fn sparse_scores(
    vocab: &BTreeMap<String, usize>,
    indptr: &[usize],
    indices: &[usize],
    data: &[f32],
    query: &str,
) -> Result<Vec<(usize, f32)>> {
    let analyzer = TfidfAnalyzer::new()?;
    let n_docs = indptr.len().saturating_sub(1);

    // A column appears at most once per row, so document frequencies fall
    // straight out of the stored column indices.
    let mut df = vec![0usize; vocab.len()];
    for &col in indices {
        if let Some(slot) = df.get_mut(col) {
            *slot += 1;
        }
    }

    let mut tf: HashMap<usize, f64> = HashMap::new();
    for feature in analyzer.features(query) {
        if let Some(&col) = vocab.get(&feature) {
            *tf.entry(col).or_insert(0.0) += 1.0;
        }
    }

    let weights: Vec<(usize, f64)> = tf
        .into_iter()
        .map(|(col, count)| {
            let idf = ((1.0 + n_docs as f64) / (1.0 + df[col] as f64)).ln() + 1.0;
            (col, count * idf)
        })
        .collect();
    let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let query_vec: HashMap<usize, f32> = weights
        .into_iter()
        .map(|(col, w)| (col, if norm > 0.0 { (w / norm) as f32 } else { 0.0 }))
        .collect();

    let mut scored = Vec::with_capacity(n_docs);
    for row in 0..n_docs {
        let mut dot = 0.0f32;
        for i in indptr[row]..indptr[row + 1] {
            if let Some(weight) = query_vec.get(&indices[i]) {
                dot += data[i] * weight;
            }
        }
        scored.push((row, dot));
    }
    Ok(scored)
}

fn rank(mut scored: Vec<(usize, f32)>, k: usize) -> Vec<(usize, f32)> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(k);
    scored
}
