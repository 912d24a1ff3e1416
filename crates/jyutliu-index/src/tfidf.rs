//! Sparse TF-IDF index, the always-available fallback strategy.
//!
//! Weighting matches the classic smoothed formulation: term frequency times
//! `ln((1 + n) / (1 + df)) + 1`, rows L2-normalized so cosine similarity
//! reduces to a dot product. Features are lowercased word unigrams plus
//! adjacent-pair bigrams; a "word" is a run of two or more word characters,
//! which for CJK text means a whole run between punctuation or spaces.

use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;

use crate::error::{IndexError, Result};
use crate::store::VectorIndex;

/// Word token pattern: two or more word characters between boundaries.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Turns a text into the feature strings counted by the index.
///
/// Queries must run through the same analyzer as documents, otherwise
/// vocabulary lookups silently miss.
pub struct TfidfAnalyzer {
    token: Regex,
}

impl TfidfAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Lowercased unigram and adjacent-bigram features, in emission order.
    pub fn features(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = self.token.find_iter(&lower).map(|m| m.as_str()).collect();

        let mut features: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
        for pair in tokens.windows(2) {
            features.push(format!("{} {}", pair[0], pair[1]));
        }
        features
    }
}

/// Builds the CSR TF-IDF matrix over `texts`.
///
/// The vocabulary is every feature observed in the corpus (minimum document
/// frequency 1), sorted, with its sort position as column index. Returns
/// [`IndexError::EmptyVocabulary`] when no text yields a single feature.
pub fn build_matrix(texts: &[&str]) -> Result<VectorIndex> {
    let analyzer = TfidfAnalyzer::new()?;
    let doc_features: Vec<Vec<String>> = texts.iter().map(|t| analyzer.features(t)).collect();

    // Document frequency per feature.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for features in &doc_features {
        let distinct: HashSet<&str> = features.iter().map(String::as_str).collect();
        for feature in distinct {
            *df.entry(feature).or_insert(0) += 1;
        }
    }
    if df.is_empty() {
        return Err(IndexError::EmptyVocabulary);
    }

    // Sorted vocabulary; sort position is the column index.
    let vocab: BTreeMap<String, usize> = {
        let mut features: Vec<&str> = df.keys().copied().collect();
        features.sort_unstable();
        features
            .into_iter()
            .enumerate()
            .map(|(col, feature)| (feature.to_string(), col))
            .collect()
    };

    // Smoothed inverse document frequency per column.
    let n = texts.len() as f64;
    let mut idf = vec![0.0f64; vocab.len()];
    for (feature, &col) in &vocab {
        let freq = df[feature.as_str()] as f64;
        idf[col] = ((1.0 + n) / (1.0 + freq)).ln() + 1.0;
    }

    let mut indptr = Vec::with_capacity(texts.len() + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.push(0);

    for features in &doc_features {
        let mut tf: BTreeMap<usize, usize> = BTreeMap::new();
        for feature in features {
            // Every corpus feature is in the vocabulary by construction.
            if let Some(&col) = vocab.get(feature) {
                *tf.entry(col).or_insert(0) += 1;
            }
        }

        let weights: Vec<(usize, f64)> = tf
            .into_iter()
            .map(|(col, count)| (col, count as f64 * idf[col]))
            .collect();
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();

        for (col, weight) in weights {
            indices.push(col);
            data.push(if norm > 0.0 { (weight / norm) as f32 } else { 0.0 });
        }
        indptr.push(indices.len());
    }

    Ok(VectorIndex::Tfidf {
        vocab,
        indptr,
        indices,
        data,
    })
}
