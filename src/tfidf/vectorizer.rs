// TF-IDF vectorizer with scikit-learn-compatible semantics.
//
// Term frequency is the raw count, IDF uses the smoothed formula
// ln((1 + n) / (1 + df)) + 1, and each document row is L2-normalized.
// With these defaults the similarity numbers line up with what
// sklearn's TfidfVectorizer produces for the same corpus.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::tokenize::Tokenizer;

/// Turns a set of documents into a TF-IDF weight matrix.
pub struct TfidfVectorizer {
    /// Remove English stop words before building the vocabulary
    pub remove_stop_words: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            remove_stop_words: false,
        }
    }
}

/// A dense document-term matrix of TF-IDF weights.
///
/// Rows are documents, columns are vocabulary terms in sorted order.
/// Every row is L2-normalized, so the dot product of two rows is their
/// cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfMatrix {
    /// Vocabulary terms, sorted. Column `j` holds weights for `vocabulary[j]`.
    pub vocabulary: Vec<String>,
    /// One weight row per input document
    pub rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    /// Tokenize the documents, build the vocabulary, and compute the
    /// TF-IDF weight matrix.
    pub fn fit_transform(&self, documents: &[String]) -> Result<TfidfMatrix> {
        if documents.is_empty() {
            anyhow::bail!("No documents to vectorize — the corpus is empty");
        }

        let tokenizer = Tokenizer::new(self.remove_stop_words)?;
        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|d| tokenizer.tokenize(d)).collect();

        // Sorted distinct terms; the sort order fixes the column layout
        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        if vocabulary.is_empty() {
            anyhow::bail!(
                "Tokenization produced an empty vocabulary from {} documents — \
                 documents may contain only punctuation or single letters",
                documents.len()
            );
        }

        let term_index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        // Document frequency per term
        let mut df = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                df[term_index[term]] += 1;
            }
        }

        // Smoothed IDF
        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        // tf * idf per document, then L2-normalize the row
        let rows: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0_f64; vocabulary.len()];
                for token in tokens {
                    row[term_index[token.as_str()]] += 1.0;
                }
                for (weight, idf_t) in row.iter_mut().zip(&idf) {
                    *weight *= idf_t;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        let matrix = TfidfMatrix { vocabulary, rows };
        let (n, m) = matrix.shape();
        info!(documents = n, terms = m, "Built TF-IDF matrix");

        Ok(matrix)
    }
}

/// Scale a vector to unit L2 norm. Zero vectors are left unchanged.
fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

impl TfidfMatrix {
    /// Matrix shape as (documents, terms).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.vocabulary.len())
    }

    /// Number of non-zero weights across the whole matrix.
    pub fn nnz(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&w| w != 0.0)
            .count()
    }

    /// The weight row for document `index`, if it exists.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// The `count` highest-weighted (term, weight) pairs for document `index`,
    /// in descending weight order.
    pub fn top_terms(&self, index: usize, count: usize) -> Vec<(&str, f64)> {
        let Some(row) = self.row(index) else {
            return Vec::new();
        };
        let mut weighted: Vec<(&str, f64)> = self
            .vocabulary
            .iter()
            .zip(row)
            .filter(|(_, &w)| w > 0.0)
            .map(|(term, &w)| (term.as_str(), w))
            .collect();
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        weighted.truncate(count);
        weighted
    }
}
