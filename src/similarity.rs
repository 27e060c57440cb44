// Cosine similarity and angle derivation.
//
// The similarity between two weight vectors is dot(a, b) / (|a| * |b|),
// giving 1.0 for identical directions and 0.0 for orthogonal vectors.
// Because TF-IDF weights are non-negative the result lands in [0, 1].
// The angle is the arc-cosine of the similarity, reported in radians
// and degrees.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::tfidf::vectorizer::TfidfMatrix;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when the lengths differ or either vector has zero
/// magnitude — never panics, never divides by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        dot / denom
    }
}

/// The angle between two vectors whose cosine similarity is `similarity`.
///
/// The input is clamped to [-1, 1] before the arc-cosine so accumulated
/// floating-point error (a self-similarity of 1.0000000000000002) can't
/// produce NaN. The result lies in [0, pi].
pub fn angle_radians(similarity: f64) -> f64 {
    similarity.clamp(-1.0, 1.0).acos()
}

/// `angle_radians` converted to degrees; lies in [0, 180].
pub fn angle_degrees(similarity: f64) -> f64 {
    angle_radians(similarity).to_degrees()
}

/// The similarity of one document against every document in a matrix,
/// plus the angle to one chosen counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Index of the reference document
    pub reference: usize,
    /// Cosine similarity of the reference row against each row, in row order
    pub scores: Vec<f64>,
    /// Index of the document the angle is measured against
    pub against: usize,
    pub angle_radians: f64,
    pub angle_degrees: f64,
}

/// Compare document `reference` against every row of the matrix and
/// derive the angle to document `against`.
///
/// Fails when either index is out of range.
pub fn compare(matrix: &TfidfMatrix, reference: usize, against: usize) -> Result<SimilarityReport> {
    let (n_docs, _) = matrix.shape();

    let Some(reference_row) = matrix.row(reference) else {
        anyhow::bail!("Reference document {reference} is out of range (corpus has {n_docs} documents)");
    };
    if matrix.row(against).is_none() {
        anyhow::bail!("Comparison document {against} is out of range (corpus has {n_docs} documents)");
    }

    let scores: Vec<f64> = matrix
        .rows
        .iter()
        .map(|row| cosine_similarity(reference_row, row))
        .collect();

    let sim = scores[against];
    Ok(SimilarityReport {
        reference,
        scores,
        against,
        angle_radians: angle_radians(sim),
        angle_degrees: angle_degrees(sim),
    })
}
