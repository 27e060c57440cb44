// Colored terminal output for matrix shapes, weight tables, and
// similarity reports. The main.rs display logic delegates here.

use colored::Colorize;

use crate::similarity::SimilarityReport;
use crate::tfidf::vectorizer::TfidfMatrix;

/// Print the matrix shape the way the tutorial does: `(documents, terms)`.
pub fn display_shape(matrix: &TfidfMatrix) {
    let (docs, terms) = matrix.shape();
    println!(
        "TF-IDF matrix shape: {}  ({} non-zero weights)",
        format!("({docs}, {terms})").bold(),
        matrix.nnz()
    );
}

/// Print each document's top-weighted terms as a small table.
pub fn display_matrix(matrix: &TfidfMatrix, documents: &[String], top_n: usize) {
    println!("\n{}", "=== TF-IDF Weights ===".bold());
    println!();

    for (i, document) in documents.iter().enumerate() {
        let preview = super::truncate_chars(document, 60);
        println!("  {}. \"{}\"", i, preview.dimmed());

        for (term, weight) in matrix.top_terms(i, top_n) {
            println!("       {:<12} {:.4}", term, weight);
        }
        println!();
    }
}

/// Print a similarity report: one scored line per document, then the
/// angle between the reference and the chosen counterpart.
pub fn display_similarity(report: &SimilarityReport, documents: &[String]) {
    println!(
        "\n{}",
        format!(
            "=== Cosine similarity vs document {} ===",
            report.reference
        )
        .bold()
    );
    println!();

    for (i, &score) in report.scores.iter().enumerate() {
        let preview = documents
            .get(i)
            .map(|d| super::truncate_chars(d, 50))
            .unwrap_or_default();
        let marker = if i == report.reference {
            "self".dimmed()
        } else {
            colorize_score(score)
        };
        println!("  {:>2}. {:.8}  {:<6} \"{}\"", i, score, marker, preview.dimmed());
    }

    println!();
    println!(
        "  Angle between documents {} and {}: {} rad = {} deg",
        report.reference,
        report.against,
        format!("{:.6}", report.angle_radians).bold(),
        format!("{:.6}", report.angle_degrees).bold(),
    );
}

/// Colorize a similarity score: green for close, yellow for moderate,
/// blue for distant.
fn colorize_score(score: f64) -> colored::ColoredString {
    if score >= 0.5 {
        "close".green()
    } else if score >= 0.25 {
        "near".yellow()
    } else {
        "far".blue()
    }
}
