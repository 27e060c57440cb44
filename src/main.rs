use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use textsim::output::terminal;
use textsim::similarity;
use textsim::tfidf::vectorizer::{TfidfMatrix, TfidfVectorizer};
use textsim::{corpus, output};

/// textsim: TF-IDF vectorization and cosine-similarity comparison.
///
/// Vectorizes a small document corpus and measures how close each document
/// is to a reference document, both as a cosine similarity and as the angle
/// between the two weight vectors.
#[derive(Parser)]
#[command(name = "textsim", version, about)]
struct Cli {
    /// Corpus file, one document per line (defaults to the built-in
    /// four-sentence example corpus)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Remove English stop words before vectorizing
    #[arg(long, global = true)]
    stop_words: bool,

    /// Emit JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Vectorize the corpus and print only the matrix shape
    Shape,

    /// Print each document's top-weighted terms
    Matrix {
        /// How many terms to show per document
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Score every document against a reference document and derive an angle
    Compare {
        /// Index of the reference document (default: 0)
        #[arg(long, default_value = "0")]
        reference: usize,

        /// Index of the document to measure the angle against (default: 2)
        #[arg(long, default_value = "2")]
        against: usize,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textsim=info")),
        )
        .init();

    let cli = Cli::parse();

    let documents = match &cli.corpus {
        Some(path) => corpus::load_corpus(path)?,
        None => corpus::demo_corpus(),
    };
    info!(documents = documents.len(), "Corpus loaded");

    let vectorizer = TfidfVectorizer {
        remove_stop_words: cli.stop_words,
    };
    let matrix = vectorizer.fit_transform(&documents)?;

    match cli.command {
        Some(Commands::Shape) => {
            if cli.json {
                print_shape_json(&matrix)?;
            } else {
                terminal::display_shape(&matrix);
            }
        }

        Some(Commands::Matrix { top }) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            } else {
                terminal::display_shape(&matrix);
                terminal::display_matrix(&matrix, &documents, top);
            }
        }

        Some(Commands::Compare { reference, against }) => {
            let report = similarity::compare(&matrix, reference, against)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_shape(&matrix);
                terminal::display_similarity(&report, &documents);
            }
        }

        // No subcommand: the full walkthrough. Score everything against the
        // first document and derive the angle to the closest non-identical
        // one in the demo corpus (document 2).
        None => {
            let against = if documents.len() > 2 { 2 } else { 0 };
            let report = similarity::compare(&matrix, 0, against)?;
            if cli.json {
                print_walkthrough_json(&matrix, &report)?;
            } else {
                println!("Vectorizing {} documents...", documents.len());
                for (i, document) in documents.iter().enumerate() {
                    println!("  {}. \"{}\"", i, output::truncate_chars(document, 60));
                }
                println!();
                terminal::display_shape(&matrix);
                terminal::display_similarity(&report, &documents);
            }
        }
    }

    Ok(())
}

/// Shape as a small JSON object: `{"shape": [docs, terms], "nnz": n}`.
fn print_shape_json(matrix: &TfidfMatrix) -> Result<()> {
    let (docs, terms) = matrix.shape();
    let value = serde_json::json!({
        "shape": [docs, terms],
        "nnz": matrix.nnz(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// The walkthrough as one JSON object: shape plus the similarity report.
fn print_walkthrough_json(
    matrix: &TfidfMatrix,
    report: &similarity::SimilarityReport,
) -> Result<()> {
    let (docs, terms) = matrix.shape();
    let value = serde_json::json!({
        "shape": [docs, terms],
        "nnz": matrix.nnz(),
        "similarity": report,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
