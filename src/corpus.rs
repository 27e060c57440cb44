// Corpus loading — the built-in demo documents and plain-text files.
//
// The built-in corpus is the classic four-sentence vector-space-model
// example. A corpus file is one document per line; blank lines are skipped
// so a trailing newline doesn't produce a phantom empty document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// The four example sentences used when no corpus file is given.
pub const DEMO_DOCUMENTS: [&str; 4] = [
    "The sky is blue",
    "The sun is bright",
    "The sun in the sky is bright",
    "We can see the shining sun, the bright sun",
];

/// Return the built-in demo corpus as owned strings.
pub fn demo_corpus() -> Vec<String> {
    DEMO_DOCUMENTS.iter().map(|d| d.to_string()).collect()
}

/// Load a corpus from a plain-text file, one document per line.
///
/// Fails if the file can't be read or contains no non-blank lines.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;

    let documents: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if documents.is_empty() {
        anyhow::bail!(
            "Corpus file {} contains no documents (every line is blank)",
            path.display()
        );
    }

    debug!(
        documents = documents.len(),
        path = %path.display(),
        "Loaded corpus"
    );

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_corpus_has_four_documents() {
        assert_eq!(demo_corpus().len(), 4);
    }

    #[test]
    fn test_load_corpus_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "The sky is blue").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  The sun is bright  ").unwrap();
        writeln!(file).unwrap();

        let docs = load_corpus(file.path()).unwrap();
        assert_eq!(docs, vec!["The sky is blue", "The sun is bright"]);
    }

    #[test]
    fn test_load_corpus_all_blank_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n\n   \n").unwrap();

        let result = load_corpus(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no documents"));
    }

    #[test]
    fn test_load_corpus_missing_file_fails() {
        let result = load_corpus(Path::new("/nonexistent/corpus.txt"));
        assert!(result.is_err());
    }
}
