//! File and text entry points.

use std::path::Path;

use crate::decode::decode;
use crate::error::AnalyzerError;
use crate::frequency::{count_words, tokenize};
use crate::scorer::sentiment;
use crate::types::{AnalyzerConfig, TextReport};

/// Analyze text that is already in memory.
///
/// Word frequencies come from the cleaned tokens; sentiment is scored on
/// `text` as given.
#[must_use]
pub fn analyze_text(source: &str, text: &str, top_n: usize) -> TextReport {
    let tokens = tokenize(text);
    let freq = count_words(&tokens);

    TextReport {
        source: source.to_string(),
        total_words: freq.total(),
        unique_words: freq.unique(),
        top_words: freq.top(top_n),
        sentiment: sentiment(text),
    }
}

/// Read, decode and analyze the file at `path`.
///
/// # Errors
///
/// Returns [`AnalyzerError::Io`] if the file cannot be read, or
/// [`AnalyzerError::Decode`] if its bytes are not valid under
/// `config.encoding`.
pub fn analyze_file(path: &Path, config: &AnalyzerConfig) -> Result<TextReport, AnalyzerError> {
    let bytes = std::fs::read(path).map_err(|source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode(&bytes, config.encoding).ok_or_else(|| AnalyzerError::Decode {
        path: path.to_path_buf(),
        encoding: config.encoding,
    })?;

    let report = analyze_text(&path.display().to_string(), &text, config.top_n);

    tracing::info!(
        path = %path.display(),
        encoding = %config.encoding,
        total_words = report.total_words,
        unique_words = report.unique_words,
        polarity = report.sentiment.polarity,
        subjectivity = report.sentiment.subjectivity,
        "text analyzed"
    );

    Ok(report)
}
