use milinda_core::{AppConfig, TextEncoding};
use serde::Serialize;

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Sentiment of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sentiment {
    /// In `[-1.0, 1.0]`: negative to positive.
    pub polarity: f64,
    /// In `[0.0, 1.0]`: objective to subjective.
    pub subjectivity: f64,
}

/// Result of analyzing one text.
#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    /// Where the text came from, usually a file path.
    pub source: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub top_words: Vec<WordCount>,
    pub sentiment: Sentiment,
}

impl TextReport {
    /// Human-readable report, one section for frequencies and one for sentiment.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("--- Text analysis: {} ---", self.source),
            format!("Unique words: {}", self.unique_words),
            String::new(),
            format!("Top {} most frequent words:", self.top_words.len()),
        ];
        lines.extend(
            self.top_words
                .iter()
                .map(|wc| format!("- {}: {}", wc.word, wc.count)),
        );
        lines.push(String::new());
        lines.push("--- Sentiment ---".to_string());
        lines.push(format!(
            "Polarity: {:.4} (closer to 1 is more positive)",
            self.sentiment.polarity
        ));
        lines.push(format!(
            "Subjectivity: {:.4} (closer to 1 is more subjective)",
            self.sentiment.subjectivity
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Settings for [`crate::analyze_file`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    pub encoding: TextEncoding,
    /// Length cap of [`TextReport::top_words`].
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            top_n: 10,
        }
    }
}

impl AnalyzerConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            encoding: config.text_encoding,
            top_n: config.top_words,
        }
    }
}
