//! Word-frequency and sentiment analysis for plain-text files.
//!
//! Reads a file under a configured encoding, ranks its most frequent words,
//! and scores the original text for polarity and subjectivity with a
//! lexicon-based scorer.

pub mod analyzer;
pub mod decode;
pub mod error;
pub mod frequency;
pub mod scorer;
pub mod types;

pub use analyzer::{analyze_file, analyze_text};
pub use decode::decode;
pub use error::AnalyzerError;
pub use frequency::{count_words, tokenize, WordFrequencies};
pub use scorer::sentiment;
pub use types::{AnalyzerConfig, Sentiment, TextReport, WordCount};
