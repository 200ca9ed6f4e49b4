//! Tokenization and word-frequency ranking.

use std::collections::HashMap;

use crate::types::WordCount;

/// Split text into lower-cased tokens with ASCII punctuation removed.
///
/// Punctuation is deleted rather than replaced, so `don't` becomes `dont`
/// and `well-known` becomes `wellknown`. Non-ASCII marks such as `«` or `—`
/// are left in place.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Token counts that remember the order in which each word first appeared.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.counts.len());
            self.counts.push((word.to_string(), 1));
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Number of tokens counted, duplicates included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// All words sorted by descending count. Ties keep first-encounter order.
    #[must_use]
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most frequent words, or fewer if the text has fewer.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Count tokens in encounter order.
#[must_use]
pub fn count_words<S: AsRef<str>>(tokens: &[S]) -> WordFrequencies {
    let mut freq = WordFrequencies::default();
    for token in tokens {
        freq.add(token.as_ref());
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("The cat sat. The cat ran!"),
            vec!["the", "cat", "sat", "the", "cat", "ran"]
        );
    }

    #[test]
    fn tokenize_deletes_inner_punctuation() {
        assert_eq!(tokenize("don't well-known"), vec!["dont", "wellknown"]);
    }

    #[test]
    fn tokenize_drops_punctuation_only_words() {
        assert_eq!(tokenize("wait -- what ?!"), vec!["wait", "what"]);
    }

    #[test]
    fn tokenize_keeps_non_ascii_marks() {
        assert_eq!(
            tokenize("«Колесница» — имя"),
            vec!["«колесница»", "—", "имя"]
        );
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("a\tb\nc\r\n  d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn tokenize_empty_text_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!! ").is_empty());
    }

    #[test]
    fn count_words_matches_example() {
        let freq = count_words(&tokenize("The cat sat. The cat ran!"));
        assert_eq!(freq.get("the"), 2);
        assert_eq!(freq.get("cat"), 2);
        assert_eq!(freq.get("sat"), 1);
        assert_eq!(freq.get("ran"), 1);
        assert_eq!(freq.get("dog"), 0);
        assert_eq!(freq.unique(), 4);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn ranked_breaks_ties_by_first_encounter() {
        let freq = count_words(&tokenize("The cat sat. The cat ran!"));
        let words: Vec<String> = freq.ranked().into_iter().map(|w| w.word).collect();
        assert_eq!(words, vec!["the", "cat", "sat", "ran"]);
    }

    #[test]
    fn ranked_puts_higher_counts_first_regardless_of_position() {
        let freq = count_words(&["a", "b", "b", "c", "c", "c"]);
        let ranked = freq.ranked();
        assert_eq!(ranked[0].word, "c");
        assert_eq!(ranked[1].word, "b");
        assert_eq!(ranked[2].word, "a");
    }

    #[test]
    fn top_is_bounded_by_n_and_unique_count() {
        let tokens = tokenize("one two three four five six seven eight nine ten eleven twelve");
        let freq = count_words(&tokens);
        assert_eq!(freq.top(10).len(), 10);

        let small = count_words(&["x", "y", "x"]);
        assert_eq!(small.top(10).len(), 2);
        assert!(count_words::<&str>(&[]).top(10).is_empty());
    }

    #[test]
    fn totals_equal_token_count() {
        let text = "Rain, rain, go away! Come again another day; rain is here to stay.";
        let tokens = tokenize(text);
        let freq = count_words(&tokens);
        assert_eq!(freq.total(), tokens.len());
        assert_eq!(
            freq.ranked().iter().map(|w| w.count).sum::<usize>(),
            tokens.len()
        );
    }

    #[test]
    fn ranked_is_non_increasing() {
        let freq = count_words(&tokenize(
            "to be or not to be that is the question whether tis nobler to suffer",
        ));
        let ranked = freq.ranked();
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
