//! Lexicon scorer for polarity and subjectivity.
//!
//! Each known word is an assessment with a polarity in `[-1.0, 1.0]` and a
//! subjectivity in `[0.0, 1.0]`. An intensifier directly before an assessed
//! word scales both values; a negation earlier in the same sentence flips
//! the polarity at half strength. The text's sentiment is the mean of all
//! assessments.

use crate::types::Sentiment;

/// Word weights as `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("joyful", 0.8, 1.0),
    ("wise", 0.7, 0.9),
    ("beautiful", 0.85, 1.0),
    ("wonderful", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("nice", 0.6, 1.0),
    ("kind", 0.6, 0.9),
    ("noble", 0.5, 0.75),
    ("virtuous", 0.5, 1.0),
    ("honest", 0.6, 0.9),
    ("pure", 0.21, 0.5),
    ("calm", 0.3, 0.75),
    ("peaceful", 0.25, 0.5),
    ("free", 0.4, 0.8),
    ("strong", 0.43, 0.73),
    ("bright", 0.7, 0.9),
    ("true", 0.35, 0.65),
    ("right", 0.29, 0.54),
    ("sure", 0.5, 0.89),
    ("easy", 0.43, 0.83),
    ("fine", 0.42, 0.5),
    ("important", 0.4, 1.0),
    ("interesting", 0.5, 0.5),
    ("amazing", 0.6, 0.9),
    ("fantastic", 0.4, 0.9),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("useful", 0.3, 0.1),
    ("enlightened", 0.5, 0.6),
    ("gentle", 0.4, 0.7),
    // Negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("cruel", -1.0, 1.0),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("sorry", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("foolish", -0.5, 1.0),
    ("ignorant", -0.3, 0.6),
    ("ugly", -0.7, 1.0),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("weak", -0.38, 0.63),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("painful", -0.7, 0.9),
    ("dark", -0.15, 0.4),
    ("empty", -0.1, 0.5),
    ("boring", -1.0, 1.0),
    ("useless", -0.5, 0.2),
    ("hate", -0.8, 0.9),
    ("impure", -0.5, 0.7),
];

/// Words that amplify the assessment that follows them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("truly", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("most", 1.4),
    ("extremely", 1.5),
    ("quite", 1.1),
];

/// Polarity factor applied to an assessment after a negation.
const NEGATION_FACTOR: f64 = -0.5;

fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "nor" | "cannot") || word.ends_with("n't")
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|&&(w, _, _)| w == word)
        .map(|&(_, p, s)| (p, s))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, i)| i)
}

/// Closing marks that may follow a sentence terminator, as in `good.'`.
const CLOSERS: &[char] = &['\'', '"', ')', ']', '\u{2019}', '\u{201d}', '\u{bb}'];

fn ends_sentence(raw: &str) -> bool {
    raw.trim_end_matches(CLOSERS).ends_with(['.', '!', '?', ';'])
}

/// Score `text` for polarity and subjectivity.
///
/// Expects the original text: punctuation marks sentence boundaries, which
/// limit how far a negation reaches. Returns `(0.0, 0.0)` when no word in
/// the text is in the lexicon.
#[must_use]
pub fn sentiment(text: &str) -> Sentiment {
    let mut assessments: Vec<(f64, f64)> = Vec::new();
    let mut negated = false;
    let mut boost: Option<f64> = None;

    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .replace('\u{2019}', "'")
            .to_lowercase();

        if word.is_empty() {
            // punctuation-only token, still may close a sentence
        } else if is_negation(&word) {
            negated = true;
            boost = None;
        } else if let Some(i) = intensity(&word) {
            boost = Some(boost.unwrap_or(1.0) * i);
        } else if let Some((polarity, subjectivity)) = lookup(&word) {
            let factor = boost.take().unwrap_or(1.0);
            let mut polarity = polarity * factor;
            if negated {
                polarity *= NEGATION_FACTOR;
                negated = false;
            }
            assessments.push((
                polarity.clamp(-1.0, 1.0),
                (subjectivity * factor).clamp(0.0, 1.0),
            ));
        } else {
            boost = None;
        }

        if ends_sentence(raw) {
            negated = false;
            boost = None;
        }
    }

    if assessments.is_empty() {
        return Sentiment::default();
    }

    #[allow(clippy::cast_precision_loss)]
    let n = assessments.len() as f64;
    let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
    let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

    Sentiment {
        polarity: polarity.clamp(-1.0, 1.0),
        subjectivity: subjectivity.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_string_is_neutral_and_objective() {
        assert_eq!(sentiment(""), Sentiment::default());
    }

    #[test]
    fn unknown_text_is_neutral_and_objective() {
        assert_eq!(sentiment("The cat sat. The cat ran!"), Sentiment::default());
    }

    #[test]
    fn positive_word_scores_positive() {
        let s = sentiment("This is a good day.");
        assert!(approx(s.polarity, 0.7), "got {s:?}");
        assert!(approx(s.subjectivity, 0.6), "got {s:?}");
    }

    #[test]
    fn negative_word_scores_negative() {
        let s = sentiment("What a terrible idea");
        assert!(s.polarity < 0.0, "got {s:?}");
    }

    #[test]
    fn capitalization_and_punctuation_are_ignored_for_lookup() {
        assert_eq!(sentiment("GOOD!"), sentiment("good"));
    }

    #[test]
    fn intensifier_scales_next_assessment() {
        let s = sentiment("a very good day");
        assert!(approx(s.polarity, 0.7 * 1.3), "got {s:?}");
        assert!(approx(s.subjectivity, 0.6 * 1.3), "got {s:?}");
    }

    #[test]
    fn intensifier_does_not_skip_over_unrelated_words() {
        assert_eq!(sentiment("very cat good"), sentiment("good"));
    }

    #[test]
    fn negation_flips_polarity_at_half_strength() {
        let s = sentiment("this is not good");
        assert!(approx(s.polarity, -0.35), "got {s:?}");
        assert!(approx(s.subjectivity, 0.6), "got {s:?}");
    }

    #[test]
    fn contraction_negates() {
        let s = sentiment("it isn't bad");
        assert!(approx(s.polarity, 0.35), "got {s:?}");
    }

    #[test]
    fn negation_stops_at_sentence_end() {
        assert_eq!(sentiment("Not now. Good."), sentiment("good"));
    }

    #[test]
    fn quoted_words_score_like_bare_words() {
        assert_eq!(sentiment("He said 'good'."), sentiment("He said good."));
        assert_eq!(sentiment("He said \"good\"."), sentiment("He said good."));
    }

    #[test]
    fn quoted_negation_still_negates() {
        assert_eq!(sentiment("'not good'"), sentiment("not good"));
        assert_eq!(sentiment("it isn\u{2019}t bad"), sentiment("it isn't bad"));
    }

    #[test]
    fn sentence_end_inside_closing_quote_stops_negation() {
        assert_eq!(sentiment("'Not now.' Good."), sentiment("good"));
    }

    #[test]
    fn mean_of_mixed_assessments() {
        let s = sentiment("good and bad");
        assert!(approx(s.polarity, 0.0), "got {s:?}");
        assert!(approx(s.subjectivity, (0.6 + 0.67) / 2.0), "got {s:?}");
    }

    #[test]
    fn scores_stay_in_range_under_stacked_intensifiers() {
        let s = sentiment("extremely extremely extremely excellent");
        assert!(approx(s.polarity, 1.0), "got {s:?}");
        assert!(approx(s.subjectivity, 1.0), "got {s:?}");

        let s = sentiment("extremely extremely terrible");
        assert!(approx(s.polarity, -1.0), "got {s:?}");
    }

    #[test]
    fn lexicon_values_are_in_range() {
        for &(word, polarity, subjectivity) in LEXICON {
            assert!((-1.0..=1.0).contains(&polarity), "{word}: {polarity}");
            assert!((0.0..=1.0).contains(&subjectivity), "{word}: {subjectivity}");
        }
    }
}
