//! Candidate filtering against a feedback history

use crate::core::{History, Word};

/// Check whether `word`, taken as the answer, reproduces every feedback entry
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, history: &History) -> bool {
    history.iter().all(|feedback| feedback.matches(word))
}

/// Keep the candidates that would have produced every recorded feedback
///
/// Order of the input is preserved. An empty history keeps everything; a
/// history no candidate satisfies yields an empty result, which callers
/// should report as "no remaining candidates" rather than an error.
///
/// # Examples
/// ```
/// use wordlex::core::{History, Word, score_words};
/// use wordlex::solver::filter;
///
/// let words: Vec<Word> = ["crane", "slate", "trace", "react"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = History::new().with(score_words("crane", "trace").unwrap());
///
/// let remaining = filter(&words, &history);
/// assert_eq!(remaining, vec![Word::new("trace").unwrap()]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], history: &History) -> Vec<Word> {
    if history.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|candidate| is_consistent(candidate, history))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Pattern, score_words};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn vocabulary() -> Vec<Word> {
        words(&[
            "crane", "slate", "trace", "react", "crate", "grate", "irate", "caret", "cater",
            "speed", "abide", "eerie",
        ])
    }

    #[test]
    fn empty_history_returns_input() {
        let vocab = vocabulary();
        assert_eq!(filter(&vocab, &History::new()), vocab);
    }

    #[test]
    fn empty_input_returns_empty() {
        let history = History::new().with(score_words("crane", "trace").unwrap());
        assert!(filter(&[], &history).is_empty());
    }

    #[test]
    fn exact_match_leaves_single_word() {
        let guess = Word::new("irate").unwrap();
        let history = History::new().with(Feedback::new(guess, Pattern::PERFECT));
        assert_eq!(filter(&vocabulary(), &history), words(&["irate"]));
    }

    #[test]
    fn impossible_history_collapses_to_empty() {
        let guess = Word::new("zzzzz").unwrap();
        let history = History::new().with(Feedback::new(guess, Pattern::PERFECT));
        assert!(filter(&vocabulary(), &history).is_empty());
    }

    #[test]
    fn answer_always_survives() {
        let vocab = vocabulary();
        for answer in &vocab {
            let history = History::new()
                .with(Feedback::score(Word::new("crane").unwrap(), answer))
                .with(Feedback::score(Word::new("speed").unwrap(), answer));
            assert!(filter(&vocab, &history).contains(answer), "{answer} was dropped");
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let vocab = vocabulary();
        let history = History::new().with(score_words("slate", "grate").unwrap());

        let once = filter(&vocab, &history);
        let twice = filter(&once, &history);
        assert_eq!(once, twice);
    }

    #[test]
    fn longer_history_never_grows_result() {
        let vocab = vocabulary();
        let answer = Word::new("cater").unwrap();
        let mut history = History::new();
        let mut previous = filter(&vocab, &history).len();

        for guess in ["slate", "crane", "react"] {
            history = history.with(Feedback::score(Word::new(guess).unwrap(), &answer));
            let current = filter(&vocab, &history).len();
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn entry_order_does_not_matter() {
        let vocab = vocabulary();
        let a = score_words("crane", "crate").unwrap();
        let b = score_words("speed", "crate").unwrap();

        let forward = filter(&vocab, &History::from(vec![a, b]));
        let backward = filter(&vocab, &History::from(vec![b, a]));
        assert_eq!(forward, backward);
    }
}
