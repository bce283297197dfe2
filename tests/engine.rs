use wordlex::core::{Feedback, History, Outcome, PATTERN_COUNT, Pattern, Word, score_words};
use wordlex::session::Session;
use wordlex::solver::entropy::{calculate_entropy, partition, shannon_entropy};
use wordlex::solver::{GuessPool, Ranker, Solver, filter, rank};
use wordlex::wordlists::loader::words_from_slice;

fn sample() -> Vec<Word> {
    words_from_slice(&[
        "crane", "slate", "trace", "react", "crate", "grate", "irate", "caret", "cater", "abide",
        "speed", "creep", "robot", "floor", "theme", "eerie", "erase", "geese", "llama", "belle",
    ])
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_repeated_guess_letter_only_marked_once() {
    let feedback = score_words("speed", "abide").unwrap();
    assert_eq!(feedback.pattern().key(), "--Y-Y");
    assert_eq!(
        feedback.outcomes(),
        [
            Outcome::Absent,
            Outcome::Absent,
            Outcome::Present,
            Outcome::Absent,
            Outcome::Present,
        ]
    );
}

#[test]
fn test_duplicate_letters_against_duplicate_answer() {
    let feedback = score_words("speed", "creep").unwrap();
    assert_eq!(feedback.pattern().key(), "-YGG-");
}

#[test]
fn test_crane_against_trace() {
    let feedback = score_words("crane", "trace").unwrap();
    let outcomes = feedback.outcomes();

    assert_eq!(outcomes[0], Outcome::Present);
    assert_eq!(outcomes[2], Outcome::Correct);
    assert_eq!(outcomes[3], Outcome::Absent);
    assert_eq!(outcomes[4], Outcome::Correct);

    // Same letter at the same index in both words
    assert_eq!(outcomes[1], Outcome::Correct);

    let words = words_from_slice(&["crane", "slate", "trace", "react"]);
    let history = History::new().with(feedback);
    assert_eq!(filter(&words, &history), vec![word("trace")]);
}

#[test]
fn test_answer_always_matches_its_own_feedback() {
    let words = sample();
    for guess in &words {
        for answer in &words {
            let feedback = Feedback::score(*guess, answer);
            assert!(feedback.matches(answer), "{guess} vs {answer}");
            assert_eq!(
                feedback.pattern().count(Outcome::Correct),
                guess
                    .letters()
                    .iter()
                    .zip(answer.letters())
                    .filter(|(a, b)| a == b)
                    .count()
            );
        }
    }
}

#[test]
fn test_perfect_pattern_only_for_same_word() {
    let words = sample();
    for guess in &words {
        for answer in &words {
            let perfect = Pattern::calculate(guess, answer) == Pattern::PERFECT;
            assert_eq!(perfect, guess == answer);
        }
    }
}

#[test]
fn test_filter_is_idempotent_and_monotonic() {
    let words = sample();
    let first = History::new().with(score_words("slate", "grate").unwrap());
    let second = first.with(score_words("crane", "grate").unwrap());

    let once = filter(&words, &first);
    assert_eq!(filter(&once, &first), once);

    let narrower = filter(&words, &second);
    assert!(narrower.iter().all(|w| once.contains(w)));
    assert!(narrower.contains(&word("grate")));
}

#[test]
fn test_filter_order_of_history_irrelevant() {
    let words = sample();
    let a = score_words("slate", "cater").unwrap();
    let b = score_words("robot", "cater").unwrap();

    let forward = filter(&words, &History::from(vec![a, b]));
    let backward = filter(&words, &History::from(vec![b, a]));
    assert_eq!(forward, backward);
}

#[test]
fn test_partition_conserves_candidates() {
    let words = sample();
    for guess in &words {
        let parts = partition(guess, &words);
        assert_eq!(parts.iter().map(|(_, n)| n).sum::<usize>(), words.len());
        assert!(parts.len() <= PATTERN_COUNT);
    }
}

#[test]
fn test_entropy_bounds() {
    let words = sample();
    let upper = (words.len().min(PATTERN_COUNT) as f64).log2();
    for guess in &words {
        let entropy = calculate_entropy(guess, &words);
        assert!(entropy >= 0.0);
        assert!(entropy <= upper);
    }

    assert_eq!(calculate_entropy(&word("crane"), &[word("trace")]), 0.0);
    assert_eq!(calculate_entropy(&word("crane"), &[]), 0.0);
}

#[test]
fn test_entropy_of_five_three_two_split() {
    let entropy = shannon_entropy([5, 3, 2]);
    assert!((entropy - 1.485_475).abs() < 1e-5);
    assert_eq!(entropy.to_bits(), shannon_entropy([2, 5, 3]).to_bits());

    // Ten candidates that ZZZZZ splits 5 / 3 / 2
    let candidates = words_from_slice(&[
        "crane", "slate", "trace", "react", "abide", "zebra", "zesty", "zonal", "pizza", "jazzy",
    ]);
    let guess = word("zzzzz");
    let mut sizes: Vec<usize> = partition(&guess, &candidates).iter().map(|(_, n)| n).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, [2, 3, 5]);
    assert_eq!(calculate_entropy(&guess, &candidates).to_bits(), entropy.to_bits());
}

#[test]
fn test_uniform_split_stays_within_log2() {
    for n in 2..=PATTERN_COUNT {
        assert!(shannon_entropy(vec![1; n]) <= (n as f64).log2(), "n = {n}");
    }
}

#[test]
fn test_rank_is_deterministic_and_sorted() {
    let words = sample();
    let first = rank(&words, &words, 8);
    let second = rank(&words, &words, 8);

    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
    for pair in first.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].word < pair[1].word)
        );
    }
}

#[test]
fn test_ranker_cache_agrees_with_plain_rank() {
    let words = sample();
    let candidates = filter(&words, &History::new().with(score_words("slate", "cater").unwrap()));

    let mut ranker = Ranker::new();
    let cached = ranker.rank(&words, &candidates, 5);
    let again = ranker.rank(&words, &candidates, 5);

    assert_eq!(cached, rank(&words, &candidates, 5));
    assert_eq!(cached, again);
}

#[test]
fn test_session_plays_to_solution() {
    let words = sample();
    let solver = Solver::new(GuessPool::Allowed, &words, &words);
    let answer = word("floor");

    let mut session = Session::new(&words);
    for _ in 0..words.len() {
        let guess = solver.best_guess(session.candidates()).unwrap();
        session = session.apply(Feedback::score(guess, &answer));
        assert!(session.candidates().contains(&answer));
        if session.is_solved() {
            break;
        }
    }

    assert!(session.is_solved());
    assert_eq!(session.history().last().unwrap().guess(), &answer);
}
