//! Full pipeline against a small hand-checked fixture

use wordle_matrix::core::{Pattern, Word};
use wordle_matrix::solver::{Engine, EngineConfig, EngineError, SearchMode, WordList};

const SOLUTIONS: [&str; 10] = [
    "apple", "angle", "beach", "crisp", "ghost", "moist", "dumpy", "lusty", "would", "fight",
];

fn dictionary() -> Vec<&'static str> {
    let mut words = SOLUTIONS.to_vec();
    words.extend(["crane", "soare", "gisco", "pudgy", "thump"]);
    words
}

fn engine() -> Engine {
    Engine::init(&SOLUTIONS, &dictionary(), EngineConfig::default(), &mut ()).unwrap()
}

#[test]
fn strategic_ranking_over_full_range() {
    let engine = engine();
    let ranking = engine
        .find_best(&engine.full_range(), SearchMode::Strategic, &mut ())
        .unwrap();

    assert_eq!(ranking.searched_count, dictionary().len());
    assert!(!ranking.candidates.is_empty());
    assert!(ranking.candidates.len() <= 50);
    assert!(
        ranking
            .candidates
            .windows(2)
            .all(|pair| pair[0].entropy >= pair[1].entropy)
    );
    for candidate in &ranking.candidates {
        assert!(candidate.raw_entropy >= 0.0);
        assert!(candidate.raw_entropy <= (SOLUTIONS.len() as f64).log2() + 1e-9);
        assert_eq!(
            candidate.is_solution,
            SOLUTIONS.contains(&candidate.word.as_str())
        );
    }
}

#[test]
fn all_absent_feedback_keeps_disjoint_words() {
    let engine = engine();
    let remaining = engine
        .filter("crane", Pattern::NONE, &engine.full_range())
        .unwrap();

    // No c, r, a, n or e anywhere
    assert_eq!(remaining, vec![4, 5, 6, 7, 8, 9]);
    let words: Vec<&str> = engine.words_for(&remaining).into_iter().map(Word::text).collect();
    assert_eq!(words, ["ghost", "moist", "dumpy", "lusty", "would", "fight"]);
}

#[test]
fn filter_agrees_with_direct_feedback() {
    let engine = engine();
    let guess = Word::new("thump").unwrap();
    let target = Word::new("dumpy").unwrap();
    let observed = Pattern::calculate(&guess, &target);

    let remaining = engine
        .filter("thump", observed, &engine.full_range())
        .unwrap();
    assert!(remaining.contains(&6));

    for &index in &remaining {
        let solution = &engine.solutions()[index];
        assert_eq!(Pattern::calculate(&guess, solution), observed);
    }
}

#[test]
fn greedy_play_narrows_to_target() {
    let engine = engine();
    let mut remaining = engine.full_range();
    let target = Word::new("lusty").unwrap();

    // Each miss eliminates at least the guess itself
    for _ in 0..SOLUTIONS.len() {
        if remaining.len() <= 1 {
            break;
        }
        let ranking = engine
            .find_best(&remaining, SearchMode::Greedy, &mut ())
            .unwrap();
        let best = ranking.best().unwrap().word.clone();
        let guess = Word::new(&best).unwrap();
        let pattern = Pattern::calculate(&guess, &target);
        remaining = engine.filter(&best, pattern, &remaining).unwrap();
        if pattern == Pattern::PERFECT {
            break;
        }
    }

    assert_eq!(remaining, vec![7]);
}

#[test]
fn non_letter_words_are_ranked() {
    let solutions = ["apple", "angle", "axle_", "beach", "crisp"];
    let engine = Engine::init(&solutions, &solutions, EngineConfig::default(), &mut ()).unwrap();
    let ranking = engine
        .find_best(&engine.full_range(), SearchMode::Strategic, &mut ())
        .unwrap();

    assert!(!ranking.candidates.is_empty());
    assert!(
        ranking
            .candidates
            .windows(2)
            .all(|pair| pair[0].entropy >= pair[1].entropy)
    );
    assert!(ranking.candidates.iter().any(|c| c.word == "axle_"));
}

#[test]
fn wrong_length_solution_is_reported() {
    let solutions = ["apple", "angle", "axle"];
    let err = Engine::init(&solutions, &dictionary(), EngineConfig::default(), &mut ()).unwrap_err();

    assert!(matches!(
        err,
        EngineError::MalformedWord {
            list: WordList::Solutions,
            index: 2,
            ..
        }
    ));
}
