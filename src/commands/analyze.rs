//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word against
//! the full solution list.

use anyhow::{Context, Result, bail};

use crate::core::Word;
use crate::output::formatters::EntropyQuality;
use crate::solver::Engine;
use crate::solver::entropy::{calculate_metrics, win_probability};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub quality: EntropyQuality,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    pub is_solution: bool,
    pub win_probability: f64,
}

/// Analyze the entropy of a dictionary word against every solution
///
/// # Errors
///
/// Returns an error if the word is not in the dictionary.
pub fn analyze_word(engine: &Engine, word: &str) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;
    let Some(row) = engine.dictionary_row(word.text()) else {
        bail!("word {:?} is not in the dictionary", word.text());
    };

    let candidates = engine.full_range();
    let metrics = calculate_metrics(engine.matrix().row(row), &candidates);
    let total_candidates = candidates.len();
    let is_solution = engine.solution_index(word.text()).is_some();

    Ok(AnalysisResult {
        word: engine.dictionary()[row].text().to_string(),
        entropy: metrics.entropy,
        quality: EntropyQuality::from_bits(metrics.entropy),
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates,
        is_solution,
        win_probability: if is_solution {
            win_probability(total_candidates)
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EngineConfig;
    use crate::wordlists::{ALLOWED, ANSWERS};

    fn engine() -> Engine {
        Engine::init(&ANSWERS[..100], ALLOWED, EngineConfig::default(), &mut ()).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let engine = engine();
        let result = analyze_word(&engine, "ABACK").unwrap();

        assert_eq!(result.word, "aback");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 100);
        assert!(result.is_solution);
        assert!((result.win_probability - 1.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_normalizes_input_before_exact_lookup() {
        let engine = engine();
        assert_eq!(engine.dictionary_row("ABACK"), None);
        assert_eq!(analyze_word(&engine, " ABACK ").unwrap().word, "aback");
    }

    #[test]
    fn analyze_unknown_word() {
        let engine = engine();
        assert!(analyze_word(&engine, "qqqqq").is_err());
    }

    #[test]
    fn burner_has_no_win_chance() {
        let engine = engine();
        let result = analyze_word(&engine, "soare").unwrap();
        assert!(!result.is_solution);
        assert!(result.win_probability.abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_properties() {
        let engine = engine();
        let result = analyze_word(&engine, "aback").unwrap();

        // Entropy should be bounded
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.total_candidates as f64).log2());

        // Expected remaining should be sensible
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
        assert!(result.max_partition <= result.total_candidates);
    }
}
