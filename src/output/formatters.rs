//! Formatting utilities for terminal output

use std::fmt;

use crate::core::Pattern;
use crate::solver::RankedCandidate;

/// Display band for a guess's raw entropy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyQuality {
    Excellent,
    Good,
    Mediocre,
    Poor,
}

impl EntropyQuality {
    /// Band for `bits` of raw entropy
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::output::formatters::EntropyQuality;
    ///
    /// assert_eq!(EntropyQuality::from_bits(5.8), EntropyQuality::Excellent);
    /// assert_eq!(EntropyQuality::from_bits(2.9), EntropyQuality::Poor);
    /// ```
    #[must_use]
    pub fn from_bits(bits: f64) -> Self {
        if bits >= 5.5 {
            Self::Excellent
        } else if bits >= 4.5 {
            Self::Good
        } else if bits >= 3.0 {
            Self::Mediocre
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Mediocre => "mediocre",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for EntropyQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).max(0.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the best opener range
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.5; // Best openers score a little above 6 bits
    create_progress_bar(entropy, max_entropy, width)
}

/// Short description of what a ranked guess offers
///
/// Solutions show their win chance; burners are information plays.
#[must_use]
pub fn candidate_meta(candidate: &RankedCandidate) -> String {
    let play = if candidate.is_solution {
        format!("{:.1}% win", candidate.win_probability)
    } else {
        "Info play".to_string()
    };
    format!("{play} • {:.2} bits", candidate.raw_entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(is_solution: bool) -> RankedCandidate {
        RankedCandidate {
            word: "slate".to_string(),
            entropy: 5.9,
            raw_entropy: 5.876,
            win_probability: if is_solution { 12.5 } else { 0.0 },
            is_solution,
        }
    }

    #[test]
    fn quality_band_edges() {
        assert_eq!(EntropyQuality::from_bits(5.5), EntropyQuality::Excellent);
        assert_eq!(EntropyQuality::from_bits(5.49), EntropyQuality::Good);
        assert_eq!(EntropyQuality::from_bits(4.5), EntropyQuality::Good);
        assert_eq!(EntropyQuality::from_bits(3.0), EntropyQuality::Mediocre);
        assert_eq!(EntropyQuality::from_bits(0.0), EntropyQuality::Poor);
    }

    #[test]
    fn pattern_to_emoji_all_gray() {
        assert_eq!(pattern_to_emoji(Pattern::NONE), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn pattern_to_emoji_all_green() {
        assert_eq!(pattern_to_emoji(Pattern::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn meta_for_solution_and_burner() {
        assert_eq!(candidate_meta(&candidate(true)), "12.5% win • 5.88 bits");
        assert_eq!(candidate_meta(&candidate(false)), "Info play • 5.88 bits");
    }
}
