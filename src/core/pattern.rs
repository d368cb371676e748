//! Wordle feedback encoding
//!
//! A pattern encodes the feedback for one guess against one target as a
//! base-3 number:
//! - 0 = Absent (gray)
//! - 1 = Present elsewhere (yellow)
//! - 2 = Exact match (green)
//!
//! Position `i` contributes `digit × 3^i`, so the value fits in a single byte
//! (0-242).

use super::word::{WORD_LEN, Word};

/// Number of distinct feedback codes (3^5)
pub const PATTERN_COUNT: usize = 243;

const POWERS_OF_THREE: [u8; WORD_LEN] = [1, 3, 9, 27, 81];

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is not in the target (or all its copies are used up)
    Absent = 0,
    /// Letter is in the target at another position
    Present = 1,
    /// Letter is in the correct position
    Exact = 2,
}

impl Mark {
    /// Base-3 digit for this mark
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts `G`/`g`/🟩 for exact, `Y`/`y`/🟨 for present and
    /// `-`/`_`/`.`/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All grays
    pub const NONE: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode the feedback `target` gives for `guess`
    ///
    /// Two passes over the letters:
    /// 1. Exact matches score `2 × 3^i` and consume both letters.
    /// 2. Left to right over unconsumed guess letters, the first unconsumed
    ///    equal target letter (scanning left to right) scores `1 × 3^i` and is
    ///    consumed.
    ///
    /// Repeated letters make this asymmetric: `encode(a, b)` and
    /// `encode(b, a)` generally differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(Pattern::calculate(&guess, &answer).value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();

        let mut guess_used = [false; WORD_LEN];
        let mut target_used = [false; WORD_LEN];
        let mut code = 0u8;

        for i in 0..WORD_LEN {
            if guess[i] == target[i] {
                code += 2 * POWERS_OF_THREE[i];
                guess_used[i] = true;
                target_used[i] = true;
            }
        }

        for i in 0..WORD_LEN {
            if guess_used[i] {
                continue;
            }
            if let Some(j) = (0..WORD_LEN).find(|&j| !target_used[j] && target[j] == guess[i]) {
                code += POWERS_OF_THREE[i];
                target_used[j] = true;
            }
        }

        Self(code)
    }

    /// Build a pattern from per-position marks: `Σ mark[i] × 3^i`
    #[must_use]
    pub fn from_marks(marks: &[Mark; WORD_LEN]) -> Self {
        let code = marks
            .iter()
            .zip(POWERS_OF_THREE)
            .map(|(mark, power)| mark.digit() * power)
            .sum();
        Self(code)
    }

    /// Decode into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for callers that don't need an error; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut chars = s.trim().chars();

        for mark in &mut marks {
            *mark = Mark::from_char(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }

        Some(Self::from_marks(&marks))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }

    /// Convert pattern to the ASCII form accepted by `from_str` ("GY-GY")
    #[must_use]
    pub fn to_letters(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            })
            .collect()
    }
}

impl From<[Mark; WORD_LEN]> for Pattern {
    fn from(marks: [Mark; WORD_LEN]) -> Self {
        Self::from_marks(&marks)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
