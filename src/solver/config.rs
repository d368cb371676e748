//! Engine tuning knobs

/// Tunable constants for matrix building and ranking
///
/// The defaults reproduce the reference behavior. Tests shrink the sampling
/// numbers to exercise both the sampled and the exhaustive strategic search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of ranked candidates returned per call
    pub top_n: usize,

    /// Strategic search samples the dictionary when more than this many
    /// candidates remain
    pub sample_threshold: usize,

    /// Number of leading dictionary rows searched when sampling.
    ///
    /// This trades accuracy for speed: with many candidates left, guesses
    /// beyond the prefix are never scored.
    pub sample_cap: usize,

    /// Matrix rows built between progress reports
    pub build_progress_block: usize,

    /// Ranking reports progress only for search spaces larger than this
    pub compute_progress_threshold: usize,

    /// Guess rows scored between ranking progress reports
    pub compute_progress_interval: usize,

    /// Reject filter requests for guesses missing from the dictionary
    /// instead of passing the candidate set through unchanged
    pub strict_guesses: bool,
}

impl EngineConfig {
    /// Builder-style override of the strategic sampling constants
    #[must_use]
    pub const fn with_sampling(mut self, threshold: usize, cap: usize) -> Self {
        self.sample_threshold = threshold;
        self.sample_cap = cap;
        self
    }

    /// Builder-style override of `top_n`
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder-style override of `strict_guesses`
    #[must_use]
    pub const fn with_strict_guesses(mut self, strict: bool) -> Self {
        self.strict_guesses = strict;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: 50,
            sample_threshold: 500,
            sample_cap: 3000,
            build_progress_block: 100,
            compute_progress_threshold: 1000,
            compute_progress_interval: 2000,
            strict_guesses: false,
        }
    }
}
