//! Randomness source trait

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`
    ///
    /// `bound` must be non-zero; implementations return 0 when it is not.
    fn next_below(&mut self, bound: u32) -> u32;
}
