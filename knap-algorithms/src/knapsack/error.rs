use thiserror::Error;

/// Errors a solver can report instead of a solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The DP table (`capacity * num_items`) would exceed the configured ceiling
    #[error("Problem too large for dynamic programming: {size} > {limit}")]
    ProblemTooLarge { size: u64, limit: u64 },

    /// Value density is undefined for a zero-weight item
    #[error("Item ({index}) has zero weight")]
    DegenerateWeight { index: usize },

    /// Every candidate algorithm failed
    #[error("No algorithm produced a solution")]
    NoCandidate,
}
