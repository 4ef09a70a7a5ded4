//! Analysis run metrics.
//!
//! Collected by `analyze_verbose` only; `analyze` just measures the total.
//! Search time includes contraction expansion and numeral generation.

use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time of the run.
    pub total: Duration,
    /// Time spent splitting the sentence into tokens.
    pub tokenize: Duration,
    /// Cumulative time spent searching tokens.
    pub search: SearchMetrics,
}

/// Timings for the search phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchMetrics {
    pub total: Duration,
    /// One entry per token, in sentence order.
    pub tokens: Vec<TokenMetrics>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenMetrics {
    pub duration: Duration,
    /// Number of readings produced for the token.
    pub readings: usize,
}
