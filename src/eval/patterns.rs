//! Score constants for position evaluation

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Completed winning run. Dominates every other pattern.
    pub const WIN: i32 = 1_000;

    /// Run one short of winning, per open extension cell: `_XXX` or `XXX_`
    pub const OPEN_RUN: i32 = 50;

    // Note: both scores are applied with the opposite sign for the
    // opponent's patterns, so evaluate(board, A) == -evaluate(board, B).
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::OPEN_RUN);
        assert!(PatternScore::OPEN_RUN > 0);
    }
}
