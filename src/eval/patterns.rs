//! Score constants for evaluation and search

/// Score constants shared by the evaluator and the search
pub struct PatternScore;

impl PatternScore {
    /// Completed run (from the completer's point of view under normal play).
    /// Above every static score, so a decided position always outranks a
    /// quiet one.
    pub const WIN: i64 = i64::MAX / 4;

    /// Owning the center of a 3x3 board with run length 3
    pub const CENTER_BONUS: i64 = 1_000;

    /// Largest exponent for window weights; 10^18 still fits an i64
    pub const MAX_LINE_EXPONENT: usize = 18;

    /// Static scores are clamped to this magnitude: strictly below `WIN`
    /// and safe to negate inside the search window.
    pub const MAX_EVAL: i64 = Self::WIN - 1;
}

/// Weight of an open window holding `count` marks of one player: 10^count
#[inline]
pub fn line_weight(count: usize) -> i64 {
    10i64.pow(count.min(PatternScore::MAX_LINE_EXPONENT) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_weight() {
        assert_eq!(line_weight(0), 1);
        assert_eq!(line_weight(1), 10);
        assert_eq!(line_weight(3), 1_000);
    }

    #[test]
    fn test_win_dominates_static_scores() {
        assert!(PatternScore::MAX_EVAL < PatternScore::WIN);
        assert!(line_weight(PatternScore::MAX_LINE_EXPONENT) <= PatternScore::MAX_EVAL);
        assert!(PatternScore::CENTER_BONUS < PatternScore::MAX_EVAL);
    }

    #[test]
    fn test_line_weight_caps_exponent() {
        assert_eq!(line_weight(18), 1_000_000_000_000_000_000);
        assert_eq!(line_weight(40), line_weight(18));
    }
}
