//! Score derivation.
//!
//! A user's displayed score is always computed from the two stored
//! counters, never persisted, so it cannot drift from them.

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: i64 = 10;

/// Points deducted per incorrect answer.
pub const PENALTY_PER_INCORRECT: i64 = 2;

/// Derive the displayed score: `10 * correct - 2 * incorrect`.
///
/// Negative totals are possible and are not clamped.
pub fn compute_score(correct_answers: i32, incorrect_answers: i32) -> i64 {
    i64::from(correct_answers) * POINTS_PER_CORRECT
        - i64::from(incorrect_answers) * PENALTY_PER_INCORRECT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_user_scores_zero() {
        assert_eq!(compute_score(0, 0), 0);
    }

    #[test]
    fn score_is_ten_n_minus_two_m() {
        assert_eq!(compute_score(3, 5), 20);
        assert_eq!(compute_score(7, 0), 70);
        assert_eq!(compute_score(0, 4), -8);
    }

    #[test]
    fn negative_totals_are_not_clamped() {
        assert_eq!(compute_score(1, 6), -2);
    }
}
