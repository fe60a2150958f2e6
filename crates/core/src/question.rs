//! Question assembly: clue sampling and multiple-choice option building.
//!
//! The row-selection half of question generation (picking one place
//! uniformly at random) lives in the repository layer, which knows the row
//! count. This module owns everything that happens after a place has been
//! selected.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of clues presented per question (fewer if the place has fewer).
pub const CLUES_PER_QUESTION: usize = 2;

/// Number of wrong cities offered alongside the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Total multiple-choice options per question.
pub const OPTION_COUNT: usize = DISTRACTOR_COUNT + 1;

// ---------------------------------------------------------------------------
// Clue sampling
// ---------------------------------------------------------------------------

/// Sample `min(CLUES_PER_QUESTION, clues.len())` clues without replacement.
///
/// The order of the returned clues is not stable across calls.
pub fn sample_clues<R: Rng + ?Sized>(rng: &mut R, clues: &[String]) -> Vec<String> {
    clues
        .choose_multiple(rng, CLUES_PER_QUESTION.min(clues.len()))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Option building
// ---------------------------------------------------------------------------

/// Build the shuffled 4-option city list for a question.
///
/// `pool` is the set of other places' city names. Any entry equal to
/// `correct_city` (by value, so duplicate city names across places are
/// excluded too) is removed before sampling, and the remainder is
/// deduplicated so every option is distinct.
///
/// Fails with [`CoreError::InsufficientData`] when fewer than
/// [`DISTRACTOR_COUNT`] distinct alternative cities exist.
pub fn build_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct_city: &str,
    pool: &[String],
) -> Result<Vec<String>, CoreError> {
    let mut distractors: Vec<&String> = pool.iter().filter(|c| *c != correct_city).collect();
    distractors.sort_unstable();
    distractors.dedup();

    if distractors.len() < DISTRACTOR_COUNT {
        return Err(CoreError::InsufficientData(format!(
            "need at least {DISTRACTOR_COUNT} distinct alternative cities, found {}",
            distractors.len()
        )));
    }

    let mut options: Vec<String> = distractors
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|c| (*c).clone())
        .collect();
    options.push(correct_city.to_string());
    options.shuffle(rng);

    Ok(options)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    // -- sample_clues --

    #[test]
    fn samples_two_clues_without_duplicates() {
        let clues = strings(&["Eiffel Tower", "Croissants", "Seine", "Louvre"]);
        let mut rng = StdRng::seed_from_u64(7);

        let sampled = sample_clues(&mut rng, &clues);

        assert_eq!(sampled.len(), 2);
        assert_ne!(sampled[0], sampled[1]);
        for clue in &sampled {
            assert!(clues.contains(clue));
        }
    }

    #[test]
    fn degrades_to_one_clue_for_short_lists() {
        let clues = strings(&["Only clue"]);
        let mut rng = StdRng::seed_from_u64(7);

        let sampled = sample_clues(&mut rng, &clues);

        assert_eq!(sampled, strings(&["Only clue"]));
    }

    #[test]
    fn empty_clue_list_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_clues(&mut rng, &[]).is_empty());
    }

    // -- build_options --

    #[test]
    fn options_contain_correct_city_and_four_distinct_entries() {
        let pool = strings(&["London", "Tokyo", "Rome", "Cairo", "Lima"]);
        let mut rng = StdRng::seed_from_u64(42);

        let options = build_options(&mut rng, "Paris", &pool).unwrap();

        assert_eq!(options.len(), OPTION_COUNT);
        assert!(options.contains(&"Paris".to_string()));
        let mut unique = options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), OPTION_COUNT);
    }

    #[test]
    fn correct_city_is_excluded_from_distractor_pool_by_value() {
        // Two places named "Paris" in the store: the duplicate must not be
        // offered as a distractor.
        let pool = strings(&["Paris", "London", "Tokyo", "Rome"]);
        let mut rng = StdRng::seed_from_u64(3);

        let options = build_options(&mut rng, "Paris", &pool).unwrap();

        assert_eq!(
            options.iter().filter(|c| *c == "Paris").count(),
            1,
            "the correct city must appear exactly once"
        );
    }

    #[test]
    fn fails_with_insufficient_data_when_pool_is_too_small() {
        let pool = strings(&["London", "Tokyo"]);
        let mut rng = StdRng::seed_from_u64(3);

        let result = build_options(&mut rng, "Paris", &pool);

        assert_matches!(result, Err(CoreError::InsufficientData(_)));
    }

    #[test]
    fn duplicate_pool_entries_do_not_inflate_the_distractor_count() {
        let pool = strings(&["London", "London", "London", "Tokyo"]);
        let mut rng = StdRng::seed_from_u64(3);

        let result = build_options(&mut rng, "Paris", &pool);

        assert_matches!(result, Err(CoreError::InsufficientData(_)));
    }
}
