//! Answer verification: guess comparison and fun-fact selection.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Whether a submitted guess matches the correct city.
///
/// Case-insensitive exact equality: both sides are lower-cased, nothing is
/// trimmed or otherwise normalized.
pub fn is_correct_guess(correct_city: &str, submitted: &str) -> bool {
    correct_city.to_lowercase() == submitted.to_lowercase()
}

/// Pick one fun fact uniformly at random.
///
/// Returns `None` only for an empty list, which the schema disallows.
pub fn pick_fun_fact<'a, R: Rng + ?Sized>(rng: &mut R, facts: &'a [String]) -> Option<&'a str> {
    facts.choose(rng).map(String::as_str)
}
