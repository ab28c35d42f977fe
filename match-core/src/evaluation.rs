/// Normalize a submitted guess for comparison: uppercase first, then
/// trim leading and trailing whitespace
pub fn normalize_guess(raw: &str) -> String {
    raw.to_uppercase().trim().to_string()
}

/// Check whether a submitted guess wins against the target word.
/// Only the guess is normalized; the target is compared exactly as
/// stored, so word sources must hand out uppercase words.
pub fn is_winning_guess(submitted: &str, target: &str) -> bool {
    normalize_guess(submitted) == target
}
