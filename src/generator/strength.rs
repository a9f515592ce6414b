/// Points awarded per satisfied criterion
const CRITERION_POINTS: u8 = 25;
/// Minimum length that earns the length criterion
const STRONG_LENGTH: usize = 16;

/// Heuristic strength score in `0..=100`
///
/// One criterion each for length, lowercase, uppercase, digit and
/// non-alphanumeric character. Five criteria can sum to 125, so the
/// total is capped.
pub fn score(password: &str) -> u8 {
    let criteria = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    let total: u32 = criteria
        .iter()
        .filter(|&&met| met)
        .map(|_| CRITERION_POINTS as u32)
        .sum();

    total.min(100) as u8
}
