use crate::error::{Error, Result};
use crate::generator::random::RandomSource;
use crate::generator::strength;
use crate::models::{TransformationResult, TriviaAnswers};
use crate::utils::SecureString;
use zeroize::Zeroize;

/// Length of every generated password
pub const PASSWORD_LENGTH: usize = 16;

const LEET_MAP: &[(char, char)] = &[
    ('a', '@'),
    ('e', '3'),
    ('i', '!'),
    ('o', '0'),
    ('s', '$'),
    ('t', '7'),
    ('l', '1'),
];
const SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*'];
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const PADDING: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9', '!', '@', '#', '$', '%', '&', '*',
];

/// A draw must exceed this for a leet substitution (~30%)
const SUBSTITUTE_ABOVE: f64 = 0.7;
/// A draw must exceed this for upper-casing (~50%)
const UPPERCASE_ABOVE: f64 = 0.5;
const SYMBOL_INSERTS: usize = 2;
const DIGIT_INSERTS: usize = 2;

/// Turns trivia answers into a 16-character password
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordTransformer;

impl PasswordTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Generate a password from the answers
    ///
    /// Fails with `MissingField` before taking any draw when an answer is
    /// empty or whitespace-only. Otherwise every random decision comes
    /// from `rng`, so a scripted source gives a reproducible result.
    pub fn generate<R: RandomSource>(
        &self,
        answers: &TriviaAnswers,
        rng: &mut R,
    ) -> Result<TransformationResult> {
        let missing = answers.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingField(missing));
        }

        // Whitespace-stripped, lower-cased answers in one wiped buffer
        let mut chars: Vec<char> = Vec::with_capacity(answers.byte_len());
        chars.extend(
            answers
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase),
        );

        tracing::debug!(chars = chars.len(), "normalized answers");

        for c in chars.iter_mut() {
            // Draw for every character, eligible or not
            let draw = rng.next_unit();
            if let Some(sub) = leet(*c) {
                if draw > SUBSTITUTE_ABOVE {
                    *c = sub;
                }
            }
        }

        // Casing can expand a character, so reserve the worst case up front
        let widest: usize = chars
            .iter()
            .map(|c| c.to_uppercase().len().max(c.to_lowercase().len()))
            .sum();
        let mut cased =
            Vec::with_capacity(widest + SYMBOL_INSERTS + DIGIT_INSERTS + PASSWORD_LENGTH);
        for &c in chars.iter() {
            if rng.next_unit() > UPPERCASE_ABOVE {
                cased.extend(c.to_uppercase());
            } else {
                cased.extend(c.to_lowercase());
            }
        }
        chars.zeroize();
        let mut chars = cased;

        for _ in 0..SYMBOL_INSERTS {
            insert_random(&mut chars, SYMBOLS, rng);
        }
        for _ in 0..DIGIT_INSERTS {
            insert_random(&mut chars, DIGITS, rng);
        }

        normalize_length(&mut chars, rng);

        let password = SecureString::from_chars(&mut chars);
        let score = strength::score(password.as_str().map_err(|e| Error::Internal(e.to_string()))?);

        Ok(TransformationResult::new(password, score))
    }
}

fn leet(c: char) -> Option<char> {
    LEET_MAP
        .iter()
        .find(|(plain, _)| *plain == c)
        .map(|&(_, sub)| sub)
}

/// Insert one character from `pool` at a random position in `[0, len)`
fn insert_random<R: RandomSource>(chars: &mut Vec<char>, pool: &[char], rng: &mut R) {
    let position = rng.pick_index(chars.len().max(1));
    let c = *rng.pick(pool);
    chars.insert(position, c);
}

/// Truncate or pad to exactly `PASSWORD_LENGTH`
///
/// Truncation can drop injected symbols and digits on long input.
fn normalize_length<R: RandomSource>(chars: &mut Vec<char>, rng: &mut R) {
    if chars.len() > PASSWORD_LENGTH {
        tracing::debug!(dropped = chars.len() - PASSWORD_LENGTH, "truncating password");
        chars[PASSWORD_LENGTH..].zeroize();
        chars.truncate(PASSWORD_LENGTH);
    }

    while chars.len() < PASSWORD_LENGTH {
        chars.push(*rng.pick(PADDING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::{RngSource, ScriptedRandom};
    use crate::models::{Field, Strength};

    fn generate_str(answers: &TriviaAnswers, rng: &mut impl RandomSource) -> String {
        let result = PasswordTransformer::new().generate(answers, rng).unwrap();
        result.password().as_str().unwrap().to_string()
    }

    #[test]
    fn test_high_draws_substitute_and_uppercase() {
        let answers = TriviaAnswers::new("Rex", "Lima", "Chef");
        let mut rng = ScriptedRandom::constant(0.9);

        // 11 substitution + 11 casing + 4 symbol + 4 digit + 1 padding draws
        assert_eq!(generate_str(&answers, &mut rng), "R3X1!M@CH**993F!");
        assert_eq!(rng.consumed(), 31);
    }

    #[test]
    fn test_low_draws_keep_letters_and_insert_at_front() {
        let answers = TriviaAnswers::new("Rex", "Lima", "Chef");
        let mut rng = ScriptedRandom::constant(0.0);

        assert_eq!(generate_str(&answers, &mut rng), "00!!rexlimachefA");
        assert_eq!(rng.consumed(), 31);
    }

    #[test]
    fn test_mixed_script() {
        let answers = TriviaAnswers::new("a", "b", "c");
        let mut draws = vec![
            0.8, 0.8, 0.8, // substitution: only 'a' is eligible
            0.6, 0.1, 0.6, // casing
            0.0, 0.0, // symbol '!' at 0
            0.99, 0.3, // symbol '#' at end-1
            0.5, 0.5, // digit '5' at 2
            0.0, 0.99, // digit '9' at 0
        ];
        // Nine padding draws
        draws.extend([0.0; 9]);
        let mut rng = ScriptedRandom::new(draws);

        // "@bC" -> "!@bC" -> "!@b#C" -> "!@5b#C" -> "9!@5b#C" + 9x'A'
        assert_eq!(generate_str(&answers, &mut rng), "9!@5b#CAAAAAAAAA");
        assert_eq!(rng.consumed(), 23);
    }

    #[test]
    fn test_mixed_case_answers_normalized_before_draws() {
        let answers = TriviaAnswers::new("MR Fluffy", " Q", "Z\t");
        let mut rng = ScriptedRandom::constant(0.0);

        // "mrfluffyqz": 10 + 10 + 8 + 2 padding draws
        assert_eq!(generate_str(&answers, &mut rng), "00!!mrfluffyqzAA");
        assert_eq!(rng.consumed(), 30);
    }

    #[test]
    fn test_scripted_runs_are_identical() {
        let answers = TriviaAnswers::new("Whiskers", "Tokyo", "Astronaut");
        let script: Vec<f64> = (0..64).map(|i| (i as f64 * 0.137) % 1.0).collect();

        let first = generate_str(&answers, &mut ScriptedRandom::new(script.clone()));
        let second = generate_str(&answers, &mut ScriptedRandom::new(script));
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_always_sixteen() {
        let mut rng = RngSource::thread();
        let cases = [
            TriviaAnswers::new("a", "b", "c"),
            TriviaAnswers::new("Rex", "Lima", "Chef"),
            TriviaAnswers::new("Whiskers", "Tokyo", "Astronaut"),
            TriviaAnswers::new("x".repeat(500), "y".repeat(500), "z".repeat(500)),
            TriviaAnswers::new("Zoë", "Zürich", "Straßenbahnfahrer"),
        ];

        for answers in &cases {
            for _ in 0..50 {
                let password = generate_str(answers, &mut rng);
                assert_eq!(password.chars().count(), PASSWORD_LENGTH);
            }
        }
    }

    #[test]
    fn test_whitespace_never_in_output() {
        let answers = TriviaAnswers::new("Mr Fluffy", "New\tYork", " Fire fighter ");
        let mut rng = RngSource::seeded(7);

        for _ in 0..100 {
            let password = generate_str(&answers, &mut rng);
            assert!(!password.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_missing_field_consumes_no_draws() {
        let answers = TriviaAnswers::new("Rex", "   ", "");
        let mut rng = ScriptedRandom::constant(0.5);

        let err = PasswordTransformer::new()
            .generate(&answers, &mut rng)
            .unwrap_err();

        match err {
            Error::MissingField(fields) => assert_eq!(fields, vec![Field::City, Field::Job]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_long_input_may_lose_injections() {
        // Every insertion lands at the end and is truncated away
        let answers = TriviaAnswers::new("bbbbbbbb", "cccccccc", "dddddddd");
        let mut rng = ScriptedRandom::constant(0.99);

        let password = generate_str(&answers, &mut rng);
        assert_eq!(password, "BBBBBBBBCCCCCCCC");
    }

    #[test]
    fn test_result_strength_matches_password() {
        let answers = TriviaAnswers::new("Rex", "Lima", "Chef");
        let result = PasswordTransformer::new()
            .generate(&answers, &mut ScriptedRandom::constant(0.9))
            .unwrap();

        assert_eq!(result.score(), 100);
        assert_eq!(result.strength(), Strength::Strong);
    }

    #[test]
    fn test_generation_varies() {
        let answers = TriviaAnswers::new("Whiskers", "Tokyo", "Astronaut");
        let mut rng = RngSource::thread();

        let first = generate_str(&answers, &mut rng);
        let differs = (0..20).any(|_| generate_str(&answers, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_non_eligible_characters_never_substituted() {
        let answers = TriviaAnswers::new("bcd", "fgh", "jkm");
        let mut rng = ScriptedRandom::constant(0.0);

        let password = generate_str(&answers, &mut rng);
        assert!(password.contains("bcdfghjkm"));
    }
}
