use std::fmt;

use crate::utils::SecureString;

/// Coarse strength classification derived from a score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Classify a 0-100 score
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => Strength::Strong,
            50..=74 => Strength::Medium,
            _ => Strength::Weak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

/// A generated password together with its strength
#[derive(Debug)]
pub struct TransformationResult {
    password: SecureString,
    score: u8,
}

impl TransformationResult {
    pub(crate) fn new(password: SecureString, score: u8) -> Self {
        Self { password, score }
    }

    /// The generated password (zeroized on drop)
    pub fn password(&self) -> &SecureString {
        &self.password
    }

    /// Strength score in 0..=100
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(49), Strength::Weak);
        assert_eq!(Strength::from_score(50), Strength::Medium);
        assert_eq!(Strength::from_score(74), Strength::Medium);
        assert_eq!(Strength::from_score(75), Strength::Strong);
        assert_eq!(Strength::from_score(100), Strength::Strong);
    }

    #[test]
    fn test_strength_display() {
        assert_eq!(Strength::Medium.to_string(), "Medium");
    }
}
