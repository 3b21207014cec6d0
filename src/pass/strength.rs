//! Password strength scoring.

use std::fmt;

use super::CharacterClass;

/// Denominator shown next to a score. The checks below sum to at most 7.
pub const SCORE_SCALE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Bucket for a score. Boundary values belong to the higher bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => Strength::VeryStrong,
            5..=6 => Strength::Strong,
            3..=4 => Strength::Medium,
            _ => Strength::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: Strength,
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.label, self.score, SCORE_SCALE)
    }
}

/// Score a password on the 0..=8 scale.
///
/// | check                      | points |
/// |----------------------------|--------|
/// | length >= 12               | 2      |
/// | length 8..=11              | 1      |
/// | has uppercase              | 1      |
/// | has lowercase              | 1      |
/// | has digit                  | 1      |
/// | has symbol                 | 2      |
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let has = |class: CharacterClass| password.chars().any(|c| class.contains(c));

    let mut score = match length {
        12.. => 2,
        8..=11 => 1,
        _ => 0,
    };
    if has(CharacterClass::Uppercase) {
        score += 1;
    }
    if has(CharacterClass::Lowercase) {
        score += 1;
    }
    if has(CharacterClass::Digit) {
        score += 1;
    }
    if has(CharacterClass::Symbol) {
        score += 2;
    }

    StrengthResult {
        score,
        label: Strength::from_score(score),
    }
}

/// Rating for an entropy estimate in bits.
pub fn entropy_rating(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
