//! "Years since founding" phrase.
//!
//! Russian numerals agree with the noun: 1 год, 2–4 года, 5–20 лет, and the
//! last digit decides again from 21 on, except in the 10–20 band of every
//! hundred, which always takes лет.

use chrono::Datelike;
use std::fmt;

use crate::config::FOUNDATION_YEAR;

/// Grammatical form of the unit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWord {
    /// Singular: "год".
    God,
    /// Paucal (2–4): "года".
    Goda,
    /// Plural (0, 5–20, ...): "лет".
    Let,
}

impl YearWord {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearWord::God => "год",
            YearWord::Goda => "года",
            YearWord::Let => "лет",
        }
    }
}

impl fmt::Display for YearWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the unit word for `age`.
pub fn year_word(age: u32) -> YearWord {
    if age < 10 {
        return match age {
            1 => YearWord::God,
            2..=4 => YearWord::Goda,
            _ => YearWord::Let,
        };
    }

    if (10..=20).contains(&(age % 100)) {
        return YearWord::Let;
    }

    match age % 10 {
        1 => YearWord::God,
        2..=4 => YearWord::Goda,
        _ => YearWord::Let,
    }
}

/// Whole years between `founded` and `current_year`, never negative.
pub fn age_since(founded: i32, current_year: i32) -> u32 {
    u32::try_from(current_year - founded).unwrap_or(0)
}

/// Age paired with its unit word, e.g. "105 лет".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePhrase {
    pub age: u32,
    pub word: YearWord,
}

impl AgePhrase {
    pub fn new(age: u32) -> Self {
        Self { age, word: year_word(age) }
    }

    /// Phrase for [`FOUNDATION_YEAR`] as seen from `current_year`.
    pub fn for_year(current_year: i32) -> Self {
        Self::new(age_since(FOUNDATION_YEAR, current_year))
    }

    /// Phrase as of today (local clock).
    pub fn current() -> Self {
        Self::for_year(chrono::Local::now().year())
    }
}

impl fmt::Display for AgePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.age, self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use YearWord::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (0, Let),
            (1, God),
            (2, Goda),
            (4, Goda),
            (5, Let),
            (9, Let),
            (10, Let),
            (11, Let),
            (20, Let),
            (21, God),
            (24, Goda),
            (25, Let),
            (100, Let),
            (101, God),
            (111, Let),
            (112, Let),
            (120, Let),
            (122, Goda),
        ];
        for (age, expected) in cases {
            assert_eq!(year_word(age), expected, "age {}", age);
        }
    }

    #[test]
    fn test_teens_band_every_hundred() {
        for hundred in [0, 100, 200, 1000] {
            for teen in 10..=20 {
                assert_eq!(year_word(hundred + teen), Let, "age {}", hundred + teen);
            }
        }
    }

    #[test]
    fn test_words() {
        assert_eq!(God.as_str(), "год");
        assert_eq!(Goda.as_str(), "года");
        assert_eq!(Let.as_str(), "лет");
    }

    #[test]
    fn test_2025_is_105_let() {
        let phrase = AgePhrase::for_year(2025);
        assert_eq!(phrase.age, 105);
        assert_eq!(phrase.word, Let);
        assert_eq!(phrase.to_string(), "105 лет");
    }

    #[test]
    fn test_2021_is_101_god() {
        assert_eq!(AgePhrase::for_year(2021).to_string(), "101 год");
    }

    #[test]
    fn test_age_never_negative() {
        assert_eq!(age_since(1920, 1900), 0);
        assert_eq!(age_since(1920, 1920), 0);
        assert_eq!(age_since(1920, 1923), 3);
    }
}
