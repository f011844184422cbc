//! Wildcard pattern expansion (`#`, `%`, `?`, `*`)

use crate::config::LetterCase;
use crate::errors::FakerResult;
use crate::random::RandomSource;

/// Printable ASCII range drawn from by `*` (`!` through `~`)
const ASCII_PRINTABLE: (i64, i64) = (33, 126);

/// Character-by-character expander driven by an injected random source
pub struct Expander<'r> {
    rng: &'r dyn RandomSource,
    letter_case: LetterCase,
}

impl<'r> Expander<'r> {
    pub fn new(rng: &'r dyn RandomSource) -> Self {
        Self {
            rng,
            letter_case: LetterCase::default(),
        }
    }

    pub fn with_letter_case(mut self, letter_case: LetterCase) -> Self {
        self.letter_case = letter_case;
        self
    }

    pub fn random_digit(&self) -> FakerResult<char> {
        self.digit_in(0, 9)
    }

    pub fn random_digit_not_null(&self) -> FakerResult<char> {
        self.digit_in(1, 9)
    }

    pub fn random_letter(&self) -> FakerResult<char> {
        let (alphabet, offset) = match self.letter_case {
            LetterCase::Lower => (25, b'a'),
            LetterCase::Upper => (25, b'A'),
            LetterCase::Mixed => (51, b'A'),
        };
        let n = self.rng.int_between(0, alphabet)? as u8;
        let letter = match (self.letter_case, n) {
            (LetterCase::Mixed, 26..=u8::MAX) => b'a' + (n - 26),
            _ => offset + n,
        };
        Ok(char::from(letter))
    }

    pub fn random_ascii(&self) -> FakerResult<char> {
        let code = self.rng.int_between(ASCII_PRINTABLE.0, ASCII_PRINTABLE.1)? as u8;
        Ok(char::from(code))
    }

    /// Expand `#` to a digit, `?` to a letter and `*` to a printable ASCII character
    pub fn expand(&self, pattern: &str) -> FakerResult<String> {
        self.replace_each(pattern, |expander, c| match c {
            '#' => expander.random_digit().map(Some),
            '?' => expander.random_letter().map(Some),
            '*' => expander.random_ascii().map(Some),
            _ => Ok(None),
        })
    }

    /// Alias of [`Expander::expand`]
    pub fn bothify(&self, pattern: &str) -> FakerResult<String> {
        self.expand(pattern)
    }

    /// Expand `#` to any digit and `%` to a non-zero digit
    pub fn numerify(&self, pattern: &str) -> FakerResult<String> {
        self.replace_each(pattern, |expander, c| match c {
            '#' => expander.random_digit().map(Some),
            '%' => expander.random_digit_not_null().map(Some),
            _ => Ok(None),
        })
    }

    /// Expand `?` to a letter
    pub fn lexify(&self, pattern: &str) -> FakerResult<String> {
        self.replace_each(pattern, |expander, c| match c {
            '?' => expander.random_letter().map(Some),
            _ => Ok(None),
        })
    }

    /// Expand `*` to a printable ASCII character
    pub fn asciify(&self, pattern: &str) -> FakerResult<String> {
        self.replace_each(pattern, |expander, c| match c {
            '*' => expander.random_ascii().map(Some),
            _ => Ok(None),
        })
    }

    fn digit_in(&self, min: i64, max: i64) -> FakerResult<char> {
        let n = self.rng.int_between(min, max)? as u8;
        Ok(char::from(b'0' + n))
    }

    fn replace_each<F>(&self, pattern: &str, mut marker: F) -> FakerResult<String>
    where
        F: FnMut(&Self, char) -> FakerResult<Option<char>>,
    {
        let mut output = String::with_capacity(pattern.len());
        for c in pattern.chars() {
            output.push(marker(self, c)?.unwrap_or(c));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};
    use regex::Regex;

    #[test]
    fn test_expand_with_scripted_digits() {
        let rng = ScriptedRandom::new([1, 2, 3, 4]);
        let expander = Expander::new(&rng);
        assert_eq!(expander.expand("Hello-####").unwrap(), "Hello-1234");
    }

    #[test]
    fn test_expand_shape() {
        let rng = StdRandom::seeded(11);
        let expander = Expander::new(&rng).with_letter_case(LetterCase::Mixed);
        let shape = Regex::new(r"^\d{3}-[A-Za-z]{2}$").unwrap();

        for _ in 0..200 {
            let value = expander.expand("###-??").unwrap();
            assert_eq!(value.chars().count(), 6);
            assert!(shape.is_match(&value), "unexpected {}", value);
        }
    }

    #[test]
    fn test_empty_and_literal_patterns() {
        let rng = StdRandom::seeded(1);
        let expander = Expander::new(&rng);
        assert_eq!(expander.expand("").unwrap(), "");
        assert_eq!(expander.expand("plain ünïcode").unwrap(), "plain ünïcode");
    }

    #[test]
    fn test_letter_cases() {
        let rng = ScriptedRandom::new([0, 25, 0, 25, 0, 25, 26, 51]);
        let lower = Expander::new(&rng);
        assert_eq!(lower.lexify("??").unwrap(), "az");

        let upper = Expander::new(&rng).with_letter_case(LetterCase::Upper);
        assert_eq!(upper.lexify("??").unwrap(), "AZ");

        let mixed = Expander::new(&rng).with_letter_case(LetterCase::Mixed);
        assert_eq!(mixed.lexify("????").unwrap(), "AZaz");
    }

    #[test]
    fn test_numerify_only_touches_digit_markers() {
        let rng = ScriptedRandom::new([0, 0]);
        let expander = Expander::new(&rng);
        // `%` never yields zero
        assert_eq!(expander.numerify("#%?*").unwrap(), "01?*");
    }

    #[test]
    fn test_asciify_range() {
        let rng = StdRandom::seeded(5);
        let expander = Expander::new(&rng);
        let value = expander.asciify("********************").unwrap();

        assert_eq!(value.len(), 20);
        assert!(value.bytes().all(|b| (33..=126).contains(&b)));
    }

    #[test]
    fn test_lexify_leaves_other_markers() {
        let rng = ScriptedRandom::new([2]);
        let expander = Expander::new(&rng);
        assert_eq!(expander.lexify("#?*").unwrap(), "#c*");
    }
}
