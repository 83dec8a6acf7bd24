//! Character to digit-class relation for one script.

use std::collections::HashMap;

use crate::error::{PhoneticError, PhoneticResult};

/// Lowest digit class a mapping may use
pub const MIN_CLASS: u8 = 1;
/// Highest digit class a mapping may use
pub const MAX_CLASS: u8 = 6;

/// Validated mapping from characters to Soundex digit classes.
///
/// Classes are disjoint: a character listed under two digits is rejected when
/// the mapping is built, so a lookup never has to pick between candidates.
#[derive(Debug, Clone, Default)]
pub struct DigitMapping {
    digits: HashMap<char, char>,
}

impl DigitMapping {
    pub fn builder() -> DigitMappingBuilder {
        DigitMappingBuilder::default()
    }

    /// Build a mapping from `(digit, characters)` pairs.
    ///
    /// Example: `DigitMapping::from_classes([(1, "BFPV"), (2, "CGJKQSXZ")])`
    pub fn from_classes<'a, I>(classes: I) -> PhoneticResult<Self>
    where
        I: IntoIterator<Item = (u8, &'a str)>,
    {
        classes
            .into_iter()
            .fold(Self::builder(), |builder, (digit, chars)| {
                builder.class(digit, chars.chars())
            })
            .build()
    }

    /// Digit character for `c`, or `None` when the character is unmapped (vowels, signs).
    pub fn digit_for(&self, c: char) -> Option<char> {
        self.digits.get(&c).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of mapped characters
    pub fn len(&self) -> usize {
        self.digits.len()
    }
}

/// Collects digit classes and validates them in [`DigitMappingBuilder::build`].
#[derive(Debug, Default)]
pub struct DigitMappingBuilder {
    classes: Vec<(u8, Vec<char>)>,
}

impl DigitMappingBuilder {
    pub fn class(mut self, digit: u8, chars: impl IntoIterator<Item = char>) -> Self {
        self.classes.push((digit, chars.into_iter().collect()));
        self
    }

    pub fn build(self) -> PhoneticResult<DigitMapping> {
        let mut digits = HashMap::new();

        for (digit, chars) in self.classes {
            if !(MIN_CLASS..=MAX_CLASS).contains(&digit) {
                return Err(PhoneticError::InvalidConfiguration(format!(
                    "digit class {} is outside {}..={}",
                    digit, MIN_CLASS, MAX_CLASS
                )));
            }
            let code = char::from(b'0' + digit);

            for c in chars {
                match digits.insert(c, code) {
                    Some(previous) if previous != code => {
                        return Err(PhoneticError::InvalidConfiguration(format!(
                            "character '{}' is mapped to both class {} and class {}",
                            c, previous, code
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(DigitMapping { digits })
    }
}
