//! Multi-script Soundex encoder.
//!
//! The encoder walks an ordered list of [`ScriptConfig`]s, picks the first one
//! whose detection rule accepts the input and runs the classic four-character
//! Soundex reduction with that script's digit mapping.
//!
//! Example with the built-in presets: "Robert" gives "R163", "बिराज" gives "ब620".

use std::iter;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, warn};

use super::mapping::DigitMapping;
use super::presets;
use super::script::ScriptConfig;
use crate::error::{PhoneticError, PhoneticResult};

/// Length of every produced code, in characters
pub const CODE_LENGTH: usize = 4;

/// Doubles as "previous character unmapped" and as the padding digit, so a
/// trailing '0' cannot tell "no class" apart from "ran out of input".
const NO_CLASS: char = '0';

static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Nd}+$").expect("numeric pattern is valid"));

/// Stateless encoder over an immutable, ordered configuration set.
#[derive(Debug, Clone)]
pub struct PhoneticEncoder {
    configs: Vec<ScriptConfig>,
}

impl PhoneticEncoder {
    /// Configurations are tried in the given order; the first match wins.
    pub fn new(configs: Vec<ScriptConfig>) -> Self {
        Self { configs }
    }

    /// Encoder over [`presets::default_set`] (Latin, then Devanagari)
    pub fn with_presets() -> PhoneticResult<Self> {
        Ok(Self::new(presets::default_set()?))
    }

    pub fn configs(&self) -> &[ScriptConfig] {
        &self.configs
    }

    /// First configuration whose detection rule matches the raw input.
    pub fn script_for(&self, input: &str) -> Option<&ScriptConfig> {
        self.configs.iter().find(|config| config.matches(input))
    }

    /// Compute the phonetic code of `input`.
    ///
    /// Empty and all-digit inputs are returned unchanged. Everything else
    /// yields exactly [`CODE_LENGTH`] characters or an error.
    pub fn encode(&self, input: &str) -> PhoneticResult<String> {
        if input.is_empty() || NUMERIC.is_match(input) {
            return Ok(input.to_string());
        }

        let config = self
            .script_for(input)
            .ok_or_else(|| PhoneticError::UnsupportedScript(input.to_string()))?;

        if config.mapping().is_empty() {
            return Err(PhoneticError::InvalidConfiguration(format!(
                "script '{}' has no digit mapping",
                config.name()
            )));
        }
        debug!(script = config.name(), "Selected script configuration");

        let normalized = config.normalize(input);
        trace!(input, normalized = %normalized, "Normalized input");

        reduce(&normalized, config.mapping()).ok_or_else(|| {
            warn!(
                script = config.name(),
                input, "Input has no alphabet characters left after normalization"
            );
            PhoneticError::EmptyAfterNormalization(input.to_string())
        })
    }

    /// True when both inputs produce the same code.
    pub fn sounds_like(&self, first: &str, second: &str) -> PhoneticResult<bool> {
        Ok(self.encode(first)? == self.encode(second)?)
    }
}

/// Soundex reduction over an already normalized buffer. `None` when it is empty.
fn reduce(normalized: &str, mapping: &DigitMapping) -> Option<String> {
    let mut chars = normalized.chars();
    let first = chars.next()?;

    let mut code = String::from(first);
    let mut len = 1;
    let mut last_code = NO_CLASS;

    for c in chars {
        if len >= CODE_LENGTH {
            break;
        }
        match mapping.digit_for(c) {
            Some(digit) if digit != last_code => {
                code.push(digit);
                len += 1;
                last_code = digit;
            }
            Some(_) => {}
            // Unmapped characters (vowels) break duplicate suppression
            None => last_code = NO_CLASS,
        }
    }

    Some(
        code.chars()
            .chain(iter::repeat(NO_CLASS))
            .take(CODE_LENGTH)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> PhoneticEncoder {
        PhoneticEncoder::with_presets().unwrap()
    }

    #[test]
    fn test_soundex() {
        let encoder = encoder();
        assert_eq!(encoder.encode("Smith").unwrap(), "S530");
        assert_eq!(encoder.encode("Smyth").unwrap(), "S530");
        assert_eq!(encoder.encode("Robert").unwrap(), "R163");
        assert_eq!(encoder.encode("Rupert").unwrap(), "R163");
    }

    #[test]
    fn test_soundex_empty() {
        assert_eq!(encoder().encode("").unwrap(), "");
    }

    #[test]
    fn test_reduce_counts_chars_not_bytes() {
        let mapping = presets::devanagari().unwrap();
        let code = reduce("बराजकत", mapping.mapping()).unwrap();
        assert_eq!(code, "ब621");
        assert_eq!(code.chars().count(), CODE_LENGTH);
    }

    #[test]
    fn test_reduce_empty_buffer() {
        let mapping = DigitMapping::from_classes([(1, "B")]).unwrap();
        assert_eq!(reduce("", &mapping), None);
    }

    #[test]
    fn test_leading_char_is_not_coded() {
        // The seed character does not prime duplicate suppression
        assert_eq!(encoder().encode("Pfister").unwrap(), "P123");
    }

    #[test]
    fn test_encoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PhoneticEncoder>();
    }
}
