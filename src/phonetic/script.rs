//! Script configuration: detection rule, alphabet filter and digit mapping.

use regex::Regex;

use super::mapping::DigitMapping;
use crate::error::{PhoneticError, PhoneticResult};

/// One entry of the ordered configuration set handed to the encoder.
///
/// `alphabet` is a regex character-class body such as `A-Za-z` or
/// `\u{0900}-\u{097F}`. It yields both the default detection rule
/// (`^[alphabet]+$`) and the filter that strips foreign characters
/// during normalization.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    name: String,
    alphabet: String,
    detection: Regex,
    strip: Regex,
    mapping: DigitMapping,
}

impl ScriptConfig {
    pub fn new(
        name: impl Into<String>,
        alphabet: impl Into<String>,
        mapping: DigitMapping,
    ) -> PhoneticResult<Self> {
        let alphabet = alphabet.into();
        let detection = compile(&format!("^[{}]+$", alphabet))?;
        let strip = compile(&format!("[^{}]", alphabet))?;

        Ok(Self {
            name: name.into(),
            alphabet,
            detection,
            strip,
            mapping,
        })
    }

    /// Replace the detection rule while keeping the alphabet used for normalization.
    ///
    /// Useful when a script should also claim inputs with separators, e.g.
    /// `^[A-Za-z' -]+$` for hyphenated or apostrophized names.
    pub fn with_detection_pattern(mut self, pattern: &str) -> PhoneticResult<Self> {
        self.detection = compile(pattern)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn detection_pattern(&self) -> &str {
        self.detection.as_str()
    }

    pub fn mapping(&self) -> &DigitMapping {
        &self.mapping
    }

    /// Evaluate the detection rule against the raw input.
    pub fn matches(&self, input: &str) -> bool {
        self.detection.is_match(input)
    }

    /// Upper-case the input, then drop every character outside the alphabet.
    ///
    /// Caseless scripts pass through `to_uppercase` unchanged.
    pub fn normalize(&self, input: &str) -> String {
        let upper = input.to_uppercase();
        self.strip.replace_all(&upper, "").into_owned()
    }
}

fn compile(pattern: &str) -> PhoneticResult<Regex> {
    Regex::new(pattern).map_err(|source| PhoneticError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
