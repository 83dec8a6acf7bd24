//! Built-in script configurations.
//!
//! - **latin**: American Soundex classes over `A-Za-z`
//! - **devanagari**: Nepali/Hindi consonant classes over U+0900..U+097F

use super::mapping::DigitMapping;
use super::script::ScriptConfig;
use crate::error::PhoneticResult;

pub const LATIN_ALPHABET: &str = "A-Za-z";
pub const DEVANAGARI_ALPHABET: &str = "\u{0900}-\u{097F}";

/// American Soundex: "Robert" and "Rupert" both give "R163"
pub fn latin() -> PhoneticResult<ScriptConfig> {
    let mapping = DigitMapping::from_classes([
        (1, "BFPV"),
        (2, "CGJKQSXZ"),
        (3, "DT"),
        (4, "L"),
        (5, "MN"),
        (6, "R"),
    ])?;
    ScriptConfig::new("latin", LATIN_ALPHABET, mapping)
}

/// Devanagari consonants grouped gutturals, palatals/retroflexes, dentals,
/// nasal, labials, then semivowels/liquids. Vowel signs stay unmapped.
pub fn devanagari() -> PhoneticResult<ScriptConfig> {
    let mapping = DigitMapping::from_classes([
        (1, "कखगघ"),
        (2, "चछजझटठडढ"),
        (3, "तथदध"),
        (4, "न"),
        (5, "पफबभम"),
        (6, "यरलव"),
    ])?;
    ScriptConfig::new("devanagari", DEVANAGARI_ALPHABET, mapping)
}

/// Latin first, then Devanagari
pub fn default_set() -> PhoneticResult<Vec<ScriptConfig>> {
    Ok(vec![latin()?, devanagari()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        let set = default_set().unwrap();
        let names: Vec<&str> = set.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["latin", "devanagari"]);
    }

    #[test]
    fn test_latin_leaves_vowels_and_hwy_unmapped() {
        let config = latin().unwrap();
        for c in "AEIOUHWY".chars() {
            assert_eq!(config.mapping().digit_for(c), None, "{} should be unmapped", c);
        }
        assert_eq!(config.mapping().len(), 18);
    }

    #[test]
    fn test_devanagari_vowel_signs_unmapped() {
        let config = devanagari().unwrap();
        assert_eq!(config.mapping().digit_for('ि'), None);
        assert_eq!(config.mapping().digit_for('ा'), None);
        assert_eq!(config.mapping().digit_for('र'), Some('6'));
        assert_eq!(config.mapping().digit_for('ज'), Some('2'));
    }
}
