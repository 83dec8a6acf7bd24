//! Multi-script phonetic encoding.
//!
//! A [`PhoneticEncoder`] holds an ordered list of [`ScriptConfig`]s. Each one
//! binds a detection rule to a [`DigitMapping`], so new scripts are added as
//! data rather than code.
//!
//! # Modules
//!
//! - **encoder**: script dispatch and the Soundex reduction
//! - **mapping**: validated character to digit-class relation
//! - **script**: detection rule, alphabet filter and normalization
//! - **presets**: built-in Latin and Devanagari configurations

pub mod encoder;
pub mod mapping;
pub mod presets;
pub mod script;

pub use encoder::{PhoneticEncoder, CODE_LENGTH};
pub use mapping::{DigitMapping, DigitMappingBuilder};
pub use script::ScriptConfig;
