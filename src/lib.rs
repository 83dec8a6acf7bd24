//! polysoundex - Soundex codes for names across writing systems.
//!
//! The encoder is configured with an ordered list of scripts. Each script
//! pairs a detection rule with a character to digit-class mapping; the first
//! script whose rule accepts the input is used to compute the code.
//!
//! # Example
//!
//! ```rust
//! use polysoundex::PhoneticEncoder;
//!
//! let encoder = PhoneticEncoder::with_presets().unwrap();
//! assert_eq!(encoder.encode("Ram").unwrap(), "R500");
//! assert_eq!(encoder.encode("बिराज").unwrap(), "ब620");
//! assert_eq!(encoder.encode("12345").unwrap(), "12345");
//! ```

pub mod config;
pub mod error;
pub mod phonetic;

pub use config::EncoderConfig;
pub use error::{PhoneticError, PhoneticResult};
pub use phonetic::{presets, DigitMapping, PhoneticEncoder, ScriptConfig, CODE_LENGTH};
