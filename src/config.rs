//! Configuration file handling.
//!
//! Builds the ordered script list from a TOML file:
//!
//! ```toml
//! [[script]]
//! name = "latin"
//! alphabet = "A-Za-z"
//! detection = "^[A-Za-z' -]+$"   # optional, defaults to ^[alphabet]+$
//! classes = [
//!     { digit = 1, chars = "BFPV" },
//!     { digit = 2, chars = "CGJKQSXZ" },
//! ]
//! ```
//!
//! ## Environment Variables
//!
//! - `POLYSOUNDEX_CONFIG` - Path to the configuration file
//!
//! This can be set in a `.env` file in the working directory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::PhoneticResult;
use crate::phonetic::{DigitMapping, PhoneticEncoder, ScriptConfig};

/// Environment variable naming the configuration file
pub const ENV_CONFIG: &str = "POLYSOUNDEX_CONFIG";

/// Ordered list of script entries, in file order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncoderConfig {
    #[serde(default, rename = "script")]
    pub scripts: Vec<ScriptEntry>,
}

/// One `[[script]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    /// Regex character-class body, e.g. `A-Za-z`
    pub alphabet: String,
    /// Overrides the `^[alphabet]+$` detection rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection: Option<String>,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub digit: u8,
    pub chars: String,
}

impl EncoderConfig {
    pub fn from_toml_str(content: &str) -> PhoneticResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PhoneticResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded {} script configuration(s) from {}",
            config.scripts.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load the file named by `POLYSOUNDEX_CONFIG`, if set.
    ///
    /// A `.env` file in the working directory is read first (errors ignored).
    pub fn from_env() -> PhoneticResult<Option<Self>> {
        let _ = dotenvy::dotenv();

        match std::env::var(ENV_CONFIG) {
            Ok(path) if !path.is_empty() => Self::load(Path::new(&path)).map(Some),
            _ => Ok(None),
        }
    }

    /// Validate every entry and build the encoder, preserving file order.
    pub fn into_encoder(self) -> PhoneticResult<PhoneticEncoder> {
        let configs = self
            .scripts
            .into_iter()
            .map(ScriptEntry::into_script)
            .collect::<PhoneticResult<Vec<_>>>()?;
        Ok(PhoneticEncoder::new(configs))
    }
}

impl ScriptEntry {
    fn into_script(self) -> PhoneticResult<ScriptConfig> {
        let mapping = self
            .classes
            .iter()
            .fold(DigitMapping::builder(), |builder, class| {
                builder.class(class.digit, class.chars.chars())
            })
            .build()?;

        let script = ScriptConfig::new(self.name, self.alphabet, mapping)?;
        match self.detection {
            Some(pattern) => script.with_detection_pattern(&pattern),
            None => Ok(script),
        }
    }
}
