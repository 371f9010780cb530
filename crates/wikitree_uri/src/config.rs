//! URI minting configuration.

use serde::{Deserialize, Serialize};

use crate::UriError;

/// How long deduplication state lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratorScope {
    /// A fresh generator for every minted node. Counters never accumulate,
    /// so every URI ends in `__1`.
    #[default]
    PerNode,
    /// One generator shared by all nodes minted through the same minter.
    Shared,
}

/// Configuration for [`UriMinter`](crate::UriMinter) and
/// [`UriGenerator`](crate::UriGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct UriConfig {
    /// Characters of normalized text kept before escaping.
    pub max_text_chars: usize,

    /// Lifetime of deduplication counters.
    pub scope: GeneratorScope,
}

impl Default for UriConfig {
    fn default() -> Self {
        Self {
            max_text_chars: 50,
            scope: GeneratorScope::default(),
        }
    }
}

impl UriConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, UriError> {
        let config: UriConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), UriError> {
        if self.max_text_chars == 0 {
            return Err(UriError::config("maxTextChars must be greater than 0"));
        }
        Ok(())
    }
}
