//! Engine configuration
//!
//! Limits may be tightened below the hard caps in `multisig_types::limits`
//! but never raised above them: vote sets are sized by `MAX_SIGNERS`.

use multisig_types::limits::{MAX_DESCRIPTION_LEN, MAX_SIGNERS};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the vault engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum signers per vault.
    pub max_signers: usize,
    /// Maximum proposal description length in bytes.
    pub max_description_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_signers: MAX_SIGNERS,
            max_description_len: MAX_DESCRIPTION_LEN,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_signers == 0 || self.max_signers > MAX_SIGNERS {
            return Err(ConfigError::MaxSignersOutOfRange {
                value: self.max_signers,
                cap: MAX_SIGNERS,
            });
        }
        if self.max_description_len == 0 || self.max_description_len > MAX_DESCRIPTION_LEN {
            return Err(ConfigError::DescriptionLimitOutOfRange {
                value: self.max_description_len,
                cap: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(())
    }
}
