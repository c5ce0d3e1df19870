//! Vault registry: creation and invariant enforcement of vault configuration

use multisig_types::ids::SignerId;
use multisig_types::vault::VaultConfig;

use crate::config::EngineConfig;
use crate::errors::VaultError;

/// Validate a signer set and threshold and build the vault configuration.
///
/// Checks, in order: non-empty signers with `1 <= threshold <= len`, the
/// signer-count limit, then distinctness.
pub fn create_vault(
    config: &EngineConfig,
    creator: SignerId,
    signers: Vec<SignerId>,
    threshold: u32,
) -> Result<VaultConfig, VaultError> {
    if signers.is_empty() || threshold == 0 || threshold as usize > signers.len() {
        return Err(VaultError::InvalidThreshold);
    }

    if signers.len() > config.max_signers {
        return Err(VaultError::TooManySigners {
            max: config.max_signers,
        });
    }

    let mut sorted = signers.clone();
    sorted.sort();
    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(VaultError::DuplicateSigner);
    }

    Ok(VaultConfig::new(creator, signers, threshold))
}
