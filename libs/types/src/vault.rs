//! Vault configuration

use serde::{Deserialize, Serialize};

use crate::ids::{SignerId, VaultId};

/// Signer set and approval threshold governing a vault.
///
/// The signer set is fixed at creation. `proposal_count` is the only field
/// that changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    pub vault_id: VaultId,
    /// Identity that created the vault; carries no privilege afterwards
    pub creator: SignerId,
    pub signers: Vec<SignerId>,
    pub threshold: u32,
    /// Next proposal identifier
    pub proposal_count: u64,
}

impl VaultConfig {
    pub fn new(creator: SignerId, signers: Vec<SignerId>, threshold: u32) -> Self {
        Self {
            vault_id: VaultId::for_creator(&creator),
            creator,
            signers,
            threshold,
            proposal_count: 0,
        }
    }

    pub fn is_signer(&self, identity: &SignerId) -> bool {
        self.signers.iter().any(|s| s == identity)
    }

    pub fn signer_count(&self) -> usize {
        self.signers.len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold as usize
    }

    /// Hand out the next proposal id and advance the counter.
    ///
    /// Returns `None` once the counter is exhausted; ids are never reused.
    pub fn allocate_proposal_id(&mut self) -> Option<u64> {
        let id = self.proposal_count;
        self.proposal_count = id.checked_add(1)?;
        Some(id)
    }
}
