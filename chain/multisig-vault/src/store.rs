//! Ledger storage seam
//!
//! Vault configurations are keyed by vault address and proposals by
//! `(vault, proposal_id)`. Writes made by one engine operation are applied
//! together; the engine never leaves a vault counter advanced without the
//! matching proposal.

use multisig_types::ids::VaultId;
use multisig_types::proposal::Proposal;
use multisig_types::vault::VaultConfig;
use std::collections::{BTreeMap, HashMap};

/// Persistent storage for vaults and proposals.
pub trait LedgerStore {
    fn vault(&self, id: &VaultId) -> Option<VaultConfig>;

    fn put_vault(&mut self, vault: VaultConfig);

    fn proposal(&self, vault: &VaultId, proposal_id: u64) -> Option<Proposal>;

    fn put_proposal(&mut self, proposal: Proposal);

    /// All proposals of a vault ordered by id.
    fn proposals_for(&self, vault: &VaultId) -> Vec<Proposal>;

    /// Persist a new proposal together with the vault whose counter issued
    /// its id.
    fn commit_proposal(&mut self, vault: VaultConfig, proposal: Proposal) {
        self.put_vault(vault);
        self.put_proposal(proposal);
    }
}

/// HashMap/BTreeMap backed store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    vaults: HashMap<VaultId, VaultConfig>,
    proposals: BTreeMap<(VaultId, u64), Proposal>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vault_count(&self) -> usize {
        self.vaults.len()
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }
}

impl LedgerStore for InMemoryLedger {
    fn vault(&self, id: &VaultId) -> Option<VaultConfig> {
        self.vaults.get(id).cloned()
    }

    fn put_vault(&mut self, vault: VaultConfig) {
        self.vaults.insert(vault.vault_id, vault);
    }

    fn proposal(&self, vault: &VaultId, proposal_id: u64) -> Option<Proposal> {
        self.proposals.get(&(*vault, proposal_id)).cloned()
    }

    fn put_proposal(&mut self, proposal: Proposal) {
        self.proposals
            .insert((proposal.vault, proposal.proposal_id), proposal);
    }

    fn proposals_for(&self, vault: &VaultId) -> Vec<Proposal> {
        self.proposals
            .range((*vault, 0)..=(*vault, u64::MAX))
            .map(|(_, p)| p.clone())
            .collect()
    }
}
