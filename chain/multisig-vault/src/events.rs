//! Engine events
//!
//! Immutable records emitted by successful operations, in commit order.

use multisig_types::ids::{SignerId, VaultId};
use multisig_types::proposal::{Asset, ProposalStatus};
use serde::{Deserialize, Serialize};

/// Vault created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultCreated {
    pub vault: VaultId,
    pub creator: SignerId,
    pub signers: Vec<SignerId>,
    pub threshold: u32,
}

/// Funds credited to a vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub vault: VaultId,
    pub depositor: SignerId,
    pub asset: Asset,
    pub amount: u64,
}

/// Proposal created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalCreated {
    pub vault: VaultId,
    pub proposal_id: u64,
    pub proposer: SignerId,
    pub recipient: SignerId,
    pub asset: Asset,
    pub amount: u64,
    pub status: ProposalStatus,
}

/// Direction of a signer's vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vote {
    Approve,
    Reject,
}

/// Vote recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCast {
    pub vault: VaultId,
    pub proposal_id: u64,
    pub signer: SignerId,
    pub vote: Vote,
}

/// Proposal moved along one lifecycle edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalStatusChanged {
    pub vault: VaultId,
    pub proposal_id: u64,
    pub from: ProposalStatus,
    pub to: ProposalStatus,
}

/// Proposal settled and funds moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalExecuted {
    pub vault: VaultId,
    pub proposal_id: u64,
    pub executor: SignerId,
    pub recipient: SignerId,
    pub asset: Asset,
    pub amount: u64,
}

/// Enum wrapper for all engine events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    VaultCreated(VaultCreated),
    Deposited(Deposited),
    ProposalCreated(ProposalCreated),
    VoteCast(VoteCast),
    ProposalStatusChanged(ProposalStatusChanged),
    ProposalExecuted(ProposalExecuted),
}
