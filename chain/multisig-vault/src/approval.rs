//! Approval engine: the voting state machine
//!
//! Operates on one proposal and the signer set / threshold of its vault.
//! Every check runs before the proposal is touched, so a failed vote leaves
//! it unchanged.

use multisig_types::ids::SignerId;
use multisig_types::proposal::{Proposal, ProposalStatus};
use multisig_types::vault::VaultConfig;

use crate::errors::VaultError;

/// Record an approval. The proposal becomes `Approved` on the vote that
/// first brings approvals up to the threshold.
pub fn approve_proposal(
    vault: &VaultConfig,
    proposal: &mut Proposal,
    signer: SignerId,
) -> Result<ProposalStatus, VaultError> {
    check_vote(vault, proposal, &signer)?;

    let reaches_threshold = proposal.approvals.len() + 1 >= vault.threshold();
    let next = if reaches_threshold {
        proposal.status.transition(ProposalStatus::Approved)?
    } else {
        proposal.status
    };

    proposal.approvals.push(signer)?;
    proposal.status = next;
    Ok(next)
}

/// Record a rejection. The proposal becomes `Rejected` as soon as the
/// approvals already cast plus the signers yet to vote fall below the
/// threshold.
pub fn reject_proposal(
    vault: &VaultConfig,
    proposal: &mut Proposal,
    signer: SignerId,
) -> Result<ProposalStatus, VaultError> {
    check_vote(vault, proposal, &signer)?;

    let remaining = vault
        .signer_count()
        .saturating_sub(proposal.approvals.len() + proposal.rejections.len() + 1);
    let unreachable = proposal.approvals.len() + remaining < vault.threshold();
    let next = if unreachable {
        proposal.status.transition(ProposalStatus::Rejected)?
    } else {
        proposal.status
    };

    proposal.rejections.push(signer)?;
    proposal.status = next;
    Ok(next)
}

/// Withdraw an `Active` proposal. Only its proposer may do so.
pub fn cancel_proposal(proposal: &mut Proposal, signer: SignerId) -> Result<(), VaultError> {
    if proposal.proposer != signer {
        return Err(VaultError::NotProposer);
    }
    if proposal.status != ProposalStatus::Active {
        return Err(VaultError::ProposalNotActive);
    }

    proposal.status = proposal.status.transition(ProposalStatus::Cancelled)?;
    Ok(())
}

fn check_vote(
    vault: &VaultConfig,
    proposal: &Proposal,
    signer: &SignerId,
) -> Result<(), VaultError> {
    if !vault.is_signer(signer) {
        return Err(VaultError::UnauthorizedSigner);
    }
    if proposal.status != ProposalStatus::Active {
        return Err(VaultError::ProposalNotActive);
    }
    if proposal.has_voted(signer) {
        return Err(VaultError::AlreadyVoted);
    }
    Ok(())
}
