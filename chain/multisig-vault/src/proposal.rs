//! Proposal store: creation and identity of proposals scoped to a vault

use multisig_types::ids::{MintId, SignerId};
use multisig_types::proposal::{PriceCondition, Proposal, ProposalStatus, TransferType};
use multisig_types::vault::VaultConfig;
use multisig_types::votes::VoteSet;

use crate::config::EngineConfig;
use crate::errors::VaultError;

/// Caller-supplied parameters of a new proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    pub recipient: SignerId,
    pub amount: u64,
    pub transfer_type: TransferType,
    pub description: String,
    pub price_condition: Option<PriceCondition>,
}

impl ProposalRequest {
    /// Native-coin transfer with an empty description and no price gate.
    pub fn native(recipient: SignerId, amount: u64) -> Self {
        Self {
            recipient,
            amount,
            transfer_type: TransferType::NativeCoin,
            description: String::new(),
            price_condition: None,
        }
    }

    /// Token transfer with an empty description and no price gate.
    pub fn token(recipient: SignerId, amount: u64, mint: MintId) -> Self {
        Self {
            recipient,
            amount,
            transfer_type: TransferType::FungibleToken { mint },
            description: String::new(),
            price_condition: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price_condition(mut self, condition: PriceCondition) -> Self {
        self.price_condition = Some(condition);
        self
    }
}

/// Create a proposal against `vault`.
///
/// The proposer's approval is recorded automatically; in a threshold-1
/// vault the proposal is born `Approved`. On success the vault's proposal
/// counter has advanced by one. On failure neither argument is touched.
/// The price condition is stored as given and only evaluated at execution.
pub fn create_proposal(
    config: &EngineConfig,
    vault: &mut VaultConfig,
    proposer: SignerId,
    request: ProposalRequest,
) -> Result<Proposal, VaultError> {
    if !vault.is_signer(&proposer) {
        return Err(VaultError::UnauthorizedSigner);
    }

    if request.description.len() > config.max_description_len {
        return Err(VaultError::DescriptionTooLong {
            len: request.description.len(),
            max: config.max_description_len,
        });
    }

    if request.amount == 0 {
        return Err(VaultError::InvalidAmount);
    }

    let proposal_id = vault.allocate_proposal_id().ok_or(VaultError::Overflow)?;

    let approvals = VoteSet::with_first(proposer);
    let status = if approvals.len() >= vault.threshold() {
        ProposalStatus::Active.transition(ProposalStatus::Approved)?
    } else {
        ProposalStatus::Active
    };

    Ok(Proposal {
        vault: vault.vault_id,
        proposal_id,
        proposer,
        recipient: request.recipient,
        amount: request.amount,
        transfer_type: request.transfer_type,
        description: request.description,
        price_condition: request.price_condition,
        approvals,
        rejections: VoteSet::new(),
        status,
    })
}
