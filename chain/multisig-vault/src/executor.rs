//! Transfer executor: settlement of approved proposals
//!
//! Validates the caller, the proposal state, the requested asset and
//! recipient, the price gate and the vault balance, and only then moves
//! funds and marks the proposal `Executed`. Any failure leaves balances and
//! status untouched, so the call can be retried later (e.g. with a fresher
//! quote or after a deposit).

use multisig_types::ids::{MintId, SignerId};
use multisig_types::proposal::{Asset, Proposal, ProposalStatus, TransferType};
use multisig_types::vault::VaultConfig;

use crate::custody::{Custody, Holder};
use crate::errors::VaultError;
use crate::oracle::PriceOracle;
use crate::price_gate;

/// Asset path chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionPath<'a> {
    Native,
    Token(&'a MintId),
}

impl ExecutionPath<'_> {
    fn asset(&self) -> Asset {
        match self {
            ExecutionPath::Native => Asset::Native,
            ExecutionPath::Token(mint) => Asset::Token((*mint).clone()),
        }
    }
}

/// What an execution moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub asset: Asset,
    pub amount: u64,
    pub recipient: SignerId,
}

/// Execute a native-coin proposal.
pub fn execute_native<C, O>(
    custody: &mut C,
    oracle: &O,
    vault: &VaultConfig,
    proposal: &mut Proposal,
    executor: SignerId,
    recipient: SignerId,
) -> Result<Settlement, VaultError>
where
    C: Custody + ?Sized,
    O: PriceOracle + ?Sized,
{
    execute(custody, oracle, vault, proposal, executor, recipient, ExecutionPath::Native)
}

/// Execute a fungible-token proposal for `mint`.
pub fn execute_token<C, O>(
    custody: &mut C,
    oracle: &O,
    vault: &VaultConfig,
    proposal: &mut Proposal,
    executor: SignerId,
    recipient: SignerId,
    mint: &MintId,
) -> Result<Settlement, VaultError>
where
    C: Custody + ?Sized,
    O: PriceOracle + ?Sized,
{
    execute(
        custody,
        oracle,
        vault,
        proposal,
        executor,
        recipient,
        ExecutionPath::Token(mint),
    )
}

fn execute<C, O>(
    custody: &mut C,
    oracle: &O,
    vault: &VaultConfig,
    proposal: &mut Proposal,
    executor: SignerId,
    recipient: SignerId,
    path: ExecutionPath<'_>,
) -> Result<Settlement, VaultError>
where
    C: Custody + ?Sized,
    O: PriceOracle + ?Sized,
{
    if !vault.is_signer(&executor) {
        return Err(VaultError::UnauthorizedSigner);
    }

    if proposal.status != ProposalStatus::Approved {
        return Err(VaultError::ProposalNotActive);
    }

    let asset = match (&proposal.transfer_type, path) {
        (TransferType::NativeCoin, ExecutionPath::Native) => Asset::Native,
        (TransferType::FungibleToken { mint }, ExecutionPath::Token(requested))
            if mint == requested =>
        {
            Asset::Token(mint.clone())
        }
        (transfer_type, path) => {
            return Err(VaultError::AssetMismatch {
                expected: transfer_type.asset(),
                actual: path.asset(),
            });
        }
    };

    if recipient != proposal.recipient {
        return Err(VaultError::RecipientMismatch);
    }

    let quote = proposal
        .price_condition
        .as_ref()
        .and_then(|condition| oracle.latest_quote(&condition.feed_id));
    price_gate::evaluate(proposal.price_condition.as_ref(), quote.as_ref())?;

    let available = custody.balance(&Holder::Vault(vault.vault_id), &asset);
    if available < proposal.amount {
        return Err(VaultError::InsufficientBalance {
            required: proposal.amount,
            available,
        });
    }

    let next = proposal.status.transition(ProposalStatus::Executed)?;
    custody.transfer(&vault.vault_id, &recipient, &asset, proposal.amount)?;
    proposal.status = next;

    Ok(Settlement {
        asset,
        amount: proposal.amount,
        recipient,
    })
}
