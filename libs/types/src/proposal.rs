//! Proposal lifecycle types
//!
//! A proposal moves funds of exactly one asset from a vault to a recipient.
//! Status changes go through [`ProposalStatus::transition`], which only
//! admits the edges of the lifecycle table:
//!
//! ```text
//! Active   -> Approved | Rejected | Cancelled
//! Approved -> Executed
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TransitionError;
use crate::ids::{FeedId, MintId, SignerId, VaultId};
use crate::votes::VoteSet;

/// Proposal status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    /// Collecting votes
    Active,
    /// Threshold reached, awaiting execution
    Approved,
    /// Threshold can no longer be reached (terminal)
    Rejected,
    /// Funds moved (terminal)
    Executed,
    /// Withdrawn by the proposer (terminal)
    Cancelled,
}

impl ProposalStatus {
    /// Check if a direct transition to `to` is in the lifecycle table.
    pub fn can_transition_to(&self, to: ProposalStatus) -> bool {
        use ProposalStatus::*;
        matches!(
            (self, to),
            (Active, Approved) | (Active, Rejected) | (Active, Cancelled) | (Approved, Executed)
        )
    }

    /// Move to `to`, rejecting any edge outside the lifecycle table.
    pub fn transition(self, to: ProposalStatus) -> Result<ProposalStatus, TransitionError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(TransitionError::Invalid { from: self, to })
        }
    }

    /// Rejected, Executed and Cancelled accept nothing further. Approved
    /// only accepts execution, so it is not terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Rejected | ProposalStatus::Executed | ProposalStatus::Cancelled
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Active => "Active",
            ProposalStatus::Approved => "Approved",
            ProposalStatus::Rejected => "Rejected",
            ProposalStatus::Executed => "Executed",
            ProposalStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Asset held in custody
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "mint")]
pub enum Asset {
    Native,
    Token(MintId),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => f.write_str("native"),
            Asset::Token(mint) => write!(f, "token:{}", mint),
        }
    }
}

/// What a proposal moves out of the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransferType {
    NativeCoin,
    FungibleToken { mint: MintId },
}

impl TransferType {
    pub fn asset(&self) -> Asset {
        match self {
            TransferType::NativeCoin => Asset::Native,
            TransferType::FungibleToken { mint } => Asset::Token(mint.clone()),
        }
    }
}

/// Optional oracle gate checked at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCondition {
    pub feed_id: FeedId,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub max_age_seconds: u64,
}

impl PriceCondition {
    /// Condition with no bounds; only feed identity and freshness are checked.
    pub fn new(feed_id: FeedId, max_age_seconds: u64) -> Self {
        Self {
            feed_id,
            min_price: None,
            max_price: None,
            max_age_seconds,
        }
    }

    pub fn with_min(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

/// A request to move `amount` of one asset to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub vault: VaultId,
    pub proposal_id: u64,
    pub proposer: SignerId,
    pub recipient: SignerId,
    /// Smallest asset unit
    pub amount: u64,
    pub transfer_type: TransferType,
    pub description: String,
    pub price_condition: Option<PriceCondition>,
    pub approvals: VoteSet,
    pub rejections: VoteSet,
    pub status: ProposalStatus,
}

impl Proposal {
    /// Check if `signer` has cast either vote.
    pub fn has_voted(&self, signer: &SignerId) -> bool {
        self.approvals.contains(signer) || self.rejections.contains(signer)
    }

    /// Signers of a `signer_count`-sized vault that have not voted yet.
    pub fn remaining_voters(&self, signer_count: usize) -> usize {
        signer_count.saturating_sub(self.approvals.len() + self.rejections.len())
    }

    pub fn asset(&self) -> Asset {
        self.transfer_type.asset()
    }

    /// Check vote invariant: no identity in both sets
    pub fn check_invariant(&self) -> bool {
        !self.approvals.iter().any(|s| self.rejections.contains(s))
    }
}
