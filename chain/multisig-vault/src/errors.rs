//! Engine error types
//!
//! Every failure carries an explicit kind so callers can assert on the
//! precise cause. All checks run before any mutation.

use multisig_types::errors::{TransitionError, VoteSetError};
use multisig_types::proposal::Asset;
use thiserror::Error;

/// Taxonomy bucket of a [`VaultError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authorization,
    State,
    Funds,
    Oracle,
    Lookup,
}

/// Vault engine errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    #[error("Threshold must be > 0 and <= number of signers")]
    InvalidThreshold,

    #[error("Number of signers exceeds maximum of {max}")]
    TooManySigners { max: usize },

    #[error("Duplicate signer in list")]
    DuplicateSigner,

    #[error("Description too long: {len} bytes, maximum {max}")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Proposal amount must be positive")]
    InvalidAmount,

    #[error("Signer is not authorized for this vault")]
    UnauthorizedSigner,

    #[error("Only the proposer can cancel")]
    NotProposer,

    #[error("Proposal is not in a state that allows this operation")]
    ProposalNotActive,

    #[error("Signer has already voted on this proposal")]
    AlreadyVoted,

    #[error("Insufficient vault balance: required {required}, available {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("Asset mismatch: proposal moves {expected}, request names {actual}")]
    AssetMismatch { expected: Asset, actual: Asset },

    #[error("Recipient does not match the proposal recipient")]
    RecipientMismatch,

    #[error("Price condition not met")]
    PriceConditionNotMet,

    #[error("Price feed is stale")]
    StalePriceFeed,

    #[error("Vault not found: {vault}")]
    VaultNotFound { vault: String },

    #[error("Vault already exists: {vault}")]
    VaultAlreadyExists { vault: String },

    #[error("Proposal not found: vault {vault}, id {proposal_id}")]
    ProposalNotFound { vault: String, proposal_id: u64 },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("{0}")]
    InvalidTransition(#[from] TransitionError),
}

impl VaultError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VaultError::InvalidThreshold
            | VaultError::TooManySigners { .. }
            | VaultError::DuplicateSigner
            | VaultError::DescriptionTooLong { .. }
            | VaultError::InvalidAmount => ErrorCategory::Validation,
            VaultError::UnauthorizedSigner
            | VaultError::NotProposer
            | VaultError::RecipientMismatch => ErrorCategory::Authorization,
            VaultError::ProposalNotActive
            | VaultError::AlreadyVoted
            | VaultError::InvalidTransition(_) => ErrorCategory::State,
            VaultError::InsufficientBalance { .. }
            | VaultError::AssetMismatch { .. }
            | VaultError::Overflow => ErrorCategory::Funds,
            VaultError::PriceConditionNotMet | VaultError::StalePriceFeed => {
                ErrorCategory::Oracle
            }
            VaultError::VaultNotFound { .. }
            | VaultError::VaultAlreadyExists { .. }
            | VaultError::ProposalNotFound { .. } => ErrorCategory::Lookup,
        }
    }

    /// Short, stable name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            VaultError::InvalidThreshold => "InvalidThreshold",
            VaultError::TooManySigners { .. } => "TooManySigners",
            VaultError::DuplicateSigner => "DuplicateSigner",
            VaultError::DescriptionTooLong { .. } => "DescriptionTooLong",
            VaultError::InvalidAmount => "InvalidAmount",
            VaultError::UnauthorizedSigner => "UnauthorizedSigner",
            VaultError::NotProposer => "NotProposer",
            VaultError::ProposalNotActive => "ProposalNotActive",
            VaultError::AlreadyVoted => "AlreadyVoted",
            VaultError::InsufficientBalance { .. } => "InsufficientBalance",
            VaultError::AssetMismatch { .. } => "AssetMismatch",
            VaultError::RecipientMismatch => "RecipientMismatch",
            VaultError::PriceConditionNotMet => "PriceConditionNotMet",
            VaultError::StalePriceFeed => "StalePriceFeed",
            VaultError::VaultNotFound { .. } => "VaultNotFound",
            VaultError::VaultAlreadyExists { .. } => "VaultAlreadyExists",
            VaultError::ProposalNotFound { .. } => "ProposalNotFound",
            VaultError::Overflow => "Overflow",
            VaultError::InvalidTransition(_) => "InvalidTransition",
        }
    }
}

impl From<VoteSetError> for VaultError {
    fn from(err: VoteSetError) -> Self {
        match err {
            VoteSetError::Duplicate => VaultError::AlreadyVoted,
            VoteSetError::Full { .. } => VaultError::Overflow,
        }
    }
}

/// Price gate verdicts other than `Ok`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceGateError {
    #[error("Price condition not met")]
    ConditionNotMet,

    #[error("Price feed is stale")]
    Stale,
}

impl From<PriceGateError> for VaultError {
    fn from(err: PriceGateError) -> Self {
        match err {
            PriceGateError::ConditionNotMet => VaultError::PriceConditionNotMet,
            PriceGateError::Stale => VaultError::StalePriceFeed,
        }
    }
}

/// Custody primitive errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustodyError {
    #[error("Insufficient balance for {asset}: required {required}, available {available}")]
    InsufficientBalance {
        asset: Asset,
        required: u64,
        available: u64,
    },

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

impl From<CustodyError> for VaultError {
    fn from(err: CustodyError) -> Self {
        match err {
            CustodyError::InsufficientBalance {
                required,
                available,
                ..
            } => VaultError::InsufficientBalance {
                required,
                available,
            },
            CustodyError::Overflow => VaultError::Overflow,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_signers must be between 1 and {cap}, got {value}")]
    MaxSignersOutOfRange { value: usize, cap: usize },

    #[error("max_description_len must be between 1 and {cap}, got {value}")]
    DescriptionLimitOutOfRange { value: usize, cap: usize },

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
