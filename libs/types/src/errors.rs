//! Error types for the vault data model
//!
//! Structural violations detected by the types themselves, independent of
//! any vault configuration.

use thiserror::Error;

use crate::proposal::ProposalStatus;

/// Proposal status transition outside the allowed table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid status transition from {from} to {to}")]
    Invalid {
        from: ProposalStatus,
        to: ProposalStatus,
    },
}

/// Vote recording errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteSetError {
    #[error("Identity already recorded in vote set")]
    Duplicate,

    #[error("Vote set full: capacity {capacity}")]
    Full { capacity: usize },
}
