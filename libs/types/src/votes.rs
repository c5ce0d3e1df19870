//! Bounded, ordered vote sets
//!
//! Vote sets never hold more than [`MAX_SIGNERS`] identities, so membership
//! is a linear scan. Insertion order is vote order and is preserved for
//! auditing.

use serde::{Deserialize, Serialize};

use crate::errors::VoteSetError;
use crate::ids::SignerId;
use crate::limits::MAX_SIGNERS;

/// Deserialization replays every entry through [`VoteSet::push`], so stored
/// data with repeated or excess identities is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SignerId>", into = "Vec<SignerId>")]
pub struct VoteSet(Vec<SignerId>);

impl VoteSet {
    pub fn new() -> Self {
        Self(Vec::with_capacity(MAX_SIGNERS))
    }

    /// Vote set seeded with a single identity.
    pub fn with_first(signer: SignerId) -> Self {
        let mut votes = Self::new();
        votes.0.push(signer);
        votes
    }

    pub fn contains(&self, signer: &SignerId) -> bool {
        self.0.iter().any(|s| s == signer)
    }

    /// Append a vote. Fails on a repeated identity or when the set is full.
    pub fn push(&mut self, signer: SignerId) -> Result<(), VoteSetError> {
        if self.contains(&signer) {
            return Err(VoteSetError::Duplicate);
        }
        if self.0.len() >= MAX_SIGNERS {
            return Err(VoteSetError::Full {
                capacity: MAX_SIGNERS,
            });
        }
        self.0.push(signer);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&SignerId> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignerId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SignerId] {
        &self.0
    }
}

impl TryFrom<Vec<SignerId>> for VoteSet {
    type Error = VoteSetError;

    fn try_from(signers: Vec<SignerId>) -> Result<Self, Self::Error> {
        let mut votes = Self::new();
        for signer in signers {
            votes.push(signer)?;
        }
        Ok(votes)
    }
}

impl From<VoteSet> for Vec<SignerId> {
    fn from(votes: VoteSet) -> Self {
        votes.0
    }
}
