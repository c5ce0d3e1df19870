//! Identifier types for vault entities
//!
//! Signer identities are opaque UUID v7 values handed to us by the host after
//! authentication. Vault addresses are derived from the creator identity so a
//! creator owns exactly one vault.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Domain separator mixed into vault address derivation.
const VAULT_SEED: &[u8] = b"vault";

/// Identity of a caller (creator, signer, proposer, recipient).
///
/// The core never verifies signatures; it only compares identities for
/// membership in a vault's signer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignerId(Uuid);

impl SignerId {
    /// Create a new identity with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for SignerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SignerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of a vault.
///
/// Derived as `sha256("vault" || creator)`, so the same creator always maps
/// to the same vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultId([u8; 32]);

impl VaultId {
    /// Derive the vault address owned by `creator`.
    pub fn for_creator(creator: &SignerId) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(VAULT_SEED);
        hasher.update(creator.as_bytes());
        Self(hasher.finalize().into())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex encoding of the address
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Identifier of a fungible token type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MintId(String);

impl MintId {
    /// Create a new MintId
    ///
    /// # Panics
    /// Panics if the identifier is empty
    pub fn new(mint: impl Into<String>) -> Self {
        let s = mint.into();
        assert!(!s.is_empty(), "MintId must not be empty");
        Self(s)
    }

    /// Try to create a MintId, returning None if empty
    pub fn try_new(mint: impl Into<String>) -> Option<Self> {
        let s = mint.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MintId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of an oracle price series (e.g. "SOL/USD").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(String);

impl FeedId {
    /// Create a new FeedId
    ///
    /// # Panics
    /// Panics if the identifier is empty
    pub fn new(feed: impl Into<String>) -> Self {
        let s = feed.into();
        assert!(!s.is_empty(), "FeedId must not be empty");
        Self(s)
    }

    pub fn try_new(feed: impl Into<String>) -> Option<Self> {
        let s = feed.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FeedId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
