//! Types library for the multi-signature vault
//!
//! Data model shared by the vault engine and its hosts: identities, vault
//! configuration, proposals and their lifecycle, and oracle quotes.
//!
//! # Modules
//! - `ids`: Identifiers (SignerId, VaultId, MintId, FeedId)
//! - `limits`: Hard limits (signer count, description length)
//! - `vault`: Vault configuration
//! - `proposal`: Proposal, status lifecycle, transfer type, price condition
//! - `votes`: Bounded ordered vote sets
//! - `quote`: Oracle price quote
//! - `errors`: Data model errors

pub mod ids;
pub mod limits;
pub mod vault;
pub mod proposal;
pub mod votes;
pub mod quote;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::limits::*;
    pub use crate::proposal::*;
    pub use crate::quote::*;
    pub use crate::vault::*;
    pub use crate::votes::*;
}
