//! Multi-signature custody and governance engine
//!
//! A vault holds native-coin and token balances under a fixed signer set and
//! approval threshold. Funds leave only through proposals that collect enough
//! approvals and, optionally, pass a live price condition.
//!
//! # Modules
//! - `registry`: Vault creation and signer-set validation
//! - `proposal`: Proposal creation and id allocation
//! - `approval`: Voting state machine (approve, reject, cancel)
//! - `price_gate`: Pure price-condition evaluation
//! - `executor`: Settlement of approved proposals
//! - `custody`, `store`, `oracle`: Collaborator seams with in-memory implementations
//! - `engine`: Serialized operation surface over the above
//! - `events`, `errors`, `config`

pub mod config;
pub mod errors;
pub mod events;
pub mod registry;
pub mod proposal;
pub mod approval;
pub mod price_gate;
pub mod executor;
pub mod custody;
pub mod store;
pub mod oracle;
pub mod engine;

pub use config::EngineConfig;
pub use engine::{MultisigEngine, SharedEngine};
pub use errors::VaultError;
pub use proposal::ProposalRequest;
