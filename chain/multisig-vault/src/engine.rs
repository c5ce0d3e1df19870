//! Vault engine: the operation surface exposed to hosts
//!
//! Composes the registry, proposal store, approval engine and executor with
//! the storage, custody and oracle collaborators. Each operation:
//! 1. loads a snapshot of the vault / proposal it touches
//! 2. runs the component logic on that copy
//! 3. commits only if every check passed
//!
//! A failed operation therefore has no observable effect. Operations take
//! `&mut self`, so a single engine is serialized by the borrow checker;
//! [`SharedEngine`] extends that to multi-threaded hosts.

use multisig_types::ids::{MintId, SignerId, VaultId};
use multisig_types::proposal::{Asset, Proposal, ProposalStatus};
use multisig_types::vault::VaultConfig;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

use crate::approval;
use crate::config::EngineConfig;
use crate::custody::{Custody, Holder, InMemoryCustody};
use crate::errors::{ConfigError, VaultError};
use crate::events::{
    ContractEvent, Deposited, ProposalCreated, ProposalExecuted, ProposalStatusChanged, Vote,
    VaultCreated, VoteCast,
};
use crate::executor::{self, ExecutionPath, Settlement};
use crate::oracle::{ManualOracle, PriceOracle};
use crate::proposal::{self, ProposalRequest};
use crate::registry;
use crate::store::{InMemoryLedger, LedgerStore};

/// Multi-signature vault engine.
#[derive(Debug)]
pub struct MultisigEngine<S = InMemoryLedger, C = InMemoryCustody, O = ManualOracle> {
    config: EngineConfig,
    store: S,
    custody: C,
    oracle: O,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl MultisigEngine {
    /// Engine backed entirely by in-memory collaborators.
    pub fn in_memory(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(
            config,
            InMemoryLedger::new(),
            InMemoryCustody::new(),
            ManualOracle::default(),
        )
    }
}

impl<S, C, O> MultisigEngine<S, C, O>
where
    S: LedgerStore,
    C: Custody,
    O: PriceOracle,
{
    pub fn new(config: EngineConfig, store: S, custody: C, oracle: O) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            max_signers = config.max_signers,
            max_description_len = config.max_description_len,
            "MultisigEngine initialized"
        );
        Ok(Self {
            config,
            store,
            custody,
            oracle,
            events: Vec::new(),
        })
    }

    // ───────────────────────── Vaults ─────────────────────────

    /// Create the vault owned by `creator`.
    pub fn create_vault(
        &mut self,
        creator: SignerId,
        signers: Vec<SignerId>,
        threshold: u32,
    ) -> Result<VaultId, VaultError> {
        traced("create_vault", self.try_create_vault(creator, signers, threshold))
    }

    fn try_create_vault(
        &mut self,
        creator: SignerId,
        signers: Vec<SignerId>,
        threshold: u32,
    ) -> Result<VaultId, VaultError> {
        let vault = registry::create_vault(&self.config, creator, signers, threshold)?;
        if self.store.vault(&vault.vault_id).is_some() {
            return Err(VaultError::VaultAlreadyExists {
                vault: vault.vault_id.to_string(),
            });
        }

        let vault_id = vault.vault_id;
        info!(
            vault = %vault_id,
            creator = %creator,
            signers = vault.signer_count(),
            threshold = vault.threshold,
            "Vault created"
        );
        self.events.push(ContractEvent::VaultCreated(VaultCreated {
            vault: vault_id,
            creator,
            signers: vault.signers.clone(),
            threshold: vault.threshold,
        }));
        self.store.put_vault(vault);
        Ok(vault_id)
    }

    /// Credit native coin to a vault. Anyone may deposit.
    pub fn deposit_native(
        &mut self,
        depositor: SignerId,
        vault: &VaultId,
        amount: u64,
    ) -> Result<(), VaultError> {
        traced("deposit_native", self.try_deposit(depositor, vault, Asset::Native, amount))
    }

    /// Credit `mint` tokens to a vault. Anyone may deposit.
    pub fn deposit_token(
        &mut self,
        depositor: SignerId,
        vault: &VaultId,
        mint: &MintId,
        amount: u64,
    ) -> Result<(), VaultError> {
        traced(
            "deposit_token",
            self.try_deposit(depositor, vault, Asset::Token(mint.clone()), amount),
        )
    }

    fn try_deposit(
        &mut self,
        depositor: SignerId,
        vault: &VaultId,
        asset: Asset,
        amount: u64,
    ) -> Result<(), VaultError> {
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }
        self.load_vault(vault)?;
        self.custody.credit(Holder::Vault(*vault), &asset, amount)?;

        debug!(vault = %vault, depositor = %depositor, asset = %asset, amount, "Deposit credited");
        self.events.push(ContractEvent::Deposited(Deposited {
            vault: *vault,
            depositor,
            asset,
            amount,
        }));
        Ok(())
    }

    // ───────────────────────── Proposals ─────────────────────────

    /// Create a proposal and return its id.
    pub fn create_proposal(
        &mut self,
        proposer: SignerId,
        vault: &VaultId,
        request: ProposalRequest,
    ) -> Result<u64, VaultError> {
        traced("create_proposal", self.try_create_proposal(proposer, vault, request))
    }

    fn try_create_proposal(
        &mut self,
        proposer: SignerId,
        vault_id: &VaultId,
        request: ProposalRequest,
    ) -> Result<u64, VaultError> {
        let mut vault = self.load_vault(vault_id)?;
        let proposal = proposal::create_proposal(&self.config, &mut vault, proposer, request)?;
        let proposal_id = proposal.proposal_id;

        info!(
            vault = %vault_id,
            proposal_id,
            proposer = %proposer,
            amount = proposal.amount,
            status = %proposal.status,
            "Proposal created"
        );
        self.events.push(ContractEvent::ProposalCreated(ProposalCreated {
            vault: *vault_id,
            proposal_id,
            proposer,
            recipient: proposal.recipient,
            asset: proposal.asset(),
            amount: proposal.amount,
            status: proposal.status,
        }));
        self.store.commit_proposal(vault, proposal);
        Ok(proposal_id)
    }

    pub fn approve_proposal(
        &mut self,
        signer: SignerId,
        vault: &VaultId,
        proposal_id: u64,
    ) -> Result<ProposalStatus, VaultError> {
        traced(
            "approve_proposal",
            self.try_vote(signer, vault, proposal_id, Vote::Approve),
        )
    }

    pub fn reject_proposal(
        &mut self,
        signer: SignerId,
        vault: &VaultId,
        proposal_id: u64,
    ) -> Result<ProposalStatus, VaultError> {
        traced(
            "reject_proposal",
            self.try_vote(signer, vault, proposal_id, Vote::Reject),
        )
    }

    fn try_vote(
        &mut self,
        signer: SignerId,
        vault_id: &VaultId,
        proposal_id: u64,
        vote: Vote,
    ) -> Result<ProposalStatus, VaultError> {
        let vault = self.load_vault(vault_id)?;
        let mut proposal = self.load_proposal(vault_id, proposal_id)?;
        let from = proposal.status;

        let to = match vote {
            Vote::Approve => approval::approve_proposal(&vault, &mut proposal, signer)?,
            Vote::Reject => approval::reject_proposal(&vault, &mut proposal, signer)?,
        };

        debug!(
            vault = %vault_id,
            proposal_id,
            signer = %signer,
            ?vote,
            approvals = proposal.approvals.len(),
            rejections = proposal.rejections.len(),
            "Vote recorded"
        );
        self.store.put_proposal(proposal);
        self.events.push(ContractEvent::VoteCast(VoteCast {
            vault: *vault_id,
            proposal_id,
            signer,
            vote,
        }));
        self.record_transition(vault_id, proposal_id, from, to);
        Ok(to)
    }

    /// Cancel an `Active` proposal. Only the proposer may cancel.
    pub fn cancel_proposal(
        &mut self,
        signer: SignerId,
        vault: &VaultId,
        proposal_id: u64,
    ) -> Result<(), VaultError> {
        traced("cancel_proposal", self.try_cancel(signer, vault, proposal_id))
    }

    fn try_cancel(
        &mut self,
        signer: SignerId,
        vault_id: &VaultId,
        proposal_id: u64,
    ) -> Result<(), VaultError> {
        self.load_vault(vault_id)?;
        let mut proposal = self.load_proposal(vault_id, proposal_id)?;
        let from = proposal.status;

        approval::cancel_proposal(&mut proposal, signer)?;

        let to = proposal.status;
        self.store.put_proposal(proposal);
        self.record_transition(vault_id, proposal_id, from, to);
        Ok(())
    }

    // ───────────────────────── Execution ─────────────────────────

    /// Execute an approved native-coin proposal.
    pub fn execute_native(
        &mut self,
        executor: SignerId,
        vault: &VaultId,
        proposal_id: u64,
        recipient: SignerId,
    ) -> Result<Settlement, VaultError> {
        traced(
            "execute_native",
            self.try_execute(executor, vault, proposal_id, recipient, ExecutionPath::Native),
        )
    }

    /// Execute an approved token proposal for `mint`.
    pub fn execute_token(
        &mut self,
        executor: SignerId,
        vault: &VaultId,
        proposal_id: u64,
        recipient: SignerId,
        mint: &MintId,
    ) -> Result<Settlement, VaultError> {
        traced(
            "execute_token",
            self.try_execute(executor, vault, proposal_id, recipient, ExecutionPath::Token(mint)),
        )
    }

    fn try_execute(
        &mut self,
        executor: SignerId,
        vault_id: &VaultId,
        proposal_id: u64,
        recipient: SignerId,
        path: ExecutionPath<'_>,
    ) -> Result<Settlement, VaultError> {
        let vault = self.load_vault(vault_id)?;
        let mut proposal = self.load_proposal(vault_id, proposal_id)?;

        let settlement = match path {
            ExecutionPath::Native => executor::execute_native(
                &mut self.custody,
                &self.oracle,
                &vault,
                &mut proposal,
                executor,
                recipient,
            )?,
            ExecutionPath::Token(mint) => executor::execute_token(
                &mut self.custody,
                &self.oracle,
                &vault,
                &mut proposal,
                executor,
                recipient,
                mint,
            )?,
        };

        info!(
            vault = %vault_id,
            proposal_id,
            executor = %executor,
            recipient = %settlement.recipient,
            asset = %settlement.asset,
            amount = settlement.amount,
            "Proposal executed"
        );
        self.store.put_proposal(proposal);
        self.record_transition(
            vault_id,
            proposal_id,
            ProposalStatus::Approved,
            ProposalStatus::Executed,
        );
        self.events.push(ContractEvent::ProposalExecuted(ProposalExecuted {
            vault: *vault_id,
            proposal_id,
            executor,
            recipient: settlement.recipient,
            asset: settlement.asset.clone(),
            amount: settlement.amount,
        }));
        Ok(settlement)
    }

    // ───────────────────────── Queries ─────────────────────────

    pub fn vault(&self, vault: &VaultId) -> Option<VaultConfig> {
        self.store.vault(vault)
    }

    pub fn proposal(&self, vault: &VaultId, proposal_id: u64) -> Option<Proposal> {
        self.store.proposal(vault, proposal_id)
    }

    pub fn proposals(&self, vault: &VaultId) -> Vec<Proposal> {
        self.store.proposals_for(vault)
    }

    /// Vault balance of `asset`.
    pub fn balance(&self, vault: &VaultId, asset: &Asset) -> u64 {
        self.custody.balance(&Holder::Vault(*vault), asset)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn custody(&self) -> &C {
        &self.custody
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable oracle access, for hosts that feed prices in-process.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }

    // ───────────────────────── Internal ─────────────────────────

    fn load_vault(&self, vault: &VaultId) -> Result<VaultConfig, VaultError> {
        self.store
            .vault(vault)
            .ok_or_else(|| VaultError::VaultNotFound {
                vault: vault.to_string(),
            })
    }

    fn load_proposal(&self, vault: &VaultId, proposal_id: u64) -> Result<Proposal, VaultError> {
        self.store
            .proposal(vault, proposal_id)
            .ok_or_else(|| VaultError::ProposalNotFound {
                vault: vault.to_string(),
                proposal_id,
            })
    }

    fn record_transition(
        &mut self,
        vault: &VaultId,
        proposal_id: u64,
        from: ProposalStatus,
        to: ProposalStatus,
    ) {
        if from == to {
            return;
        }
        info!(vault = %vault, proposal_id, %from, %to, "Proposal status changed");
        self.events
            .push(ContractEvent::ProposalStatusChanged(ProposalStatusChanged {
                vault: *vault,
                proposal_id,
                from,
                to,
            }));
    }
}

fn traced<T>(operation: &'static str, result: Result<T, VaultError>) -> Result<T, VaultError> {
    if let Err(err) = &result {
        warn!(operation, kind = err.kind(), error = %err, "Operation rejected");
    }
    result
}

/// Thread-safe handle serializing every operation through one lock.
///
/// Standalone hosts have no ledger runtime ordering their calls, so the
/// vote and execution checks would race without it.
pub struct SharedEngine<S = InMemoryLedger, C = InMemoryCustody, O = ManualOracle> {
    inner: Arc<Mutex<MultisigEngine<S, C, O>>>,
}

impl<S, C, O> Clone for SharedEngine<S, C, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, C, O> SharedEngine<S, C, O>
where
    S: LedgerStore,
    C: Custody,
    O: PriceOracle,
{
    pub fn new(engine: MultisigEngine<S, C, O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    ///
    /// Engine operations never leave partial state behind, so a lock
    /// poisoned by a panicking caller is still safe to reuse.
    pub fn with<R>(&self, f: impl FnOnce(&mut MultisigEngine<S, C, O>) -> R) -> R {
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *engine)
    }
}
