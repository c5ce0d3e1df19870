//! End-to-end vault scenarios
//!
//! Each test drives the engine through its public operation surface only.

use multisig_types::ids::{FeedId, MintId, SignerId, VaultId};
use multisig_types::proposal::{Asset, PriceCondition, ProposalStatus};
use multisig_vault::custody::{Custody, Holder};
use multisig_vault::events::ContractEvent;
use multisig_vault::{EngineConfig, MultisigEngine, ProposalRequest, VaultError};
use rust_decimal::Decimal;

struct Harness {
    engine: MultisigEngine,
    vault: VaultId,
    a: SignerId,
    b: SignerId,
    c: SignerId,
    recipient: SignerId,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Vault [A, B, C] with threshold 2, funded with 10 native units.
fn three_signer_vault() -> Harness {
    init_tracing();
    let mut engine = MultisigEngine::in_memory(EngineConfig::default()).unwrap();
    let (a, b, c) = (SignerId::new(), SignerId::new(), SignerId::new());
    let vault = engine.create_vault(a, vec![a, b, c], 2).unwrap();
    engine.deposit_native(SignerId::new(), &vault, 10).unwrap();
    Harness {
        engine,
        vault,
        a,
        b,
        c,
        recipient: SignerId::new(),
    }
}

fn recipient_balance(h: &Harness, asset: &Asset) -> u64 {
    h.engine
        .custody()
        .balance(&Holder::Account(h.recipient), asset)
}

// ═══════════════════════════════════════════════════════════════════
// Vault creation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_create_vault_validation_matrix() {
    let mut engine = MultisigEngine::in_memory(EngineConfig::default()).unwrap();
    let ids: Vec<SignerId> = (0..11).map(|_| SignerId::new()).collect();

    assert_eq!(
        engine.create_vault(SignerId::new(), vec![], 1),
        Err(VaultError::InvalidThreshold)
    );
    assert_eq!(
        engine.create_vault(SignerId::new(), ids[..3].to_vec(), 0),
        Err(VaultError::InvalidThreshold)
    );
    assert_eq!(
        engine.create_vault(SignerId::new(), ids[..3].to_vec(), 4),
        Err(VaultError::InvalidThreshold)
    );
    assert_eq!(
        engine.create_vault(SignerId::new(), ids.clone(), 1),
        Err(VaultError::TooManySigners { max: 10 })
    );
    assert_eq!(
        engine.create_vault(SignerId::new(), vec![ids[0], ids[1], ids[0]], 1),
        Err(VaultError::DuplicateSigner)
    );
    assert!(engine
        .create_vault(SignerId::new(), ids[..10].to_vec(), 10)
        .is_ok());
}

// ═══════════════════════════════════════════════════════════════════
// Scenario 1: approve then execute
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_approve_and_execute() {
    let mut h = three_signer_vault();
    let vault = h.vault;

    let p0 = h
        .engine
        .create_proposal(h.a, &vault, ProposalRequest::native(h.recipient, 1))
        .unwrap();
    let proposal = h.engine.proposal(&vault, p0).unwrap();
    assert_eq!(proposal.approvals.as_slice(), &[h.a]);
    assert_eq!(proposal.status, ProposalStatus::Active);

    let status = h.engine.approve_proposal(h.b, &vault, p0).unwrap();
    assert_eq!(status, ProposalStatus::Approved);
    assert_eq!(
        h.engine.proposal(&vault, p0).unwrap().approvals.as_slice(),
        &[h.a, h.b]
    );

    let settlement = h.engine.execute_native(h.a, &vault, p0, h.recipient).unwrap();
    assert_eq!(settlement.amount, 1);
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 9);
    assert_eq!(recipient_balance(&h, &Asset::Native), 1);
    assert_eq!(
        h.engine.proposal(&vault, p0).unwrap().status,
        ProposalStatus::Executed
    );

    // Second execution attempt
    assert_eq!(
        h.engine.execute_native(h.b, &vault, p0, h.recipient),
        Err(VaultError::ProposalNotActive)
    );
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 9);
    assert_eq!(recipient_balance(&h, &Asset::Native), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Scenario 2: eager rejection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_eager_rejection() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    h.engine
        .create_proposal(h.a, &vault, ProposalRequest::native(h.recipient, 1))
        .unwrap();
    let p1 = h
        .engine
        .create_proposal(h.a, &vault, ProposalRequest::native(h.recipient, 1))
        .unwrap();
    assert_eq!(p1, 1);

    assert_eq!(
        h.engine.reject_proposal(h.b, &vault, p1).unwrap(),
        ProposalStatus::Active
    );
    assert_eq!(
        h.engine.reject_proposal(h.c, &vault, p1).unwrap(),
        ProposalStatus::Rejected
    );

    let proposal = h.engine.proposal(&vault, p1).unwrap();
    assert_eq!(proposal.rejections.as_slice(), &[h.b, h.c]);

    assert_eq!(
        h.engine.execute_native(h.a, &vault, p1, h.recipient),
        Err(VaultError::ProposalNotActive)
    );
    assert_eq!(
        h.engine.cancel_proposal(h.a, &vault, p1),
        Err(VaultError::ProposalNotActive)
    );
}

// ═══════════════════════════════════════════════════════════════════
// Scenario 3: 1-of-1 vault self-approves
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_single_signer_self_approves() {
    let mut engine = MultisigEngine::in_memory(EngineConfig::default()).unwrap();
    let s = SignerId::new();
    let recipient = SignerId::new();
    let vault = engine.create_vault(s, vec![s], 1).unwrap();
    engine.deposit_native(s, &vault, 5).unwrap();

    let id = engine
        .create_proposal(s, &vault, ProposalRequest::native(recipient, 5))
        .unwrap();
    assert_eq!(
        engine.proposal(&vault, id).unwrap().status,
        ProposalStatus::Approved
    );

    engine.execute_native(s, &vault, id, recipient).unwrap();
    assert_eq!(engine.balance(&vault, &Asset::Native), 0);
}

// ═══════════════════════════════════════════════════════════════════
// Scenario 4: price-gated execution
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_price_gate() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    let feed = FeedId::new("SOL/USD");
    let condition = PriceCondition::new(feed.clone(), 30).with_min(Decimal::from(150));

    let gated = |h: &mut Harness| {
        let id = h
            .engine
            .create_proposal(
                h.a,
                &vault,
                ProposalRequest::native(h.recipient, 1).with_price_condition(condition.clone()),
            )
            .unwrap();
        h.engine.approve_proposal(h.c, &vault, id).unwrap();
        id
    };

    let id = gated(&mut h);
    h.engine.oracle_mut().set_now(1_000);

    // No quote at all
    assert_eq!(
        h.engine.execute_native(h.a, &vault, id, h.recipient),
        Err(VaultError::PriceConditionNotMet)
    );

    // Fresh but below the floor
    h.engine
        .oracle_mut()
        .publish(feed.clone(), Decimal::from(140), 990);
    assert_eq!(
        h.engine.execute_native(h.a, &vault, id, h.recipient),
        Err(VaultError::PriceConditionNotMet)
    );
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 10);

    // Fresh and in range
    h.engine
        .oracle_mut()
        .publish(feed.clone(), Decimal::from(160), 990);
    h.engine.execute_native(h.a, &vault, id, h.recipient).unwrap();
    assert_eq!(
        h.engine.proposal(&vault, id).unwrap().status,
        ProposalStatus::Executed
    );

    // Equivalent proposal, quote 40 seconds old
    let id = gated(&mut h);
    h.engine
        .oracle_mut()
        .publish(feed.clone(), Decimal::from(160), 960);
    assert_eq!(
        h.engine.execute_native(h.a, &vault, id, h.recipient),
        Err(VaultError::StalePriceFeed)
    );
    assert_eq!(
        h.engine.proposal(&vault, id).unwrap().status,
        ProposalStatus::Approved
    );
}

// ═══════════════════════════════════════════════════════════════════
// Scenario 5: insufficient balance is retryable
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_insufficient_balance() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    let id = h
        .engine
        .create_proposal(h.b, &vault, ProposalRequest::native(h.recipient, 25))
        .unwrap();
    h.engine.approve_proposal(h.a, &vault, id).unwrap();

    assert_eq!(
        h.engine.execute_native(h.c, &vault, id, h.recipient),
        Err(VaultError::InsufficientBalance {
            required: 25,
            available: 10
        })
    );
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 10);
    assert_eq!(recipient_balance(&h, &Asset::Native), 0);
    assert_eq!(
        h.engine.proposal(&vault, id).unwrap().status,
        ProposalStatus::Approved
    );

    h.engine.deposit_native(SignerId::new(), &vault, 15).unwrap();
    h.engine.execute_native(h.c, &vault, id, h.recipient).unwrap();
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 0);
    assert_eq!(recipient_balance(&h, &Asset::Native), 25);
}

// ═══════════════════════════════════════════════════════════════════
// Token path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_token_proposal_lifecycle() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    let usdc = MintId::new("USDC");
    h.engine
        .deposit_token(SignerId::new(), &vault, &usdc, 1_000)
        .unwrap();

    let id = h
        .engine
        .create_proposal(
            h.c,
            &vault,
            ProposalRequest::token(h.recipient, 400, usdc.clone()).with_description("payroll"),
        )
        .unwrap();
    h.engine.approve_proposal(h.b, &vault, id).unwrap();

    assert!(matches!(
        h.engine.execute_native(h.a, &vault, id, h.recipient),
        Err(VaultError::AssetMismatch { .. })
    ));
    assert!(matches!(
        h.engine
            .execute_token(h.a, &vault, id, h.recipient, &MintId::new("USDT")),
        Err(VaultError::AssetMismatch { .. })
    ));

    h.engine
        .execute_token(h.a, &vault, id, h.recipient, &usdc)
        .unwrap();
    let token = Asset::Token(usdc);
    assert_eq!(h.engine.balance(&vault, &token), 600);
    assert_eq!(recipient_balance(&h, &token), 400);
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 10);
}

// ═══════════════════════════════════════════════════════════════════
// Cancellation and isolation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_cancel_only_by_proposer_while_active() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    let id = h
        .engine
        .create_proposal(h.b, &vault, ProposalRequest::native(h.recipient, 1))
        .unwrap();

    assert_eq!(
        h.engine.cancel_proposal(h.a, &vault, id),
        Err(VaultError::NotProposer)
    );
    h.engine.cancel_proposal(h.b, &vault, id).unwrap();
    assert_eq!(
        h.engine.approve_proposal(h.c, &vault, id),
        Err(VaultError::ProposalNotActive)
    );
    assert_eq!(
        h.engine.execute_native(h.b, &vault, id, h.recipient),
        Err(VaultError::ProposalNotActive)
    );
    assert_eq!(h.engine.balance(&vault, &Asset::Native), 10);
}

#[test]
fn test_rejected_proposal_cannot_execute() {
    init_tracing();
    let mut engine = MultisigEngine::in_memory(EngineConfig::default()).unwrap();
    let (a, b, c) = (SignerId::new(), SignerId::new(), SignerId::new());
    let recipient = SignerId::new();
    let vault = engine.create_vault(a, vec![a, b, c], 3).unwrap();
    engine.deposit_native(a, &vault, 10).unwrap();
    let id = engine
        .create_proposal(a, &vault, ProposalRequest::native(recipient, 4))
        .unwrap();

    // 3-of-3: a single rejection makes the threshold unreachable
    assert_eq!(
        engine.reject_proposal(b, &vault, id).unwrap(),
        ProposalStatus::Rejected
    );

    for executor in [a, b, c] {
        assert_eq!(
            engine.execute_native(executor, &vault, id, recipient),
            Err(VaultError::ProposalNotActive)
        );
    }
    assert_eq!(
        engine.cancel_proposal(a, &vault, id),
        Err(VaultError::ProposalNotActive)
    );
    assert_eq!(engine.balance(&vault, &Asset::Native), 10);
    assert_eq!(
        engine
            .custody()
            .balance(&Holder::Account(recipient), &Asset::Native),
        0
    );
    assert_eq!(
        engine.proposal(&vault, id).unwrap().status,
        ProposalStatus::Rejected
    );
}

#[test]
fn test_vaults_are_independent() {
    let mut engine = MultisigEngine::in_memory(EngineConfig::default()).unwrap();
    let (a, b) = (SignerId::new(), SignerId::new());
    let v1 = engine.create_vault(a, vec![a, b], 2).unwrap();
    let v2 = engine.create_vault(b, vec![a, b], 1).unwrap();

    let p = engine
        .create_proposal(a, &v1, ProposalRequest::native(b, 1))
        .unwrap();
    let q = engine
        .create_proposal(a, &v2, ProposalRequest::native(b, 1))
        .unwrap();
    assert_eq!((p, q), (0, 0));
    assert_eq!(engine.proposal(&v1, 0).unwrap().status, ProposalStatus::Active);
    assert_eq!(engine.proposal(&v2, 0).unwrap().status, ProposalStatus::Approved);

    // Funds deposited to one vault are not visible to the other
    engine.deposit_native(a, &v1, 3).unwrap();
    assert_eq!(
        engine.execute_native(a, &v2, 0, b),
        Err(VaultError::InsufficientBalance {
            required: 1,
            available: 0
        })
    );
}

#[test]
fn test_event_log_records_full_lifecycle() {
    let mut h = three_signer_vault();
    let vault = h.vault;
    let id = h
        .engine
        .create_proposal(h.a, &vault, ProposalRequest::native(h.recipient, 2))
        .unwrap();
    h.engine.approve_proposal(h.b, &vault, id).unwrap();
    h.engine.execute_native(h.c, &vault, id, h.recipient).unwrap();

    let kinds: Vec<&'static str> = h
        .engine
        .events()
        .iter()
        .map(|e| match e {
            ContractEvent::VaultCreated(_) => "vault",
            ContractEvent::Deposited(_) => "deposit",
            ContractEvent::ProposalCreated(_) => "created",
            ContractEvent::VoteCast(_) => "vote",
            ContractEvent::ProposalStatusChanged(_) => "status",
            ContractEvent::ProposalExecuted(_) => "executed",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["vault", "deposit", "created", "vote", "status", "status", "executed"]
    );

    let json = serde_json::to_string(h.engine.events()).unwrap();
    assert!(json.contains("ProposalExecuted"));
}
