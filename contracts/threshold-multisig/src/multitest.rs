use assert_matches::assert_matches;
use cosmwasm_std::{from_json, Binary};
use cw_multisig::ProposalStatus;

use crate::ContractError;

use self::suite::{Suite, SuiteBuilder, ALICE, BOB, CHARLIE, DEPLOYER, RECEIPT};


const RECIPIENT: &str = "recipient";

#[test]
fn deployer_initializes_signer_set() {
    let mut suite = SuiteBuilder::new().uninitialized().build();
    assert!(!suite.initialized().unwrap());
    assert_eq!(suite.threshold().unwrap(), None);

    let res = suite
        .initialize(DEPLOYER, &[ALICE, BOB, CHARLIE], None)
        .unwrap();
    let ok: bool = from_json(res.data.unwrap().as_slice()).unwrap();
    assert!(ok);

    assert_eq!(suite.signers().unwrap(), vec![ALICE, BOB, CHARLIE]);
    assert_eq!(suite.threshold().unwrap(), Some(2));
    assert!(suite.initialized().unwrap());
}

#[test]
fn signer_cannot_initialize() {
    let mut suite = SuiteBuilder::new().uninitialized().build();

    let err = suite
        .initialize(ALICE, &[ALICE, BOB, CHARLIE], Some(2))
        .unwrap_err();
    let err: ContractError = err.downcast().unwrap();
    assert_eq!(err, ContractError::Unauthorized {});
    assert_eq!(err.code(), 500);
    assert!(!suite.initialized().unwrap());
}

#[test]
fn second_initialization_rejected() {
    let mut suite = Suite::new();

    let err = suite.initialize(DEPLOYER, &[DEPLOYER], Some(1)).unwrap_err();
    assert_eq!(ContractError::AlreadyInitialized {}, err.downcast().unwrap());

    let err = suite.initialize(BOB, &[BOB], Some(1)).unwrap_err();
    assert_eq!(ContractError::Unauthorized {}, err.downcast().unwrap());

    assert_eq!(suite.signers().unwrap(), vec![ALICE, BOB, CHARLIE]);
    assert!(!suite.is_signer(DEPLOYER).unwrap());
}

#[test]
fn native_transfer_released_on_quorum() {
    let mut suite = SuiteBuilder::new().with_native_funds(1000).build();

    let action = suite.native_transfer(RECIPIENT, 400);
    let id = suite.propose(ALICE, action).unwrap();

    suite.approve(ALICE, id).unwrap();
    let err = suite.execute(RECIPIENT, id).unwrap_err();
    assert_eq!(
        ContractError::QuorumNotMet {
            approvals: 1,
            threshold: 2
        },
        err.downcast().unwrap()
    );
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 0);

    suite.approve(BOB, id).unwrap();
    assert_eq!(suite.proposal(id).unwrap().status, ProposalStatus::Approved);

    // execution is open to anyone once approved
    suite.execute(RECIPIENT, id).unwrap();
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 400);
    assert_eq!(suite.multisig_balance().unwrap(), 600);
    assert_eq!(suite.proposal(id).unwrap().status, ProposalStatus::Executed);

    // no replay
    let err = suite.execute(ALICE, id).unwrap_err();
    assert_eq!(ContractError::AlreadyExecuted {}, err.downcast().unwrap());
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 400);
}

#[test]
fn failed_ledger_call_rolls_back_execution() {
    let mut suite = Suite::new();

    let action = suite.native_transfer(RECIPIENT, 500);
    let id = suite.propose(BOB, action).unwrap();
    suite.approve(ALICE, id).unwrap();
    suite.approve(CHARLIE, id).unwrap();

    // nothing to send yet
    let err = suite.execute(BOB, id).unwrap_err();
    let err: ContractError = err.downcast().unwrap();
    assert_matches!(
        err,
        ContractError::LedgerCallFailed { proposal_id, ref reason }
            if proposal_id == id && reason.contains("Cannot Sub with 0 and 500")
    );
    assert_eq!(err.code(), 515);

    let prop = suite.proposal(id).unwrap();
    assert_eq!(prop.status, ProposalStatus::Approved);
    assert_eq!(prop.approvals, 2);
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 0);

    // retry once funded
    suite.fund_multisig(500).unwrap();
    suite.execute(BOB, id).unwrap();
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 500);
    assert_eq!(suite.multisig_balance().unwrap(), 0);
    assert_eq!(suite.proposal(id).unwrap().status, ProposalStatus::Executed);
}

#[test]
fn token_transfer_released_on_quorum() {
    let mut suite = SuiteBuilder::new().with_token_funds(1000).build();

    let action = suite.token_transfer(RECIPIENT, 250);
    let id = suite.propose(CHARLIE, action).unwrap();
    suite.approve(CHARLIE, id).unwrap();
    suite.approve(ALICE, id).unwrap();
    suite.execute(CHARLIE, id).unwrap();

    assert_eq!(suite.token_balance(RECIPIENT).unwrap(), 250);

    // more than the multisig holds
    let action = suite.token_transfer(RECIPIENT, 5000);
    let id = suite.propose(CHARLIE, action).unwrap();
    suite.approve(BOB, id).unwrap();
    suite.approve(ALICE, id).unwrap();
    let err: ContractError = suite.execute(CHARLIE, id).unwrap_err().downcast().unwrap();
    assert_matches!(
        err,
        ContractError::LedgerCallFailed { proposal_id, ref reason }
            if proposal_id == id && reason.contains("Cannot Sub")
    );
    assert_eq!(suite.proposal(id).unwrap().status, ProposalStatus::Approved);
    assert_eq!(suite.token_balance(RECIPIENT).unwrap(), 250);
}

#[test]
fn execute_returns_ledger_result() {
    let mut suite = SuiteBuilder::new()
        .with_threshold(1)
        .with_native_funds(100)
        .build();

    let action = suite.receipt_call().unwrap();
    let id = suite.propose(ALICE, action).unwrap();
    suite.approve(BOB, id).unwrap();
    let res = suite.execute(CHARLIE, id).unwrap();
    assert_eq!(res.data, Some(Binary::from(RECEIPT.as_bytes())));
    assert_eq!(suite.proposal(id).unwrap().status, ProposalStatus::Executed);

    // bank sends carry no data
    let action = suite.native_transfer(RECIPIENT, 100);
    let id = suite.propose(ALICE, action).unwrap();
    suite.approve(ALICE, id).unwrap();
    let res = suite.execute(ALICE, id).unwrap();
    assert_eq!(res.data, None);
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 100);
}

#[test]
fn multisig_controls_minting() {
    let mut suite = Suite::new();

    let action = suite.mint(RECIPIENT, 1000).unwrap();
    let id = suite.propose(ALICE, action).unwrap();

    suite.approve(BOB, id).unwrap();
    suite.execute(BOB, id).unwrap_err();
    assert_eq!(suite.token_balance(RECIPIENT).unwrap(), 0);

    suite.approve(ALICE, id).unwrap();
    suite.execute(BOB, id).unwrap();
    assert_eq!(suite.token_balance(RECIPIENT).unwrap(), 1000);
}

#[test]
fn revoked_approval_no_longer_counts() {
    let mut suite = SuiteBuilder::new()
        .with_threshold(3)
        .with_native_funds(100)
        .build();
    assert_eq!(suite.threshold().unwrap(), Some(3));

    let action = suite.native_transfer(RECIPIENT, 100);
    let id = suite.propose(ALICE, action).unwrap();
    for signer in [ALICE, BOB, CHARLIE] {
        suite.approve(signer, id).unwrap();
    }

    suite.revoke(CHARLIE, id).unwrap();
    let err = suite.execute(ALICE, id).unwrap_err();
    assert_eq!(
        ContractError::QuorumNotMet {
            approvals: 2,
            threshold: 3
        },
        err.downcast().unwrap()
    );

    let err = suite.revoke(CHARLIE, id).unwrap_err();
    assert_eq!(ContractError::NotApproved {}, err.downcast().unwrap());

    suite.approve(CHARLIE, id).unwrap();
    suite.execute(ALICE, id).unwrap();
    assert_eq!(suite.native_balance(RECIPIENT).unwrap(), 100);
}

#[test]
fn outsiders_cannot_take_part() {
    let mut suite = SuiteBuilder::new().with_native_funds(100).build();

    let action = suite.native_transfer(DEPLOYER, 100);
    let err = suite.propose(DEPLOYER, action.clone()).unwrap_err();
    assert_eq!(ContractError::NotASigner {}, err.downcast().unwrap());

    let id = suite.propose(BOB, action).unwrap();
    let err = suite.approve(DEPLOYER, id).unwrap_err();
    assert_eq!(ContractError::NotASigner {}, err.downcast().unwrap());
    let err = suite.approve(RECIPIENT, id).unwrap_err();
    assert_eq!(ContractError::NotASigner {}, err.downcast().unwrap());

    let err = suite.approve(BOB, id + 1).unwrap_err();
    assert_eq!(
        ContractError::UnknownProposal { proposal_id: id + 1 },
        err.downcast().unwrap()
    );

    assert_eq!(suite.proposal(id).unwrap().approvals, 0);
}
