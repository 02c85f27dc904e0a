use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_controllers::Admin;
use cw_multisig::{Action, ProposalStatus};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Registration order is kept
    pub signers: Vec<Addr>,
    pub threshold: u32,
}

impl Config {
    pub fn is_signer(&self, addr: &Addr) -> bool {
        self.signers.iter().any(|s| s == addr)
    }
}

/// Signer set and threshold can only be read once they were set.
#[cw_serde]
pub enum Setup {
    Uninitialized {},
    Initialized(Config),
}

impl Setup {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Setup::Initialized(_))
    }

    pub fn config(&self) -> Option<&Config> {
        match self {
            Setup::Initialized(config) => Some(config),
            Setup::Uninitialized {} => None,
        }
    }
}

#[cw_serde]
pub struct Proposal {
    pub proposer: Addr,
    pub action: Action,
    /// size of the approval set in APPROVALS
    pub approvals: u32,
    pub executed: bool,
    pub created_height: u64,
}

impl Proposal {
    pub fn has_quorum(&self, threshold: u32) -> bool {
        self.approvals >= threshold
    }

    pub fn status(&self, threshold: u32) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.has_quorum(threshold) {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Pending
        }
    }
}

/// Sender of the instantiation; may only initialize
pub const DEPLOYER: Admin = Admin::new("deployer");
pub const SETUP: Item<Setup> = Item::new("setup");

pub const PROPOSAL_COUNT: Item<u64> = Item::new("proposal_count");
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");

// (proposal id, signer) -> height of the approval
pub const APPROVALS: Map<(u64, &Addr), u64> = Map::new("approvals");

pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = PROPOSAL_COUNT.may_load(store)?.unwrap_or_default() + 1;
    PROPOSAL_COUNT.save(store, &id)?;
    Ok(id)
}
