use cosmwasm_schema::cw_serde;

use crate::action::Action;

/// Proposal lifecycle messages every threshold multisig understands.
/// Initialization is contract specific and not part of this interface.
#[cw_serde]
pub enum MultisigExecuteMsg {
    Propose { action: Action },
    Approve { proposal_id: u64 },
    Revoke { proposal_id: u64 },
    Execute { proposal_id: u64 },
}
