/*!
Interface of a threshold multisig custody contract.

A fixed set of signers is registered once by the deployer. Any signer may
propose an [`Action`]; it is released to the asset ledger (bank module or a
cw20 token) only after at least `threshold` distinct signers approved it, and
at most once.

Contracts that want to drive or inspect such a multisig can use
[`MultisigContract`] to build the execute messages and run the queries.
*/

mod action;
mod helpers;
mod msg;
mod query;
mod quorum;

pub use crate::action::Action;
pub use crate::helpers::MultisigContract;
pub use crate::msg::MultisigExecuteMsg;
pub use crate::query::{
    ApprovalInfo, ApprovalListResponse, ApprovalResponse, InitializedResponse, IsSignerResponse,
    MultisigQueryMsg, ProposalListResponse, ProposalResponse, ProposalStatus, SignersResponse,
    ThresholdResponse,
};
pub use crate::quorum::{default_threshold, MAX_SIGNERS};
