use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::action::Action;

/// Read-only view shared by threshold multisig implementations.
#[cw_serde]
#[derive(QueryResponses)]
pub enum MultisigQueryMsg {
    #[returns(SignersResponse)]
    Signers {},
    #[returns(ThresholdResponse)]
    Threshold {},
    #[returns(InitializedResponse)]
    Initialized {},
    #[returns(IsSignerResponse)]
    IsSigner { address: String },
    #[returns(ProposalResponse)]
    Proposal { proposal_id: u64 },
    #[returns(ProposalListResponse)]
    ListProposals {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ProposalListResponse)]
    ReverseProposals {
        start_before: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ApprovalResponse)]
    Approval { proposal_id: u64, signer: String },
    #[returns(ApprovalListResponse)]
    ListApprovals {
        proposal_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
#[derive(Copy)]
pub enum ProposalStatus {
    /// Fewer approvals than the threshold
    Pending,
    /// Enough approvals, waiting for someone to execute it
    Approved,
    /// Released to the ledger; final
    Executed,
}

/// Signers in the order they were registered. Empty until initialized.
#[cw_serde]
pub struct SignersResponse {
    pub signers: Vec<String>,
}

#[cw_serde]
pub struct ThresholdResponse {
    pub threshold: Option<u32>,
}

#[cw_serde]
pub struct InitializedResponse {
    pub initialized: bool,
}

#[cw_serde]
pub struct IsSignerResponse {
    pub is_signer: bool,
}

#[cw_serde]
pub struct ProposalResponse {
    pub id: u64,
    pub proposer: String,
    pub action: Action,
    pub approvals: u32,
    pub threshold: u32,
    pub status: ProposalStatus,
}

#[cw_serde]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalResponse>,
}

#[cw_serde]
pub struct ApprovalResponse {
    /// Block height the approval was recorded at, if any
    pub approved_at: Option<u64>,
}

#[cw_serde]
pub struct ApprovalInfo {
    pub signer: String,
    pub approved_at: u64,
}

#[cw_serde]
pub struct ApprovalListResponse {
    pub approvals: Vec<ApprovalInfo>,
}
