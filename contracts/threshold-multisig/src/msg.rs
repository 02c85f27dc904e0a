use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_controllers::AdminResponse;
use cw_multisig::{
    Action, ApprovalListResponse, ApprovalResponse, InitializedResponse, IsSignerResponse,
    ProposalListResponse, ProposalResponse, SignersResponse, ThresholdResponse,
};

/// The sender of the instantiation becomes the deployer, the only address
/// allowed to initialize the signer set.
#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers the signer set, once. If `threshold` is omitted a strict
    /// majority of the signers is required.
    Initialize {
        signers: Vec<String>,
        threshold: Option<u32>,
    },
    Propose {
        action: Action,
    },
    Approve {
        proposal_id: u64,
    },
    /// Withdraws the sender's approval from a not yet executed proposal
    Revoke {
        proposal_id: u64,
    },
    /// Anyone can execute a proposal which reached the threshold
    Execute {
        proposal_id: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(SignersResponse)]
    Signers {},
    #[returns(ThresholdResponse)]
    Threshold {},
    #[returns(InitializedResponse)]
    Initialized {},
    #[returns(AdminResponse)]
    Deployer {},
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
