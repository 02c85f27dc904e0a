use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Multisig is already initialized")]
    AlreadyInitialized {},

    #[error("Multisig is not initialized")]
    NotInitialized {},

    #[error("No signers")]
    NoSigners {},

    #[error("Too many signers, at most {max} allowed")]
    TooManySigners { max: usize },

    #[error("Duplicate signer {addr}")]
    DuplicateSigner { addr: String },

    #[error("Threshold cannot be zero")]
    ZeroThreshold {},

    #[error("Threshold of {threshold} is not reachable with {signers} signers")]
    UnreachableThreshold { threshold: u32, signers: u32 },

    #[error("Caller is not a signer")]
    NotASigner {},

    #[error("Amount must be greater than zero")]
    InvalidAmount {},

    #[error("Proposal {proposal_id} does not exist")]
    UnknownProposal { proposal_id: u64 },

    #[error("Already approved this proposal")]
    AlreadyApproved {},

    #[error("No approval to revoke")]
    NotApproved {},

    #[error("Proposal was already executed")]
    AlreadyExecuted {},

    #[error("Quorum not met: {approvals} of {threshold} required approvals")]
    QuorumNotMet { approvals: u32, threshold: u32 },

    #[error("Ledger call of proposal {proposal_id} failed: {reason}")]
    LedgerCallFailed { proposal_id: u64, reason: String },
}

impl ContractError {
    /// Stable numeric code for callers that branch on the failure kind.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Unauthorized {} => 500,
            ContractError::AlreadyInitialized {} => 501,
            ContractError::TooManySigners { .. } => 502,
            ContractError::ZeroThreshold {} => 503,
            ContractError::NotASigner {} => 504,
            ContractError::UnreachableThreshold { .. } => 505,
            ContractError::InvalidAmount {} => 506,
            ContractError::NoSigners {} => 507,
            ContractError::DuplicateSigner { .. } => 508,
            ContractError::NotInitialized {} => 509,
            ContractError::UnknownProposal { .. } => 510,
            ContractError::AlreadyApproved {} => 511,
            ContractError::NotApproved {} => 512,
            ContractError::AlreadyExecuted {} => 513,
            ContractError::QuorumNotMet { .. } => 514,
            ContractError::LedgerCallFailed { .. } => 515,
            ContractError::Std(_) | ContractError::Payment(_) => 999,
        }
    }
}
