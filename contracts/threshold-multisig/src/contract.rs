#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply, Response,
    StdResult, Storage, SubMsg, SubMsgResult,
};

use cw2::set_contract_version;
use cw_multisig::{
    default_threshold, Action, ApprovalInfo, ApprovalListResponse, ApprovalResponse,
    InitializedResponse, IsSignerResponse, ProposalListResponse, ProposalResponse,
    SignersResponse, ThresholdResponse, MAX_SIGNERS,
};
use cw_storage_plus::Bound;
use cw_utils::{maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{next_id, Config, Proposal, Setup, APPROVALS, DEPLOYER, PROPOSALS, SETUP};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:threshold-multisig";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    DEPLOYER.set(deps.branch(), Some(info.sender.clone()))?;
    SETUP.save(deps.storage, &Setup::Uninitialized {})?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("deployer", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize { signers, threshold } => {
            execute_initialize(deps, info, signers, threshold)
        }
        ExecuteMsg::Propose { action } => execute_propose(deps, env, info, action),
        ExecuteMsg::Approve { proposal_id } => execute_approve(deps, env, info, proposal_id),
        ExecuteMsg::Revoke { proposal_id } => execute_revoke(deps, info, proposal_id),
        ExecuteMsg::Execute { proposal_id } => execute_execute(deps, info, proposal_id),
    }
}

pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    signers: Vec<String>,
    threshold: Option<u32>,
) -> Result<Response, ContractError> {
    // caller is checked before the one-shot guard, so strangers always see Unauthorized
    if !DEPLOYER.is_admin(deps.as_ref(), &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }
    if SETUP.load(deps.storage)?.is_initialized() {
        return Err(ContractError::AlreadyInitialized {});
    }
    nonpayable(&info)?;

    let config = validate_config(deps.api, signers, threshold)?;
    let signer_count = config.signers.len();
    let threshold = config.threshold;
    SETUP.save(deps.storage, &Setup::Initialized(config))?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("action", "initialize")
        .add_attribute("sender", info.sender)
        .add_attribute("signers", signer_count.to_string())
        .add_attribute("threshold", threshold.to_string()))
}

fn validate_config(
    api: &dyn Api,
    signers: Vec<String>,
    threshold: Option<u32>,
) -> Result<Config, ContractError> {
    if signers.is_empty() {
        return Err(ContractError::NoSigners {});
    }
    if signers.len() > MAX_SIGNERS {
        return Err(ContractError::TooManySigners { max: MAX_SIGNERS });
    }

    let mut validated: Vec<Addr> = Vec::with_capacity(signers.len());
    for signer in signers {
        let addr = api.addr_validate(&signer)?;
        if validated.contains(&addr) {
            return Err(ContractError::DuplicateSigner { addr: signer });
        }
        validated.push(addr);
    }

    let signer_count = validated.len() as u32;
    let threshold = threshold.unwrap_or_else(|| default_threshold(signer_count));
    if threshold == 0 {
        return Err(ContractError::ZeroThreshold {});
    }
    if threshold > signer_count {
        return Err(ContractError::UnreachableThreshold {
            threshold,
            signers: signer_count,
        });
    }

    Ok(Config {
        signers: validated,
        threshold,
    })
}

fn load_config(store: &dyn Storage) -> Result<Config, ContractError> {
    match SETUP.load(store)? {
        Setup::Initialized(config) => Ok(config),
        Setup::Uninitialized {} => Err(ContractError::NotInitialized {}),
    }
}

/// Loads the config and makes sure `sender` is one of the signers.
fn assert_signer(store: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = load_config(store)?;
    if !config.is_signer(sender) {
        return Err(ContractError::NotASigner {});
    }
    Ok(config)
}

fn load_proposal(store: &dyn Storage, proposal_id: u64) -> Result<Proposal, ContractError> {
    PROPOSALS
        .may_load(store, proposal_id)?
        .ok_or(ContractError::UnknownProposal { proposal_id })
}

pub fn execute_propose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: Action,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    // only signers can create a proposal
    assert_signer(deps.storage, &info.sender)?;

    action.validate_addresses(deps.api)?;
    if action.has_zero_amount() {
        return Err(ContractError::InvalidAmount {});
    }

    // proposer does not approve implicitly
    let prop = Proposal {
        proposer: info.sender.clone(),
        action,
        approvals: 0,
        executed: false,
        created_height: env.block.height,
    };
    let id = next_id(deps.storage)?;
    PROPOSALS.save(deps.storage, id, &prop)?;

    Ok(Response::new()
        .set_data(to_json_binary(&id)?)
        .add_attribute("action", "propose")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", id.to_string()))
}

pub fn execute_approve(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let cfg = assert_signer(deps.storage, &info.sender)?;

    let mut prop = load_proposal(deps.storage, proposal_id)?;
    if prop.executed {
        return Err(ContractError::AlreadyExecuted {});
    }

    APPROVALS.update(
        deps.storage,
        (proposal_id, &info.sender),
        |approval| match approval {
            Some(_) => Err(ContractError::AlreadyApproved {}),
            None => Ok(env.block.height),
        },
    )?;
    prop.approvals += 1;
    PROPOSALS.save(deps.storage, proposal_id, &prop)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("action", "approve")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("approvals", prop.approvals.to_string())
        .add_attribute("status", format!("{:?}", prop.status(cfg.threshold))))
}

pub fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let cfg = assert_signer(deps.storage, &info.sender)?;

    let mut prop = load_proposal(deps.storage, proposal_id)?;
    if prop.executed {
        return Err(ContractError::AlreadyExecuted {});
    }

    let key = (proposal_id, &info.sender);
    if !APPROVALS.has(deps.storage, key) {
        return Err(ContractError::NotApproved {});
    }
    APPROVALS.remove(deps.storage, key);
    prop.approvals -= 1;
    PROPOSALS.save(deps.storage, proposal_id, &prop)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("action", "revoke")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("approvals", prop.approvals.to_string())
        .add_attribute("status", format!("{:?}", prop.status(cfg.threshold))))
}

pub fn execute_execute(
    deps: DepsMut,
    info: MessageInfo,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    // anyone can trigger this once the threshold is reached
    nonpayable(&info)?;
    let cfg = load_config(deps.storage)?;

    let mut prop = load_proposal(deps.storage, proposal_id)?;
    if prop.executed {
        return Err(ContractError::AlreadyExecuted {});
    }
    if !prop.has_quorum(cfg.threshold) {
        return Err(ContractError::QuorumNotMet {
            approvals: prop.approvals,
            threshold: cfg.threshold,
        });
    }

    prop.executed = true;
    PROPOSALS.save(deps.storage, proposal_id, &prop)?;

    // the ledger outcome is routed to `reply`: a failure aborts the whole
    // transaction and with it the executed flag, a success hands back its data
    let msg = SubMsg::reply_always(prop.action.to_cosmos_msg()?, proposal_id);

    Ok(Response::new()
        .add_submessage(msg)
        .add_attribute("action", "execute")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.result {
        SubMsgResult::Err(reason) => Err(ContractError::LedgerCallFailed {
            proposal_id: reply.id,
            reason,
        }),
        SubMsgResult::Ok(res) => {
            let resp = Response::new()
                .add_attribute("action", "ledger_result")
                .add_attribute("proposal_id", reply.id.to_string());
            Ok(match res.data {
                Some(data) => resp.set_data(data),
                None => resp,
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Signers {} => to_json_binary(&query_signers(deps)?),
        QueryMsg::Threshold {} => to_json_binary(&query_threshold(deps)?),
        QueryMsg::Initialized {} => to_json_binary(&query_initialized(deps)?),
        QueryMsg::Deployer {} => to_json_binary(&DEPLOYER.query_admin(deps)?),
        QueryMsg::IsSigner { address } => to_json_binary(&query_is_signer(deps, address)?),
        QueryMsg::Proposal { proposal_id } => to_json_binary(&query_proposal(deps, proposal_id)?),
        QueryMsg::ListProposals { start_after, limit } => {
            to_json_binary(&list_proposals(deps, start_after, limit)?)
        }
        QueryMsg::ReverseProposals {
            start_before,
            limit,
        } => to_json_binary(&reverse_proposals(deps, start_before, limit)?),
        QueryMsg::Approval {
            proposal_id,
            signer,
        } => to_json_binary(&query_approval(deps, proposal_id, signer)?),
        QueryMsg::ListApprovals {
            proposal_id,
            start_after,
            limit,
        } => to_json_binary(&list_approvals(deps, proposal_id, start_after, limit)?),
    }
}

fn query_signers(deps: Deps) -> StdResult<SignersResponse> {
    let setup = SETUP.load(deps.storage)?;
    let signers = setup
        .config()
        .map(|cfg| cfg.signers.iter().map(Addr::to_string).collect())
        .unwrap_or_default();
    Ok(SignersResponse { signers })
}

fn query_threshold(deps: Deps) -> StdResult<ThresholdResponse> {
    let setup = SETUP.load(deps.storage)?;
    Ok(ThresholdResponse {
        threshold: setup.config().map(|cfg| cfg.threshold),
    })
}

fn query_initialized(deps: Deps) -> StdResult<InitializedResponse> {
    let setup = SETUP.load(deps.storage)?;
    Ok(InitializedResponse {
        initialized: setup.is_initialized(),
    })
}

fn query_is_signer(deps: Deps, address: String) -> StdResult<IsSignerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let setup = SETUP.load(deps.storage)?;
    let is_signer = setup.config().map_or(false, |cfg| cfg.is_signer(&addr));
    Ok(IsSignerResponse { is_signer })
}

// proposals only exist once initialized, so 0 is never used to rate one
fn current_threshold(store: &dyn Storage) -> StdResult<u32> {
    let setup = SETUP.load(store)?;
    Ok(setup.config().map(|cfg| cfg.threshold).unwrap_or_default())
}

fn query_proposal(deps: Deps, id: u64) -> StdResult<ProposalResponse> {
    let threshold = current_threshold(deps.storage)?;
    let prop = PROPOSALS.load(deps.storage, id)?;
    Ok(to_response(id, prop, threshold))
}

fn to_response(id: u64, prop: Proposal, threshold: u32) -> ProposalResponse {
    let status = prop.status(threshold);
    ProposalResponse {
        id,
        proposer: prop.proposer.into(),
        action: prop.action,
        approvals: prop.approvals,
        threshold,
        status,
    }
}

// settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

fn list_proposals(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ProposalListResponse> {
    let threshold = current_threshold(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let proposals = PROPOSALS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, prop)| to_response(id, prop, threshold)))
        .collect::<StdResult<_>>()?;

    Ok(ProposalListResponse { proposals })
}

fn reverse_proposals(
    deps: Deps,
    start_before: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ProposalListResponse> {
    let threshold = current_threshold(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let end = start_before.map(Bound::exclusive);
    let proposals = PROPOSALS
        .range(deps.storage, None, end, Order::Descending)
        .take(limit)
        .map(|item| item.map(|(id, prop)| to_response(id, prop, threshold)))
        .collect::<StdResult<_>>()?;

    Ok(ProposalListResponse { proposals })
}

fn query_approval(deps: Deps, proposal_id: u64, signer: String) -> StdResult<ApprovalResponse> {
    let signer = deps.api.addr_validate(&signer)?;
    let approved_at = APPROVALS.may_load(deps.storage, (proposal_id, &signer))?;
    Ok(ApprovalResponse { approved_at })
}

fn list_approvals(
    deps: Deps,
    proposal_id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ApprovalListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);

    let approvals = APPROVALS
        .prefix(proposal_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(signer, approved_at)| ApprovalInfo {
                signer: signer.into(),
                approved_at,
            })
        })
        .collect::<StdResult<_>>()?;

    Ok(ApprovalListResponse { approvals })
}
