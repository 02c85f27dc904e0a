use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};
use serde::de::DeserializeOwned;

use crate::action::Action;
use crate::msg::MultisigExecuteMsg;
use crate::query::{
    IsSignerResponse, MultisigQueryMsg, ProposalResponse, SignersResponse, ThresholdResponse,
};

/// MultisigContract is a wrapper around Addr that provides helpers
/// for driving a threshold multisig from another contract or a test.
#[cw_serde]
pub struct MultisigContract(pub Addr);

impl MultisigContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn encode_msg(&self, msg: MultisigExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }

    pub fn propose(&self, action: Action) -> StdResult<CosmosMsg> {
        self.encode_msg(MultisigExecuteMsg::Propose { action })
    }

    pub fn approve(&self, proposal_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(MultisigExecuteMsg::Approve { proposal_id })
    }

    pub fn revoke(&self, proposal_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(MultisigExecuteMsg::Revoke { proposal_id })
    }

    pub fn execute(&self, proposal_id: u64) -> StdResult<CosmosMsg> {
        self.encode_msg(MultisigExecuteMsg::Execute { proposal_id })
    }

    fn query<T: DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        req: MultisigQueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(self.addr(), &req)
    }

    pub fn signers(&self, querier: &QuerierWrapper) -> StdResult<Vec<String>> {
        let res: SignersResponse = self.query(querier, MultisigQueryMsg::Signers {})?;
        Ok(res.signers)
    }

    /// None until the multisig has been initialized
    pub fn threshold(&self, querier: &QuerierWrapper) -> StdResult<Option<u32>> {
        let res: ThresholdResponse = self.query(querier, MultisigQueryMsg::Threshold {})?;
        Ok(res.threshold)
    }

    pub fn is_signer(
        &self,
        querier: &QuerierWrapper,
        address: impl Into<String>,
    ) -> StdResult<bool> {
        let res: IsSignerResponse = self.query(
            querier,
            MultisigQueryMsg::IsSigner {
                address: address.into(),
            },
        )?;
        Ok(res.is_signer)
    }

    pub fn proposal(
        &self,
        querier: &QuerierWrapper,
        proposal_id: u64,
    ) -> StdResult<ProposalResponse> {
        self.query(querier, MultisigQueryMsg::Proposal { proposal_id })
    }
}
