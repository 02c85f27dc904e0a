use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Api, BankMsg, Binary, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

/// An instruction for the asset ledger, released once a proposal reaches quorum.
#[cw_serde]
pub enum Action {
    /// Send native coins held by the multisig.
    NativeTransfer { recipient: String, amount: Coin },
    /// Transfer cw20 tokens held by the multisig.
    TokenTransfer {
        token: String,
        recipient: String,
        amount: Uint128,
    },
    /// Arbitrary call on another contract, e.g. minting on a token the
    /// multisig is minter of.
    Call {
        contract: String,
        msg: Binary,
        funds: Vec<Coin>,
    },
}

impl Action {
    /// Checks every address the action refers to.
    pub fn validate_addresses(&self, api: &dyn Api) -> StdResult<()> {
        match self {
            Action::NativeTransfer { recipient, .. } => {
                api.addr_validate(recipient)?;
            }
            Action::TokenTransfer {
                token, recipient, ..
            } => {
                api.addr_validate(token)?;
                api.addr_validate(recipient)?;
            }
            Action::Call { contract, .. } => {
                api.addr_validate(contract)?;
            }
        }
        Ok(())
    }

    /// True if the action would move a zero amount of some asset.
    pub fn has_zero_amount(&self) -> bool {
        match self {
            Action::NativeTransfer { amount, .. } => amount.amount.is_zero(),
            Action::TokenTransfer { amount, .. } => amount.is_zero(),
            Action::Call { funds, .. } => funds.iter().any(|c| c.amount.is_zero()),
        }
    }

    pub fn to_cosmos_msg(&self) -> StdResult<CosmosMsg> {
        let msg = match self {
            Action::NativeTransfer { recipient, amount } => BankMsg::Send {
                to_address: recipient.clone(),
                amount: vec![amount.clone()],
            }
            .into(),
            Action::TokenTransfer {
                token,
                recipient,
                amount,
            } => WasmMsg::Execute {
                contract_addr: token.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.clone(),
                    amount: *amount,
                })?,
                funds: vec![],
            }
            .into(),
            Action::Call {
                contract,
                msg,
                funds,
            } => WasmMsg::Execute {
                contract_addr: contract.clone(),
                msg: msg.clone(),
                funds: funds.clone(),
            }
            .into(),
        };
        Ok(msg)
    }
}
