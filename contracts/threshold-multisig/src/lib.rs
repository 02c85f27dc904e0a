/*!
A custody contract controlled by a fixed set of signers.

The contract is created empty. Its deployer registers the signer set and the
approval threshold exactly once with `Initialize`. From then on the deployer has
no special rights: only signers can propose actions and approve them. Once a
proposal holds at least `threshold` distinct approvals anyone can execute it,
which hands the action to the ledger. Each proposal is released at most once, and a ledger
failure reverts the execution entirely.

When no threshold is given at initialization a strict majority of the signers
is required (`floor(n / 2) + 1`).
*/

pub mod contract;
mod error;
pub mod msg;
#[cfg(test)]
mod multitest;
pub mod state;

pub use crate::error::ContractError;
