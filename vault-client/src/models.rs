use common::{lamports_to_sol, state::VaultState, FUNDING_GOAL_SOL};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

// JSON/display mirror of the on-chain ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultSummary {
    pub listing_id: String,
    pub vault_address: String,
    pub exists: bool,
    pub total_deposited_sol: f64,
    pub funding_goal_sol: f64,
    pub remaining_sol: f64,
    pub depositors: usize,
    pub goal_reached: bool,
}

impl VaultSummary {
    pub fn from_state(listing_id: &str, vault: &Pubkey, state: Option<&VaultState>) -> Self {
        let total_deposited_sol = state
            .map(|s| lamports_to_sol(s.total_deposits))
            .unwrap_or(0.0);
        VaultSummary {
            listing_id: listing_id.to_string(),
            vault_address: vault.to_string(),
            exists: state.is_some(),
            total_deposited_sol,
            funding_goal_sol: FUNDING_GOAL_SOL,
            remaining_sol: (FUNDING_GOAL_SOL - total_deposited_sol).max(0.0),
            depositors: state.map(|s| s.deposits.len()).unwrap_or(0),
            goal_reached: total_deposited_sol >= FUNDING_GOAL_SOL,
        }
    }
}
