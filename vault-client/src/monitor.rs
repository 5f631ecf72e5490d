use anyhow::{anyhow, Result};
use common::{pda::derive_vault_address, state::VaultState};
use solana_client::rpc_client::RpcClient;

use crate::models::VaultSummary;

pub struct VaultMonitor {
    rpc_client: RpcClient,
}

impl VaultMonitor {
    pub fn new() -> Self {
        let devnet_url = "https://api.devnet.solana.com";
        Self {
            rpc_client: RpcClient::new(devnet_url.to_string()),
        }
    }

    pub fn new_with_endpoint(endpoint: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(endpoint.to_string()),
        }
    }

    pub async fn verify_program_exists(&self) -> Result<bool> {
        match self.rpc_client.get_account(&common::id()) {
            Ok(account) => Ok(account.executable),
            Err(_) => Ok(false),
        }
    }

    /// Fetches and decodes the vault ledger for a listing. `None` means the
    /// vault has not been initialized yet.
    pub async fn fetch_vault_state(&self, listing_id: &str) -> Result<Option<VaultState>> {
        let (vault, _bump) = derive_vault_address(listing_id)?;

        let account = match self.rpc_client.get_account(&vault) {
            Ok(account) => account,
            Err(_) => return Ok(None),
        };

        if account.owner != common::id() {
            return Err(anyhow!(
                "Vault account {} is not owned by the deposit program",
                vault
            ));
        }

        let state = VaultState::load(&account.data)
            .map_err(|e| anyhow!("Vault account {} is unreadable: {}", vault, e))?;
        Ok(Some(state))
    }

    pub async fn vault_summary(&self, listing_id: &str) -> Result<VaultSummary> {
        let (vault, _bump) = derive_vault_address(listing_id)?;
        let state = self.fetch_vault_state(listing_id).await?;
        Ok(VaultSummary::from_state(listing_id, &vault, state.as_ref()))
    }
}

impl Default for VaultMonitor {
    fn default() -> Self {
        Self::new()
    }
}
