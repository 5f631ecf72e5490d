use common::{
    error::VaultError, instruction::VaultInstruction, pda::derive_vault_address, LAMPORTS_PER_SOL,
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Converts a SOL amount to lamports, always rounding toward zero.
pub fn sol_to_lamports(amount_sol: f64) -> Result<u64, VaultError> {
    if !amount_sol.is_finite() || amount_sol <= 0.0 {
        return Err(VaultError::InvalidAmount);
    }
    let lamports = (amount_sol * LAMPORTS_PER_SOL as f64).floor();
    if lamports >= u64::MAX as f64 {
        return Err(VaultError::InvalidAmount);
    }
    Ok(lamports as u64)
}

// Deposit and refund share the account shape: authority first (signer,
// writable), then the vault, then the system program. Order matters to the
// deployed program.
fn vault_instruction(
    payload: VaultInstruction,
    authority: &Pubkey,
    listing_id: &str,
) -> Result<Instruction, VaultError> {
    let (vault, _bump) = derive_vault_address(listing_id)?;
    let data = payload.pack()?;

    Ok(Instruction {
        program_id: common::id(),
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

pub fn build_deposit_instruction(
    depositor: &Pubkey,
    listing_id: &str,
    amount_sol: f64,
) -> Result<Instruction, VaultError> {
    let amount = sol_to_lamports(amount_sol)?;
    vault_instruction(VaultInstruction::Deposit { amount }, depositor, listing_id)
}

pub fn build_refund_instruction(
    depositor: &Pubkey,
    listing_id: &str,
    amount_sol: f64,
) -> Result<Instruction, VaultError> {
    let amount = sol_to_lamports(amount_sol)?;
    vault_instruction(VaultInstruction::Refund { amount }, depositor, listing_id)
}

pub fn build_initialize_vault_instruction(
    creator: &Pubkey,
    listing_id: &str,
) -> Result<Instruction, VaultError> {
    vault_instruction(VaultInstruction::InitializeVault, creator, listing_id)
}
