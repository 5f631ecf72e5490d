use common::{error::VaultError, pda::VAULT_SEED, refund_payout, state::VaultState};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

pub fn process_initialize_vault(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let listing_creator = next_account_info(account_info_iter)?;
    let vault_account = next_account_info(account_info_iter)?;
    let system_program = next_account_info(account_info_iter)?;

    if !listing_creator.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let rent = Rent::get()?;
    let lamports = rent.minimum_balance(VaultState::MAX_SIZE);

    // Allocated at full ledger size so deposits never have to grow the account.
    let (_, bump) = Pubkey::find_program_address(&[VAULT_SEED], program_id);
    invoke_signed(
        &system_instruction::create_account(
            listing_creator.key,
            vault_account.key,
            lamports,
            VaultState::MAX_SIZE as u64,
            program_id,
        ),
        &[
            listing_creator.clone(),
            vault_account.clone(),
            system_program.clone(),
        ],
        &[&[VAULT_SEED, &[bump]]],
    )?;

    let state = VaultState::new(*listing_creator.key);
    state.store(&mut vault_account.data.borrow_mut()[..])?;

    msg!("Vault initialized by {}", listing_creator.key);
    Ok(())
}

pub fn process_deposit(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let depositor = next_account_info(account_info_iter)?;
    let vault_account = next_account_info(account_info_iter)?;
    let system_program = next_account_info(account_info_iter)?;

    if !depositor.is_signer {
        msg!("Depositor must sign the deposit");
        return Err(ProgramError::MissingRequiredSignature);
    }
    if vault_account.owner != program_id {
        msg!("Vault account must be owned by the program");
        return Err(ProgramError::IllegalOwner);
    }
    if amount == 0 {
        return Err(VaultError::InvalidAmount.into());
    }

    let mut state = VaultState::load(&vault_account.data.borrow())?;

    msg!("Processing deposit of {} lamports", amount);
    invoke(
        &system_instruction::transfer(depositor.key, vault_account.key, amount),
        &[
            depositor.clone(),
            vault_account.clone(),
            system_program.clone(),
        ],
    )?;

    state.record_deposit(*depositor.key, amount)?;
    state.store(&mut vault_account.data.borrow_mut()[..])?;

    msg!("Deposit recorded, vault total {} lamports", state.total_deposits);
    Ok(())
}

pub fn process_refund(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let depositor = next_account_info(account_info_iter)?;
    let vault_account = next_account_info(account_info_iter)?;
    let _system_program = next_account_info(account_info_iter)?;

    if !depositor.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if vault_account.owner != program_id {
        return Err(ProgramError::IllegalOwner);
    }
    if amount == 0 {
        return Err(VaultError::InvalidAmount.into());
    }

    let mut state = VaultState::load(&vault_account.data.borrow())?;
    state.apply_refund(depositor.key, amount)?;

    // The ledger is debited by the full amount; the fee stays in the vault.
    let (payout, fee) = refund_payout(amount);

    let vault_lamports = vault_account.lamports();
    if vault_lamports < payout {
        return Err(ProgramError::InsufficientFunds);
    }
    **vault_account.try_borrow_mut_lamports()? = vault_lamports - payout;

    let depositor_lamports = depositor.lamports();
    **depositor.try_borrow_mut_lamports()? = depositor_lamports
        .checked_add(payout)
        .ok_or(ProgramError::ArithmeticOverflow)?;

    state.store(&mut vault_account.data.borrow_mut()[..])?;

    msg!(
        "Refunded {} lamports ({} lamport fee retained)",
        payout,
        fee
    );
    Ok(())
}
