pub mod processor;

use common::instruction::VaultInstruction;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey,
};

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = VaultInstruction::unpack(instruction_data)?;

    match instruction {
        VaultInstruction::InitializeVault => {
            processor::process_initialize_vault(program_id, accounts)
        }
        VaultInstruction::Deposit { amount } => {
            processor::process_deposit(program_id, accounts, amount)
        }
        VaultInstruction::Refund { amount } => {
            processor::process_refund(program_id, accounts, amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::VaultError;
    use solana_program::program_error::ProgramError;

    #[test]
    fn rejects_malformed_instruction_data() {
        let err = process_instruction(&common::id(), &[], b"garbage").unwrap_err();
        assert_eq!(
            err,
            ProgramError::Custom(VaultError::InvalidInstruction as u32)
        );
    }

    #[test]
    fn dispatch_requires_the_account_list() {
        let data = VaultInstruction::Deposit { amount: 1 }.pack().unwrap();
        let err = process_instruction(&common::id(), &[], &data).unwrap_err();
        assert_eq!(err, ProgramError::NotEnoughAccountKeys);
    }
}
