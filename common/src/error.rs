use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Listing identifier must not be empty")]
    EmptyListingId,

    #[error("No viable vault address exists for this listing")]
    VaultAddressUnavailable,

    #[error("Amount must be a positive finite number of SOL")]
    InvalidAmount,

    #[error("Instruction data does not match the vault schema")]
    InvalidInstruction,

    #[error("Instruction payload could not be serialized")]
    SerializationFailure,

    #[error("Depositor has not deposited enough to cover this refund")]
    InsufficientDeposit,

    #[error("Vault ledger is full")]
    LedgerFull,

    #[error("Vault account data is malformed")]
    CorruptVaultState,
}

impl From<VaultError> for ProgramError {
    fn from(e: VaultError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
