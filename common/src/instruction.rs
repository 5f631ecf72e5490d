use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::VaultError;

pub const VARIANT_INITIALIZE_VAULT: &str = "InitializeVault";
pub const VARIANT_DEPOSIT: &str = "Deposit";
pub const VARIANT_REFUND: &str = "Refund";

/// On-the-wire shape expected by the deployed program: a string variant tag
/// followed by an optional little-endian u64 amount.
#[derive(BorshSerialize, BorshDeserialize, Debug)]
struct InstructionData {
    variant: String,
    amount: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultInstruction {
    InitializeVault,
    Deposit { amount: u64 },
    Refund { amount: u64 },
}

impl VaultInstruction {
    pub fn pack(&self) -> Result<Vec<u8>, VaultError> {
        let (variant, amount) = match *self {
            VaultInstruction::InitializeVault => (VARIANT_INITIALIZE_VAULT, None),
            VaultInstruction::Deposit { amount } => (VARIANT_DEPOSIT, Some(amount)),
            VaultInstruction::Refund { amount } => (VARIANT_REFUND, Some(amount)),
        };
        borsh::to_vec(&InstructionData {
            variant: variant.to_string(),
            amount,
        })
        .map_err(|_| VaultError::SerializationFailure)
    }

    /// Decodes instruction data, rejecting unknown tags, a missing amount on
    /// Deposit/Refund, a stray amount on InitializeVault, and trailing bytes.
    pub fn unpack(data: &[u8]) -> Result<Self, VaultError> {
        let wire =
            InstructionData::try_from_slice(data).map_err(|_| VaultError::InvalidInstruction)?;
        match (wire.variant.as_str(), wire.amount) {
            (VARIANT_INITIALIZE_VAULT, None) => Ok(VaultInstruction::InitializeVault),
            (VARIANT_DEPOSIT, Some(amount)) => Ok(VaultInstruction::Deposit { amount }),
            (VARIANT_REFUND, Some(amount)) => Ok(VaultInstruction::Refund { amount }),
            _ => Err(VaultError::InvalidInstruction),
        }
    }
}
