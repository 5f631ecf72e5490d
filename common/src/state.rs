use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::error::VaultError;

/// Maximum number of distinct depositors a vault ledger can hold. The
/// account is allocated at full size up front so deposits never need to
/// grow it.
pub const MAX_DEPOSITS: usize = 64;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct DepositRecord {
    pub depositor: Pubkey,
    pub amount: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct VaultState {
    pub listing_creator: Pubkey,
    pub total_deposits: u64,
    pub deposits: Vec<DepositRecord>,
}

impl VaultState {
    // 32 creator + 8 total + 4 vec length + records
    pub const MAX_SIZE: usize = 32 + 8 + 4 + MAX_DEPOSITS * (32 + 8);

    pub fn new(listing_creator: Pubkey) -> Self {
        VaultState {
            listing_creator,
            total_deposits: 0,
            deposits: Vec::new(),
        }
    }

    pub fn deposit_of(&self, depositor: &Pubkey) -> Option<u64> {
        self.deposits
            .iter()
            .find(|record| record.depositor == *depositor)
            .map(|record| record.amount)
    }

    /// Accumulates into an existing record, or appends a new one while the
    /// ledger has room.
    pub fn record_deposit(&mut self, depositor: Pubkey, amount: u64) -> Result<(), VaultError> {
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }
        match self
            .deposits
            .iter_mut()
            .find(|record| record.depositor == depositor)
        {
            Some(record) => {
                record.amount = record
                    .amount
                    .checked_add(amount)
                    .ok_or(VaultError::InvalidAmount)?;
            }
            None => {
                if self.deposits.len() >= MAX_DEPOSITS {
                    return Err(VaultError::LedgerFull);
                }
                self.deposits.push(DepositRecord { depositor, amount });
            }
        }
        self.total_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount)?;
        Ok(())
    }

    /// Debits the depositor's record and the running total by the full
    /// refunded amount. A record that reaches zero is removed.
    pub fn apply_refund(&mut self, depositor: &Pubkey, amount: u64) -> Result<(), VaultError> {
        let index = self
            .deposits
            .iter()
            .position(|record| record.depositor == *depositor && record.amount >= amount)
            .ok_or(VaultError::InsufficientDeposit)?;

        self.deposits[index].amount -= amount;
        if self.deposits[index].amount == 0 {
            self.deposits.remove(index);
        }
        self.total_deposits = self
            .total_deposits
            .checked_sub(amount)
            .ok_or(VaultError::CorruptVaultState)?;
        Ok(())
    }

    /// Reads state from the front of an account buffer; trailing zero
    /// padding from the fixed-size allocation is expected.
    pub fn load(data: &[u8]) -> Result<Self, VaultError> {
        Self::deserialize(&mut &data[..]).map_err(|_| VaultError::CorruptVaultState)
    }

    pub fn store(&self, data: &mut [u8]) -> Result<(), VaultError> {
        let mut cursor: &mut [u8] = data;
        self.serialize(&mut cursor)
            .map_err(|_| VaultError::SerializationFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depositor(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn new_vault_is_empty() {
        let state = VaultState::new(depositor(1));
        assert_eq!(state.total_deposits, 0);
        assert!(state.deposits.is_empty());
    }

    #[test]
    fn deposits_accumulate_per_depositor() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();
        state.record_deposit(depositor(2), 50).unwrap();
        state.record_deposit(depositor(3), 25).unwrap();

        assert_eq!(state.deposit_of(&depositor(2)), Some(150));
        assert_eq!(state.deposit_of(&depositor(3)), Some(25));
        assert_eq!(state.total_deposits, 175);
        assert_eq!(state.deposits.len(), 2);
    }

    #[test]
    fn zero_deposits_are_rejected() {
        let mut state = VaultState::new(depositor(1));
        assert_eq!(
            state.record_deposit(depositor(2), 0),
            Err(VaultError::InvalidAmount)
        );
    }

    #[test]
    fn ledger_is_bounded() {
        let mut state = VaultState::new(depositor(0));
        for n in 0..MAX_DEPOSITS {
            state.record_deposit(depositor(n as u8 + 1), 1).unwrap();
        }
        assert_eq!(
            state.record_deposit(depositor(200), 1),
            Err(VaultError::LedgerFull)
        );
        // An existing depositor can still top up
        state.record_deposit(depositor(1), 1).unwrap();
    }

    #[test]
    fn refund_debits_record_and_total() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();

        state.apply_refund(&depositor(2), 40).unwrap();
        assert_eq!(state.deposit_of(&depositor(2)), Some(60));
        assert_eq!(state.total_deposits, 60);
    }

    #[test]
    fn exhausted_record_is_removed() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();

        state.apply_refund(&depositor(2), 100).unwrap();
        assert_eq!(state.deposit_of(&depositor(2)), None);
        assert!(state.deposits.is_empty());
        assert_eq!(state.total_deposits, 0);
    }

    #[test]
    fn refund_requires_sufficient_prior_deposit() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();

        assert_eq!(
            state.apply_refund(&depositor(2), 101),
            Err(VaultError::InsufficientDeposit)
        );
        assert_eq!(
            state.apply_refund(&depositor(3), 1),
            Err(VaultError::InsufficientDeposit)
        );
    }

    #[test]
    fn full_ledger_fits_the_allocated_account() {
        let mut state = VaultState::new(depositor(0));
        for n in 0..MAX_DEPOSITS {
            state
                .record_deposit(depositor(n as u8 + 1), u64::from(n as u8) + 1)
                .unwrap();
        }
        let bytes = borsh::to_vec(&state).unwrap();
        assert_eq!(bytes.len(), VaultState::MAX_SIZE);
    }

    #[test]
    fn round_trips_through_a_padded_account_buffer() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();

        let mut buffer = vec![0u8; VaultState::MAX_SIZE];
        state.store(&mut buffer).unwrap();
        assert_eq!(VaultState::load(&buffer).unwrap(), state);
    }

    #[test]
    fn store_rejects_undersized_buffers() {
        let mut state = VaultState::new(depositor(1));
        state.record_deposit(depositor(2), 100).unwrap();

        let mut buffer = vec![0u8; 16];
        assert_eq!(
            state.store(&mut buffer),
            Err(VaultError::SerializationFailure)
        );
    }
}
