use solana_program::pubkey::Pubkey;

use crate::error::VaultError;

pub const VAULT_SEED: &[u8] = b"vault";

/// Listing identifiers longer than this are truncated to their first 16
/// bytes. Must match the deployed program's vaults byte-for-byte.
pub const MAX_LISTING_SEED_LEN: usize = 16;

pub fn listing_seed(listing_id: &str) -> &[u8] {
    let bytes = listing_id.as_bytes();
    &bytes[..bytes.len().min(MAX_LISTING_SEED_LEN)]
}

/// Derives the vault address for a listing from the "vault" tag and the
/// truncated identifier bytes. Same identifier, same address, every call.
pub fn derive_vault_address(listing_id: &str) -> Result<(Pubkey, u8), VaultError> {
    if listing_id.is_empty() {
        return Err(VaultError::EmptyListingId);
    }
    Pubkey::try_find_program_address(&[VAULT_SEED, listing_seed(listing_id)], &crate::id())
        .ok_or(VaultError::VaultAddressUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_identifiers_to_sixteen_bytes() {
        let long = "c0ffee00-dead-beef-cafe-0123456789ab";
        assert_eq!(listing_seed(long), &long.as_bytes()[..16]);

        let (from_long, _) = derive_vault_address(long).unwrap();
        let (from_prefix, _) = derive_vault_address(&long[..16]).unwrap();
        assert_eq!(from_long, from_prefix);
    }

    #[test]
    fn short_identifiers_are_used_whole() {
        assert_eq!(listing_seed("abc"), b"abc");
        derive_vault_address("abc").unwrap();
    }

    #[test]
    fn derivation_is_deterministic() {
        let (first, first_bump) = derive_vault_address("listing-1").unwrap();
        let (second, second_bump) = derive_vault_address("listing-1").unwrap();
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }

    #[test]
    fn distinct_prefixes_derive_distinct_vaults() {
        let (a, _) = derive_vault_address("listing-1").unwrap();
        let (b, _) = derive_vault_address("listing-2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_identifier_is_rejected() {
        assert_eq!(derive_vault_address(""), Err(VaultError::EmptyListingId));
    }

    #[test]
    fn derived_address_is_off_curve() {
        let (vault, _) = derive_vault_address("listing-1").unwrap();
        assert!(!vault.is_on_curve());
    }
}
