pub mod error;
pub mod instruction;
pub mod pda;
pub mod state;

solana_program::declare_id!("Af5BNb6oTiZZ8pWwTW8Xgbsb4bqpaUtN5dHimLLKibWg");

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Vault total that triggers the token launch for a listing.
pub const FUNDING_GOAL_SOL: f64 = 30.0;

/// Fee retained by the vault on refunds, in basis points (2%).
pub const REFUND_FEE_BPS: u64 = 200;

/// Deposit amounts the marketplace UI offers.
pub const DEPOSIT_PRESETS_SOL: [f64; 3] = [0.1, 0.5, 1.0];

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Splits a refunded amount into (payout, fee). The fee stays in the vault.
pub fn refund_payout(amount: u64) -> (u64, u64) {
    let fee = (amount as u128 * REFUND_FEE_BPS as u128 / 10_000) as u64;
    (amount - fee, fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_fee_is_two_percent() {
        let (payout, fee) = refund_payout(1_000_000_000);
        assert_eq!(fee, 20_000_000);
        assert_eq!(payout, 980_000_000);
    }

    #[test]
    fn refund_fee_rounds_down() {
        // 99 * 200 / 10_000 = 1.98, so the vault keeps a single lamport
        let (payout, fee) = refund_payout(99);
        assert_eq!(fee, 1);
        assert_eq!(payout, 98);
    }

    #[test]
    fn tiny_refunds_carry_no_fee() {
        let (payout, fee) = refund_payout(1);
        assert_eq!(fee, 0);
        assert_eq!(payout, 1);
    }

    #[test]
    fn lamport_display_conversion() {
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }
}
