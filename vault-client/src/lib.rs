pub mod builder;
pub mod config;
pub mod models;
pub mod monitor;

pub use builder::{
    build_deposit_instruction, build_initialize_vault_instruction, build_refund_instruction,
    sol_to_lamports,
};
pub use models::VaultSummary;
pub use monitor::VaultMonitor;
