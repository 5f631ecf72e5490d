use std::{env, error::Error};

use common::pda::derive_vault_address;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
    transaction::Transaction,
};
use vault_client::{
    build_deposit_instruction, build_initialize_vault_instruction, build_refund_instruction,
    VaultMonitor,
};

const DEVNET_URL: &str = "https://api.devnet.solana.com";

const USAGE: &str = "usage: cli <command> <listing-id> [amount-sol]

commands:
  deposit <listing-id> <amount-sol>   deposit into the listing's vault
  refund  <listing-id> <amount-sol>   refund a prior deposit (2% fee)
  init    <listing-id>                create the listing's vault
  status  <listing-id>                print the vault summary as JSON

environment (.env is loaded):
  RPC_URL        RPC endpoint, defaults to devnet
  KEYPAIR_PATH   signer keypair file, required for deposit/refund/init";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEVNET_URL.to_string());

    let command = args.get(1).map(String::as_str);
    let listing_id = match args.get(2) {
        Some(listing_id) => listing_id,
        None => {
            eprintln!("{}", USAGE);
            return Err("missing listing id".into());
        }
    };

    match command {
        Some("deposit") => {
            let amount = parse_amount(&args)?;
            if !common::DEPOSIT_PRESETS_SOL.contains(&amount) {
                eprintln!(
                    "Note: the marketplace UI offers {:?} SOL deposits",
                    common::DEPOSIT_PRESETS_SOL
                );
            }
            let keypair = signing_keypair()?;
            let instruction = build_deposit_instruction(&keypair.pubkey(), listing_id, amount)?;
            print_vault(listing_id)?;
            submit(&rpc_url, &keypair, instruction)?;
        }
        Some("refund") => {
            let amount = parse_amount(&args)?;
            let keypair = signing_keypair()?;
            let instruction = build_refund_instruction(&keypair.pubkey(), listing_id, amount)?;
            print_vault(listing_id)?;
            submit(&rpc_url, &keypair, instruction)?;
        }
        Some("init") => {
            let keypair = signing_keypair()?;
            let instruction = build_initialize_vault_instruction(&keypair.pubkey(), listing_id)?;
            print_vault(listing_id)?;
            submit(&rpc_url, &keypair, instruction)?;
        }
        Some("status") => {
            let monitor = VaultMonitor::new_with_endpoint(&rpc_url);
            let summary = monitor.vault_summary(listing_id).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            eprintln!("{}", USAGE);
            return Err("unknown command".into());
        }
    }

    Ok(())
}

fn parse_amount(args: &[String]) -> Result<f64, Box<dyn Error>> {
    let raw = args.get(3).ok_or("missing amount in SOL")?;
    Ok(raw.parse::<f64>()?)
}

fn signing_keypair() -> Result<Keypair, Box<dyn Error>> {
    let path = env::var("KEYPAIR_PATH").map_err(|_| "KEYPAIR_PATH must be set")?;
    read_keypair_file(&path)
}

fn print_vault(listing_id: &str) -> Result<(), Box<dyn Error>> {
    let (vault, _bump) = derive_vault_address(listing_id)?;
    println!("Vault for listing {}: {}", listing_id, vault);
    Ok(())
}

fn submit(rpc_url: &str, keypair: &Keypair, instruction: Instruction) -> Result<(), Box<dyn Error>> {
    let rpc_client = RpcClient::new(rpc_url.to_string());
    let blockhash = rpc_client.get_latest_blockhash()?;

    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&keypair.pubkey()),
        &[keypair],
        blockhash,
    );

    let signature = rpc_client.send_and_confirm_transaction(&transaction)?;
    println!("Confirmed: {}", signature);
    Ok(())
}
