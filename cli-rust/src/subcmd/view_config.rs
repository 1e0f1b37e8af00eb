use std::{fs, path::PathBuf};

use clap::Args;
use flash_loan_interface::{find_flash_loan_fee_address, FlashLoanFee, Rational};
use serde::Serialize;

use crate::utils::fetch_flash_loan_fee;

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(long_about = "Fetches the program's flash loan fee account")]
pub struct ViewConfigArgs {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to save the fee account data in. Prints to stdout if not given."
    )]
    pub out_file: Option<PathBuf>,
}

// NOTE: This struct is used to force format Pubkey to Base58 for json serialization
#[derive(Debug, Serialize)]
pub struct FlashLoanFeeJson {
    pub address: String,       // Base58 Pubkey
    pub fee_authority: String, // Base58 Pubkey
    pub fee_ratio: Rational,
}

impl FlashLoanFeeJson {
    fn new(address: String, flash_loan_fee: &FlashLoanFee) -> Self {
        Self {
            address,
            fee_authority: flash_loan_fee.fee_authority.to_string(),
            fee_ratio: flash_loan_fee.fee_ratio,
        }
    }
}

impl SubcmdExec for ViewConfigArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let client = args.config.rpc_client();

        let (address, _) = find_flash_loan_fee_address();
        let flash_loan_fee = fetch_flash_loan_fee(&client);
        let json_str =
            serde_json::to_string(&FlashLoanFeeJson::new(address.to_string(), &flash_loan_fee))
                .expect("Failed to serialize flash loan fee account data into Json");
        match &self.out_file {
            Some(out_file) => fs::write(out_file, json_str)
                .unwrap_or_else(|e| panic!("Unable to write to file {:?}: {}", out_file, e)),
            None => println!("Flash loan fee:\n{}", json_str),
        }
    }
}
