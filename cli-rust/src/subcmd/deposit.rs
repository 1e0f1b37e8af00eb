use std::str::FromStr;

use clap::Args;
use flash_loan_interface::{deposit_ix, find_protocol_address, DepositIxArgs, DepositKeys};
use solana_program::{pubkey::Pubkey, system_program};
use solana_sdk::signer::Signer;
use spl_associated_token_account::get_associated_token_address;

use crate::{
    tx_utils::{batch_ixs, send_or_sim_tx},
    utils::{protocol_ata, to_base_units},
};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(long_about = "Adds liquidity of a token to the protocol from the wallet's ATA")]
pub struct DepositArgs {
    #[arg(help = "Mint of the token to deposit")]
    pub mint: String,

    #[arg(help = "Amount of tokens to deposit, in UI units")]
    pub amount: f64,
}

impl SubcmdExec for DepositArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();
        let mint = Pubkey::from_str(&self.mint).expect("Invalid mint pubkey");
        let amount = to_base_units(&client, &mint, self.amount);

        let depositor = payer.pubkey();
        let ix = deposit_ix(
            DepositKeys {
                depositor,
                protocol: find_protocol_address().0,
                mint,
                depositor_ata: get_associated_token_address(&depositor, &mint),
                protocol_ata: protocol_ata(&mint),
                token_program: spl_token::id(),
                associated_token_program: spl_associated_token_account::id(),
                system_program: system_program::id(),
            },
            DepositIxArgs { amount },
        )
        .expect("Failed to build deposit instruction");

        let tx = batch_ixs(&client, vec![payer], &[ix]);
        println!("Depositing {} of {} into {}", amount, mint, protocol_ata(&mint));
        send_or_sim_tx(args, &client, &tx);
    }
}
