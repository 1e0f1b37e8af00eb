use std::str::FromStr;

use clap::Args;
use flash_loan_interface::{
    find_flash_loan_fee_address, find_protocol_address, withdraw_ix, WithdrawIxArgs, WithdrawKeys,
};
use solana_program::pubkey::Pubkey;
use solana_sdk::signer::Signer;
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};

use crate::{
    tx_utils::{batch_ixs, send_or_sim_tx},
    utils::{protocol_ata, to_base_units},
};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(long_about = "Withdraws liquidity and collected fees from the protocol. Fee authority only")]
pub struct WithdrawArgs {
    #[arg(help = "Mint of the token to withdraw")]
    pub mint: String,

    #[arg(help = "Amount of tokens to withdraw, in UI units")]
    pub amount: f64,

    #[arg(help = "Token account to withdraw to. Defaults to the wallet's ATA, created if missing")]
    pub destination: Option<String>,
}

impl SubcmdExec for WithdrawArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();
        let mint = Pubkey::from_str(&self.mint).expect("Invalid mint pubkey");
        let amount = to_base_units(&client, &mint, self.amount);

        let fee_authority = payer.pubkey();
        let wallet_ata = get_associated_token_address(&fee_authority, &mint);
        let destination = self
            .destination
            .as_ref()
            .map(|d| Pubkey::from_str(d).expect("Invalid destination pubkey"))
            .unwrap_or(wallet_ata);

        let mut ixs = vec![];
        if client.get_account(&destination).is_err() {
            if destination != wallet_ata {
                panic!("Destination token account {} does not exist", destination);
            }
            println!(
                "Token account {} does not exist, creating...",
                destination
            );
            ixs.push(create_associated_token_account(
                &fee_authority,
                &fee_authority,
                &mint,
                &spl_token::id(),
            ));
        }

        ixs.push(
            withdraw_ix(
                WithdrawKeys {
                    fee_authority,
                    flash_loan_fee_account: find_flash_loan_fee_address().0,
                    protocol: find_protocol_address().0,
                    mint,
                    protocol_ata: protocol_ata(&mint),
                    destination,
                    token_program: spl_token::id(),
                },
                WithdrawIxArgs { amount },
            )
            .expect("Failed to build withdraw instruction"),
        );

        let tx = batch_ixs(&client, vec![payer], &ixs);
        println!("Withdrawing {} of {} to {}", amount, mint, destination);
        send_or_sim_tx(args, &client, &tx);
    }
}
