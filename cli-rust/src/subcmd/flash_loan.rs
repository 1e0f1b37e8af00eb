use std::str::FromStr;

use clap::Args;
use flash_loan_interface::{borrow_ix, repay_ix, BorrowIxArgs, RepayIxArgs};
use flash_loan_lib::FlashLoanFeeCalc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signer::Signer;

use crate::{
    tx_utils::{batch_ixs, send_or_sim_tx},
    utils::{fetch_flash_loan_fee, loan_keys, to_base_units},
};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(
    long_about = "Borrows and repays a flash loan in a single transaction. The wallet's ATA must hold enough tokens to cover the fee"
)]
pub struct FlashLoanArgs {
    #[arg(help = "Mint of the token to borrow")]
    pub mint: String,

    #[arg(help = "Amount of tokens to borrow, in UI units")]
    pub amount: f64,
}

impl SubcmdExec for FlashLoanArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();
        let mint = Pubkey::from_str(&self.mint).expect("Invalid mint pubkey");
        let borrow_amount = to_base_units(&client, &mint, self.amount);

        let fee = fetch_flash_loan_fee(&client);
        let fee_amount = fee
            .apply(borrow_amount)
            .expect("Flash loan fee calculation overflowed");

        let keys = loan_keys(payer.pubkey(), mint);
        let ixs = [
            borrow_ix(keys, BorrowIxArgs { borrow_amount })
                .expect("Failed to build borrow instruction"),
            repay_ix(keys, RepayIxArgs {}).expect("Failed to build repay instruction"),
        ];

        let tx = batch_ixs(&client, vec![payer], &ixs);
        println!(
            "Flash loan of {} {}, fee {}",
            borrow_amount, mint, fee_amount
        );
        send_or_sim_tx(args, &client, &tx);
    }
}
