use clap::Args;
use flash_loan_interface::{
    find_flash_loan_fee_address, initialize_ix, InitializeIxArgs, InitializeKeys,
};
use solana_program::system_program;
use solana_sdk::signer::Signer;

use crate::tx_utils::{batch_ixs, send_or_sim_tx};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(
    long_about = "Initializes the program's flash loan fee account with the default 5% fee, rounded down to whole token base units. The wallet becomes the fee authority"
)]
pub struct InitArgs {}

impl SubcmdExec for InitArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();

        let (flash_loan_fee_account, _) = find_flash_loan_fee_address();

        let ix = initialize_ix(
            InitializeKeys {
                payer: payer.pubkey(),
                flash_loan_fee_account,
                system_program: system_program::id(),
            },
            InitializeIxArgs {},
        )
        .expect("Failed to build initialize instruction");

        let tx = batch_ixs(&client, vec![payer], &[ix]);
        println!("Flash loan fee account: {}", flash_loan_fee_account);
        send_or_sim_tx(args, &client, &tx);
    }
}
