use std::str::FromStr;

use clap::Args;
use flash_loan_interface::{
    find_flash_loan_fee_address, set_fee_authority_ix, SetFeeAuthorityIxArgs, SetFeeAuthorityKeys,
};
use solana_program::pubkey::Pubkey;
use solana_sdk::{signature::read_keypair_file, signer::Signer};

use crate::tx_utils::{batch_ixs, send_or_sim_tx};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(long_about = "Hands the fee authority over to a new pubkey")]
pub struct SetFeeAuthorityArgs {
    #[arg(help = "Pubkey of the new fee authority")]
    pub new_fee_authority: String,

    #[arg(help = "Path to keypair that is the current fee authority. Defaults to config wallet")]
    pub fee_authority: Option<String>,
}

impl SubcmdExec for SetFeeAuthorityArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();
        let new_fee_authority =
            Pubkey::from_str(&self.new_fee_authority).expect("Invalid new fee authority pubkey");

        let mut fee_authority = payer.pubkey();
        let mut signers = vec![payer];
        if let Some(fee_auth) = self.fee_authority.as_ref() {
            let fee_authority_keypair = read_keypair_file(fee_auth)
                .unwrap_or_else(|e| panic!("Could not read keypair {}: {}", fee_auth, e));
            fee_authority = fee_authority_keypair.pubkey();
            signers.push(Box::new(fee_authority_keypair));
        }

        let ix = set_fee_authority_ix(
            SetFeeAuthorityKeys {
                fee_authority,
                flash_loan_fee_account: find_flash_loan_fee_address().0,
                new_fee_authority,
            },
            SetFeeAuthorityIxArgs {},
        )
        .expect("Failed to build set_fee_authority instruction");

        let tx = batch_ixs(&client, signers, &[ix]);
        println!("Fee authority set to {}", new_fee_authority);
        send_or_sim_tx(args, &client, &tx);
    }
}
