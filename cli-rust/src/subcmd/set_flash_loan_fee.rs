use clap::{builder::ValueParser, Args};
use flash_loan_interface::{
    find_flash_loan_fee_address, set_flash_loan_fee_ix, Rational, SetFlashLoanFeeIxArgs,
    SetFlashLoanFeeKeys,
};
use solana_sdk::{signature::read_keypair_file, signer::Signer};

use crate::{
    argparse::parse_fee_ratio,
    tx_utils::{batch_ixs, send_or_sim_tx},
};

use super::SubcmdExec;

#[derive(Args, Debug)]
#[command(long_about = "Set the flash loan fee")]
pub struct SetFlashLoanFeeArgs {
    #[arg(
        help = "Proportion of the borrowed amount charged as fees, e.g. 0.0005 for 5 bps",
        value_parser = ValueParser::new(parse_fee_ratio)
    )]
    pub fee_ratio: Rational,

    #[arg(help = "Path to keypair that is the current fee authority. Defaults to config wallet")]
    pub fee_authority: Option<String>,
}

impl SubcmdExec for SetFlashLoanFeeArgs {
    fn process_cmd(&self, args: &crate::Args) {
        let payer = args.config.signer();
        let client = args.config.rpc_client();

        let mut fee_authority = payer.pubkey();
        let mut signers = vec![payer];
        if let Some(fee_auth) = self.fee_authority.as_ref() {
            let fee_authority_keypair = read_keypair_file(fee_auth)
                .unwrap_or_else(|e| panic!("Could not read keypair {}: {}", fee_auth, e));
            fee_authority = fee_authority_keypair.pubkey();
            signers.push(Box::new(fee_authority_keypair));
        }

        let ix = set_flash_loan_fee_ix(
            SetFlashLoanFeeKeys {
                fee_authority,
                flash_loan_fee_account: find_flash_loan_fee_address().0,
            },
            SetFlashLoanFeeIxArgs {
                fee_ratio: self.fee_ratio,
            },
        )
        .expect("Failed to build set_flash_loan_fee instruction");

        let tx = batch_ixs(&client, signers, &[ix]);
        println!(
            "Flash loan fee set to {}/{}",
            self.fee_ratio.num, self.fee_ratio.denom
        );
        send_or_sim_tx(args, &client, &tx);
    }
}
