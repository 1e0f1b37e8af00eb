use flash_loan_interface::{find_flash_loan_fee_address, find_protocol_address, LoanKeys};
use solana_program::{pubkey::Pubkey, system_program, sysvar};
use spl_associated_token_account::get_associated_token_address;

pub fn protocol_ata(mint: &Pubkey) -> Pubkey {
    get_associated_token_address(&find_protocol_address().0, mint)
}

pub fn loan_keys(borrower: Pubkey, mint: Pubkey) -> LoanKeys {
    LoanKeys {
        borrower,
        protocol: find_protocol_address().0,
        mint,
        borrower_ata: get_associated_token_address(&borrower, &mint),
        protocol_ata: protocol_ata(&mint),
        instructions: sysvar::instructions::id(),
        token_program: spl_token::id(),
        associated_token_program: spl_associated_token_account::id(),
        system_program: system_program::id(),
        flash_loan_fee_account: find_flash_loan_fee_address().0,
    }
}
