use anchor_lang::{prelude::*, solana_program::sysvar};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    errors::FlashLoanError,
    introspection::LoanTokenAccounts,
    state::{FlashLoanFee, FLASH_LOAN_FEE_SEED, PROTOCOL_SEED},
};

pub const BORROWER_ATA_ACCOUNT_IDX: usize = 3;
pub const PROTOCOL_ATA_ACCOUNT_IDX: usize = 4;

/// DO NOT CHANGE THE ORDER OF ACCOUNTS IN THIS STRUCT,
/// ELSE UPDATE `BORROWER_ATA_ACCOUNT_IDX` AND `PROTOCOL_ATA_ACCOUNT_IDX`
#[derive(Accounts)]
pub struct Loan<'info> {
    /// receives the loan and signs the repayment
    #[account(mut)]
    pub borrower: Signer<'info>,

    /// owner of the lent liquidity
    #[account(
        seeds = [PROTOCOL_SEED],
        bump,
    )]
    pub protocol: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = borrower,
        associated_token::mint = mint,
        associated_token::authority = borrower,
    )]
    pub borrower_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = protocol,
    )]
    pub protocol_ata: Account<'info, TokenAccount>,

    /// Solana Instructions Sysvar
    /// CHECK: Checked using address
    #[account(address = sysvar::instructions::ID @ FlashLoanError::InvalidInstructionsSysvar)]
    pub instructions: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,

    #[account(
        seeds = [FLASH_LOAN_FEE_SEED],
        bump,
    )]
    pub flash_loan_fee_account: Account<'info, FlashLoanFee>,
}

impl<'info> Loan<'info> {
    pub const LOG_IX_TAG_BORROW: u8 = 0;
    pub const LOG_IX_TAG_REPAY: u8 = 1;

    pub fn token_accounts(&self) -> LoanTokenAccounts {
        LoanTokenAccounts {
            borrower_ata: self.borrower_ata.key(),
            protocol_ata: self.protocol_ata.key(),
        }
    }

    pub fn log_loan(&self, log_ix_tag: u8, amount: u64, fee: u64) {
        // emit analytics log
        // Log Format:
        //  "flash-loan-log: [instruction, borrower, mint, amount, fee]"
        msg!(
            "flash-loan-log: [{}, {}, {}, {}, {}]",
            log_ix_tag,
            self.borrower.key(),
            self.mint.key(),
            amount,
            fee,
        );
    }
}
