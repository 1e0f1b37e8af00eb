use anchor_lang::prelude::*;

use crate::{
    errors::FlashLoanError,
    state::{FlashLoanFee, FLASH_LOAN_FEE_SEED},
};

#[derive(Accounts)]
pub struct SetFeeAuthority<'info> {
    /// the current fee authority
    pub fee_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FLASH_LOAN_FEE_SEED],
        bump,
        has_one = fee_authority @ FlashLoanError::InvalidFeeAuthority
    )]
    pub flash_loan_fee_account: Account<'info, FlashLoanFee>,

    /// new fee_authority to replace the current authority with
    /// CHECK: Double check this account since a mistake here CAN BRICK THE FEE AUTHORITY FOREVER.
    pub new_fee_authority: UncheckedAccount<'info>,
}

impl<'info> SetFeeAuthority<'info> {
    #[inline(always)]
    pub fn run(ctx: Context<Self>) -> Result<()> {
        let new_fee_authority = &ctx.accounts.new_fee_authority;
        let flash_loan_fee_account = &mut ctx.accounts.flash_loan_fee_account;

        flash_loan_fee_account.fee_authority = new_fee_authority.key();

        Ok(())
    }
}
