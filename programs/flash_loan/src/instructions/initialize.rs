use anchor_lang::prelude::*;

use crate::{
    anchor_len::AnchorLen,
    state::{FlashLoanFee, DEFAULT_FLASH_LOAN_FEE_RATIO, FLASH_LOAN_FEE_SEED},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// pubkey paying for the new account's rent,
    /// becomes the initial fee authority
    #[account(mut)]
    pub payer: Signer<'info>,

    /// flash loan fee account to be created
    #[account(
        init,
        payer = payer,
        space = FlashLoanFee::LEN,
        seeds = [FLASH_LOAN_FEE_SEED],
        bump,
    )]
    pub flash_loan_fee_account: Account<'info, FlashLoanFee>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    #[inline(always)]
    pub fn run(ctx: Context<Self>) -> Result<()> {
        let payer = &ctx.accounts.payer;
        let flash_loan_fee_account = &mut ctx.accounts.flash_loan_fee_account;

        flash_loan_fee_account.set_inner(FlashLoanFee {
            fee_authority: payer.key(),
            fee_ratio: DEFAULT_FLASH_LOAN_FEE_RATIO,
        });
        msg!("{:?}", &**flash_loan_fee_account);
        Ok(())
    }
}
