use anchor_lang::prelude::*;

use crate::{
    errors::FlashLoanError,
    rational::Rational,
    state::{FlashLoanFee, FLASH_LOAN_FEE_SEED},
};

#[derive(Accounts)]
pub struct SetFlashLoanFee<'info> {
    /// the current fee authority
    pub fee_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FLASH_LOAN_FEE_SEED],
        bump,
        has_one = fee_authority @ FlashLoanError::InvalidFeeAuthority
    )]
    pub flash_loan_fee_account: Account<'info, FlashLoanFee>,
}

impl<'info> SetFlashLoanFee<'info> {
    #[inline(always)]
    pub fn validate(fee_ratio: &Rational) -> Result<()> {
        match fee_ratio.validate() {
            true => Ok(()),
            false => Err(FlashLoanError::InvalidFee.into()),
        }
    }

    #[inline(always)]
    pub fn run(ctx: Context<Self>, fee_ratio: Rational) -> Result<()> {
        let flash_loan_fee_account = &mut ctx.accounts.flash_loan_fee_account;

        flash_loan_fee_account.fee_ratio = fee_ratio;
        msg!("flash loan fee set to {}", fee_ratio);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_fee_ratio() {
        assert!(SetFlashLoanFee::validate(&Rational { num: 0, denom: 1 }).is_ok());
        assert!(SetFlashLoanFee::validate(&Rational { num: 1, denom: 1 }).is_ok());
        assert!(SetFlashLoanFee::validate(&Rational { num: 9, denom: 10_000 }).is_ok());
        assert!(SetFlashLoanFee::validate(&Rational { num: 0, denom: 0 }).is_err());
        assert!(SetFlashLoanFee::validate(&Rational { num: 2, denom: 1 }).is_err());
    }
}
