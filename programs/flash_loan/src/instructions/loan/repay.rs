use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};

use crate::{errors::FlashLoanError, introspection::find_borrowed_amount};

use super::Loan;

impl<'info> Loan<'info> {
    #[inline(always)]
    pub fn run_repay(ctx: Context<'_, '_, '_, 'info, Self>) -> Result<()> {
        let borrower = &ctx.accounts.borrower;
        let borrower_ata = &ctx.accounts.borrower_ata;
        let protocol_ata = &ctx.accounts.protocol_ata;
        let instructions = &ctx.accounts.instructions;
        let token_program = &ctx.accounts.token_program;
        let flash_loan_fee_account = &ctx.accounts.flash_loan_fee_account;

        let amount_borrowed = find_borrowed_amount(
            &instructions.to_account_info(),
            &ctx.accounts.token_accounts(),
        )?;
        let repay_amount = flash_loan_fee_account
            .repay_amount(amount_borrowed)
            .ok_or(FlashLoanError::Overflow)?;
        let fee = repay_amount - amount_borrowed;

        transfer(
            CpiContext::new(
                token_program.to_account_info(),
                Transfer {
                    from: borrower_ata.to_account_info(),
                    to: protocol_ata.to_account_info(),
                    authority: borrower.to_account_info(),
                },
            ),
            repay_amount,
        )?;

        ctx.accounts
            .log_loan(Self::LOG_IX_TAG_REPAY, amount_borrowed, fee);

        Ok(())
    }
}
