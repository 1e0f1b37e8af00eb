use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};

use crate::{errors::FlashLoanError, introspection::check_borrow, state::PROTOCOL_SEED};

use super::Loan;

impl<'info> Loan<'info> {
    #[inline(always)]
    pub fn run_borrow(ctx: Context<'_, '_, '_, 'info, Self>, borrow_amount: u64) -> Result<()> {
        let protocol = &ctx.accounts.protocol;
        let borrower_ata = &ctx.accounts.borrower_ata;
        let protocol_ata = &ctx.accounts.protocol_ata;
        let instructions = &ctx.accounts.instructions;
        let token_program = &ctx.accounts.token_program;
        let flash_loan_fee_account = &ctx.accounts.flash_loan_fee_account;

        require!(borrow_amount > 0, FlashLoanError::InvalidAmount);
        require!(
            borrow_amount <= protocol_ata.amount,
            FlashLoanError::NotEnoughFunds
        );

        check_borrow(
            &instructions.to_account_info(),
            &ctx.accounts.token_accounts(),
        )?;

        let fee = flash_loan_fee_account
            .apply(borrow_amount)
            .ok_or(FlashLoanError::Overflow)?;

        let seeds: &[&[u8]] = &[
            PROTOCOL_SEED,
            &[*ctx
                .bumps
                .get("protocol")
                .ok_or(FlashLoanError::PdaBumpNotCached)?],
        ];
        transfer(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                Transfer {
                    from: protocol_ata.to_account_info(),
                    to: borrower_ata.to_account_info(),
                    authority: protocol.to_account_info(),
                },
                &[seeds],
            ),
            borrow_amount,
        )?;

        ctx.accounts
            .log_loan(Self::LOG_IX_TAG_BORROW, borrow_amount, fee);

        Ok(())
    }
}
