use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    errors::FlashLoanError,
    state::{FlashLoanFee, FLASH_LOAN_FEE_SEED, PROTOCOL_SEED},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// the current fee authority
    pub fee_authority: Signer<'info>,

    #[account(
        seeds = [FLASH_LOAN_FEE_SEED],
        bump,
        has_one = fee_authority @ FlashLoanError::InvalidFeeAuthority
    )]
    pub flash_loan_fee_account: Account<'info, FlashLoanFee>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump,
    )]
    pub protocol: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    /// liquidity deducted from here
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = protocol,
    )]
    pub protocol_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Withdraw<'info> {
    #[inline(always)]
    pub fn run(ctx: Context<Self>, amount: u64) -> Result<()> {
        let protocol = &ctx.accounts.protocol;
        let protocol_ata = &ctx.accounts.protocol_ata;
        let destination = &ctx.accounts.destination;
        let token_program = &ctx.accounts.token_program;

        require!(amount > 0, FlashLoanError::InvalidAmount);
        require!(
            amount <= protocol_ata.amount,
            FlashLoanError::NotEnoughFunds
        );

        let transfer_cpi_accs = Transfer {
            from: protocol_ata.to_account_info(),
            to: destination.to_account_info(),
            authority: protocol.to_account_info(),
        };
        let seeds: &[&[u8]] = &[
            PROTOCOL_SEED,
            &[*ctx
                .bumps
                .get("protocol")
                .ok_or(FlashLoanError::PdaBumpNotCached)?],
        ];
        token::transfer(
            CpiContext::new_with_signer(token_program.to_account_info(), transfer_cpi_accs, &[seeds]),
            amount,
        )
    }
}
