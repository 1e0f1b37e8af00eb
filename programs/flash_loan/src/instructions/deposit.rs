use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::{errors::FlashLoanError, state::PROTOCOL_SEED};

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// wallet adding liquidity, pays for the protocol ATA if it doesn't exist yet
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump,
    )]
    pub protocol: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    /// token account to transfer liquidity from
    #[account(
        mut,
        token::mint = mint,
        token::authority = depositor,
    )]
    pub depositor_ata: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = mint,
        associated_token::authority = protocol,
    )]
    pub protocol_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    #[inline(always)]
    pub fn run(ctx: Context<Self>, amount: u64) -> Result<()> {
        let depositor = &ctx.accounts.depositor;
        let depositor_ata = &ctx.accounts.depositor_ata;
        let protocol_ata = &ctx.accounts.protocol_ata;
        let token_program = &ctx.accounts.token_program;

        require!(amount > 0, FlashLoanError::InvalidAmount);

        let transfer_cpi_accs = Transfer {
            from: depositor_ata.to_account_info(),
            to: protocol_ata.to_account_info(),
            authority: depositor.to_account_info(),
        };
        token::transfer(
            CpiContext::new(token_program.to_account_info(), transfer_cpi_accs),
            amount,
        )
    }
}
