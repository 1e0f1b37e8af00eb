use anchor_lang::prelude::*;

#[cfg(feature = "local-testing")]
declare_id!("22222222222222222222222222222222222222222222");

#[cfg(not(feature = "local-testing"))]
declare_id!("AA9Sps4rRupDiRDdv5jemxHCD9ecKgeont8wYu5qu1sv");

pub mod anchor_len;
pub mod errors;
pub mod instructions;
pub mod introspection;
pub mod rational;
pub mod state;

use instructions::*;
use rational::*;

#[program]
pub mod flash_loan {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        Initialize::run(ctx)
    }

    #[access_control(SetFlashLoanFee::validate(&fee_ratio))]
    pub fn set_flash_loan_fee(ctx: Context<SetFlashLoanFee>, fee_ratio: Rational) -> Result<()> {
        SetFlashLoanFee::run(ctx, fee_ratio)
    }

    pub fn set_fee_authority(ctx: Context<SetFeeAuthority>) -> Result<()> {
        SetFeeAuthority::run(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        Deposit::run(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        Withdraw::run(ctx, amount)
    }

    pub fn borrow<'info>(ctx: Context<'_, '_, '_, 'info, Loan<'info>>, borrow_amount: u64) -> Result<()> {
        Loan::run_borrow(ctx, borrow_amount)
    }

    pub fn repay<'info>(ctx: Context<'_, '_, '_, 'info, Loan<'info>>) -> Result<()> {
        Loan::run_repay(ctx)
    }
}
