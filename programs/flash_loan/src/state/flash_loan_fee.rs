use anchor_lang::prelude::*;
use flash_loan_lib::FlashLoanFeeCalc;

use crate::rational::Rational;

#[constant]
pub const FLASH_LOAN_FEE_SEED: &[u8] = b"flashloanfee";

/// 500 basis points
pub const DEFAULT_FLASH_LOAN_FEE_RATIO: Rational = Rational {
    num: 500,
    denom: 10_000,
};

/// Global singleton containing flash loan fee parameters
#[account]
#[derive(Debug)]
pub struct FlashLoanFee {
    /// Signer that is authorized to modify this account
    /// and to withdraw liquidity from the protocol
    pub fee_authority: Pubkey,

    /// The proportion of the flash loan amount that is levied as fees
    pub fee_ratio: Rational,
}

impl FlashLoanFee {
    pub fn apply(&self, flash_loan_amount: u64) -> Option<u64> {
        self.to_interface().apply(flash_loan_amount)
    }

    pub fn repay_amount(&self, flash_loan_amount: u64) -> Option<u64> {
        self.to_interface().repay_amount(flash_loan_amount)
    }

    fn to_interface(&self) -> flash_loan_interface::FlashLoanFee {
        flash_loan_interface::FlashLoanFee {
            fee_authority: self.fee_authority,
            fee_ratio: self.fee_ratio.into(),
        }
    }
}
