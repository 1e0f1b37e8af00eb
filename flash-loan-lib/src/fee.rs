use flash_loan_interface::FlashLoanFee;

use crate::RationalQty;

pub trait FlashLoanFeeCalc {
    fn is_valid(&self) -> bool;

    /// Returns the number of tokens levied as fees on top of
    /// `flash_loan_amount`, rounded down.
    ///
    /// Returns None if any calculation errors occurred
    fn apply(&self, flash_loan_amount: u64) -> Option<u64>;

    /// Returns the total number of tokens that must be paid back
    /// for a flash loan of `flash_loan_amount`
    ///
    /// Returns None if any calculation errors occurred
    fn repay_amount(&self, flash_loan_amount: u64) -> Option<u64> {
        flash_loan_amount.checked_add(self.apply(flash_loan_amount)?)
    }
}

impl<T: FlashLoanFeeCalc + ?Sized> FlashLoanFeeCalc for &T {
    fn is_valid(&self) -> bool {
        (*self).is_valid()
    }

    fn apply(&self, flash_loan_amount: u64) -> Option<u64> {
        (*self).apply(flash_loan_amount)
    }

    fn repay_amount(&self, flash_loan_amount: u64) -> Option<u64> {
        (*self).repay_amount(flash_loan_amount)
    }
}

impl FlashLoanFeeCalc for FlashLoanFee {
    fn is_valid(&self) -> bool {
        self.fee_ratio.is_valid() && self.fee_ratio.is_lte_one()
    }

    fn apply(&self, flash_loan_amount: u64) -> Option<u64> {
        self.fee_ratio.floor_mul(flash_loan_amount)
    }
}
