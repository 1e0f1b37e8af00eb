use anchor_lang::prelude::*;
use flash_loan_lib::RationalQty;

use std::fmt;

/// A ratio. Denom should not = 0
#[derive(Debug, PartialEq, Eq, Clone, Copy, AnchorSerialize, AnchorDeserialize)]
pub struct Rational {
    pub num: u64,
    pub denom: u64,
}

impl Rational {
    pub fn validate(&self) -> bool {
        let r: flash_loan_interface::Rational = (*self).into();
        r.is_valid() && r.is_lte_one()
    }
}

impl From<Rational> for flash_loan_interface::Rational {
    fn from(Rational { num, denom }: Rational) -> Self {
        Self { num, denom }
    }
}

impl From<flash_loan_interface::Rational> for Rational {
    fn from(flash_loan_interface::Rational { num, denom }: flash_loan_interface::Rational) -> Self {
        Self { num, denom }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}
