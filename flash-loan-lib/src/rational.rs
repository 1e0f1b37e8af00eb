use flash_loan_interface::Rational;

/// Integer arithmetic over a `num / denom` ratio.
///
/// Products are computed in u128, so only the final narrowing back into u64
/// can overflow.
pub trait RationalQty {
    /// `denom != 0`
    fn is_valid(&self) -> bool;

    fn is_lte_one(&self) -> bool;

    /// `value * num / denom`, rounded down
    fn floor_mul(&self, value: u64) -> Option<u64>;
}

impl<T: RationalQty + ?Sized> RationalQty for &T {
    fn is_valid(&self) -> bool {
        (*self).is_valid()
    }

    fn is_lte_one(&self) -> bool {
        (*self).is_lte_one()
    }

    fn floor_mul(&self, value: u64) -> Option<u64> {
        (*self).floor_mul(value)
    }
}

impl RationalQty for Rational {
    fn is_valid(&self) -> bool {
        self.denom != 0
    }

    fn is_lte_one(&self) -> bool {
        self.num <= self.denom
    }

    fn floor_mul(&self, value: u64) -> Option<u64> {
        u128::from(value)
            .checked_mul(self.num.into())?
            .checked_div(self.denom.into())?
            .try_into()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denom_is_invalid() {
        let r = Rational { num: 1, denom: 0 };
        assert!(!r.is_valid());
        assert!(r.floor_mul(100).is_none());
    }

    #[test]
    fn five_hundred_bps() {
        let r = Rational {
            num: 500,
            denom: 10_000,
        };
        assert!(r.is_valid());
        assert!(r.is_lte_one());
        assert_eq!(r.floor_mul(1_000_000), Some(50_000));
        // 19 * 0.05 = 0.95
        assert_eq!(r.floor_mul(19), Some(0));
        assert_eq!(r.floor_mul(20), Some(1));
    }

    #[test]
    fn mul_overflowing_u64_is_none() {
        let r = Rational { num: 2, denom: 1 };
        assert!(!r.is_lte_one());
        assert!(r.floor_mul(u64::MAX).is_none());
    }

    #[test]
    fn full_ratio_on_max_value() {
        let r = Rational {
            num: u64::MAX,
            denom: u64::MAX,
        };
        assert_eq!(r.floor_mul(u64::MAX), Some(u64::MAX));
    }
}
