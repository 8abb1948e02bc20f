//! Auxiliary integer functions.

use num_bigint::BigInt;
use num_traits::{Pow, Signed, Zero};

/// 10^exponent as a big integer.
pub(crate) fn pow10(exponent: u64) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

/// Number of decimal digits in the magnitude of a number; 0 counts as one digit.
pub(crate) fn count_decimal_digits(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }

    // bit length scaled by log10(2) overestimates by at most one digit
    let estimate = (value.bits() as f64 * std::f64::consts::LOG10_2) as u64 + 1;
    if pow10(estimate - 1) > value.abs() {
        estimate - 1
    } else {
        estimate
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(1), BigInt::from(10));
        assert_eq!(pow10(6), BigInt::from(1000000));
    }

    #[test]
    fn test_count_decimal_digits() {
        assert_eq!(count_decimal_digits(&BigInt::from(0)), 1);
        assert_eq!(count_decimal_digits(&BigInt::from(1)), 1);
        assert_eq!(count_decimal_digits(&BigInt::from(9)), 1);
        assert_eq!(count_decimal_digits(&BigInt::from(10)), 2);
        assert_eq!(count_decimal_digits(&BigInt::from(99)), 2);
        assert_eq!(count_decimal_digits(&BigInt::from(100)), 3);
        assert_eq!(count_decimal_digits(&BigInt::from(-12345)), 5);

        for digits in 1u64..=60 {
            let low = pow10(digits - 1);
            let high = &pow10(digits) - 1;
            assert_eq!(count_decimal_digits(&low), digits);
            assert_eq!(count_decimal_digits(&high), digits);
        }
    }
}
