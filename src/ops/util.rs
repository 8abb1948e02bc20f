//! Auxiliary functions shared by the iterative algorithms.

use crate::common::util::pow10;
use crate::rational::BigRational;
use num_bigint::BigInt;
use num_traits::One;

// 10^exponent as a rational number; a negative exponent gives 1/10^|exponent|.
pub(crate) fn power_of_ten(exponent: i64) -> BigRational {
    if exponent >= 0 {
        BigRational::from_integer(pow10(exponent as u64))
    } else {
        BigRational::with_denominator(BigInt::one(), pow10(exponent.unsigned_abs()))
    }
}

// Residual magnitude below which an iterative series is considered converged
// for the requested scale: two digits tighter than the scale itself, to absorb
// the final rounding.
pub(crate) fn accuracy(scale: i64) -> BigRational {
    power_of_ten(-scale - 2)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_power_of_ten() {
        assert_eq!(power_of_ten(0), BigRational::from_integer(1));
        assert_eq!(power_of_ten(3), BigRational::from_integer(1000));
        assert_eq!(power_of_ten(-2), BigRational::new(1, 100).unwrap());
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(0), BigRational::new(1, 100).unwrap());
        assert_eq!(accuracy(3), BigRational::new(1, 100000).unwrap());
        assert_eq!(accuracy(-4), BigRational::from_integer(100));
    }
}
