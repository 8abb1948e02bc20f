//! Power with a rational exponent.

use crate::defs::Error;
use crate::rational::BigRational;
use num_traits::{One, ToPrimitive};

impl BigRational {
    /// Raises the number to the power of the rational `exponent`.
    ///
    /// When the reduced exponent is an integer that fits a 32-bit machine
    /// integer, the computation delegates to the exact integer power and the
    /// result has no loss of precision; `scale` is not used in that case.
    /// Any other exponent, including an integer-valued one outside the
    /// 32-bit range, is computed as `exp(exponent*ln(x))` and rounded
    /// half-up to `scale` digits after the decimal point.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is zero or negative and the exponent is not an
    ///    integer in the 32-bit range.
    ///  - DivisionByZero: the number is zero and the exponent is a negative
    ///    integer in the 32-bit range.
    pub fn pow_rational(&self, exponent: &Self, scale: i64) -> Result<Self, Error> {
        // x^y = exp(y*ln(x))

        let reduced = exponent.reduce();
        if reduced.denominator().is_one() {
            if let Some(exponent) = reduced.numerator().to_i32() {
                return self.pow(exponent);
            }
        }

        reduced.mul(&self.ln(scale + 4)?).exp(scale)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d).unwrap()
    }

    #[test]
    fn test_pow_rational_integer_exponent_is_exact() {
        assert_eq!(
            rational(2, 3)
                .pow_rational(&rational(3, 1), 0)
                .unwrap(),
            rational(8, 27)
        );
        // integer-valued exponents delegate after reduction
        assert_eq!(
            rational(2, 1)
                .pow_rational(&rational(10, 5), 0)
                .unwrap(),
            rational(4, 1)
        );
        assert_eq!(
            rational(2, 1)
                .pow_rational(&rational(-2, 1), 0)
                .unwrap(),
            rational(1, 4)
        );
        // the exact path works for negative bases
        assert_eq!(
            rational(-2, 1)
                .pow_rational(&rational(3, 1), 0)
                .unwrap(),
            rational(-8, 1)
        );
    }

    #[test]
    fn test_pow_rational_fractional_exponent() {
        assert_eq!(
            rational(2, 1)
                .pow_rational(&rational(1, 2), 10)
                .unwrap(),
            "1.4142135624".parse().unwrap()
        );
        assert_eq!(
            rational(4, 1)
                .pow_rational(&rational(3, 2), 6)
                .unwrap(),
            rational(8, 1)
        );
        assert_eq!(
            rational(27, 1)
                .pow_rational(&rational(1, 3), 8)
                .unwrap(),
            rational(3, 1)
        );
    }

    #[test]
    fn test_pow_rational_domain() {
        assert_eq!(
            rational(-2, 1)
                .pow_rational(&rational(1, 2), 5)
                .unwrap_err(),
            Error::Domain
        );
        assert_eq!(
            rational(0, 1)
                .pow_rational(&rational(1, 2), 5)
                .unwrap_err(),
            Error::Domain
        );
        assert_eq!(
            rational(0, 1)
                .pow_rational(&rational(-1, 1), 5)
                .unwrap_err(),
            Error::DivisionByZero
        );
    }
}
