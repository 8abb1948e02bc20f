//! Square root.

use crate::common::consts::{TWO, ZERO};
use crate::defs::Error;
use crate::ops::util::accuracy;
use crate::rational::BigRational;

impl BigRational {
    /// Computes the square root of the number with Newton's method and returns
    /// the result rounded half-up to `scale` digits after the decimal point.
    ///
    /// The iteration is seeded with half the input and stops when two
    /// successive iterates differ by less than `10^(-scale-2)`. The behavior
    /// for negative input is undefined; the iteration is not guarded against
    /// non-convergence.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: an iterate collapsed to zero (possible only for
    ///    negative input).
    pub fn sqrt(&self, scale: i64) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let accuracy = accuracy(scale);

        let mut result = self.div(&TWO)?;

        loop {
            let last = result.clone();
            // iterates are reduced to keep their representation from doubling
            // in size every step; the value is unchanged
            result = self.div(&result)?.add(&last).div(&TWO)?.reduce();
            if last.sub(&result).abs() < accuracy {
                break;
            }
        }

        Ok(result.with_scale(scale))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d).unwrap()
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(
            rational(2, 1).sqrt(15).unwrap(),
            "1.414213562373095".parse().unwrap()
        );
        assert_eq!(
            rational(2, 1).sqrt(30).unwrap(),
            "1.414213562373095048801688724210".parse().unwrap()
        );
        assert_eq!(
            rational(3, 1).sqrt(20).unwrap(),
            "1.73205080756887729353".parse().unwrap()
        );
    }

    #[test]
    fn test_sqrt_exact_values() {
        assert_eq!(rational(0, 1).sqrt(10).unwrap(), rational(0, 1));
        assert_eq!(rational(4, 1).sqrt(10).unwrap(), rational(2, 1));
        assert_eq!(rational(1, 4).sqrt(10).unwrap(), rational(1, 2));
        assert_eq!(rational(9, 16).sqrt(12).unwrap(), rational(3, 4));
        assert_eq!(rational(1, 1).sqrt(5).unwrap(), rational(1, 1));
    }
}
