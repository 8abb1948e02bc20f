//! The number pi.

use crate::common::consts::{ONE, ZERO};
use crate::defs::Error;
use crate::rational::BigRational;
use num_bigint::BigInt;

impl BigRational {
    /// Calculates the value of pi rounded half-up to `scale` digits after the
    /// decimal point.
    ///
    /// The Chudnovsky series is summed over `(scale+13)/14` terms (each term
    /// contributes roughly 14 correct decimal digits, so the iteration count
    /// is fixed up front instead of being accuracy-driven) and combined with
    /// `sqrt(10005)` computed 10 digits tighter than the requested scale.
    pub fn pi(scale: i64) -> Result<Self, Error> {
        let divisor_base = BigRational::from(640320).pow(3)?.div(&BigRational::from(24))?;

        let mut sum_a = ONE.clone();
        let mut sum_b = ZERO.clone();

        let mut a = ONE.clone();
        let mut dividend_term1: i64 = 5; // -(6k - 5)
        let mut dividend_term2: i64 = -1; // 2k - 1
        let mut dividend_term3: i64 = -1; // 6k - 1

        let iterations = (scale + 13) / 14;
        for k in 1..=iterations {
            dividend_term1 -= 6;
            dividend_term2 += 2;
            dividend_term3 += 6;
            let dividend =
                BigInt::from(dividend_term1) * BigInt::from(dividend_term2) * BigInt::from(dividend_term3);
            let divisor = divisor_base.mul(&BigRational::from(k).pow(3)?);
            a = a.mul(&BigRational::from_integer(dividend)).div(&divisor)?.reduce();
            let b = a.mul(&BigRational::from(k));

            sum_a = sum_a.add(&a);
            sum_b = sum_b.add(&b);
        }

        let factor = BigRational::from(10005)
            .sqrt(scale + 10)?
            .mul(&BigRational::from(426880));
        let divisor = sum_a
            .mul(&BigRational::from(13591409))
            .add(&sum_b.mul(&BigRational::from(545140134)));

        Ok(factor.div(&divisor)?.with_scale(scale))
    }
}
