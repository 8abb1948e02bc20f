//! Natural logarithm.

use crate::common::consts::{ONE, TWO, ZERO};
use crate::defs::Error;
use crate::ops::util::accuracy;
use crate::rational::BigRational;

impl BigRational {
    /// Computes the natural logarithm of the number and returns the result
    /// rounded half-up to `scale` digits after the decimal point.
    ///
    /// The result is zero for an input of one, at any scale. Otherwise the
    /// logarithm is summed as the area-hyperbolic-tangent series
    /// `2*sum(m^(2i+1)/(2i+1))` with `m = (x-1)/(x+1)` until the magnitude of a
    /// term drops below `10^(-scale-2)`.
    ///
    /// ## Errors
    ///
    ///  - Domain: the number is zero or negative.
    pub fn ln(&self, scale: i64) -> Result<Self, Error> {
        if self.signum() <= 0 {
            return Err(Error::Domain);
        }
        if self.is_one() {
            return Ok(ZERO.clone());
        }

        self.ln_area_hyperbolic_tangent(scale)
    }

    // ln(x) = 2*atanh((x-1)/(x+1)) expanded into odd powers of the substitution.
    fn ln_area_hyperbolic_tangent(&self, scale: i64) -> Result<Self, Error> {
        let accuracy = accuracy(scale);

        // |m| < 1 for any positive x, so the series converges
        let m = self.sub(&ONE).div(&self.add(&ONE))?;

        let mut result = ZERO.clone();
        let mut i: i32 = 0;

        loop {
            let exponent = 2 * i + 1;
            let step = m.pow(exponent)?.div(&BigRational::from(exponent))?;
            result = result.add(&step);
            i += 1;
            if step.abs() < accuracy {
                break;
            }
        }

        Ok(result.mul(&TWO).with_scale(scale))
    }
}
