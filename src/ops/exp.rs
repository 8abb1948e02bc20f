//! Exponential function.

use crate::common::consts::ZERO;
use crate::defs::Error;
use crate::ops::consts::factorial;
use crate::ops::util::accuracy;
use crate::rational::BigRational;

impl BigRational {
    /// Computes e raised to the power of the number and returns the result
    /// rounded half-up to `scale` digits after the decimal point.
    ///
    /// The Taylor series `sum(x^i/i!)` is summed until the magnitude of a term
    /// drops below `10^(-scale-2)`. Factorials come from the process-wide
    /// factorial cache, which grows on demand.
    pub fn exp(&self, scale: i64) -> Result<Self, Error> {
        let accuracy = accuracy(scale);

        let mut result = ZERO.clone();
        let mut i: i32 = 0;

        loop {
            let step = self.pow(i)?.div(&factorial(i as i64)?)?;
            result = result.add(&step);
            i += 1;
            if step.abs() < accuracy {
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
    fn test_exp_zero() {
        for scale in [0, 5, 20] {
            assert_eq!(rational(0, 1).exp(scale).unwrap(), rational(1, 1));
        }
    }

    #[test]
    fn test_exp() {
        assert_eq!(
            rational(1, 1).exp(10).unwrap(),
            "2.7182818285".parse().unwrap()
        );
        assert_eq!(
            rational(1, 1).exp(20).unwrap(),
            "2.71828182845904523536".parse().unwrap()
        );
        assert_eq!(
            rational(-1, 1).exp(10).unwrap(),
            "0.3678794412".parse().unwrap()
        );
        assert_eq!(
            rational(1, 2).exp(10).unwrap(),
            "1.6487212707".parse().unwrap()
        );
        assert_eq!(rational(2, 1).exp(8).unwrap(), "7.38905610".parse().unwrap());
    }
}
