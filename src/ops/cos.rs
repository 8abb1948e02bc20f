//! Cosine.

use crate::common::consts::ZERO;
use crate::defs::Error;
use crate::ops::consts::factorial;
use crate::ops::util::power_of_ten;
use crate::rational::BigRational;

impl BigRational {
    /// Computes the cosine of the number and returns the result rounded
    /// half-up to `scale` digits after the decimal point.
    ///
    /// The alternating Taylor series `sum((-1)^i x^(2i)/(2i)!)` is summed until
    /// the magnitude of a term drops below the threshold. Both trigonometric
    /// series use `10^(-scale-1)`, one digit looser than the other iterative
    /// algorithms.
    pub fn cos(&self, scale: i64) -> Result<Self, Error> {
        let accuracy = power_of_ten(-scale - 1);

        let mut result = ZERO.clone();
        let mut negate = false;
        let mut i: i32 = 0;

        loop {
            let mut step = self.pow(2 * i)?.div(&factorial(2 * i as i64)?)?;
            if negate {
                step = step.negate();
            }
            result = result.add(&step);
            negate = !negate;
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
    fn test_cos_zero() {
        for scale in [0, 5, 20] {
            assert_eq!(rational(0, 1).cos(scale).unwrap(), rational(1, 1));
        }
    }

    #[test]
    fn test_cos() {
        assert_eq!(
            rational(1, 1).cos(10).unwrap(),
            "0.5403023059".parse().unwrap()
        );
        assert_eq!(
            rational(-1, 1).cos(10).unwrap(),
            "0.5403023059".parse().unwrap()
        );
        assert_eq!(
            rational(1, 2).cos(12).unwrap(),
            "0.877582561890".parse().unwrap()
        );
        assert_eq!(rational(2, 1).cos(8).unwrap(), "-0.41614684".parse().unwrap());
    }
}
