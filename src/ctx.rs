//! Context for calculations with a fixed result scale.

use crate::defs::{Error, DEFAULT_SCALE};
use crate::rational::BigRational;

/// Context holds the scale (number of digits after the decimal point) used for
/// the precision-bounded operations, so the scale does not have to be passed
/// to every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    scale: i64,
}

impl Context {
    /// Creates a context with the specified scale.
    pub fn new(scale: i64) -> Self {
        Context { scale }
    }

    /// Returns the scale of the context.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Calculates pi with the scale of the context.
    pub fn pi(&self) -> Result<BigRational, Error> {
        BigRational::pi(self.scale)
    }

    /// Calculates the square root of `x` with the scale of the context.
    pub fn sqrt(&self, x: &BigRational) -> Result<BigRational, Error> {
        x.sqrt(self.scale)
    }

    /// Calculates `x` to the power of `y` with the scale of the context.
    pub fn pow(&self, x: &BigRational, y: &BigRational) -> Result<BigRational, Error> {
        x.pow_rational(y, self.scale)
    }

    /// Calculates e to the power of `x` with the scale of the context.
    pub fn exp(&self, x: &BigRational) -> Result<BigRational, Error> {
        x.exp(self.scale)
    }

    /// Calculates the natural logarithm of `x` with the scale of the context.
    pub fn ln(&self, x: &BigRational) -> Result<BigRational, Error> {
        x.ln(self.scale)
    }

    /// Calculates the sine of `x` with the scale of the context.
    pub fn sin(&self, x: &BigRational) -> Result<BigRational, Error> {
        x.sin(self.scale)
    }

    /// Calculates the cosine of `x` with the scale of the context.
    pub fn cos(&self, x: &BigRational) -> Result<BigRational, Error> {
        x.cos(self.scale)
    }
}

/// The default context has a scale of 16.
impl Default for Context {
    fn default() -> Self {
        Context::new(DEFAULT_SCALE)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_context() {
        let ctx = Context::default();
        assert_eq!(ctx.scale(), 16);

        let ctx = Context::new(10);
        assert_eq!(ctx.scale(), 10);

        let two = BigRational::from(2);
        assert_eq!(ctx.pi().unwrap(), BigRational::pi(10).unwrap());
        assert_eq!(ctx.sqrt(&two).unwrap(), two.sqrt(10).unwrap());
        assert_eq!(ctx.exp(&two).unwrap(), two.exp(10).unwrap());
        assert_eq!(ctx.ln(&two).unwrap(), two.ln(10).unwrap());
        assert_eq!(ctx.sin(&two).unwrap(), two.sin(10).unwrap());
        assert_eq!(ctx.cos(&two).unwrap(), two.cos(10).unwrap());
        assert_eq!(
            ctx.pow(&two, &BigRational::new(1, 2).unwrap()).unwrap(),
            two.pow_rational(&BigRational::new(1, 2).unwrap(), 10).unwrap()
        );
    }
}
