//! Exact-rational is a library that implements rational numbers with exact arithmetic
//! and precision-bounded elementary functions.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//!
//! The number is defined by the data type `BigRational`.
//! Each number consists of an arbitrary-precision integer numerator and an
//! arbitrary-precision integer denominator. The denominator is always positive
//! and never zero; the sign of the number lives in the numerator.
//!
//!
//! The basic calculations (addition, subtraction, multiplication, division,
//! integer powers, and the reciprocal) have no loss of precision, which makes
//! `BigRational` a replacement for fixed-precision decimal types whenever
//! absolute accuracy is required.
//!
//!
//! The quotient is deliberately not kept in lowest terms: `4/4` and `1/1` are
//! distinct representations of the same value that compare equal. Reduction to
//! lowest terms is an explicit operation.
//!
//!
//! `BigRational` can be parsed from and formatted into decimal strings
//! (`"3.5"`, `"12e-3"`), rational strings (`"1/3"`, including chained division
//! `"a/b/c"`), and repeating-decimal notation (`"0.1[6]"` is 1/6).
//!
//! **Precision-bounded operations**
//!
//! The elementary functions (square root, natural logarithm, exponential
//! function, sine, cosine, pi, and powers with a non-integer exponent) cannot
//! be represented exactly as rational numbers. These operations take a scale
//! (the number of digits after the decimal point), iterate a series until the
//! residual drops below an internally derived accuracy threshold, and round
//! the result half-up to the requested scale.
//!
//! **Error handling**
//!
//! Fallible operations return a `Result` with the [`Error`] enum: division by
//! zero, domain violations, malformed input, and invalid arguments all fail
//! immediately at the offending call. No error is ever approximated away.
//!
//! ## Examples
//!
//! ```
//! use exact_rational::BigRational;
//! use exact_rational::ctx::Context;
//!
//! // A repeating decimal is an exact rational number.
//! let x: BigRational = "0.1[6]".parse().expect("number parsed");
//! assert_eq!(x, BigRational::new(1, 6).expect("denominator is not zero"));
//!
//! // Exact arithmetic: no rounding drift.
//! let y = x.mul(&BigRational::from(6));
//! assert_eq!(y, BigRational::from(1));
//!
//! // Bounded-precision elementary functions round to the requested scale.
//! let sqrt2 = BigRational::from(2).sqrt(15).expect("square root computed");
//! assert_eq!(sqrt2.to_string(), "1.414213562373095");
//!
//! // A context carries the scale for a whole calculation.
//! let ctx = Context::new(27);
//! let pi = ctx.pi().expect("pi computed");
//! assert_eq!(pi.to_string(), "3.141592653589793238462643383");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod ext;
mod ops;
mod parser;
mod rational;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::DEFAULT_SCALE;
pub use crate::ops::consts::bernoulli;
pub use crate::ops::consts::factorial;
pub use crate::rational::BigRational;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigrational() {
        use crate::BigRational;

        // Scale for the bounded-precision operations.
        let scale = 20;

        // Compute ln(8) twice: directly, and as 3*ln(2) from exact powers.
        let eight = BigRational::from(2).pow(3).expect("exponent is positive");
        let ln_eight = eight.ln(scale).expect("input is positive");

        let ln_two = BigRational::from(2).ln(scale + 2).expect("input is positive");
        let three_ln_two = ln_two.mul(&BigRational::from(3)).with_scale(scale);

        // Both roads lead to the same rounded result.
        assert_eq!(ln_eight, three_ln_two);

        // And the exact road back: exp(ln(8)) is 8 up to the scale.
        let restored = ln_eight.exp(scale - 2).expect("exp computed");
        assert_eq!(restored, BigRational::from(8));
    }
}
