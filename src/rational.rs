//! BigRational definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::defs::Error;
use num_bigint::BigInt;
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::One as _;
use num_traits::Pow;
use num_traits::Signed;
use num_traits::Zero as _;

/// A rational number represented as a quotient of two arbitrary-precision integers.
///
/// The basic operations `add`, `sub`, `mul`, `div`, `pow`, `reciprocal`,
/// `increment`, and `decrement` have no loss of precision, which makes
/// `BigRational` a replacement for fixed-precision decimal types whenever
/// absolute accuracy is required.
///
/// The quotient is not kept in lowest terms: `4/4` and `1/1` are distinct
/// representations of the same value, and stay distinct until [`reduce`](Self::reduce)
/// is called explicitly. The denominator is always positive, the sign lives in
/// the numerator, and zero is always represented as `0/1`.
#[derive(Debug, Clone)]
pub struct BigRational {
    numerator: BigInt,
    denominator: BigInt,
}

impl BigRational {
    // The single construction funnel: rejects a zero denominator, moves the
    // sign into the numerator, and canonicalizes zero to 0/1.
    pub(crate) fn from_bigints(numerator: BigInt, denominator: BigInt) -> Result<Self, Error> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if numerator.is_zero() {
            return Ok(ZERO.clone());
        }

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        Ok(BigRational {
            numerator,
            denominator,
        })
    }

    // Construction for a denominator that is already known to be positive.
    pub(crate) fn with_denominator(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());

        if numerator.is_zero() {
            ZERO.clone()
        } else {
            BigRational {
                numerator,
                denominator,
            }
        }
    }

    /// Returns a new rational number with the value `numerator / denominator`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `denominator` is zero.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, Error>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Self::from_bigints(numerator.into(), denominator.into())
    }

    /// Returns a new rational number with the integer value `value`.
    pub fn from_integer<T: Into<BigInt>>(value: T) -> Self {
        BigRational {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Returns a new rational number built from an integer part and a fraction part,
    /// e.g. `from_mixed(3, 1, 2)` for 3 1/2 (= three and a half = 3.5).
    ///
    /// Only the integer part may carry a sign: `from_mixed(-3, 1, 2)` is -3.5.
    /// The fraction is added when the integer part is non-negative and
    /// subtracted when it is negative.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the fraction numerator or denominator is negative.
    ///  - DivisionByZero: the fraction denominator is zero.
    pub fn from_mixed<I, N, D>(
        integer: I,
        fraction_numerator: N,
        fraction_denominator: D,
    ) -> Result<Self, Error>
    where
        I: Into<BigInt>,
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let fraction_numerator = fraction_numerator.into();
        let fraction_denominator = fraction_denominator.into();

        if fraction_numerator.is_negative() || fraction_denominator.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let integer_part = Self::from_integer(integer);
        let fraction_part = Self::from_bigints(fraction_numerator, fraction_denominator)?;

        if integer_part.numerator.is_negative() {
            Ok(integer_part.sub(&fraction_part))
        } else {
            Ok(integer_part.add(&fraction_part))
        }
    }

    /// Returns the numerator. The numerator carries the sign of the number.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator. The denominator is never zero and always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Destructures the number and returns the numerator and the denominator.
    pub fn into_raw_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Reduces the quotient to the smallest numerator and denominator with the
    /// same value. The result is numerically identical to `self` but may differ
    /// in representation.
    pub fn reduce(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        Self::with_denominator(&self.numerator / &gcd, &self.denominator / &gcd)
    }

    /// Returns the integer part of the number, e.g. `3` for 3.5.
    ///
    /// The raw denominator is kept: the integer part of `7/2` is `6/2`.
    pub fn integer_part(&self) -> Self {
        let remainder = &self.numerator % &self.denominator;
        Self::with_denominator(&self.numerator - remainder, self.denominator.clone())
    }

    /// Returns the fraction part of the number, e.g. `0.5` for 3.5.
    ///
    /// The raw denominator is kept: the fraction part of `7/2` is `1/2`.
    pub fn fraction_part(&self) -> Self {
        Self::with_denominator(
            &self.numerator % &self.denominator,
            self.denominator.clone(),
        )
    }

    /// Returns the number with the sign inverted.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        BigRational {
            numerator: -self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal of the number (1/x).
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the number is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        Self::from_bigints(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        if self.numerator.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Returns -1, 0, or 1 as the value of the number is negative, zero, or positive.
    pub fn signum(&self) -> i32 {
        match self.numerator.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    // True for every representation of one, e.g. 4/4.
    pub(crate) fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Returns true if the number is an integer without a fraction part.
    ///
    /// Because the quotient is not kept in lowest terms, both the raw and the
    /// reduced denominator are checked: `4/2` is an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one() || self.reduce().denominator.is_one()
    }

    /// Returns the number increased by one.
    ///
    /// Functionally identical to adding one, but without forming the
    /// intermediate operand.
    pub fn increment(&self) -> Self {
        Self::with_denominator(
            &self.numerator + &self.denominator,
            self.denominator.clone(),
        )
    }

    /// Returns the number decreased by one.
    ///
    /// Functionally identical to subtracting one, but without forming the
    /// intermediate operand.
    pub fn decrement(&self) -> Self {
        Self::with_denominator(
            &self.numerator - &self.denominator,
            self.denominator.clone(),
        )
    }

    /// Adds `value` to `self` and returns the result. The result has no loss
    /// of precision.
    pub fn add(&self, value: &Self) -> Self {
        if self.denominator == value.denominator {
            return Self::with_denominator(
                &self.numerator + &value.numerator,
                self.denominator.clone(),
            );
        }

        let n = &self.numerator * &value.denominator + &value.numerator * &self.denominator;
        let d = &self.denominator * &value.denominator;
        Self::with_denominator(n, d)
    }

    /// Subtracts `value` from `self` and returns the result. The result has no
    /// loss of precision.
    pub fn sub(&self, value: &Self) -> Self {
        if self.denominator == value.denominator {
            return Self::with_denominator(
                &self.numerator - &value.numerator,
                self.denominator.clone(),
            );
        }

        let n = &self.numerator * &value.denominator - &value.numerator * &self.denominator;
        let d = &self.denominator * &value.denominator;
        Self::with_denominator(n, d)
    }

    /// Multiplies `self` by `value` and returns the result. The result has no
    /// loss of precision.
    pub fn mul(&self, value: &Self) -> Self {
        if self.is_zero() || value.is_zero() {
            return ZERO.clone();
        }

        // operands represented exactly as 1/1 pass through unchanged anyway
        if self.numerator.is_one() && self.denominator.is_one() {
            return value.clone();
        }
        if value.numerator.is_one() && value.denominator.is_one() {
            return self.clone();
        }

        Self::with_denominator(
            &self.numerator * &value.numerator,
            &self.denominator * &value.denominator,
        )
    }

    /// Divides `self` by `value` and returns the result. The result has no
    /// loss of precision.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `value` is zero.
    pub fn div(&self, value: &Self) -> Result<Self, Error> {
        if value.numerator.is_one() && value.denominator.is_one() {
            return Ok(self.clone());
        }

        let n = &self.numerator * &value.denominator;
        let d = &self.denominator * &value.numerator;
        Self::from_bigints(n, d)
    }

    /// Raises the number to the power of the integer `exponent` and returns the
    /// result. The result has no loss of precision.
    ///
    /// The exponent 0 returns one, including for a zero base. A positive
    /// exponent raises numerator and denominator independently; a negative
    /// exponent raises the numerator and denominator of the reciprocal.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the number is zero and `exponent` is negative.
    pub fn pow(&self, exponent: i32) -> Result<Self, Error> {
        if exponent == 0 {
            return Ok(ONE.clone());
        }
        if exponent == 1 {
            return Ok(self.clone());
        }

        let e = exponent.unsigned_abs();
        if exponent > 0 {
            Ok(Self::with_denominator(
                Pow::pow(&self.numerator, e),
                Pow::pow(&self.denominator, e),
            ))
        } else {
            Self::from_bigints(Pow::pow(&self.denominator, e), Pow::pow(&self.numerator, e))
        }
    }
}
