//! Conversion between BigRational and other numeric representations.

use crate::common::consts::{ONE, ZERO};
use crate::common::util::{count_decimal_digits, pow10};
use crate::defs::Error;
use crate::rational::BigRational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

// Significant-digit floor used when a value is converted to a decimal
// approximation; corresponds to 128-bit decimal arithmetic.
pub(crate) const DECIMAL_PRECISION_FLOOR: u64 = 34;

// Rounds numerator/denominator half away from zero; the denominator must be positive.
fn round_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.abs() * BigInt::from(2) >= *denominator {
        if numerator.is_negative() {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    }
}

impl BigRational {
    /// Returns a new rational number with the value of `value`.
    ///
    /// The conversion goes through the shortest decimal representation of the
    /// floating point number, so `from_f64(0.1)` is exactly `1/10`.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: `value` is infinite or NaN.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if value == 0.0 {
            return Ok(ZERO.clone());
        }
        if value == 1.0 {
            return Ok(ONE.clone());
        }
        if !value.is_finite() {
            return Err(Error::InvalidFormat);
        }

        value.to_string().parse()
    }

    /// Returns a new rational number with the value of `value`.
    ///
    /// The conversion goes through the shortest decimal representation of the
    /// floating point number, so `from_f32(0.1)` is exactly `1/10`.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: `value` is infinite or NaN.
    pub fn from_f32(value: f32) -> Result<Self, Error> {
        if value == 0.0 {
            return Ok(ZERO.clone());
        }
        if value == 1.0 {
            return Ok(ONE.clone());
        }
        if !value.is_finite() {
            return Err(Error::InvalidFormat);
        }

        value.to_string().parse()
    }

    /// Returns a new rational number with the value `unscaled * 10^-scale` of a
    /// fixed-precision decimal. A negative scale multiplies out to an integer.
    pub fn from_decimal<T: Into<BigInt>>(unscaled: T, scale: i64) -> Self {
        let unscaled = unscaled.into();
        if scale < 0 {
            Self::from_integer(unscaled * pow10(scale.unsigned_abs()))
        } else {
            Self::with_denominator(unscaled, pow10(scale as u64))
        }
    }

    /// Returns the number as a fixed-precision decimal `(unscaled, scale)` pair
    /// with the value `unscaled * 10^-scale`.
    ///
    /// The conversion is exact when the decimal expansion of the number
    /// terminates within `max(digits(numerator) + digits(denominator), 34)`
    /// significant digits, and rounded half-up at that many significant digits
    /// otherwise.
    pub fn to_decimal(&self) -> (BigInt, i64) {
        let ceiling = (count_decimal_digits(self.numerator())
            + count_decimal_digits(self.denominator()))
        .max(DECIMAL_PRECISION_FLOOR);

        self.to_significant_digits(ceiling)
    }

    /// Returns the number as a double value.
    pub fn to_f64(&self) -> f64 {
        let n = self.numerator().to_f64().unwrap_or(f64::NAN);
        let d = self.denominator().to_f64().unwrap_or(f64::NAN);
        n / d
    }

    /// Returns the number as a float value.
    pub fn to_f32(&self) -> f32 {
        let n = self.numerator().to_f32().unwrap_or(f32::NAN);
        let d = self.denominator().to_f32().unwrap_or(f32::NAN);
        n / d
    }

    /// Returns a rational number with approximately the same value rounded
    /// half-up to `scale` digits after the decimal point, represented over the
    /// denominator `10^scale`.
    ///
    /// A negative scale rounds to the left of the decimal point:
    /// `1234` with scale -2 gives `1200`.
    pub fn with_scale(&self, scale: i64) -> Self {
        if self.is_zero() {
            return ZERO.clone();
        }

        if scale >= 0 {
            let p = pow10(scale as u64);
            let rounded = round_half_up(&(self.numerator() * &p), self.denominator());
            Self::with_denominator(rounded, p)
        } else {
            let p = pow10(scale.unsigned_abs());
            let rounded = round_half_up(self.numerator(), &(self.denominator() * &p));
            Self::from_integer(rounded * p)
        }
    }

    /// Returns a rational number with approximately the same value rounded
    /// half-up to `precision` significant digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `precision` is zero or negative.
    pub fn with_precision(&self, precision: i64) -> Result<Self, Error> {
        if precision <= 0 {
            return Err(Error::InvalidArgument);
        }
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let (unscaled, scale) = self.to_significant_digits(precision as u64);
        Ok(Self::from_decimal(unscaled, scale))
    }

    // Decimal approximation with at most `precision` significant digits as an
    // (unscaled, scale) pair, rounded half-up. When the decimal expansion
    // terminates within `precision` digits the result is exact and trailing
    // zeros of the fraction are stripped.
    pub(crate) fn to_significant_digits(&self, precision: u64) -> (BigInt, i64) {
        if self.is_zero() {
            return (BigInt::zero(), 0);
        }

        let n = self.numerator().abs();
        let d = self.denominator();
        let precision = precision as i64;

        // the value lies strictly between 10^(e-1) and 10^(e+1)
        let e = count_decimal_digits(&n) as i64 - count_decimal_digits(d) as i64;
        let mut scale = precision - e;
        let (mut unscaled, mut exact) = scaled_quotient(&n, d, scale);

        // the magnitude estimate can be off by one digit
        let digits = count_decimal_digits(&unscaled) as i64;
        if digits != precision {
            scale -= digits - precision;
            (unscaled, exact) = scaled_quotient(&n, d, scale);
        }

        // rounding half-up can carry into one more digit (999... to 1000...)
        if count_decimal_digits(&unscaled) as i64 > precision {
            unscaled /= BigInt::from(10);
            scale -= 1;
        }

        if exact {
            let ten = BigInt::from(10);
            while scale > 0 && (&unscaled % &ten).is_zero() {
                unscaled /= &ten;
                scale -= 1;
            }
        }

        if self.numerator().is_negative() {
            unscaled = -unscaled;
        }

        (unscaled, scale)
    }
}

// Quotient n*10^scale / d rounded half-up, together with an exactness flag.
// Both inputs must be positive.
fn scaled_quotient(n: &BigInt, d: &BigInt, scale: i64) -> (BigInt, bool) {
    let (num, den) = if scale >= 0 {
        (n * pow10(scale as u64), d.clone())
    } else {
        (n.clone(), d * pow10(scale.unsigned_abs()))
    };

    let (quotient, remainder) = num.div_rem(&den);
    if remainder.is_zero() {
        (quotient, true)
    } else if remainder * BigInt::from(2) >= den {
        (quotient + 1, false)
    } else {
        (quotient, false)
    }
}
