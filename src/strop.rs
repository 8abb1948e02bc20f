//! BigRational formatting and parsing.

use crate::common::consts::ZERO;
use crate::common::util::pow10;
use crate::defs::Error;
use crate::parser;
use crate::rational::BigRational;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt::Display;
use std::str::FromStr;

impl BigRational {
    /// Returns a new rational number built from the parts of a decimal string:
    /// sign, integer digits, fraction digits, repeating-fraction digits, and
    /// exponent digits (optionally signed). Empty parts are treated as absent.
    ///
    /// The repeating block denotes an infinitely repeating decimal fraction
    /// following the plain fraction digits: `(false, "3", "5", "", "2")` is
    /// -350, and `(true, "0", "1", "6", "")` is 0.1666... = 1/6.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: a part contains anything other than decimal digits,
    ///    or the exponent does not fit a 32-bit integer.
    pub fn from_parts(
        positive: bool,
        integer: &str,
        fraction: &str,
        repeating: &str,
        exponent: &str,
    ) -> Result<Self, Error> {
        let mut result = ZERO.clone();

        if !repeating.is_empty() {
            let nines = pow10(repeating.len() as u64) - 1;
            result = Self::from_bigints(parse_digits(repeating)?, nines)?;
        }

        if !fraction.is_empty() {
            result = result.add(&Self::from_integer(parse_digits(fraction)?));
            result = result.div(&Self::from_integer(pow10(fraction.len() as u64)))?;
        }

        if !integer.is_empty() {
            result = result.add(&Self::from_integer(parse_digits(integer)?));
        }

        if !exponent.is_empty() {
            let exponent: i32 = exponent.parse().map_err(|_| Error::InvalidFormat)?;
            let power = Self::from_integer(pow10(exponent.unsigned_abs() as u64));
            result = if exponent >= 0 {
                result.mul(&power)
            } else {
                result.div(&power)?
            };
        }

        if !positive {
            result = result.negate();
        }

        Ok(result)
    }

    /// Returns the string representation of the number in the form
    /// `numerator/denominator`, a bare integer when the raw denominator is 1,
    /// or `0` when the number is zero.
    ///
    /// The current representation is used without reducing: `4/4` formats as
    /// `"4/4"`, not `"1"`. The resulting string is valid input for parsing.
    pub fn to_rational_string(&self) -> String {
        if self.is_zero() {
            "0".to_string()
        } else if self.denominator().is_one() {
            self.numerator().to_string()
        } else {
            format!("{}/{}", self.numerator(), self.denominator())
        }
    }

    /// Returns the string representation of the number as integer and fraction
    /// parts in the form `integerPart fractionNumerator/fractionDenominator`,
    /// e.g. `"3 1/2"` for 3.5.
    ///
    /// The integer part is omitted when it is zero, and the fraction part is
    /// omitted when the number is an integer; `"0"` is returned for zero. The
    /// sign appears exactly once: on the integer part when present, otherwise
    /// on the fraction numerator. The fraction denominator stays positive.
    pub fn to_integer_rational_string(&self) -> String {
        let fraction_numerator = self.numerator() % self.denominator();
        let integer_part = (self.numerator() - &fraction_numerator) / self.denominator();

        let mut result = String::new();
        if !integer_part.is_zero() {
            result.push_str(&integer_part.to_string());
        }
        if !fraction_numerator.is_zero() {
            if result.is_empty() {
                result.push_str(&fraction_numerator.to_string());
            } else {
                result.push(' ');
                result.push_str(&fraction_numerator.abs().to_string());
            }
            result.push('/');
            result.push_str(&self.denominator().to_string());
        }
        if result.is_empty() {
            result.push('0');
        }

        result
    }
}

// Plain decimal notation for an (unscaled, scale) pair.
pub(crate) fn format_decimal(unscaled: &BigInt, scale: i64) -> String {
    let digits = unscaled.magnitude().to_string();

    let mut result = String::new();
    if unscaled.is_negative() {
        result.push('-');
    }

    if scale <= 0 {
        result.push_str(&digits);
        for _ in 0..scale.unsigned_abs() {
            result.push('0');
        }
    } else if digits.len() as i64 > scale {
        let point = digits.len() - scale as usize;
        result.push_str(&digits[..point]);
        result.push('.');
        result.push_str(&digits[point..]);
    } else {
        result.push_str("0.");
        for _ in 0..(scale as usize - digits.len()) {
            result.push('0');
        }
        result.push_str(&digits);
    }

    result
}

fn parse_digits(s: &str) -> Result<BigInt, Error> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat);
    }
    BigInt::parse_bytes(s.as_bytes(), 10).ok_or(Error::InvalidFormat)
}

fn parse_decimal(s: &str) -> Result<BigRational, Error> {
    let parts = parser::parse(s)?;
    BigRational::from_parts(
        parts.positive,
        parts.integer,
        parts.fraction,
        parts.repeating,
        parts.exponent,
    )
}

/// Formats the number as a decimal string.
///
/// Zero formats as `"0"` and integer representations format without a decimal
/// point. Other values format as the exact decimal expansion when it
/// terminates within `max(digits(numerator) + digits(denominator), 34)`
/// significant digits, and as the expansion rounded half-up at that many
/// significant digits otherwise. Plain notation is always used, never an
/// exponent.
impl Display for BigRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.denominator().is_one() {
            return write!(f, "{}", self.numerator());
        }

        let (unscaled, scale) = self.to_decimal();
        f.write_str(&format_decimal(&unscaled, scale))
    }
}

/// Parses a rational number from a string.
///
/// The accepted representations are decimal strings with an optional fraction
/// part, repeating-fraction block, and exponent (`"3.5"`, `"-0.1[6]"`,
/// `"12e-3"`), and rational strings of decimal numbers chained with `/`
/// (`"1/3"`, `"a/b/c"` meaning `(a/b)/c`).
///
/// ## Errors
///
///  - InvalidFormat: a segment of the input is not a valid decimal number.
///  - DivisionByZero: a divisor segment has the value zero.
impl FromStr for BigRational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('/');

        // split always yields at least one segment
        let mut result = match segments.next() {
            Some(first) => parse_decimal(first)?,
            None => return Err(Error::InvalidFormat),
        };

        for segment in segments {
            result = result.div(&parse_decimal(segment)?)?;
        }

        Ok(result)
    }
}
