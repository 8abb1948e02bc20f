//! Standard library trait implementations for BigRational.

use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::defs::Error;
use crate::rational::BigRational;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigRational {
                fn from(value: $t) -> Self {
                    BigRational::from_integer(value)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for BigRational {
    fn from(value: BigInt) -> Self {
        BigRational::from_integer(value)
    }
}

impl TryFrom<f64> for BigRational {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        BigRational::from_f64(value)
    }
}

impl TryFrom<f32> for BigRational {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        BigRational::from_f32(value)
    }
}

impl Add for BigRational {
    type Output = BigRational;
    fn add(self, rhs: BigRational) -> BigRational {
        BigRational::add(&self, &rhs)
    }
}

impl Add<&BigRational> for BigRational {
    type Output = BigRational;
    fn add(self, rhs: &BigRational) -> BigRational {
        BigRational::add(&self, rhs)
    }
}

impl AddAssign for BigRational {
    fn add_assign(&mut self, rhs: BigRational) {
        *self = BigRational::add(self, &rhs);
    }
}

impl AddAssign<&BigRational> for BigRational {
    fn add_assign(&mut self, rhs: &BigRational) {
        *self = BigRational::add(self, rhs);
    }
}

impl Sub for BigRational {
    type Output = BigRational;
    fn sub(self, rhs: BigRational) -> BigRational {
        BigRational::sub(&self, &rhs)
    }
}

impl Sub<&BigRational> for BigRational {
    type Output = BigRational;
    fn sub(self, rhs: &BigRational) -> BigRational {
        BigRational::sub(&self, rhs)
    }
}

impl SubAssign for BigRational {
    fn sub_assign(&mut self, rhs: BigRational) {
        *self = BigRational::sub(self, &rhs);
    }
}

impl SubAssign<&BigRational> for BigRational {
    fn sub_assign(&mut self, rhs: &BigRational) {
        *self = BigRational::sub(self, rhs);
    }
}

impl Mul for BigRational {
    type Output = BigRational;
    fn mul(self, rhs: BigRational) -> BigRational {
        BigRational::mul(&self, &rhs)
    }
}

impl Mul<&BigRational> for BigRational {
    type Output = BigRational;
    fn mul(self, rhs: &BigRational) -> BigRational {
        BigRational::mul(&self, rhs)
    }
}

impl MulAssign for BigRational {
    fn mul_assign(&mut self, rhs: BigRational) {
        *self = BigRational::mul(self, &rhs);
    }
}

impl MulAssign<&BigRational> for BigRational {
    fn mul_assign(&mut self, rhs: &BigRational) {
        *self = BigRational::mul(self, rhs);
    }
}

/// Division panics if the divisor is zero, like integer division does.
/// Use [`BigRational::div`] for a fallible division.
impl Div for BigRational {
    type Output = BigRational;
    fn div(self, rhs: BigRational) -> BigRational {
        BigRational::div(&self, &rhs).expect("division by zero")
    }
}

impl Div<&BigRational> for BigRational {
    type Output = BigRational;
    fn div(self, rhs: &BigRational) -> BigRational {
        BigRational::div(&self, rhs).expect("division by zero")
    }
}

impl DivAssign for BigRational {
    fn div_assign(&mut self, rhs: BigRational) {
        *self = BigRational::div(self, &rhs).expect("division by zero");
    }
}

impl DivAssign<&BigRational> for BigRational {
    fn div_assign(&mut self, rhs: &BigRational) {
        *self = BigRational::div(self, rhs).expect("division by zero");
    }
}

impl Neg for BigRational {
    type Output = BigRational;
    fn neg(self) -> BigRational {
        self.negate()
    }
}

impl Neg for &BigRational {
    type Output = BigRational;
    fn neg(self) -> BigRational {
        self.negate()
    }
}

/// Equality compares values, not representations: `4/4 == 1/1`.
impl PartialEq for BigRational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator() * other.denominator() == other.numerator() * self.denominator()
    }
}

impl Eq for BigRational {}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering is exact: values are compared by cross-multiplication, never
/// through a floating point approximation.
impl Ord for BigRational {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator() * other.denominator()).cmp(&(other.numerator() * self.denominator()))
    }
}

/// Equal values must hash equally, so the reduced form is hashed.
impl Hash for BigRational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.numerator().hash(state);
        reduced.denominator().hash(state);
    }
}

impl Default for BigRational {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl Zero for BigRational {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        BigRational::is_zero(self)
    }
}

impl One for BigRational {
    fn one() -> Self {
        ONE.clone()
    }
}

impl Sum for BigRational {
    fn sum<I: Iterator<Item = BigRational>>(iter: I) -> Self {
        iter.fold(ZERO.clone(), |acc, v| acc.add(&v))
    }
}

impl<'a> Sum<&'a BigRational> for BigRational {
    fn sum<I: Iterator<Item = &'a BigRational>>(iter: I) -> Self {
        iter.fold(ZERO.clone(), |acc, v| acc.add(v))
    }
}

impl Product for BigRational {
    fn product<I: Iterator<Item = BigRational>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, v| acc.mul(&v))
    }
}

impl<'a> Product<&'a BigRational> for BigRational {
    fn product<I: Iterator<Item = &'a BigRational>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, v| acc.mul(v))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashSet;

    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d).unwrap()
    }

    #[test]
    fn test_operators() {
        let a = rational(1, 2);
        let b = rational(1, 3);

        assert_eq!(a.clone() + b.clone(), rational(5, 6));
        assert_eq!(a.clone() - &b, rational(1, 6));
        assert_eq!(a.clone() * b.clone(), rational(1, 6));
        assert_eq!(a.clone() / &b, rational(3, 2));
        assert_eq!(-a.clone(), rational(-1, 2));

        let mut c = a;
        c += b.clone();
        c -= &b;
        c *= rational(2, 1);
        c /= rational(2, 1);
        assert_eq!(c, rational(1, 2));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let _ = rational(1, 2) / rational(0, 1);
    }

    #[test]
    fn test_value_equality_and_ordering() {
        assert_eq!(rational(4, 4), rational(1, 1));
        assert_eq!(rational(2, 4), rational(1, 2));
        assert_ne!(rational(1, 2), rational(1, 3));

        assert!(rational(1, 3) < rational(1, 2));
        assert!(rational(-1, 2) < rational(-1, 3));
        assert!(rational(-1, 2) < rational(0, 1));

        assert_eq!(rational(1, 2).max(rational(1, 3)), rational(1, 2));
        assert_eq!(rational(1, 2).min(rational(1, 3)), rational(1, 3));
    }

    #[test]
    fn test_hash_is_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(rational(1, 2));
        assert!(set.contains(&rational(2, 4)));
        assert!(!set.contains(&rational(1, 3)));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(BigRational::from(-5i32), rational(-5, 1));
        assert_eq!(BigRational::from(5u64), rational(5, 1));
        assert_eq!(BigRational::from(BigInt::from(12)), rational(12, 1));

        assert_eq!(BigRational::try_from(0.5f64).unwrap(), rational(1, 2));
        assert_eq!(
            BigRational::try_from(f64::NAN).unwrap_err(),
            Error::InvalidFormat
        );
    }

    #[test]
    fn test_sum_product_default() {
        let values = [rational(1, 2), rational(1, 3), rational(1, 6)];
        let sum: BigRational = values.iter().sum();
        let product: BigRational = values.iter().cloned().product();
        assert_eq!(sum, rational(1, 1));
        assert_eq!(product, rational(1, 36));

        assert_eq!(BigRational::default(), BigRational::zero());
        assert_eq!(BigRational::one(), rational(1, 1));
    }
}
