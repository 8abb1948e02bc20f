//! Process-wide caches of constant values: factorials and Bernoulli numbers.

mod pi;

use crate::common::consts::{ONE, ZERO};
use crate::defs::Error;
use crate::rational::BigRational;
use lazy_static::lazy_static;
use std::sync::Mutex;

// Number of factorials precomputed when the cache is first used.
const FACTORIAL_BASE_ENTRIES: usize = 100;

lazy_static! {

    // Extension reads the last entry and appends, so the cache is guarded;
    // entries are never changed or removed once added.
    static ref FACTORIALS: Mutex<Vec<BigRational>> = Mutex::new(factorial_base_table());

    // The first eleven even-indexed Bernoulli numbers B_0, B_2, ..., B_20.
    static ref BERNOULLIS: Vec<BigRational> = bernoulli_table();
}

fn factorial_base_table() -> Vec<BigRational> {
    let mut table = Vec::with_capacity(FACTORIAL_BASE_ENTRIES);
    let mut result = ONE.clone();
    table.push(result.clone());
    for i in 1..FACTORIAL_BASE_ENTRIES {
        result = result.mul(&BigRational::from(i as i64));
        table.push(result.clone());
    }
    table
}

fn bernoulli_table() -> Vec<BigRational> {
    [
        (1, 1),
        (1, 6),
        (-1, 30),
        (1, 42),
        (-1, 30),
        (5, 66),
        (-691, 2730),
        (7, 6),
        (-3617, 510),
        (43867, 798),
        (-17611, 330),
    ]
    .iter()
    .map(|&(n, d)| BigRational::new(n, d).expect("Bernoulli table initialization."))
    .collect()
}

/// Calculates the factorial `n * (n-1) * (n-2) * ... * 1` of `n`.
/// The result has no loss of precision.
///
/// Small factorials are served from a process-wide cache; larger ones extend
/// the cache multiplicatively from its last entry. The cache only ever grows
/// and is safe to use from multiple threads.
///
/// ## Errors
///
///  - Domain: `n` is negative.
pub fn factorial(n: i64) -> Result<BigRational, Error> {
    if n < 0 {
        return Err(Error::Domain);
    }
    let n = n as usize;

    let mut cache = FACTORIALS.lock().expect("factorial cache lock");
    while cache.len() <= n {
        let next = cache[cache.len() - 1].mul(&BigRational::from(cache.len() as i64));
        cache.push(next);
    }

    Ok(cache[n].clone())
}

/// Returns the Bernoulli number B_n.
///
/// B_1 is 1/2, odd indices above one are zero, and even indices are served
/// from a fixed table covering B_0 through B_20.
///
/// ## Errors
///
///  - Domain: `n` is negative.
///  - InvalidArgument: `n` is even and greater than 20, which is outside the
///    table.
pub fn bernoulli(n: i64) -> Result<BigRational, Error> {
    if n < 0 {
        return Err(Error::Domain);
    }
    if n == 1 {
        return BigRational::new(1, 2);
    }
    if n % 2 == 1 {
        return Ok(ZERO.clone());
    }

    BERNOULLIS
        .get((n / 2) as usize)
        .cloned()
        .ok_or(Error::InvalidArgument)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(n, d).unwrap()
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), rational(1, 1));
        assert_eq!(factorial(1).unwrap(), rational(1, 1));
        assert_eq!(factorial(5).unwrap(), rational(120, 1));
        assert_eq!(factorial(10).unwrap(), rational(3628800, 1));

        assert_eq!(factorial(-1).unwrap_err(), Error::Domain);
    }

    #[test]
    fn test_factorial_cache_extension() {
        // beyond the precomputed table
        let large = factorial(120).unwrap();
        assert_eq!(
            large,
            factorial(119).unwrap().mul(&BigRational::from(120))
        );
        // served from the extended cache afterwards
        assert_eq!(factorial(120).unwrap(), large);
    }

    #[test]
    fn test_bernoulli() {
        assert_eq!(bernoulli(0).unwrap(), rational(1, 1));
        assert_eq!(bernoulli(1).unwrap(), rational(1, 2));
        assert_eq!(bernoulli(2).unwrap(), rational(1, 6));
        assert_eq!(bernoulli(3).unwrap(), rational(0, 1));
        assert_eq!(bernoulli(4).unwrap(), rational(-1, 30));
        assert_eq!(bernoulli(12).unwrap(), rational(-691, 2730));
        assert_eq!(bernoulli(19).unwrap(), rational(0, 1));
        assert_eq!(bernoulli(20).unwrap(), rational(-17611, 330));

        assert_eq!(bernoulli(-1).unwrap_err(), Error::Domain);
        assert_eq!(bernoulli(22).unwrap_err(), Error::InvalidArgument);
    }
}
