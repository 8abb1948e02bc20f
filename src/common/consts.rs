//! Static constants.

use crate::rational::BigRational;
use lazy_static::lazy_static;

lazy_static! {

    /// 0
    pub(crate) static ref ZERO: BigRational = BigRational::from_integer(0);

    /// 1
    pub(crate) static ref ONE: BigRational = BigRational::from_integer(1);

    /// 2
    pub(crate) static ref TWO: BigRational = BigRational::from_integer(2);

    /// 10
    pub(crate) static ref TEN: BigRational = BigRational::from_integer(10);
}
