//! Serialization of BigRational.
//! Serialization to a string uses the rational "numerator/denominator" form,
//! which is lossless.

use crate::rational::BigRational;
use serde::{Serialize, Serializer};

impl Serialize for BigRational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rational_string())
    }
}
