use crate::Result;

use std::fmt;

use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Non-finite result while applying {0} operation on {1:?} and {2:?}")]
    NotFinite(&'static str, Money, Money),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    pub fn is_negative(&self) -> bool {
        return self.0 < 0.0;
    }

    pub fn is_finite(&self) -> bool {
        return self.0.is_finite();
    }

    /// Adds `other` in place. The value is left untouched if the sum is not finite.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self.0 + other.0;

        if !sum.is_finite() {
            Err(MoneyError::NotFinite("add", *self, *other))?
        }

        self.0 = sum;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self.0 - other.0;

        if !difference.is_finite() {
            Err(MoneyError::NotFinite("sub", *self, *other))?
        }

        self.0 = difference;

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
