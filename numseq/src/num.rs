use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

use num_bigint::BigInt;

use crate::decimal::Decimal;
use crate::error::RangeError;
use crate::progression::{DecimalRange, IntRange, Progression};

/// A numeric domain usable for file numbers.
///
/// Implemented by `i64` and [`Decimal`]. Callers stay generic over the
/// domain and reach the concrete progression type through [`FileNum::Range`].
pub trait FileNum:
    Clone
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// The low-level progression over this domain.
    type Range: Progression<Num = Self> + Clone + Debug + Eq + Hash;

    /// The unit step.
    fn one() -> Self;

    fn is_zero(&self) -> bool;

    fn is_negative(&self) -> bool;

    /// The remainder of `self / step`; both values are non-negative here.
    fn rem(&self, step: &Self) -> Self;

    /// `self * factor`.
    fn times(&self, factor: usize) -> Self;

    /// The exact value as an integer numerator over a power-of-ten scale.
    fn as_scaled_int(&self) -> (BigInt, u32);

    /// Builds the progression from a start, an exclusive stop and a step.
    fn range(start: Self, stop: Self, step: Self) -> Result<Self::Range, RangeError>;
}

impl FileNum for i64 {
    type Range = IntRange;

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn rem(&self, step: &Self) -> Self {
        self % step
    }

    fn times(&self, factor: usize) -> Self {
        self * factor as i64
    }

    fn as_scaled_int(&self) -> (BigInt, u32) {
        (BigInt::from(*self), 0)
    }

    fn range(start: Self, stop: Self, step: Self) -> Result<IntRange, RangeError> {
        IntRange::new(start, stop, step)
    }
}

impl FileNum for Decimal {
    type Range = DecimalRange;

    fn one() -> Self {
        Decimal::new(1, 0)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Decimal::is_negative(self)
    }

    fn rem(&self, step: &Self) -> Self {
        Decimal::rem(self, step)
    }

    fn times(&self, factor: usize) -> Self {
        Decimal::times(self, factor)
    }

    fn as_scaled_int(&self) -> (BigInt, u32) {
        Decimal::as_scaled_int(self)
    }

    fn range(start: Self, stop: Self, step: Self) -> Result<DecimalRange, RangeError> {
        DecimalRange::new(start, stop, step)
    }
}

/// A file number of either numeric domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    Int(i64),
    Decimal(Decimal),
}

impl Number {
    /// Whether the number is a whole number.
    pub fn is_integral(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Decimal(value) => value.is_integral(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Decimal(value) => write!(f, "{value}"),
        }
    }
}
