use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::decimal::Decimal;
use crate::error::RangeError;

/// A lazily iterable arithmetic progression with an exclusive stop bound.
///
/// Length, membership and indexing are all decided exactly, without
/// materializing the members.
pub trait Progression {
    /// The numeric domain of the members.
    type Num;
    /// The iterator over the members, produced on demand.
    type Iter: Iterator<Item = Self::Num>;

    fn start(&self) -> Self::Num;

    fn step(&self) -> Self::Num;

    /// The number of members.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `value` is a member.
    fn contains(&self, value: &Self::Num) -> bool;

    /// The member at `index`, if any.
    fn get(&self, index: usize) -> Option<Self::Num>;

    fn iter(&self) -> Self::Iter;
}

/// A stepped `i64` range with an exclusive stop bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntRange {
    start: i64,
    stop: i64,
    step: i64,
}

impl IntRange {
    pub fn new(start: i64, stop: i64, step: i64) -> Result<Self, RangeError> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }
}

impl Progression for IntRange {
    type Num = i64;
    type Iter = IntRangeIter;

    fn start(&self) -> i64 {
        self.start
    }

    fn step(&self) -> i64 {
        self.step
    }

    fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.stop as i128 - self.start as i128
        } else {
            self.start as i128 - self.stop as i128
        };
        if span <= 0 {
            return 0;
        }
        let step = (self.step as i128).abs();
        usize::try_from((span + step - 1) / step).unwrap_or(usize::MAX)
    }

    fn contains(&self, value: &i64) -> bool {
        let in_bounds = if self.step > 0 {
            self.start <= *value && *value < self.stop
        } else {
            self.stop < *value && *value <= self.start
        };
        in_bounds && (*value as i128 - self.start as i128) % self.step as i128 == 0
    }

    fn get(&self, index: usize) -> Option<i64> {
        if index >= self.len() {
            return None;
        }
        let value = self.start as i128 + index as i128 * self.step as i128;
        // A member of the range always fits back into the domain.
        value.to_i64()
    }

    fn iter(&self) -> IntRangeIter {
        IntRangeIter {
            next: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}

/// The iterator over an [`IntRange`].
#[derive(Debug, Clone)]
pub struct IntRangeIter {
    next: i64,
    stop: i64,
    step: i64,
}

impl Iterator for IntRangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let within = if self.step > 0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };
        if !within {
            return None;
        }
        let value = self.next;
        self.next = value.checked_add(self.step).unwrap_or(self.stop);
        Some(value)
    }
}

/// An exact decimal progression with an exclusive stop bound.
///
/// The step may be negative, in which case the stop is a lower bound.
/// Membership and length use exact scaled-integer arithmetic so that steps
/// such as `0.1` behave correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalRange {
    start: Decimal,
    stop: Decimal,
    step: Decimal,
}

impl DecimalRange {
    pub fn new(start: Decimal, stop: Decimal, step: Decimal) -> Result<Self, RangeError> {
        if step.is_zero() {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    pub fn stop(&self) -> &Decimal {
        &self.stop
    }

    fn is_ascending(&self) -> bool {
        !self.step.is_negative()
    }
}

impl Progression for DecimalRange {
    type Num = Decimal;
    type Iter = DecimalRangeIter;

    fn start(&self) -> Decimal {
        self.start.clone()
    }

    fn step(&self) -> Decimal {
        self.step.clone()
    }

    fn len(&self) -> usize {
        let reaches_stop = if self.is_ascending() {
            self.start < self.stop
        } else {
            self.start > self.stop
        };
        if !reaches_stop {
            return 0;
        }
        let scale = [&self.start, &self.stop, &self.step]
            .iter()
            .map(|value| value.scale())
            .max()
            .unwrap_or(0);
        let span = (self.stop.rescaled(scale) - self.start.rescaled(scale)).abs();
        let step = self.step.rescaled(scale).abs();
        // The stop bound itself is never a member.
        span.div_ceil(&step).to_usize().unwrap_or(usize::MAX)
    }

    fn contains(&self, value: &Decimal) -> bool {
        let in_bounds = if self.is_ascending() {
            self.start <= *value && *value < self.stop
        } else {
            self.stop < *value && *value <= self.start
        };
        in_bounds && (value.clone() - self.start.clone()).is_multiple_of(&self.step)
    }

    fn get(&self, index: usize) -> Option<Decimal> {
        if index >= self.len() {
            return None;
        }
        Some(self.start.clone() + self.step.times(index))
    }

    fn iter(&self) -> DecimalRangeIter {
        DecimalRangeIter {
            next: self.start.clone(),
            stop: self.stop.clone(),
            step: self.step.clone(),
        }
    }
}

/// The iterator over a [`DecimalRange`].
#[derive(Debug, Clone)]
pub struct DecimalRangeIter {
    next: Decimal,
    stop: Decimal,
    step: Decimal,
}

impl Iterator for DecimalRangeIter {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        let within = if self.step.is_negative() {
            self.next > self.stop
        } else {
            self.next < self.stop
        };
        if !within {
            return None;
        }
        let value = self.next.clone();
        self.next = value.clone() + self.step.clone();
        Some(value)
    }
}
