use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::disjoint;
use crate::error::RangeError;
use crate::num::FileNum;
use crate::progression::Progression;

/// An immutable arithmetic progression of file numbers.
///
/// The recorded `end` is the actual last member (inclusive), unlike the
/// exclusive stop bound of the underlying progression. Construction
/// normalizes a negative step by swapping the bounds and rounds a stray end
/// down to the last reachable member.
#[derive(Debug, Clone)]
pub struct ArithmeticSequence<N: FileNum> {
    range: N::Range,
    end: N,
}

impl<N: FileNum> ArithmeticSequence<N> {
    pub fn new(start: N, end: N, step: N) -> Result<Self, RangeError> {
        if step.is_zero() {
            return Err(RangeError::ZeroStep);
        }
        let (mut start, mut end, mut step) = (start, end, step);
        if step.is_negative() {
            mem::swap(&mut start, &mut end);
            step = -step;
        }
        let stop = match start.cmp(&end) {
            Ordering::Less => {
                let remainder = (end.clone() - start.clone()).rem(&step);
                if !remainder.is_zero() {
                    end = end - remainder;
                }
                end.clone() + step.clone()
            }
            // The end is inclusive, the underlying range's stop is not.
            Ordering::Equal => end.clone() + step.clone(),
            Ordering::Greater => end.clone(),
        };
        Ok(Self {
            range: N::range(start, stop, step)?,
            end,
        })
    }

    /// A sequence containing a single file number.
    pub fn single(value: N) -> Self {
        Self::new(value.clone(), value, N::one()).expect("the unit step is not zero")
    }

    /// A unit-step sequence spanning `start..=end`.
    pub fn spanning(start: N, end: N) -> Result<Self, RangeError> {
        Self::new(start, end, N::one())
    }

    pub fn start(&self) -> N {
        self.range.start()
    }

    /// The last member of the sequence.
    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn step(&self) -> N {
        self.range.step()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, value: &N) -> bool {
        self.range.contains(value)
    }

    /// The member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<N> {
        self.range.get(index)
    }

    pub fn iter(&self) -> <N::Range as Progression>::Iter {
        self.range.iter()
    }

    /// Whether `self` and `other` share no member.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        disjoint::is_disjoint(self, other)
    }
}

impl<N: FileNum> PartialEq for ArithmeticSequence<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start() == other.start() && self.end == other.end && self.step() == other.step()
    }
}

impl<N: FileNum> Eq for ArithmeticSequence<N> {}

impl<N: FileNum> Hash for ArithmeticSequence<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start().hash(state);
        self.end.hash(state);
        self.step().hash(state);
    }
}

impl<N: FileNum> fmt::Display for ArithmeticSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            return write!(f, "{}", self.start());
        }
        if self.step() != N::one() {
            write!(f, "{}-{}x{}", self.start(), self.end, self.step())
        } else if self.len() == 2 {
            write!(f, "{},{}", self.start(), self.end)
        } else {
            write!(f, "{}-{}", self.start(), self.end)
        }
    }
}

impl<'a, N: FileNum> IntoIterator for &'a ArithmeticSequence<N> {
    type Item = N;
    type IntoIter = <N::Range as Progression>::Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::decimal::Decimal;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn seq(start: i64, end: i64, step: i64) -> ArithmeticSequence<i64> {
        ArithmeticSequence::new(start, end, step).unwrap()
    }

    #[test]
    fn normalizes_negative_step() {
        let sequence = seq(10, 1, -2);
        assert_eq!(sequence.start(), 1);
        assert_eq!(*sequence.end(), 9);
        assert_eq!(sequence.step(), 2);
        assert_eq!(sequence.iter().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
    }

    #[test]
    fn rounds_end_down_to_last_member() {
        let sequence = seq(1, 10, 2);
        assert_eq!(*sequence.end(), 9);
        assert_eq!(sequence.len(), 5);

        // A remainder larger than half the step must not overshoot the end.
        let sequence = seq(1, 6, 3);
        assert_eq!(*sequence.end(), 4);
        assert_eq!(sequence.iter().collect::<Vec<_>>(), [1, 4]);
    }

    #[test]
    fn single_value_sequences() {
        let sequence = seq(5, 5, 1);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.iter().collect::<Vec<_>>(), [5]);
        assert_eq!(sequence, ArithmeticSequence::single(5));
    }

    #[test]
    fn spanning_uses_the_unit_step() {
        let sequence = ArithmeticSequence::spanning(3, 6).unwrap();
        assert_eq!(sequence.iter().collect::<Vec<_>>(), [3, 4, 5, 6]);
    }

    #[test]
    fn start_past_end_is_empty() {
        let sequence = seq(5, 3, 1);
        assert!(sequence.is_empty());
        assert_eq!(sequence.iter().count(), 0);
    }

    #[test]
    fn len_agrees_with_iteration() {
        for (start, end, step) in [(1, 10, 1), (1, 10, 2), (1, 10, 7), (-5, 5, 3), (0, 0, 4)] {
            let sequence = seq(start, end, step);
            assert_eq!(
                sequence.len(),
                sequence.iter().count(),
                "{start}-{end}x{step}"
            );
        }
    }

    #[test]
    fn displays_in_range_notation() {
        assert_eq!(seq(1, 1, 1).to_string(), "1");
        assert_eq!(seq(1, 2, 1).to_string(), "1,2");
        assert_eq!(seq(1, 3, 1).to_string(), "1-3");
        assert_eq!(seq(1, 10, 2).to_string(), "1-9x2");
        assert_eq!(seq(-3, -1, 1).to_string(), "-3--1");
    }

    #[test]
    fn decimal_sequences_are_exact() {
        let sequence =
            ArithmeticSequence::new(dec("1001"), dec("1002"), dec("0.25")).unwrap();
        assert_eq!(sequence.len(), 5);
        assert!(sequence.contains(&dec("1001.75")));
        assert!(!sequence.contains(&dec("1001.8")));
        assert_eq!(sequence.to_string(), "1001-1002x0.25");
    }

    #[test]
    fn equality_requires_identical_bounds() {
        assert_eq!(seq(1, 10, 2), seq(1, 9, 2));
        assert_ne!(seq(1, 9, 2), seq(1, 9, 4));
    }
}
