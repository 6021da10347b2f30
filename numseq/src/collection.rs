use std::fmt;
use std::str::FromStr;

use crate::decimal::Decimal;
use crate::error::RangeParseError;
use crate::num::{FileNum, Number};
use crate::parse;
use crate::progression::Progression;
use crate::sequence::ArithmeticSequence;

/// An ordered collection of consolidated arithmetic sequences.
///
/// After construction no two adjacent sequences could be merged into a
/// single progression without changing the iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNumSequence<N: FileNum> {
    ranges: Vec<ArithmeticSequence<N>>,
}

impl<N: FileNum> FileNumSequence<N> {
    /// Consolidates the given sequences, keeping their order.
    pub fn new(ranges: impl IntoIterator<Item = ArithmeticSequence<N>>) -> Self {
        Self {
            ranges: consolidate(ranges),
        }
    }

    /// Builds a sequence from file numbers in the order they are given.
    ///
    /// Only adjacent duplicates are dropped; a number appearing again later
    /// starts a new run.
    pub fn from_file_nums(file_nums: impl IntoIterator<Item = N>) -> Self {
        Self::new(group_runs(file_nums))
    }

    /// Builds a set-like sequence: the numbers are sorted and deduplicated
    /// before being grouped into runs.
    pub fn from_unordered(file_nums: impl IntoIterator<Item = N>) -> Self {
        let mut file_nums: Vec<N> = file_nums.into_iter().collect();
        file_nums.sort();
        file_nums.dedup();
        Self::new(group_runs(file_nums))
    }

    /// The consolidated member ranges.
    pub fn ranges(&self) -> &[ArithmeticSequence<N>] {
        &self.ranges
    }

    /// The total number of file numbers.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(ArithmeticSequence::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, value: &N) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }

    /// The file number at `index`, scanning ranges and subtracting lengths.
    pub fn get(&self, index: usize) -> Option<N> {
        let mut index = index;
        for range in &self.ranges {
            let len = range.len();
            if index < len {
                return range.get(index);
            }
            index -= len;
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            ranges: self.ranges.iter(),
            current: None,
        }
    }

    /// Whether `self` and `other` share no file number.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.ranges
            .iter()
            .all(|range| other.ranges.iter().all(|o| range.is_disjoint(o)))
    }
}

impl<N: FileNum> fmt::Display for FileNumSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl<'a, N: FileNum> IntoIterator for &'a FileNumSequence<N> {
    type Item = N;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazily chains the member iterators of each range.
pub struct Iter<'a, N: FileNum> {
    ranges: std::slice::Iter<'a, ArithmeticSequence<N>>,
    current: Option<<N::Range as Progression>::Iter>,
}

impl<N: FileNum> Iterator for Iter<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(value) = current.next() {
                    return Some(value);
                }
            }
            match self.ranges.next() {
                Some(range) => self.current = Some(range.iter()),
                None => return None,
            }
        }
    }
}

/// Groups numbers into maximal runs sharing one step.
fn group_runs<N: FileNum>(file_nums: impl IntoIterator<Item = N>) -> Vec<ArithmeticSequence<N>> {
    let mut file_nums = file_nums.into_iter();
    let Some(first) = file_nums.next() else {
        return Vec::new();
    };
    let mut runs = Vec::new();
    let mut start = first.clone();
    let mut previous = first;
    let mut step: Option<N> = None;
    for current in file_nums {
        if current == previous {
            continue;
        }
        let current_step = current.clone() - previous.clone();
        match &step {
            None => step = Some(current_step),
            Some(run_step) if *run_step == current_step => {}
            Some(run_step) => {
                runs.push(run(start, previous, run_step.clone()));
                start = current.clone();
                step = None;
            }
        }
        previous = current;
    }
    match step {
        Some(run_step) => runs.push(run(start, previous, run_step)),
        // A lone trailing number still belongs to the collection.
        None => runs.push(ArithmeticSequence::single(previous)),
    }
    runs
}

fn run<N: FileNum>(start: N, end: N, step: N) -> ArithmeticSequence<N> {
    ArithmeticSequence::new(start, end, step).expect("a run step between distinct numbers")
}

/// Merges numerically adjacent or equally stepped neighbours, forward and
/// greedy, without backtracking.
fn consolidate<N: FileNum>(
    ranges: impl IntoIterator<Item = ArithmeticSequence<N>>,
) -> Vec<ArithmeticSequence<N>> {
    let mut result: Vec<ArithmeticSequence<N>> = Vec::new();
    for mut range in ranges.into_iter().filter(|range| !range.is_empty()) {
        let Some(last) = result.last_mut() else {
            result.push(range);
            continue;
        };
        let difference = range.start() - last.end().clone();
        if difference == last.step() {
            if last.step() == range.step() {
                *last = run(last.start(), range.end().clone(), last.step());
                continue;
            }
            // Move at most one member over; taking more would reorder the
            // iteration.
            *last = run(last.start(), range.start(), last.step());
            range = run(
                range.start() + range.step(),
                range.end().clone(),
                range.step(),
            );
            if range.is_empty() {
                continue;
            }
        } else if last.len() == 1 && range.len() == 1 && !difference.is_zero() {
            // Fold neighbouring lone numbers into a stepped pair in the hope
            // that the next lone number extends it.
            *last = run(last.start(), range.start(), difference);
            continue;
        }
        result.push(range);
    }
    result
}

/// A file number collection of either numeric domain.
///
/// Parsing a range string yields this dynamic form; a `.` anywhere in the
/// string promotes every number to the decimal domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileNums {
    Int(FileNumSequence<i64>),
    Decimal(FileNumSequence<Decimal>),
}

impl FileNums {
    pub fn len(&self) -> usize {
        match self {
            FileNums::Int(nums) => nums.len(),
            FileNums::Decimal(nums) => nums.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FileNums::Int(nums) => nums.is_empty(),
            FileNums::Decimal(nums) => nums.is_empty(),
        }
    }

    pub fn contains(&self, number: &Number) -> bool {
        match (self, number) {
            (FileNums::Int(nums), Number::Int(value)) => nums.contains(value),
            (FileNums::Int(nums), Number::Decimal(value)) => match value.to_i64() {
                Some(value) => nums.contains(&value),
                None => false,
            },
            (FileNums::Decimal(nums), Number::Int(value)) => nums.contains(&Decimal::from(*value)),
            (FileNums::Decimal(nums), Number::Decimal(value)) => nums.contains(value),
        }
    }

    pub fn get(&self, index: usize) -> Option<Number> {
        match self {
            FileNums::Int(nums) => nums.get(index).map(Number::Int),
            FileNums::Decimal(nums) => nums.get(index).map(Number::Decimal),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        let (ints, decimals) = match self {
            FileNums::Int(nums) => (Some(nums.iter()), None),
            FileNums::Decimal(nums) => (None, Some(nums.iter())),
        };
        ints.into_iter()
            .flatten()
            .map(Number::Int)
            .chain(decimals.into_iter().flatten().map(Number::Decimal))
    }

    /// Whether the collection holds any sub-integer file numbers.
    pub fn has_subsamples(&self) -> bool {
        match self {
            FileNums::Int(_) => false,
            FileNums::Decimal(nums) => !nums.is_empty(),
        }
    }
}

impl fmt::Display for FileNums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileNums::Int(nums) => write!(f, "{nums}"),
            FileNums::Decimal(nums) => write!(f, "{nums}"),
        }
    }
}

impl From<FileNumSequence<i64>> for FileNums {
    fn from(nums: FileNumSequence<i64>) -> Self {
        FileNums::Int(nums)
    }
}

impl From<FileNumSequence<Decimal>> for FileNums {
    fn from(nums: FileNumSequence<Decimal>) -> Self {
        FileNums::Decimal(nums)
    }
}

impl FromStr for FileNums {
    type Err = RangeParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse::parse_ranges(text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn from_str(text: &str) -> FileNumSequence<i64> {
        match text.parse().unwrap() {
            FileNums::Int(nums) => nums,
            FileNums::Decimal(_) => panic!("expected an integer collection"),
        }
    }

    #[test]
    fn consolidates_adjacent_numbers() {
        assert_eq!(FileNumSequence::from_file_nums([1i64, 2, 3]), from_str("1-3"));
        assert_eq!(FileNumSequence::from_file_nums([2i64, 4, 6]), from_str("2-6x2"));
        assert_eq!(
            FileNumSequence::from_file_nums([-3i64, -2, -1]),
            from_str("-3--1")
        );
    }

    #[test]
    fn keeps_declaration_order() {
        let nums = FileNumSequence::from_file_nums([20i64, 21, 22, 1, 2, 3]);
        assert_eq!(nums.to_string(), "20-22,1-3");
        assert_eq!(nums.iter().collect::<Vec<_>>(), [20, 21, 22, 1, 2, 3]);
    }

    #[test]
    fn preserves_non_adjacent_duplicates() {
        let twice = (1i64..=10).chain(1..=10);
        let nums = FileNumSequence::from_file_nums(twice);
        assert_eq!(nums.to_string(), "1-10,1-10");
        assert_eq!(nums.len(), 20);
    }

    #[test]
    fn unordered_numbers_are_sorted_and_deduplicated() {
        let nums = FileNumSequence::from_unordered([10i64, 1, 3, 2, 10, 1]);
        assert_eq!(nums.to_string(), "1-3,10");
    }

    #[test]
    fn keeps_a_trailing_lone_number() {
        let nums = FileNumSequence::from_file_nums([1i64, 2, 3, 10]);
        assert_eq!(nums.to_string(), "1-3,10");
        assert_eq!(FileNumSequence::from_file_nums([5i64]).to_string(), "5");
    }

    #[test]
    fn indexing_scans_across_ranges() {
        let nums = from_str("1-3,20-24x2");
        assert_eq!(nums.len(), 6);
        assert_eq!(nums.get(0), Some(1));
        assert_eq!(nums.get(3), Some(20));
        assert_eq!(nums.get(5), Some(24));
        assert_eq!(nums.get(6), None);
    }

    #[test]
    fn membership_across_ranges() {
        let nums = from_str("1-3,20-24x2");
        assert!(nums.contains(&22));
        assert!(!nums.contains(&21));
    }

    #[test]
    fn disjointness_checks_every_pair_of_ranges() {
        assert!(from_str("1-9x2,20-24x2").is_disjoint(&from_str("10-18x2,21-25x2")));
        assert!(!from_str("1-9x2,20-24x2").is_disjoint(&from_str("10-18x2,22")));
    }

    #[test]
    fn iteration_is_chained() {
        let nums = from_str("1-3,7,20-24x2");
        assert_eq!(nums.iter().collect::<Vec<_>>(), [1, 2, 3, 7, 20, 22, 24]);
    }

    #[test]
    fn stepped_run_followed_by_contiguous_run() {
        // The first member of the second run moves into the first run.
        let nums = FileNumSequence::new([
            ArithmeticSequence::new(1, 5, 2).unwrap(),
            ArithmeticSequence::new(7, 9, 1).unwrap(),
        ]);
        assert_eq!(nums.to_string(), "1-7x2,8,9");
    }

    #[test]
    fn equal_lone_numbers_stay_separate() {
        let nums = FileNumSequence::new([
            ArithmeticSequence::single(5i64),
            ArithmeticSequence::single(5i64),
        ]);
        assert_eq!(nums.to_string(), "5,5");
    }

    #[test]
    fn decimal_collections_promote_from_any_dot() {
        let nums: FileNums = "1-2x0.5,4".parse().unwrap();
        assert_eq!(nums.to_string(), "1-2x0.5,4");
        assert!(nums.has_subsamples());
        assert_eq!(nums.len(), 4);
    }
}
