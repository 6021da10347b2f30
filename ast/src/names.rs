use numseq::Number;

use crate::error::SequenceError;
use crate::format::Sequence;

/// Lazily iterates the concrete names of a sequence, one per combination of
/// file numbers across the range dimensions.
///
/// The last dimension varies fastest. Nothing is materialized besides the
/// per-dimension cursor.
pub struct Names<'a> {
    sequence: &'a dyn Sequence,
    sizes: Vec<usize>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Names<'a> {
    pub(crate) fn new(sequence: &'a dyn Sequence) -> Result<Self, SequenceError> {
        let mut sizes = Vec::new();
        for range in sequence.ranges().ranges() {
            match &range.file_nums {
                Some(file_nums) => sizes.push(file_nums.len()),
                None => return Err(SequenceError::UnknownRanges),
            }
        }
        let done = sizes.iter().any(|&size| size == 0);
        let indices = vec![0; sizes.len()];
        Ok(Self {
            sequence,
            sizes,
            indices,
            done,
        })
    }

    fn advance(&mut self) {
        for dimension in (0..self.indices.len()).rev() {
            self.indices[dimension] += 1;
            if self.indices[dimension] < self.sizes[dimension] {
                return;
            }
            self.indices[dimension] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Names<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let numbers: Vec<Option<Number>> = self
            .sequence
            .ranges()
            .ranges()
            .iter()
            .zip(&self.indices)
            .map(|(range, &index)| range.file_nums.as_ref().and_then(|nums| nums.get(index)))
            .collect();
        let name = self.sequence.format(&numbers).ok()?;
        self.advance();
        Some(name)
    }
}
