use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `num` consecutive integers starting at `start`.
/// Inserting them in this order into an unbalanced tree degenerates it into a
/// chain: right-leaning for `Ascending`, left-leaning for `Descending`
pub struct SkewedSequence {
    next: i64,
    step: i64,
    remaining: usize,
}

#[derive(Debug, Copy, Clone)]
pub enum SkewOrder {
    Ascending,
    Descending,
}

impl SkewedSequence {
    pub fn new(start: i64, num: usize, order: SkewOrder) -> SkewedSequence {
        let step = match order {
            SkewOrder::Ascending => 1,
            SkewOrder::Descending => -1,
        };
        SkewedSequence {
            next: start,
            step,
            remaining: num,
        }
    }
}

impl Iterator for SkewedSequence {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let r = self.next;
            self.next += self.step;
            self.remaining -= 1;
            Some(r)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for SkewedSequence {}

impl ExactSizeIterator for SkewedSequence {}
