use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random integers in `[low, high)`.
/// The same seed always produces the same sequence
pub struct RandomSequence {
    remaining: usize,
    low: i64,
    high: i64,
    rng: Pcg64,
}

impl RandomSequence {
    pub fn new(num: usize, low: i64, high: i64, seed: u64) -> RandomSequence {
        assert!(low < high, "Invalid range [{}, {}): empty", low, high);
        RandomSequence {
            remaining: num,
            low,
            high,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomSequence {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(self.low..self.high))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomSequence {}

impl ExactSizeIterator for RandomSequence {}

/// An iterator that will generate `num` random floats in `[0, 1)`, wrapped so
/// they can be stored in a tree
pub struct RandomFloats {
    remaining: usize,
    rng: Pcg64,
}

impl RandomFloats {
    pub fn new(num: usize, seed: u64) -> RandomFloats {
        RandomFloats {
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomFloats {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(OrderedFloat(self.rng.gen()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomFloats {}

impl ExactSizeIterator for RandomFloats {}
