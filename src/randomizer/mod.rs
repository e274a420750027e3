//! Fresh unsorted input arrays.

use crate::config::{MAX_VALUE, MIN_VALUE};
use crate::model::Element;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range of generated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            ValueRange { min, max }
        } else {
            ValueRange { min: max, max: min }
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange {
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }
}

/// Draw `size` uniformly distributed `Default` elements from `range`
pub fn generate<R: Rng + ?Sized>(rng: &mut R, size: usize, range: ValueRange) -> Vec<Element> {
    (0..size)
        .map(|_| Element::new(rng.gen_range(range.min..=range.max)))
        .collect()
}

/// Owns the RNG used for every array in a session
#[derive(Debug)]
pub struct Randomizer {
    rng: StdRng,
    range: ValueRange,
}

impl Randomizer {
    /// Seeded for reproducible sessions, otherwise seeded from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Randomizer {
            rng,
            range: ValueRange::default(),
        }
    }

    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn generate(&mut self, size: usize) -> Vec<Element> {
        generate(&mut self.rng, size, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementState;

    #[test]
    fn test_generate_size_and_range() {
        let mut randomizer = Randomizer::new(Some(7));
        for size in [0, 1, 5, 20, 50] {
            let array = randomizer.generate(size);
            assert_eq!(array.len(), size);
            assert!(array.iter().all(|e| ValueRange::default().contains(e.value)));
            assert!(array.iter().all(|e| e.state == ElementState::Default));
        }
    }

    #[test]
    fn test_same_seed_same_arrays() {
        let mut a = Randomizer::new(Some(42));
        let mut b = Randomizer::new(Some(42));
        assert_eq!(a.generate(30), b.generate(30));
    }

    #[test]
    fn test_successive_arrays_differ() {
        let mut randomizer = Randomizer::new(Some(1));
        let first = randomizer.generate(50);
        let second = randomizer.generate(50);
        assert_ne!(first, second);
    }

    #[test]
    fn test_custom_range() {
        let mut randomizer = Randomizer::new(Some(3)).with_range(ValueRange::new(9, 2));
        assert_eq!(randomizer.range(), ValueRange { min: 2, max: 9 });
        let array = randomizer.generate(40);
        assert!(array.iter().all(|e| (2..=9).contains(&e.value)));

        let mut fixed = Randomizer::new(None).with_range(ValueRange::new(4, 4));
        assert!(fixed.generate(10).iter().all(|e| e.value == 4));
    }
}
