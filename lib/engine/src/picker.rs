//! Template selection
//!
//! Synthesis and fallback phrase their output with one of several
//! interchangeable templates. The choice goes through [`TemplatePicker`] so
//! production can pick at random while tests pin the index.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait TemplatePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero; callers wrap
    /// anything larger back into range.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible uniform choice from a seeded RNG
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TemplatePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// Always the same template (wrapped into range)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_in_range() {
        let picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_seeded_picker_reproducible() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick(3)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick(3)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|i| *i < 3));
    }

    #[test]
    fn test_fixed_picker_wraps() {
        assert_eq!(FixedPicker(0).pick(3), 0);
        assert_eq!(FixedPicker(2).pick(3), 2);
        assert_eq!(FixedPicker(4).pick(3), 1);
    }
}
