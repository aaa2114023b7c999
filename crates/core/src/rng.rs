//! Range oracle for battle damage rolls.
//!
//! The battle simulator never touches a random number generator directly. It
//! asks a [`RangeOracle`] for the next integer in an inclusive range, which
//! lets the CLI use thread-local entropy, a seeded stream for reproducible
//! battles, or a scripted sequence in tests.

use std::collections::VecDeque;

use rand::Rng;

/// Provider of "next integer in range".
pub trait RangeOracle {
    /// Next value in `[min, max]` inclusive. Returns `min` when `min >= max`.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

impl<T: RangeOracle + ?Sized> RangeOracle for &mut T {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_in_range(min, max)
    }
}

impl<T: RangeOracle + ?Sized> RangeOracle for Box<T> {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        (**self).next_in_range(min, max)
    }
}

/// Non-deterministic oracle backed by the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRange;

impl RangeOracle for ThreadRange {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic PCG-XSH-RR stream.
///
/// The same seed always produces the same sequence of rolls, so a battle can
/// be replayed exactly by configuring the seed it ran with.
#[derive(Clone, Copy, Debug)]
pub struct PcgRange {
    state: u64,
}

impl PcgRange {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let state = self.step();
        Self::output(state)
    }
}

impl RangeOracle for PcgRange {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }
}

/// Replays a fixed sequence of values.
///
/// Each value is clamped into the requested range. Once the script runs out
/// every roll returns the range minimum.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRange {
    values: VecDeque<u32>,
}

impl ScriptedRange {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RangeOracle for ScriptedRange {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        let hi = max.max(min);
        match self.values.pop_front() {
            Some(value) => value.clamp(min, hi),
            None => min,
        }
    }
}
