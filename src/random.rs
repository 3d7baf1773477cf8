use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::color::Color;

/// Colors that stay readable when a hovered button brightens them.
pub const BRIGHT_COLORS: [Color; 8] = [
    Color::GOLD,
    Color::ORANGE,
    Color::PINK,
    Color::RED,
    Color::LIME,
    Color::SKY_BLUE,
    Color::PURPLE,
    Color::VIOLET,
];

/// Shared random source for level content.
pub struct Randomness {
    rng: Pcg64,
}

impl Randomness {
    /// Seeded from `seed`, or from entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        log::debug!("random seed {seed}");
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { rng: Pcg64::seed_from_u64(seed) }
    }

    /// Uniform integer in `min..=max`.
    ///
    /// # Panics
    /// If `max <= min`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(max > min, "invalid random range {min}..={max}");
        self.rng.random_range(min..=max)
    }

    /// `count` distinct values from `min..=max` minus `excluded`, in random
    /// order. The whole pool is shuffled and the first `count` taken, so every
    /// ordering is equally likely.
    ///
    /// # Panics
    /// If fewer than `count` values remain after exclusion.
    pub fn random_unique_sequence(&mut self, count: usize, min: i32, max: i32, excluded: &[i32]) -> Vec<i32> {
        let excluded: HashSet<i32> = excluded.iter().copied().collect();
        let mut pool: Vec<i32> = (min..=max).filter(|n| !excluded.contains(n)).collect();
        assert!(
            count <= pool.len(),
            "requested {count} unique values but only {} are available in {min}..={max}",
            pool.len()
        );
        pool.shuffle(&mut self.rng);
        pool.truncate(count);
        pool
    }

    pub fn random_color(&mut self) -> Color {
        let index = self.random_int(0, BRIGHT_COLORS.len() as i32 - 1);
        BRIGHT_COLORS[index as usize]
    }

    /// `count` distinct palette colors in random order.
    ///
    /// # Panics
    /// If `count` exceeds the palette size.
    pub fn random_color_sequence(&mut self, count: usize) -> Vec<Color> {
        assert!(
            count <= BRIGHT_COLORS.len(),
            "requested {count} unique colors but the palette has {}",
            BRIGHT_COLORS.len()
        );
        let mut palette = BRIGHT_COLORS.to_vec();
        palette.shuffle(&mut self.rng);
        palette.truncate(count);
        palette
    }
}
