//! Deterministic color generation for the word list's color pool.
//!
//! Every solved word receives one color from a pool provisioned when the
//! session starts. Colors are drawn per channel from the configured ranges
//! using a stateless PCG generator, so a seed fully determines the palette.

use crate::config::{ChannelRange, PaletteConfig};
use crate::state::Color;

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call derives the output from the seed it is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }

    /// Value in `range`, or `range.min` when the range is empty.
    pub fn channel(&self, seed: u64, range: ChannelRange) -> u8 {
        let span = range.span();
        if span == 0 {
            return range.min;
        }
        range.min + (self.next_u32(seed) % span) as u8
    }
}

/// Mixes the palette seed with a color slot and channel.
fn compute_seed(seed: u64, slot: u64, channel: u64) -> u64 {
    let mut hash = seed;
    hash ^= slot.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= channel.wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ColorPalette {
    config: PaletteConfig,
    rng: PcgRng,
}

impl ColorPalette {
    pub fn new(config: PaletteConfig) -> Self {
        Self {
            config,
            rng: PcgRng,
        }
    }

    /// Color for pool slot `slot`.
    pub fn color(&self, seed: u64, slot: u64) -> Color {
        Color::rgb(
            self.rng.channel(compute_seed(seed, slot, 0), self.config.red),
            self.rng.channel(compute_seed(seed, slot, 1), self.config.green),
            self.rng.channel(compute_seed(seed, slot, 2), self.config.blue),
        )
    }

    /// Generates `count` colors; the pool pops from the end of this vector.
    pub fn generate(&self, count: usize, seed: u64) -> Vec<Color> {
        (0..count as u64).map(|slot| self.color(seed, slot)).collect()
    }
}
