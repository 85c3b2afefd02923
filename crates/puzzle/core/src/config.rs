/// Half-open range `[min, max)` for one color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Number of distinct values; zero when the range is empty or inverted.
    pub const fn span(&self) -> u32 {
        if self.max > self.min {
            (self.max - self.min) as u32
        } else {
            0
        }
    }
}

/// Channel ranges used when generating word colors.
///
/// The defaults keep red high and blue moderate so white letters stay
/// readable on top of any generated color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteConfig {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl PaletteConfig {
    pub const DEFAULT_RED: ChannelRange = ChannelRange::new(128, 255);
    pub const DEFAULT_GREEN: ChannelRange = ChannelRange::new(0, 217);
    pub const DEFAULT_BLUE: ChannelRange = ChannelRange::new(50, 150);
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            red: Self::DEFAULT_RED,
            green: Self::DEFAULT_GREEN,
            blue: Self::DEFAULT_BLUE,
        }
    }
}

/// Session configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PuzzleConfig {
    pub palette: PaletteConfig,
    /// Seed for palette generation. Equal seeds give equal palettes.
    pub seed: u64,
    /// Alpha applied to solved-cell backgrounds.
    pub solved_alpha: u8,
}

impl PuzzleConfig {
    pub const DEFAULT_SEED: u64 = 0x5EED_2520;
    pub const DEFAULT_SOLVED_ALPHA: u8 = 0xAF;

    pub fn new() -> Self {
        Self {
            palette: PaletteConfig::default(),
            seed: Self::DEFAULT_SEED,
            solved_alpha: Self::DEFAULT_SOLVED_ALPHA,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_palette(mut self, palette: PaletteConfig) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_solved_alpha(mut self, solved_alpha: u8) -> Self {
        self.solved_alpha = solved_alpha;
        self
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new()
    }
}
