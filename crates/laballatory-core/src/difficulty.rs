//! Difficulty tiers and the board shapes they generate.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Color;

static PALETTE: [Color; Color::PALETTE_LEN] = Color::ALL;

/// Errors from [`DifficultyConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// Tubes of fewer than two balls are sorted by construction.
    #[display("tube capacity must be at least 2, got {capacity}")]
    CapacityTooSmall {
        /// The requested capacity.
        capacity: usize,
    },
    /// A single color would start out already sorted.
    #[display("at least 2 colors are required, got {color_count}")]
    TooFewColors {
        /// The requested color count.
        color_count: usize,
    },
    /// Pouring needs at least one tube that starts empty.
    #[display("{color_count} colors need more than {tube_count} tubes")]
    NoSpareTube {
        /// The requested color count.
        color_count: usize,
        /// The requested tube count.
        tube_count: usize,
    },
    /// The palette has fewer colors than requested.
    #[display("palette has {} colors, got {color_count}", Color::PALETTE_LEN)]
    PaletteExhausted {
        /// The requested color count.
        color_count: usize,
    },
}

/// The board shape a level is generated with.
///
/// A valid configuration has tubes of at least two balls, at least two colors,
/// at least one more tube than colors, and no more colors than the palette
/// provides.
///
/// # Examples
///
/// ```
/// use laballatory_core::{ConfigError, DifficultyConfig};
///
/// let config = DifficultyConfig::new(6, 4, 4).unwrap();
/// assert_eq!(config.ball_count(), 16);
/// assert_eq!(config.spare_tubes(), 2);
///
/// assert!(matches!(
///     DifficultyConfig::new(4, 4, 4),
///     Err(ConfigError::NoSpareTube { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyConfig {
    tube_count: usize,
    color_count: usize,
    capacity: usize,
}

impl DifficultyConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first constraint that fails.
    pub const fn new(
        tube_count: usize,
        color_count: usize,
        capacity: usize,
    ) -> Result<Self, ConfigError> {
        if capacity < 2 {
            return Err(ConfigError::CapacityTooSmall { capacity });
        }
        if color_count < 2 {
            return Err(ConfigError::TooFewColors { color_count });
        }
        if color_count > Color::PALETTE_LEN {
            return Err(ConfigError::PaletteExhausted { color_count });
        }
        if color_count >= tube_count {
            return Err(ConfigError::NoSpareTube {
                color_count,
                tube_count,
            });
        }
        Ok(Self {
            tube_count,
            color_count,
            capacity,
        })
    }

    const fn tier(tube_count: usize, color_count: usize, capacity: usize) -> Self {
        match Self::new(tube_count, color_count, capacity) {
            Ok(config) => config,
            Err(_) => panic!("invalid built-in difficulty"),
        }
    }

    /// Returns the total number of tubes.
    #[must_use]
    pub const fn tube_count(&self) -> usize {
        self.tube_count
    }

    /// Returns the number of distinct colors.
    #[must_use]
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    /// Returns the number of balls each tube can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of tubes that start empty.
    #[must_use]
    pub const fn spare_tubes(&self) -> usize {
        self.tube_count - self.color_count
    }

    /// Returns the number of balls on the board.
    #[must_use]
    pub const fn ball_count(&self) -> usize {
        self.color_count * self.capacity
    }

    /// Returns the colors in play, a prefix of [`Color::ALL`].
    #[must_use]
    pub fn colors(&self) -> &'static [Color] {
        &PALETTE[..self.color_count]
    }
}

/// The built-in difficulty tiers offered on the menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Difficulty {
    /// Three colors, two spare tubes.
    Easy,
    /// Six colors, two spare tubes.
    #[default]
    Medium,
    /// The whole palette, two spare tubes.
    Hard,
}

impl Difficulty {
    /// Every tier, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const EASY: DifficultyConfig = DifficultyConfig::tier(5, 3, 4);
    const MEDIUM: DifficultyConfig = DifficultyConfig::tier(8, 6, 4);
    const HARD: DifficultyConfig = DifficultyConfig::tier(14, 12, 4);

    /// Returns the board shape for this tier.
    #[must_use]
    pub const fn config(self) -> DifficultyConfig {
        match self {
            Self::Easy => Self::EASY,
            Self::Medium => Self::MEDIUM,
            Self::Hard => Self::HARD,
        }
    }

    /// Returns the lower-case tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?} (expected easy, medium, or hard)")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_grow_harder() {
        let configs = Difficulty::ALL.map(Difficulty::config);
        for pair in configs.windows(2) {
            assert!(pair[0].color_count() < pair[1].color_count());
            assert!(pair[0].tube_count() < pair[1].tube_count());
        }
        for config in configs {
            assert!(config.color_count() >= 2);
            assert!(config.spare_tubes() >= 1);
            assert_eq!(config.capacity(), 4);
        }
        assert_eq!(Difficulty::Hard.config().colors(), &Color::ALL);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            DifficultyConfig::new(3, 2, 1),
            Err(ConfigError::CapacityTooSmall { capacity: 1 })
        );
        assert_eq!(
            DifficultyConfig::new(3, 1, 4),
            Err(ConfigError::TooFewColors { color_count: 1 })
        );
        assert_eq!(
            DifficultyConfig::new(20, 13, 4),
            Err(ConfigError::PaletteExhausted { color_count: 13 })
        );
        assert_eq!(
            DifficultyConfig::new(3, 3, 4),
            Err(ConfigError::NoSpareTube {
                color_count: 3,
                tube_count: 3,
            })
        );
        assert!(DifficultyConfig::new(3, 2, 2).is_ok());
    }

    #[test]
    fn test_parse_difficulty() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
