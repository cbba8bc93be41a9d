//! Level generation for the Laballatory ball-sort puzzle.
//!
//! [`LevelGenerator`] turns a [`DifficultyConfig`] into a shuffled starting
//! [`Board`]: `capacity` balls of each color are shuffled and dealt into the
//! first `color_count` tubes, and the remaining tubes start empty.
//!
//! Generation is deterministic for a given [`LevelSeed`], which makes every
//! level reproducible. [`LevelGenerator::generate`] draws a fresh seed;
//! [`LevelGenerator::generate_with_seed`] is the seeded entry point used by
//! tests and by [`SeedSequence`]-driven sessions.
//!
//! No solver runs during generation. A dealt board is reachable by legal pours
//! from a sorted one but is not checked to be solvable from its shuffled state.
//!
//! # Examples
//!
//! ```
//! use laballatory_core::Difficulty;
//! use laballatory_generator::{LevelGenerator, LevelSeed};
//!
//! let generator = LevelGenerator::new(Difficulty::Easy.config());
//! let seed = LevelSeed::from_bytes([1; 32]);
//!
//! let level = generator.generate_with_seed(seed);
//! assert_eq!(level.board.tube_count(), 5);
//! assert!(!level.board.is_won());
//!
//! // Same seed, same level.
//! assert_eq!(generator.generate_with_seed(seed), level);
//! ```

use laballatory_core::{Board, Color, DifficultyConfig};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

pub use self::seed::{LevelSeed, ParseLevelSeedError, SeedSequence};

mod seed;

/// A freshly generated level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// The shuffled starting board.
    pub board: Board,
    /// The seed the board was generated from.
    pub seed: LevelSeed,
    /// The configuration the board was generated for.
    pub config: DifficultyConfig,
}

/// Deals shuffled starting boards for one board shape.
#[derive(Debug, Clone, Copy)]
pub struct LevelGenerator {
    config: DifficultyConfig,
}

impl LevelGenerator {
    /// Creates a generator for `config`.
    #[must_use]
    pub const fn new(config: DifficultyConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator deals for.
    #[must_use]
    pub const fn config(&self) -> DifficultyConfig {
        self.config
    }

    /// Generates a level from a fresh entropy seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedLevel {
        self.generate_with_seed(LevelSeed::from_entropy())
    }

    /// Generates the level determined by `seed`.
    ///
    /// The returned board is never already won: a deal that happens to leave
    /// every tube uniform is reshuffled from the same random stream.
    #[must_use]
    pub fn generate_with_seed(&self, seed: LevelSeed) -> GeneratedLevel {
        let config = self.config;
        let capacity = config.capacity();
        let mut rng = Pcg64::from_seed(*seed.as_bytes());

        let mut balls = config
            .colors()
            .iter()
            .flat_map(|&color| std::iter::repeat_n(color, capacity))
            .collect::<Vec<_>>();
        let mut shuffles = 0;
        loop {
            balls.shuffle(&mut rng);
            shuffles += 1;
            if !is_sorted_deal(&balls, capacity) {
                break;
            }
        }
        if shuffles > 1 {
            log::debug!("reshuffled sorted deal {} times, seed={seed}", shuffles - 1);
        }

        let tubes = balls
            .chunks(capacity)
            .map(<[Color]>::to_vec)
            .chain(std::iter::repeat_n(Vec::new(), config.spare_tubes()));
        let board = Board::from_tubes(capacity, tubes)
            .unwrap_or_else(|err| unreachable!("dealt layout fits its capacity: {err}"));

        log::debug!(
            "generated level: tubes={}, colors={}, seed={seed}",
            config.tube_count(),
            config.color_count()
        );

        GeneratedLevel {
            board,
            seed,
            config,
        }
    }
}

/// Returns `true` if every dealt tube holds a single color.
fn is_sorted_deal(balls: &[Color], capacity: usize) -> bool {
    balls
        .chunks(capacity)
        .all(|tube| tube.iter().all(|&color| color == tube[0]))
}
