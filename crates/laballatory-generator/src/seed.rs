//! Level seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated level.
///
/// Seeds display as 64 lower-case hex digits and parse from the same form
/// (upper-case digits are accepted too), so a level can be shared or replayed
/// by its seed.
///
/// # Examples
///
/// ```
/// use laballatory_generator::LevelSeed;
///
/// let seed: LevelSeed = "00000000000000000000000000000000000000000000000000000000000000ff"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.as_bytes()[31], 0xff);
/// assert_eq!(seed.to_string().parse::<LevelSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSeed([u8; 32]);

impl LevelSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for LevelSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for LevelSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`LevelSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLevelSeedError {
    /// The text is not exactly 64 hex digits long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for LevelSeed {
    type Err = ParseLevelSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseLevelSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            for ch in chars.by_ref().take(2) {
                let digit = ch
                    .to_digit(16)
                    .ok_or(ParseLevelSeedError::InvalidDigit { ch })?;
                *byte = (*byte << 4) | digit as u8;
            }
        }
        Ok(Self(bytes))
    }
}

/// A reproducible stream of level seeds derived from one master seed.
///
/// Each call to [`SeedSequence::next_seed`] hashes the master seed together
/// with a counter, so a whole play session (every restart and new game) can be
/// replayed from the master seed alone.
#[derive(Debug, Clone)]
pub struct SeedSequence {
    master: LevelSeed,
    counter: u64,
}

impl SeedSequence {
    /// Creates a sequence rooted at `master`.
    #[must_use]
    pub const fn new(master: LevelSeed) -> Self {
        Self { master, counter: 0 }
    }

    /// Creates a sequence rooted at a fresh entropy seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(LevelSeed::from_entropy())
    }

    /// Returns the master seed.
    #[must_use]
    pub const fn master(&self) -> LevelSeed {
        self.master
    }

    /// Derives the next level seed.
    pub fn next_seed(&mut self) -> LevelSeed {
        let mut hasher = Sha256::new();
        hasher.update(self.master.as_bytes());
        hasher.update(self.counter.to_le_bytes());
        self.counter += 1;
        LevelSeed(hasher.finalize().into())
    }
}
