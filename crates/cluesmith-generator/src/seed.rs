//! Reproducible seeds for puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds render as 64 lowercase hex digits and parse back from the same
/// form, so a puzzle can be reproduced from nothing but its printed seed.
///
/// # Examples
///
/// ```
/// use cluesmith_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
/// );
/// # Ok::<(), cluesmith_generator::SeedParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the operating system's entropy.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string works and equal
    /// phrases always yield equal seeds.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator RNG for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

/// An error parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    BadLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid hex digit {character:?} in seed")]
    BadDigit {
        /// The offending character.
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(SeedParseError::BadLength {
                len: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            let digit = |c: u8| {
                char::from(c)
                    .to_digit(16)
                    .ok_or(SeedParseError::BadDigit {
                        character: char::from(c),
                    })
            };
            #[expect(clippy::cast_possible_truncation, reason = "two hex digits fit in a byte")]
            let value = (digit(pair[0])? * 16 + digit(pair[1])?) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}
