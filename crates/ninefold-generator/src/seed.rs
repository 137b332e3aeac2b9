//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed that makes a generation run reproducible.
///
/// The textual form is 64 lowercase hex characters, which is how seeds are
/// printed, logged and passed back in on the command line. A seed can also
/// be derived from an arbitrary phrase, so "the puzzle named
/// `morning-coffee`" always means the same puzzle.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("morning-coffee");
/// assert_eq!(seed, PuzzleSeed::from_phrase("morning-coffee"));
///
/// // Hex round trip
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the operating system entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a phrase via SHA-256.
    ///
    /// The same phrase always produces the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self(digest.into())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.len() != 64 {
            return Err(ParseSeedError::WrongLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(byte: u8) -> Result<u8, ParseSeedError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ParseSeedError::UnexpectedCharacter {
            character: char::from(byte),
        }),
    }
}

/// An error produced when parsing a seed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// Length of the text in bytes.
        len: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("unexpected character {character:?} in seed")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
}
