//! Icon hashes.
//!
//! The generator reads fixed nibble offsets out of a hex string, so a hash
//! is validated once, up front, and carried as [`IconHash`] from then on.
//! Arbitrary values (user names, e-mail addresses) are turned into a hash
//! by a pluggable [`HashFunction`]. [`Sha1`] gives the same icon for the
//! same value as other identicon renderers of this family; [`Blake3`] is
//! there for callers that do not need that.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use sha1::Digest;

use crate::error::HashError;

/// Fewest hex digits the generator can read without running off the end.
pub const MIN_HASH_LEN: usize = 11;

/// Nibbles that make up the hue, taken from the end of the hash.
const HUE_NIBBLES: usize = 7;

static HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{11,}$").unwrap_or_else(|e| unreachable!("hash pattern: {e}"))
});

// ---------------------------------------------------------------------------
// IconHash
// ---------------------------------------------------------------------------

/// A validated hex string of at least [`MIN_HASH_LEN`] digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconHash(String);

impl IconHash {
    /// Accept `s` as a hash. Upper- and lowercase digits are both fine.
    pub fn parse(s: &str) -> Result<Self, HashError> {
        if HASH_RE.is_match(s) {
            return Ok(Self(s.to_owned()));
        }

        if let Some((index, ch)) = s.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(HashError::NotHex { ch, index });
        }
        Err(HashError::TooShort {
            len: s.len(),
            min: MIN_HASH_LEN,
        })
    }

    /// Use `value` as-is when it already is a hash, otherwise hash it.
    pub fn from_value(value: &str, hasher: &impl HashFunction) -> Result<Self, HashError> {
        if HASH_RE.is_match(value) {
            return Ok(Self(value.to_owned()));
        }
        log::debug!("hashing value of {} bytes", value.len());
        Self::parse(&hasher.hash_hex(value))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digit at `index`. Panics if `index` is past the end.
    #[must_use]
    pub fn nibble(&self, index: usize) -> u32 {
        hex_value(self.0.as_bytes()[index])
    }

    /// The last seven digits as one big-endian number, in `0..=0xFFFFFFF`.
    #[must_use]
    pub fn hue_bits(&self) -> u32 {
        let tail = &self.0.as_bytes()[self.0.len() - HUE_NIBBLES..];
        tail.iter().fold(0, |acc, &b| (acc << 4) | hex_value(b))
    }
}

impl FromStr for IconHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IconHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IconHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Value of an ASCII hex digit. Only called on validated strings.
const fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a' + 10) as u32,
        b'A'..=b'F' => (b - b'A' + 10) as u32,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// HashFunction
// ---------------------------------------------------------------------------

/// Turns an arbitrary value into a hex digest.
///
/// Any digest works as long as it is hex and at least [`MIN_HASH_LEN`]
/// digits long. Closures `Fn(&str) -> String` implement this too.
pub trait HashFunction {
    fn hash_hex(&self, value: &str) -> String;
}

impl<F: Fn(&str) -> String> HashFunction for F {
    fn hash_hex(&self, value: &str) -> String {
        self(value)
    }
}

/// SHA-1, 40 lowercase hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1;

impl HashFunction for Sha1 {
    fn hash_hex(&self, value: &str) -> String {
        hex::encode(sha1::Sha1::digest(value.as_bytes()))
    }
}

/// BLAKE3, 64 lowercase hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3;

impl HashFunction for Blake3 {
    fn hash_hex(&self, value: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(value.as_bytes());
        hex::encode(hasher.finalize().as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
