//! Bit type over GF(2) and input decoding
//!
//! Bits are the unit of observation for the complexity monitor. Order is
//! significant: a `&[Bit]` is a sequence in the order the bits were observed.
//!
//! Field arithmetic:
//! - addition (and subtraction) is XOR
//! - multiplication is AND

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitXor, BitXorAssign};
use thiserror::Error;

/// A single element of GF(2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    pub fn is_one(self) -> bool {
        self == Bit::One
    }

    pub fn is_zero(self) -> bool {
        self == Bit::Zero
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() != rhs.is_one())
    }
}

impl BitXorAssign for Bit {
    fn bitxor_assign(&mut self, rhs: Bit) {
        *self = *self ^ rhs;
    }
}

impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self.is_one() && rhs.is_one())
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = BitParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(BitParseError::NotABit(other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Errors produced while decoding bit input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitParseError {
    #[error("value {0} is not a bit (expected 0 or 1)")]
    NotABit(u8),

    #[error("invalid character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("invalid hex input: {0}")]
    InvalidHex(String),

    #[error("input is not valid UTF-8")]
    NotUtf8,
}

/// How raw input should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Text of `0`/`1` characters
    #[default]
    Bits,
    /// Hex text, each byte expanded MSB-first
    Hex,
    /// Raw bytes, each expanded MSB-first
    Raw,
}

/// Parse a string of `0`/`1` characters
///
/// Whitespace, `,` and `_` are accepted as separators.
///
/// # Example
/// ```
/// use lfsr_sentinel::bits::{parse_bit_string, Bit};
///
/// let bits = parse_bit_string("10 1_1").unwrap();
/// assert_eq!(bits, vec![Bit::One, Bit::Zero, Bit::One, Bit::One]);
/// ```
pub fn parse_bit_string(input: &str) -> Result<Vec<Bit>, BitParseError> {
    let mut bits = Vec::with_capacity(input.len());
    for (offset, character) in input.char_indices() {
        match character {
            '0' => bits.push(Bit::Zero),
            '1' => bits.push(Bit::One),
            c if c.is_ascii_whitespace() || c == ',' || c == '_' => {}
            c => {
                return Err(BitParseError::InvalidCharacter {
                    character: c,
                    offset,
                })
            }
        }
    }
    Ok(bits)
}

/// Expand bytes into bits, most significant bit first
pub fn unpack_bytes(bytes: &[u8]) -> Vec<Bit> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| Bit::from((byte >> shift) & 1 == 1)))
        .collect()
}

/// Decode hex text and expand it MSB-first
pub fn decode_hex(input: &str) -> Result<Vec<Bit>, BitParseError> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = hex::decode(compact).map_err(|e| BitParseError::InvalidHex(e.to_string()))?;
    Ok(unpack_bytes(&bytes))
}

/// Decode arbitrary input according to `format`
pub fn decode(input: &[u8], format: InputFormat) -> Result<Vec<Bit>, BitParseError> {
    match format {
        InputFormat::Raw => Ok(unpack_bytes(input)),
        InputFormat::Bits => {
            let text = std::str::from_utf8(input).map_err(|_| BitParseError::NotUtf8)?;
            parse_bit_string(text)
        }
        InputFormat::Hex => {
            let text = std::str::from_utf8(input).map_err(|_| BitParseError::NotUtf8)?;
            decode_hex(text)
        }
    }
}

/// Repeat `pattern` until `len` bits have been produced
///
/// An empty pattern yields an empty sequence.
pub fn periodic(pattern: &[Bit], len: usize) -> Vec<Bit> {
    pattern.iter().copied().cycle().take(len).collect()
}

/// Draw `len` independent uniformly distributed bits
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Bit> {
    (0..len).map(|_| Bit::from(rng.gen::<bool>())).collect()
}

/// Render bits as a compact `0101...` string
pub fn to_bit_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| if b.is_one() { '1' } else { '0' }).collect()
}
