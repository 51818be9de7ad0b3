//! DSP coefficient block addressing and the textual byte-list codec.
//!
//! Biquad, DRC-biquad, speaker-EQ, loudness and attack/release coefficients
//! transfer as fixed-size blocks of 12, 18 or 20 bytes. The wire layout of
//! these blocks is least-significant byte first, while the human-facing
//! order (and the order used by this crate's public API) is most-significant
//! byte first — the reversal is applied explicitly at the device layer and
//! never to scalar registers.

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::error::ParseError;
use crate::registers::*;

/// Byte length of one channel or DRC biquad bank.
pub const BQ_BLOCK_LEN: usize = 20;
/// Byte length of one speaker-EQ or loudness bank.
pub const SPEQ_BLOCK_LEN: usize = 12;
/// Byte length of one attack/release time-constant bank.
pub const ATK_REL_BLOCK_LEN: usize = 18;
/// Largest coefficient block the chip defines.
pub const MAX_COEFF_BLOCK_LEN: usize = 20;

/// Capacity needed to render the largest block as decimal text.
pub const FORMATTED_BLOCK_CAPACITY: usize = 4 * MAX_COEFF_BLOCK_LEN;

/// Buffer holding one coefficient block.
pub type CoeffBytes = Vec<u8, MAX_COEFF_BLOCK_LEN>;

/// Identifier of one coefficient block, resolved to its base register and
/// block length at construction. Constructors reject out-of-range bank
/// indices, so a value of this type always names a real block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoeffBlock {
    register: u8,
    len: usize,
}

impl CoeffBlock {
    /// Channel 1 & 2 loudness coefficients.
    pub const LOUDNESS: Self = Self {
        register: CHANNEL12_LOUDNESS,
        len: SPEQ_BLOCK_LEN,
    };

    /// Channel biquad bank `index` (0-17).
    pub fn bq(index: u8) -> Option<Self> {
        (index <= 17).then(|| Self {
            register: BQ0.wrapping_add(index),
            len: BQ_BLOCK_LEN,
        })
    }

    /// DRC biquad bank `index` (0-15).
    pub fn drc_bq(index: u8) -> Option<Self> {
        (index <= 15).then(|| Self {
            register: DRC_BQN0.wrapping_add(index),
            len: BQ_BLOCK_LEN,
        })
    }

    /// Speaker-EQ bank `index` (0-5).
    pub fn speq(index: u8) -> Option<Self> {
        (index <= 5).then(|| Self {
            register: SPEQ0.wrapping_add(index),
            len: SPEQ_BLOCK_LEN,
        })
    }

    /// Speaker-EQ attack/release time-constant bank `index` (1 or 2).
    pub fn atk_rel_tc(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self {
                register: SPEQ_ATK_REL_TC_1,
                len: ATK_REL_BLOCK_LEN,
            }),
            2 => Some(Self {
                register: SPEQ_ATK_REL_TC_2,
                len: ATK_REL_BLOCK_LEN,
            }),
            _ => None,
        }
    }

    /// Base register this block transfers through.
    pub const fn register(self) -> u8 {
        self.register
    }

    /// Byte length of one transfer of this block.
    pub const fn block_len(self) -> usize {
        self.len
    }
}

/// Parse a whitespace-separated decimal byte list into a bounded buffer,
/// most-significant byte first.
///
/// The input must split into exactly `expected` tokens, each a decimal byte.
///
/// # Errors
///
/// [`ParseError::TokenCount`] when the token count differs from `expected`
/// (checked before any token is parsed), [`ParseError::InvalidToken`] when a
/// token contains a non-digit character or exceeds 255.
pub fn parse_byte_list(input: &str, expected: usize) -> Result<CoeffBytes, ParseError> {
    let found = input.split_ascii_whitespace().count();
    if found != expected || expected > MAX_COEFF_BLOCK_LEN {
        return Err(ParseError::TokenCount { expected, found });
    }
    let mut bytes = CoeffBytes::new();
    for (index, token) in input.split_ascii_whitespace().enumerate() {
        let value: u8 = token
            .parse()
            .map_err(|_| ParseError::InvalidToken { index })?;
        // Capacity was checked against MAX_COEFF_BLOCK_LEN above.
        let _ = bytes.push(value);
    }
    Ok(bytes)
}

/// Render a coefficient block as a space-separated decimal byte list,
/// most-significant byte first.
///
/// Input longer than [`MAX_COEFF_BLOCK_LEN`] truncates at the capacity of
/// the output buffer; blocks defined by this chip always fit.
pub fn format_byte_list(bytes: &[u8]) -> String<FORMATTED_BLOCK_CAPACITY> {
    let mut out = String::new();
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            let _ = out.push(' ');
        }
        let _ = write!(out, "{byte}");
    }
    out
}
