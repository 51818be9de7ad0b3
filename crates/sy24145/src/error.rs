//! Driver error types.
//!
//! Transport failures are carried verbatim from the underlying I2C
//! implementation; everything else is either a caller contract violation
//! (unknown register, oversized payload) or an unsupported stream parameter
//! the caller can recover from.

/// Error from register and device operations.
///
/// Generic over the transport error type `E` of the underlying
/// [`embedded_hal::i2c::I2c`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport-level failure (arbitration loss, NACK, timeout).
    /// Propagated unchanged; the driver does not retry.
    Bus(E),
    /// The address has no entry in the register map.
    UnknownRegister(u8),
    /// Requested payload length is zero, exceeds the chip's transfer bound,
    /// or the value does not fit the register width.
    InvalidWidth(usize),
    /// The address is outside the readable range union.
    NotReadable(u8),
    /// The address is outside the writable range union.
    NotWritable(u8),
    /// Requested sample rate, word width or frame format is outside the
    /// supported set. Recoverable; fall back or report upstream.
    UnsupportedFormat,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::Bus(e)
    }
}

/// Register map construction failure. Fatal: the map must not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegmapError {
    /// An address appears in more than one width class (or twice in one).
    OverlappingRegisterRanges {
        /// The colliding register address.
        addr: u8,
    },
    /// A seeded power-on default does not fit in `8 * width` bits.
    DefaultExceedsWidth {
        /// The offending register address.
        addr: u8,
    },
}

/// Failure while parsing a whitespace-separated decimal byte list.
///
/// Parse failures are reported to the caller and never mutate register
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The input did not split into exactly the expected number of tokens.
    TokenCount {
        /// Tokens required by the target block.
        expected: usize,
        /// Tokens found in the input.
        found: usize,
    },
    /// A token contained a non-digit character or exceeded a byte's range.
    InvalidToken {
        /// Zero-based index of the offending token.
        index: usize,
    },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TokenCount { expected, found } => {
                write!(f, "expected {expected} byte tokens, found {found}")
            }
            Self::InvalidToken { index } => {
                write!(f, "token {index} is not a decimal byte")
            }
        }
    }
}
