//! Stream parameter translation: sample rate, word length, frame format and
//! clock polarity to register bit patterns.
//!
//! The chip distinguishes 44.1 kHz from 48 kHz with a secondary
//! bit-rate-select field on top of a shared sample-rate family code; 32 kHz
//! and 96 kHz have dedicated family codes and no bit-rate-select write.

use crate::registers::*;

/// CLOCK_CONTROL bit pattern for one supported sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Value for the FS_RATE_CNFG field.
    pub rate_code: u8,
    /// Value for the BRT_SEL field, present only for the shared
    /// 44.1/48 kHz family.
    pub bit_rate_select: Option<u8>,
}

/// Map a sample rate in Hz to its CLOCK_CONTROL configuration.
///
/// Supported rates: 32000, 44100, 48000 and 96000 Hz. Returns `None` for
/// anything else.
pub fn clock_config(sample_rate_hz: u32) -> Option<ClockConfig> {
    match sample_rate_hz {
        32_000 => Some(ClockConfig {
            rate_code: FS_RATE_CNFG_32KHZ,
            bit_rate_select: None,
        }),
        44_100 => Some(ClockConfig {
            rate_code: FS_RATE_CNFG_441_48KHZ,
            bit_rate_select: Some(BRT_SEL_441KHZ),
        }),
        48_000 => Some(ClockConfig {
            rate_code: FS_RATE_CNFG_441_48KHZ,
            bit_rate_select: Some(BRT_SEL_48KHZ),
        }),
        96_000 => Some(ClockConfig {
            rate_code: FS_RATE_CNFG_96KHZ,
            bit_rate_select: None,
        }),
        _ => None,
    }
}

/// Map a sample width in bits to the I2S word-length code.
///
/// Supported widths: 16, 18, 20 and 24 bits. Returns `None` for anything
/// else.
pub fn word_length_code(bit_width: u8) -> Option<u8> {
    match bit_width {
        16 => Some(I2S_VBITS_16),
        18 => Some(I2S_VBITS_18),
        20 => Some(I2S_VBITS_20),
        24 => Some(I2S_VBITS_24),
        _ => None,
    }
}

/// Bit-clock and frame-clock polarity of the serial interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity {
    /// Sample on the inverted bit-clock edge.
    pub bit_clock_inverted: bool,
    /// Invert the frame-clock (LRCLK) polarity.
    pub frame_clock_inverted: bool,
}

impl Polarity {
    /// I2S_CONTROL bits for this polarity combination.
    pub fn bits(self) -> u8 {
        let sclk = if self.bit_clock_inverted {
            I2S_SCLK_INVERT
        } else {
            I2S_SCLK_NOT_INVERT
        };
        let lrclk = if self.frame_clock_inverted {
            I2S_LR_POLARITY_INVERT
        } else {
            I2S_LR_POLARITY_NOT_INVERT
        };
        sclk | lrclk
    }
}

/// Serial frame format of the audio interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFormat {
    /// Philips I2S (power-on default).
    I2s,
    /// Left-justified.
    LeftJustified,
    /// Right-justified.
    RightJustified,
}

impl FrameFormat {
    /// I2S_CONTROL bits for this frame format.
    pub fn bits(self) -> u8 {
        match self {
            Self::I2s => I2S_FMT_I2S,
            Self::LeftJustified => I2S_FMT_LJ,
            Self::RightJustified => I2S_FMT_RJ,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn rate_44100_uses_shared_family_with_441_select() {
        let cfg = clock_config(44_100).unwrap();
        assert_eq!(cfg.rate_code, FS_RATE_CNFG_441_48KHZ);
        assert_eq!(cfg.bit_rate_select, Some(BRT_SEL_441KHZ));
    }

    #[test]
    fn rate_48000_uses_shared_family_with_48_select() {
        let cfg = clock_config(48_000).unwrap();
        assert_eq!(cfg.rate_code, FS_RATE_CNFG_441_48KHZ);
        assert_eq!(cfg.bit_rate_select, Some(BRT_SEL_48KHZ));
    }

    #[test]
    fn rates_44100_and_48000_share_the_family_code() {
        let a = clock_config(44_100).unwrap();
        let b = clock_config(48_000).unwrap();
        assert_eq!(a.rate_code, b.rate_code);
        assert_ne!(a.bit_rate_select, b.bit_rate_select);
    }

    #[test]
    fn dedicated_rates_have_no_bit_rate_select() {
        let cfg = clock_config(96_000).unwrap();
        assert_eq!(cfg.rate_code, FS_RATE_CNFG_96KHZ);
        assert_eq!(cfg.bit_rate_select, None);
        let cfg = clock_config(32_000).unwrap();
        assert_eq!(cfg.rate_code, FS_RATE_CNFG_32KHZ);
        assert_eq!(cfg.bit_rate_select, None);
    }

    #[test]
    fn unsupported_rates_are_rejected() {
        for hz in [0, 8_000, 22_050, 44_000, 88_200, 192_000] {
            assert_eq!(clock_config(hz), None, "{hz} Hz must be unsupported");
        }
    }

    #[test]
    fn word_lengths_map_to_codes() {
        assert_eq!(word_length_code(16), Some(I2S_VBITS_16));
        assert_eq!(word_length_code(18), Some(I2S_VBITS_18));
        assert_eq!(word_length_code(20), Some(I2S_VBITS_20));
        assert_eq!(word_length_code(24), Some(I2S_VBITS_24));
    }

    #[test]
    fn unsupported_word_lengths_are_rejected() {
        for bits in [8, 17, 32, 0] {
            assert_eq!(word_length_code(bits), None);
        }
    }

    #[test]
    fn all_four_polarity_combinations_are_distinct() {
        let combos = [
            Polarity { bit_clock_inverted: false, frame_clock_inverted: false },
            Polarity { bit_clock_inverted: false, frame_clock_inverted: true },
            Polarity { bit_clock_inverted: true, frame_clock_inverted: false },
            Polarity { bit_clock_inverted: true, frame_clock_inverted: true },
        ];
        for i in 0..combos.len() {
            for j in (i + 1)..combos.len() {
                assert_ne!(combos[i].bits(), combos[j].bits());
            }
        }
    }

    #[test]
    fn polarity_bits_stay_inside_their_fields() {
        let all = Polarity { bit_clock_inverted: true, frame_clock_inverted: true };
        assert_eq!(all.bits() & !(I2S_SCLK_INV_MASK | I2S_LR_POLARITY_MASK), 0);
    }

    #[test]
    fn frame_format_bits_stay_inside_their_field() {
        for fmt in [FrameFormat::I2s, FrameFormat::LeftJustified, FrameFormat::RightJustified] {
            assert_eq!(fmt.bits() & !I2S_FMT_MASK, 0);
        }
    }
}
