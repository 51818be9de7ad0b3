//! Per-band equalizer enable bit table.
//!
//! Each of the two channels has 18 EQ bands whose enable bits are scattered
//! across three registers. The table below is built once and maps a
//! (channel, band) pair straight to its (register, bit shift) — no string
//! dispatch, no per-lookup scan cost beyond a bounded array walk.

use crate::config::AudioChannel;
use crate::registers::*;

/// Number of EQ bands per channel.
pub const EQ_BANDS_PER_CHANNEL: u8 = 18;

/// Location of one band's enable bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EqBandBit {
    /// Channel the band belongs to.
    pub channel: AudioChannel,
    /// Band index, 0-17.
    pub band: u8,
    /// Register holding the enable bit.
    pub register: u8,
    /// Bit position of the enable bit within the register.
    pub shift: u8,
}

const fn band(channel: AudioChannel, band: u8, register: u8, shift: u8) -> EqBandBit {
    EqBandBit {
        channel,
        band,
        register,
        shift,
    }
}

/// Enable-bit locations for all 36 EQ bands.
///
/// Bands 0-5 sit in filter control 1 bits 0-5, bands 6-13 fill filter
/// control 2, bands 14/15 are the two high bits of filter control 1, and
/// bands 16/17 live in the shared speaker-EQ control register (channel 1 in
/// bits 6/7, channel 2 in bits 4/5).
pub const EQ_BAND_BITS: &[EqBandBit] = &[
    band(AudioChannel::Ch1, 0, CHANNEL1_EQ_FILTER_CONTROL_1, 0),
    band(AudioChannel::Ch1, 1, CHANNEL1_EQ_FILTER_CONTROL_1, 1),
    band(AudioChannel::Ch1, 2, CHANNEL1_EQ_FILTER_CONTROL_1, 2),
    band(AudioChannel::Ch1, 3, CHANNEL1_EQ_FILTER_CONTROL_1, 3),
    band(AudioChannel::Ch1, 4, CHANNEL1_EQ_FILTER_CONTROL_1, 4),
    band(AudioChannel::Ch1, 5, CHANNEL1_EQ_FILTER_CONTROL_1, 5),
    band(AudioChannel::Ch1, 6, CHANNEL1_EQ_FILTER_CONTROL_2, 0),
    band(AudioChannel::Ch1, 7, CHANNEL1_EQ_FILTER_CONTROL_2, 1),
    band(AudioChannel::Ch1, 8, CHANNEL1_EQ_FILTER_CONTROL_2, 2),
    band(AudioChannel::Ch1, 9, CHANNEL1_EQ_FILTER_CONTROL_2, 3),
    band(AudioChannel::Ch1, 10, CHANNEL1_EQ_FILTER_CONTROL_2, 4),
    band(AudioChannel::Ch1, 11, CHANNEL1_EQ_FILTER_CONTROL_2, 5),
    band(AudioChannel::Ch1, 12, CHANNEL1_EQ_FILTER_CONTROL_2, 6),
    band(AudioChannel::Ch1, 13, CHANNEL1_EQ_FILTER_CONTROL_2, 7),
    band(AudioChannel::Ch1, 14, CHANNEL1_EQ_FILTER_CONTROL_1, 6),
    band(AudioChannel::Ch1, 15, CHANNEL1_EQ_FILTER_CONTROL_1, 7),
    band(AudioChannel::Ch1, 16, SPEQ_FILTER_CONTROL_1, 6),
    band(AudioChannel::Ch1, 17, SPEQ_FILTER_CONTROL_1, 7),
    band(AudioChannel::Ch2, 0, CHANNEL2_EQ_FILTER_CONTROL_1, 0),
    band(AudioChannel::Ch2, 1, CHANNEL2_EQ_FILTER_CONTROL_1, 1),
    band(AudioChannel::Ch2, 2, CHANNEL2_EQ_FILTER_CONTROL_1, 2),
    band(AudioChannel::Ch2, 3, CHANNEL2_EQ_FILTER_CONTROL_1, 3),
    band(AudioChannel::Ch2, 4, CHANNEL2_EQ_FILTER_CONTROL_1, 4),
    band(AudioChannel::Ch2, 5, CHANNEL2_EQ_FILTER_CONTROL_1, 5),
    band(AudioChannel::Ch2, 6, CHANNEL2_EQ_FILTER_CONTROL_2, 0),
    band(AudioChannel::Ch2, 7, CHANNEL2_EQ_FILTER_CONTROL_2, 1),
    band(AudioChannel::Ch2, 8, CHANNEL2_EQ_FILTER_CONTROL_2, 2),
    band(AudioChannel::Ch2, 9, CHANNEL2_EQ_FILTER_CONTROL_2, 3),
    band(AudioChannel::Ch2, 10, CHANNEL2_EQ_FILTER_CONTROL_2, 4),
    band(AudioChannel::Ch2, 11, CHANNEL2_EQ_FILTER_CONTROL_2, 5),
    band(AudioChannel::Ch2, 12, CHANNEL2_EQ_FILTER_CONTROL_2, 6),
    band(AudioChannel::Ch2, 13, CHANNEL2_EQ_FILTER_CONTROL_2, 7),
    band(AudioChannel::Ch2, 14, CHANNEL2_EQ_FILTER_CONTROL_1, 6),
    band(AudioChannel::Ch2, 15, CHANNEL2_EQ_FILTER_CONTROL_1, 7),
    band(AudioChannel::Ch2, 16, SPEQ_FILTER_CONTROL_1, 4),
    band(AudioChannel::Ch2, 17, SPEQ_FILTER_CONTROL_1, 5),
];

/// Look up the enable bit for one band. `None` when `band` is out of range.
pub fn eq_band_bit(channel: AudioChannel, band: u8) -> Option<&'static EqBandBit> {
    EQ_BAND_BITS
        .iter()
        .find(|b| b.channel == channel && b.band == band)
}

/// Mask of the three low-band enables the aggregate equalizer switch flips
/// in a channel's filter control 1 register.
pub const fn low_band_mask(channel: AudioChannel) -> u8 {
    match channel {
        AudioChannel::Ch1 => {
            CHANNEL1_EQ_EN0_MASK | CHANNEL1_EQ_EN1_MASK | CHANNEL1_EQ_EN2_MASK
        }
        AudioChannel::Ch2 => {
            CHANNEL2_EQ_EN0_MASK | CHANNEL2_EQ_EN1_MASK | CHANNEL2_EQ_EN2_MASK
        }
    }
}
