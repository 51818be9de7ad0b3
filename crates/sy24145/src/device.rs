//! SY24145 device façade: gated register access, masked updates, the
//! attach-time bring-up sequence and the stream/format negotiation.
//!
//! Every read and write here is a live bus transaction — there is no
//! in-process register cache. [`Sy24145::update_bits`] is a plain
//! read-modify-write with no internal lock; callers that share one device
//! between threads must serialize around the façade.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::bus::RegisterBus;
use crate::coeff::{CoeffBlock, CoeffBytes};
use crate::config::{AmpConfig, AudioChannel};
use crate::eq::{low_band_mask, EqBandBit};
use crate::error::{Error, RegmapError};
use crate::regmap::{self, RegisterMap};
use crate::registers::*;
use crate::status::{DcStatus, ErrorStatus, FaultStatus, LoadStatus};
use crate::stream::{clock_config, word_length_code, FrameFormat, Polarity};

/// Number of steps in the bring-up sequence.
pub const BRINGUP_STEP_COUNT: usize = 9;

/// One step of the attach-time bring-up sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpStep {
    /// Clear the hard-mute-after-clock-error latch.
    ClearClockErrorHardMute,
    /// Enable loudness compensation.
    EnableLoudness,
    /// Enable all four DRC engines.
    EnableDrcEngines,
    /// Write the configured master volume.
    MasterVolume,
    /// Write the configured channel 1 volume.
    LeftVolume,
    /// Write the configured channel 2 volume.
    RightVolume,
    /// Apply the configured channel 1 mute flag.
    LeftMute,
    /// Apply the configured channel 2 mute flag.
    RightMute,
    /// Exit all-channel standby and shutdown.
    ExitStandbyAndShutdown,
}

/// Per-step outcome of one bring-up run.
///
/// The sequence never aborts early: a failing step is recorded and the next
/// step still runs. [`BringUpReport::into_last_error`] yields what the
/// plain [`Sy24145::apply_startup_config`] reports — the error of the
/// *last* failing step, matching the chip's reference bring-up behavior
/// where earlier failures are overwritten.
#[derive(Debug)]
pub struct BringUpReport<E> {
    steps: Vec<(BringUpStep, Option<Error<E>>), BRINGUP_STEP_COUNT>,
}

impl<E> BringUpReport<E> {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn record(&mut self, step: BringUpStep, result: Result<(), Error<E>>) {
        // The sequence has exactly BRINGUP_STEP_COUNT steps.
        let _ = self.steps.push((step, result.err()));
    }

    /// All executed steps with their outcomes, in execution order.
    pub fn steps(&self) -> &[(BringUpStep, Option<Error<E>>)] {
        &self.steps
    }

    /// Whether every step completed.
    pub fn is_ok(&self) -> bool {
        self.steps.iter().all(|(_, err)| err.is_none())
    }

    /// The error of the last failing step, if any step failed.
    pub fn into_last_error(mut self) -> Option<Error<E>> {
        while let Some((_, err)) = self.steps.pop() {
            if err.is_some() {
                return err;
            }
        }
        None
    }
}

/// SY24145 amplifier behind a blocking I2C bus.
pub struct Sy24145<I> {
    bus: RegisterBus<I>,
    map: RegisterMap,
    config: AmpConfig,
    /// Last successfully negotiated sample rate. An instance field — one
    /// per device — rather than process-global state.
    sample_rate_hz: Option<u32>,
}

impl<I: I2c> Sy24145<I> {
    /// Create a device handle at 7-bit address `addr` with the board
    /// configuration `config`.
    ///
    /// Performs no bus traffic; call
    /// [`apply_startup_config`](Self::apply_startup_config) to bring the
    /// chip out of its power-on state.
    ///
    /// # Errors
    ///
    /// [`RegmapError`] if the built-in register tables violate map
    /// integrity (width-class overlap, oversized default).
    pub fn new(i2c: I, addr: u8, config: AmpConfig) -> Result<Self, RegmapError> {
        Ok(Self {
            bus: RegisterBus::new(i2c, addr),
            map: RegisterMap::new()?,
            config,
            sample_rate_hz: None,
        })
    }

    /// Consume the device and return the I2C peripheral.
    pub fn release(self) -> I {
        self.bus.release()
    }

    /// Current cached board configuration.
    pub fn config(&self) -> &AmpConfig {
        &self.config
    }

    /// The register map backing this device.
    pub fn register_map(&self) -> &RegisterMap {
        &self.map
    }

    /// Last successfully negotiated sample rate in Hz, if any.
    pub fn sample_rate_hz(&self) -> Option<u32> {
        self.sample_rate_hz
    }

    // -- Gated register access ----------------------------------------------

    /// Read a scalar register, honoring width class and read gating.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRegister`] for addresses with no scalar entry,
    /// [`Error::NotReadable`] for gated-off registers, [`Error::Bus`] on
    /// transport failure.
    pub fn read_register(&mut self, reg: u8) -> Result<u32, Error<I::Error>> {
        let entry = self.map.entry(reg).ok_or(Error::UnknownRegister(reg))?;
        if !regmap::is_readable(reg) {
            return Err(Error::NotReadable(reg));
        }
        self.bus.read_value(reg, entry.width)
    }

    /// Write a scalar register, honoring width class and write gating.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRegister`], [`Error::NotWritable`],
    /// [`Error::InvalidWidth`] if `value` does not fit the register, or
    /// [`Error::Bus`].
    pub fn write_register(&mut self, reg: u8, value: u32) -> Result<(), Error<I::Error>> {
        let entry = self.map.entry(reg).ok_or(Error::UnknownRegister(reg))?;
        if !regmap::is_writable(reg) {
            return Err(Error::NotWritable(reg));
        }
        self.bus.write_value(reg, entry.width, value)
    }

    /// Read-modify-write limited to the bits selected by `mask`; bits
    /// outside `mask` keep their prior value.
    ///
    /// Not atomic across callers: racing `update_bits` against the same
    /// address must be serialized externally.
    pub fn update_bits(
        &mut self,
        reg: u8,
        mask: u32,
        value: u32,
    ) -> Result<(), Error<I::Error>> {
        let current = self.read_register(reg)?;
        let next = (current & !mask) | (value & mask);
        self.write_register(reg, next)
    }

    // 8-bit status registers cannot exceed one byte.
    #[allow(clippy::cast_possible_truncation)]
    fn read_register_u8(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        Ok(self.read_register(reg)? as u8)
    }

    // -- Identification and diagnostics -------------------------------------

    /// Read the device identification register (expected
    /// [`DEVICE_ID_VALUE`]).
    pub fn device_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register_u8(DEVICE_ID)
    }

    /// Read and decode all three fault status registers.
    pub fn faults(&mut self) -> Result<FaultStatus, Error<I::Error>> {
        let errors = ErrorStatus::from_bits(self.read_register_u8(ERROR_STATUS)?);
        let load = LoadStatus::from_bits(self.read_register_u8(ERROR_STATUS_2)?);
        let dc = DcStatus::from_bits(self.read_register_u8(ERROR_DC_STATUS)?);
        Ok(FaultStatus { errors, load, dc })
    }

    /// Master volume readback on the chip's attenuation scale.
    ///
    /// Raw values 0-2 mean the output is at minimum (reported as `None`);
    /// anything above maps linearly in 0.5 dB steps, 0x03 = -126 dB up to
    /// 0xFF = 0 dB.
    // Raw value is one byte; the formula stays well inside i16.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn master_volume_half_db(&mut self) -> Result<Option<i16>, Error<I::Error>> {
        let raw = self.read_register(MASTER_VOLUME)?;
        if raw <= 2 {
            return Ok(None);
        }
        Ok(Some(-252 + raw as i16 - 3))
    }

    /// Log a snapshot of the core control registers (defmt builds only).
    ///
    /// Registers that fail to read are skipped.
    #[cfg(feature = "defmt")]
    pub fn log_registers(&mut self) {
        for reg in [
            CLOCK_CONTROL,
            DEVICE_ID,
            SYSTEM_CONTROL_2,
            SOFT_MUTE,
            MASTER_VOLUME,
            I2S_CONTROL,
            MONITOR_PIN_CONFIG_1,
            PWM_CONTROL,
            PRESCALER,
            POSTSCALER,
            DRC_CONTROL,
        ] {
            if let Ok(value) = self.read_register(reg) {
                defmt::info!("sy24145 reg 0x{:02x} = 0x{:08x}", reg, value);
            }
        }
    }

    // -- Bring-up ------------------------------------------------------------

    /// Run the fixed bring-up sequence, returning the error of the last
    /// failing step.
    ///
    /// Intermediate failures do not abort the sequence; use
    /// [`apply_startup_config_reported`](Self::apply_startup_config_reported)
    /// when per-step outcomes matter.
    pub fn apply_startup_config(&mut self) -> Result<(), Error<I::Error>> {
        match self.apply_startup_config_reported().into_last_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Run the fixed bring-up sequence and report every step's outcome.
    pub fn apply_startup_config_reported(&mut self) -> BringUpReport<I::Error> {
        let cfg = self.config;
        let mut report = BringUpReport::new();
        report.record(
            BringUpStep::ClearClockErrorHardMute,
            self.update_bits(
                SOFT_MUTE,
                HARD_SOFT_UNMUTE_MASK.into(),
                SOFT_UNMUTE_FROM_CLK_ERR.into(),
            ),
        );
        report.record(
            BringUpStep::EnableLoudness,
            self.update_bits(SYSTEM_CONTROL_2, LOUDNESS_EN_MASK.into(), LOUDNESS_EN.into()),
        );
        report.record(
            BringUpStep::EnableDrcEngines,
            self.update_bits(DRC_CONTROL, DRC_ENABLE_ALL_MASK, DRC_ENABLE_ALL),
        );
        report.record(
            BringUpStep::MasterVolume,
            self.update_bits(
                MASTER_VOLUME,
                MASTER_VOLUME_MASK.into(),
                cfg.master_volume.into(),
            ),
        );
        report.record(
            BringUpStep::LeftVolume,
            self.update_bits(
                CHANNEL1_VOLUME,
                CHANNEL_VOLUME_MASK.into(),
                cfg.left_volume.into(),
            ),
        );
        report.record(
            BringUpStep::RightVolume,
            self.update_bits(
                CHANNEL2_VOLUME,
                CHANNEL_VOLUME_MASK.into(),
                cfg.right_volume.into(),
            ),
        );
        report.record(
            BringUpStep::LeftMute,
            self.update_bits(
                SOFT_MUTE,
                DSP_DVOL_MUTE_LEFT_MASK.into(),
                if cfg.left_mute {
                    DSP_DVOL_MUTE_LEFT.into()
                } else {
                    DSP_DVOL_UNMUTE_LEFT.into()
                },
            ),
        );
        report.record(
            BringUpStep::RightMute,
            self.update_bits(
                SOFT_MUTE,
                DSP_DVOL_MUTE_RIGHT_MASK.into(),
                if cfg.right_mute {
                    DSP_DVOL_MUTE_RIGHT.into()
                } else {
                    DSP_DVOL_UNMUTE_RIGHT.into()
                },
            ),
        );
        report.record(
            BringUpStep::ExitStandbyAndShutdown,
            self.update_bits(
                PWM_CONTROL,
                (PWM_CONTROL_STANDBY_MASK | PWM_CONTROL_SHUTDOWN_MASK).into(),
                (PWM_CONTROL_STANDBY_EXIT | PWM_CONTROL_SHUTDOWN_EXIT).into(),
            ),
        );
        report
    }

    // -- Volume and mute -----------------------------------------------------

    /// Set the master volume and write it through immediately.
    pub fn set_master_volume(&mut self, volume: u8) -> Result<(), Error<I::Error>> {
        self.update_bits(MASTER_VOLUME, MASTER_VOLUME_MASK.into(), volume.into())?;
        self.config.master_volume = volume;
        Ok(())
    }

    /// Set one channel's volume and write it through immediately.
    pub fn set_channel_volume(
        &mut self,
        channel: AudioChannel,
        volume: u8,
    ) -> Result<(), Error<I::Error>> {
        let reg = match channel {
            AudioChannel::Ch1 => CHANNEL1_VOLUME,
            AudioChannel::Ch2 => CHANNEL2_VOLUME,
        };
        self.update_bits(reg, CHANNEL_VOLUME_MASK.into(), volume.into())?;
        match channel {
            AudioChannel::Ch1 => self.config.left_volume = volume,
            AudioChannel::Ch2 => self.config.right_volume = volume,
        }
        Ok(())
    }

    /// Set one channel's soft-mute flag and write it through immediately.
    pub fn set_channel_mute(
        &mut self,
        channel: AudioChannel,
        mute: bool,
    ) -> Result<(), Error<I::Error>> {
        let (mask, muted, unmuted) = match channel {
            AudioChannel::Ch1 => (
                DSP_DVOL_MUTE_LEFT_MASK,
                DSP_DVOL_MUTE_LEFT,
                DSP_DVOL_UNMUTE_LEFT,
            ),
            AudioChannel::Ch2 => (
                DSP_DVOL_MUTE_RIGHT_MASK,
                DSP_DVOL_MUTE_RIGHT,
                DSP_DVOL_UNMUTE_RIGHT,
            ),
        };
        let value = if mute { muted } else { unmuted };
        self.update_bits(SOFT_MUTE, mask.into(), value.into())?;
        match channel {
            AudioChannel::Ch1 => self.config.left_mute = mute,
            AudioChannel::Ch2 => self.config.right_mute = mute,
        }
        Ok(())
    }

    /// Master soft mute for both channels (playback pause/resume).
    pub fn set_mute(&mut self, mute: bool) -> Result<(), Error<I::Error>> {
        let value = if mute { DSP_MVOL_MUTE } else { DSP_MVOL_UNMUTE };
        self.update_bits(SOFT_MUTE, DSP_MVOL_MASK.into(), value.into())
    }

    // -- Stream negotiation --------------------------------------------------

    /// Negotiate sample rate and serial word width at stream setup.
    ///
    /// Supported rates are 32000, 44100, 48000 and 96000 Hz; supported
    /// widths are 16, 18, 20 and 24 bits. An unsupported rate fails before
    /// any register write and clears the cached rate. An unsupported width
    /// fails after the clock configuration has been applied, mirroring the
    /// chip's reference sequence.
    pub fn configure_stream(
        &mut self,
        sample_rate_hz: u32,
        bit_width: u8,
    ) -> Result<(), Error<I::Error>> {
        let Some(clock) = clock_config(sample_rate_hz) else {
            self.sample_rate_hz = None;
            return Err(Error::UnsupportedFormat);
        };
        self.sample_rate_hz = Some(sample_rate_hz);

        self.update_bits(
            CLOCK_CONTROL,
            FS_CNFG_MANUAL_EN_MASK.into(),
            FS_CNFG_MANUAL_EN_CONFIG_SR.into(),
        )?;
        if let Some(brt) = clock.bit_rate_select {
            self.update_bits(CLOCK_CONTROL, BRT_SEL_MASK.into(), brt.into())?;
        }
        self.update_bits(
            CLOCK_CONTROL,
            FS_RATE_CNFG_MASK.into(),
            clock.rate_code.into(),
        )?;
        let _applied = self.read_register(CLOCK_CONTROL)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("sy24145: clock control now 0x{:02x}", _applied);

        let vbits = word_length_code(bit_width).ok_or(Error::UnsupportedFormat)?;
        self.update_bits(I2S_CONTROL, I2S_VBITS_MASK.into(), vbits.into())
    }

    /// Apply clock polarity and frame format at stream setup.
    ///
    /// Follows the chip's reference sequence: polarity bits first, then
    /// format and polarity together.
    pub fn set_format(
        &mut self,
        polarity: Polarity,
        format: FrameFormat,
    ) -> Result<(), Error<I::Error>> {
        let pol = polarity.bits();
        self.update_bits(
            I2S_CONTROL,
            (I2S_LR_POLARITY_MASK | I2S_SCLK_INV_MASK).into(),
            pol.into(),
        )?;
        self.update_bits(
            I2S_CONTROL,
            (I2S_FMT_MASK | I2S_LR_POLARITY_MASK | I2S_SCLK_INV_MASK).into(),
            (format.bits() | pol).into(),
        )
    }

    // -- Coefficient blocks --------------------------------------------------

    /// Read one coefficient block, returned most-significant byte first.
    pub fn read_coeff_block(
        &mut self,
        block: CoeffBlock,
    ) -> Result<CoeffBytes, Error<I::Error>> {
        let reg = block.register();
        if !regmap::is_readable(reg) {
            return Err(Error::NotReadable(reg));
        }
        let mut bytes = CoeffBytes::new();
        // Block lengths are bounded by the buffer capacity.
        let _ = bytes.resize_default(block.block_len());
        self.bus.read(reg, &mut bytes)?;
        // Blocks arrive least-significant byte first on the wire.
        bytes.reverse();
        Ok(bytes)
    }

    /// Write one coefficient block given most-significant byte first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] if `data` does not match the block length.
    pub fn write_coeff_block(
        &mut self,
        block: CoeffBlock,
        data: &[u8],
    ) -> Result<(), Error<I::Error>> {
        let reg = block.register();
        if data.len() != block.block_len() {
            return Err(Error::InvalidWidth(data.len()));
        }
        if !regmap::is_writable(reg) {
            return Err(Error::NotWritable(reg));
        }
        let mut wire = CoeffBytes::new();
        // Length equals the block length, which fits the buffer.
        let _ = wire.extend_from_slice(data);
        // Blocks go out least-significant byte first on the wire.
        wire.reverse();
        self.bus.write(reg, &wire)
    }

    // -- Equalizer -----------------------------------------------------------

    /// Whether one EQ band's enable bit is set.
    pub fn eq_band_enabled(&mut self, band: &EqBandBit) -> Result<bool, Error<I::Error>> {
        let raw = self.read_register_u8(band.register)?;
        // The band table guarantees shift < 8.
        #[allow(clippy::arithmetic_side_effects)]
        let mask = 1u8 << band.shift;
        Ok(raw & mask != 0)
    }

    /// Set or clear one EQ band's enable bit.
    pub fn set_eq_band_enabled(
        &mut self,
        band: &EqBandBit,
        enabled: bool,
    ) -> Result<(), Error<I::Error>> {
        // The band table guarantees shift < 8.
        #[allow(clippy::arithmetic_side_effects)]
        let mask = 1u8 << band.shift;
        let value = if enabled { mask } else { 0 };
        self.update_bits(band.register, mask.into(), value.into())
    }

    /// Whether the aggregate equalizer is on: true when any of the three
    /// low-band enables is set on either channel.
    pub fn eq_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let ch1 = self.read_register_u8(CHANNEL1_EQ_FILTER_CONTROL_1)?
            & low_band_mask(AudioChannel::Ch1);
        let ch2 = self.read_register_u8(CHANNEL2_EQ_FILTER_CONTROL_1)?
            & low_band_mask(AudioChannel::Ch2);
        Ok(ch1 != 0 || ch2 != 0)
    }

    /// Switch the three low EQ bands of both channels on or off together.
    pub fn set_eq_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        for (channel, reg) in [
            (AudioChannel::Ch1, CHANNEL1_EQ_FILTER_CONTROL_1),
            (AudioChannel::Ch2, CHANNEL2_EQ_FILTER_CONTROL_1),
        ] {
            let mask = low_band_mask(channel);
            let value = if enabled { mask } else { 0 };
            self.update_bits(reg, mask.into(), value.into())?;
        }
        Ok(())
    }
}
