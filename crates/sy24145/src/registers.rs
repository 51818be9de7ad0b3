//! SY24145 register addresses, field masks and power-on constants.
//!
//! Reference: Silergy SY24145 datasheet, register map section.
//!
//! The SY24145 exposes four register files sharing one 8-bit address space,
//! distinguished only by access width (1/2/3/4 bytes). Width assignment and
//! power-on defaults live in [`crate::regmap`]; this module holds the raw
//! addresses and bit-field constants.
//!
//! Biquad and DRC coefficient banks (BQ0…, DRC_BQN0…, SPEQ0…) are not scalar
//! registers: they transfer as 12/18/20-byte blocks and are addressed through
//! [`crate::coeff`].

/// 7-bit I2C device address when the ADDR pin is pulled low.
pub const SY24145_I2C_ADDR_LOW: u8 = 0x2A;
/// 7-bit I2C device address when the ADDR pin is pulled high.
pub const SY24145_I2C_ADDR_HIGH: u8 = 0x2B;

// ---------------------------------------------------------------------------
// 8-bit registers
// ---------------------------------------------------------------------------

/// 0x00: Clock control (sample-rate family, bit-rate select, manual enable).
pub const CLOCK_CONTROL: u8 = 0x00;
/// 0x01: Device identification, read-only. Reads back [`DEVICE_ID_VALUE`].
pub const DEVICE_ID: u8 = 0x01;
/// 0x02: Error status (OTF, OCF, SF, PWM DC, LRCLK/SCLK, checksum errors).
pub const ERROR_STATUS: u8 = 0x02;
/// 0x03: System control 1.
pub const SYSTEM_CONTROL_1: u8 = 0x03;
/// 0x04: System control 2 (loudness compensation enable, DSP bypass).
pub const SYSTEM_CONTROL_2: u8 = 0x04;
/// 0x05: System control 3.
pub const SYSTEM_CONTROL_3: u8 = 0x05;
/// 0x06: Soft mute (per-channel mute, master mute, clock-error hard mute).
///
/// Bit 0 mutes channel 1 (left), bit 1 mutes channel 2 (right), bit 3 is the
/// master mute for both channels. With soft mute the volume ramps gradually
/// when mute is toggled.
pub const SOFT_MUTE: u8 = 0x06;
/// 0x07: Master volume, 0.5 dB per step, 0x03 = -126 dB, 0x00-0x02 = mute.
pub const MASTER_VOLUME: u8 = 0x07;
/// 0x08: Channel 1 (left) volume.
pub const CHANNEL1_VOLUME: u8 = 0x08;
/// 0x09: Channel 2 (right) volume.
pub const CHANNEL2_VOLUME: u8 = 0x09;
/// 0x0A: Secondary error status (short/open load), read-only.
pub const ERROR_STATUS_2: u8 = 0x0A;
/// 0x0B: Volume fine tune.
pub const VOL_FTUNE: u8 = 0x0B;
/// 0x0F: Soft reset.
pub const SOFT_RESET: u8 = 0x0F;
/// 0x10: PWM modulation limit.
pub const MODULATION_LIMIT: u8 = 0x10;
/// 0x11: PWM channel A delay.
pub const PWM_A_CHANNEL_DELAY: u8 = 0x11;
/// 0x12: PWM channel B delay.
pub const PWM_B_CHANNEL_DELAY: u8 = 0x12;
/// 0x13: PWM channel C delay.
pub const PWM_C_CHANNEL_DELAY: u8 = 0x13;
/// 0x14: PWM channel D delay.
pub const PWM_D_CHANNEL_DELAY: u8 = 0x14;
/// 0x15: I2S control (frame format, clock polarity, word length).
pub const I2S_CONTROL: u8 = 0x15;
/// 0x16: DSP control 1.
pub const DSP_CONTROL_1: u8 = 0x16;
/// 0x17: Monitor pin configuration 1.
pub const MONITOR_PIN_CONFIG_1: u8 = 0x17;
/// 0x18: Monitor pin configuration 2.
pub const MONITOR_PIN_CONFIG_2: u8 = 0x18;
/// 0x19: PWM direct-current detection threshold.
pub const PWM_DC_THRESHOLD: u8 = 0x19;
/// 0x1B: Short-circuit protection control.
pub const SHORT_CONTROL: u8 = 0x1B;
/// 0x1C: Fault output hold time.
pub const FAULT_OUTPUT_TIME: u8 = 0x1C;
/// 0x1E: Operation mode.
pub const OPERATION_MODE: u8 = 0x1E;
/// 0x1F: Coefficient checksum control.
pub const CHECKSUM_CONTROL: u8 = 0x1F;
/// 0x20: Serial input multiplexer.
pub const INPUT_MUX: u8 = 0x20;
/// 0x21: DSP control 2.
pub const DSP_CONTROL_2: u8 = 0x21;
/// 0x22: PWM control (all-channel standby and shutdown).
pub const PWM_CONTROL: u8 = 0x22;
/// 0x23: Fault pin select.
pub const FAULT_SELECT: u8 = 0x23;
/// 0x24: Channel 1 EQ filter control 1 (band enables 0-5, 14, 15).
pub const CHANNEL1_EQ_FILTER_CONTROL_1: u8 = 0x24;
/// 0x25: Channel 1 EQ filter control 2 (band enables 6-13).
pub const CHANNEL1_EQ_FILTER_CONTROL_2: u8 = 0x25;
/// 0x26: Channel 2 EQ filter control 1 (band enables 0-5, 14, 15).
pub const CHANNEL2_EQ_FILTER_CONTROL_1: u8 = 0x26;
/// 0x27: Channel 2 EQ filter control 2 (band enables 6-13).
pub const CHANNEL2_EQ_FILTER_CONTROL_2: u8 = 0x27;
/// 0x28: Speaker EQ filter control 1 (bands 16/17 of both channels).
pub const SPEQ_FILTER_CONTROL_1: u8 = 0x28;
/// 0x29: Speaker EQ filter control 2.
pub const SPEQ_FILTER_CONTROL_2: u8 = 0x29;
/// 0x2A: Speaker EQ filter control 3.
pub const SPEQ_FILTER_CONTROL_3: u8 = 0x2A;
/// 0x2B: Built-in self test control.
pub const BIST_CONTROL: u8 = 0x2B;
/// 0x72: PLL control.
pub const PLL_CONTROL: u8 = 0x72;
/// 0x73: Speaker power-up sequence bypass.
pub const SPK_SEQUENCE_BYPASS: u8 = 0x73;
/// 0x74: Function test.
pub const FUNC_TEST: u8 = 0x74;
/// 0x75: Test mode by register.
pub const TM_BY_REG: u8 = 0x75;
/// 0x76: Protection system control.
pub const PROTECTION_SYSTEM_CONTROL: u8 = 0x76;
/// 0x77: I2C interface control.
pub const I2C_CONTROL: u8 = 0x77;
/// 0x78: Oscillator trim control.
pub const OSCILLATOR_TRIM_CONTROL: u8 = 0x78;
/// 0x7E: DRC fine tune.
pub const DRC_FTUNE: u8 = 0x7E;
/// 0x89: DC error status (per-channel p/n-side), read-only.
pub const ERROR_DC_STATUS: u8 = 0x89;
/// 0x8A: DSP control 3.
pub const DSP_CONTROL_3: u8 = 0x8A;
/// 0x8B: Function debug.
pub const FUNC_DEBUG: u8 = 0x8B;

// ---------------------------------------------------------------------------
// 16-bit registers
// ---------------------------------------------------------------------------

/// 0x2C: Input prescaler gain.
pub const PRESCALER: u8 = 0x2C;
/// 0x2D: Output postscaler gain.
pub const POSTSCALER: u8 = 0x2D;
/// 0x5C: Auto-mute input level threshold.
pub const AUTO_MUTE_THRESHOLD: u8 = 0x5C;

// ---------------------------------------------------------------------------
// 24-bit registers
// ---------------------------------------------------------------------------

/// 0x5D: DRC1 limiter configuration 1.
pub const DRC1_LMT_CFG1: u8 = 0x5D;
/// 0x5E: DRC1 limiter configuration 2.
pub const DRC1_LMT_CFG2: u8 = 0x5E;
/// 0x5F: DRC1 limiter configuration 3.
pub const DRC1_LMT_CFG3: u8 = 0x5F;
/// 0x61: DRC2 limiter configuration 1.
pub const DRC2_LMT_CFG1: u8 = 0x61;
/// 0x62: DRC2 limiter configuration 2.
pub const DRC2_LMT_CFG2: u8 = 0x62;
/// 0x63: DRC2 limiter configuration 3.
pub const DRC2_LMT_CFG3: u8 = 0x63;
/// 0x64: DRC3 limiter configuration 1.
pub const DRC3_LMT_CFG1: u8 = 0x64;
/// 0x65: DRC3 limiter configuration 2.
pub const DRC3_LMT_CFG2: u8 = 0x65;
/// 0x66: DRC3 limiter configuration 3.
pub const DRC3_LMT_CFG3: u8 = 0x66;
/// 0x67: DRC4 limiter configuration 1.
pub const DRC4_LMT_CFG1: u8 = 0x67;
/// 0x68: DRC4 limiter configuration 2.
pub const DRC4_LMT_CFG2: u8 = 0x68;
/// 0x69: DRC4 limiter configuration 3.
pub const DRC4_LMT_CFG3: u8 = 0x69;
/// 0x6A: Shared DRC envelope attack time constant.
pub const DRC_ENVLP_TC_UP: u8 = 0x6A;
/// 0x6B: Shared DRC envelope release time constant.
pub const DRC_ENVLP_TC_DN: u8 = 0x6B;
/// 0x6C: Hard clipper threshold.
pub const HARD_CLIPPER_THR: u8 = 0x6C;
/// 0x7C: 3D effect coefficient.
pub const DSP_3D_COEF: u8 = 0x7C;
/// 0x7D: 3D effect mix level.
pub const DSP_3D_MIX: u8 = 0x7D;
/// 0x8C: DRC1 envelope attack time constant.
pub const DRC1_ENVLP_TC_UP: u8 = 0x8C;
/// 0x8D: DRC1 envelope release time constant.
pub const DRC1_ENVLP_TC_DN: u8 = 0x8D;
/// 0x8E: DRC2 envelope attack time constant.
pub const DRC2_ENVLP_TC_UP: u8 = 0x8E;
/// 0x8F: DRC2 envelope release time constant.
pub const DRC2_ENVLP_TC_DN: u8 = 0x8F;
/// 0x90: DRC3 envelope attack time constant.
pub const DRC3_ENVLP_TC_UP: u8 = 0x90;
/// 0x91: DRC3 envelope release time constant.
pub const DRC3_ENVLP_TC_DN: u8 = 0x91;
/// 0x92: Power meter control / readback 1.
pub const POWER_METER_CONTROL_RB1: u8 = 0x92;
/// 0x93: Power meter readback 2, read-only.
pub const POWER_METER_CONTROL_RB2: u8 = 0x93;

// ---------------------------------------------------------------------------
// 32-bit registers
// ---------------------------------------------------------------------------

/// 0x60: DRC control (bits 0-3 enable DRC1-DRC4).
pub const DRC_CONTROL: u8 = 0x60;
/// 0x71: PLL status.
pub const PLL_STATUS: u8 = 0x71;
/// 0x79: Oscillator trim register 1.
pub const OSCILLATOR_TRIM_REGISTER1: u8 = 0x79;
/// 0x7A: Oscillator trim register 2.
pub const OSCILLATOR_TRIM_REGISTER2: u8 = 0x7A;
/// 0x7B: Analog reference top control.
pub const ANALOG_REF_TOP_CONTROL: u8 = 0x7B;
/// 0x81: Over-current detection window width.
pub const OC_DETECT_WINDOW_WIDTH: u8 = 0x81;
/// 0x82: Over-current fault threshold.
pub const FAULT_OVER_CURRENT_THRESHOLD: u8 = 0x82;
/// 0x85: Factory-private register. Seeded with a default but gated off
/// from both read and write access.
pub const INTER_PRIVATE: u8 = 0x85;
/// 0x94: PWM output multiplexer, read-only.
pub const PWM_MUX: u8 = 0x94;
/// 0x95: PWM output flip 1, read-only.
pub const PWM_OUTFLIP_1: u8 = 0x95;
/// 0x96: PWM output flip 2, read-only.
pub const PWM_OUTFLIP_2: u8 = 0x96;
/// 0x97: Channel 1 process-biquad checksum.
pub const PBQ_CHECKSUM: u8 = 0x97;
/// 0x98: DRC biquad checksum.
pub const MDRC_CHECKSUM: u8 = 0x98;
/// 0x99: Channel 2 process-biquad checksum.
pub const PBQ_CH2_CHECKSUM: u8 = 0x99;

// ---------------------------------------------------------------------------
// Coefficient block bases (12/18/20-byte block transfers, see crate::coeff)
// ---------------------------------------------------------------------------

/// 0x30: First channel biquad bank (BQ0-BQ17, 20 bytes each).
pub const BQ0: u8 = 0x30;
/// 0x41: Last channel biquad bank.
pub const BQ17: u8 = 0x41;
/// 0x42: First DRC biquad bank (DRC_BQN0-DRC_BQN15, 20 bytes each).
pub const DRC_BQN0: u8 = 0x42;
/// 0x51: Last DRC biquad bank.
pub const DRC_BQN15: u8 = 0x51;
/// 0x52: First speaker EQ bank (SPEQ0-SPEQ5, 12 bytes each).
pub const SPEQ0: u8 = 0x52;
/// 0x57: Last speaker EQ bank.
pub const SPEQ5: u8 = 0x57;
/// 0x58: Channel 1 & 2 loudness coefficients (12 bytes).
pub const CHANNEL12_LOUDNESS: u8 = 0x58;
/// 0x5A: Speaker EQ attack/release time constants 1 (18 bytes).
pub const SPEQ_ATK_REL_TC_1: u8 = 0x5A;
/// 0x5B: Speaker EQ attack/release time constants 2 (18 bytes).
pub const SPEQ_ATK_REL_TC_2: u8 = 0x5B;

// ---------------------------------------------------------------------------
// CLOCK_CONTROL (0x00) fields
// ---------------------------------------------------------------------------

/// Sample-rate family field, bits 7:5.
pub const FS_RATE_CNFG_MASK: u8 = 0xE0;
/// Sample-rate family: 44.1 kHz / 48 kHz (disambiguated by BRT_SEL).
pub const FS_RATE_CNFG_441_48KHZ: u8 = 0b000 << 5;
/// Sample-rate family: 32 kHz.
pub const FS_RATE_CNFG_32KHZ: u8 = 0b001 << 5;
/// Sample-rate family: 96 kHz.
pub const FS_RATE_CNFG_96KHZ: u8 = 0b011 << 5;

/// Bit-rate select field, bits 4:3. Distinguishes 44.1 kHz from 48 kHz
/// within the shared [`FS_RATE_CNFG_441_48KHZ`] family.
pub const BRT_SEL_MASK: u8 = 0x18;
/// Bit-rate select: 44.1 kHz.
pub const BRT_SEL_441KHZ: u8 = 0b00 << 3;
/// Bit-rate select: 48 kHz.
pub const BRT_SEL_48KHZ: u8 = 0b01 << 3;

/// Manual sample-rate configuration enable, bit 2.
pub const FS_CNFG_MANUAL_EN_MASK: u8 = 0x04;
/// Take the sample rate from the FS_RATE_CNFG field instead of auto-detect.
pub const FS_CNFG_MANUAL_EN_CONFIG_SR: u8 = 0x04;

// ---------------------------------------------------------------------------
// SOFT_MUTE (0x06) fields
// ---------------------------------------------------------------------------

/// Channel 1 (left) DSP volume mute flag, bit 0.
pub const DSP_DVOL_MUTE_LEFT_MASK: u8 = 0x01;
/// Mute channel 1.
pub const DSP_DVOL_MUTE_LEFT: u8 = 0x01;
/// Unmute channel 1.
pub const DSP_DVOL_UNMUTE_LEFT: u8 = 0x00;
/// Channel 2 (right) DSP volume mute flag, bit 1.
pub const DSP_DVOL_MUTE_RIGHT_MASK: u8 = 0x02;
/// Mute channel 2.
pub const DSP_DVOL_MUTE_RIGHT: u8 = 0x02;
/// Unmute channel 2.
pub const DSP_DVOL_UNMUTE_RIGHT: u8 = 0x00;
/// Master DSP volume mute flag, bit 3. Mutes both channels.
pub const DSP_MVOL_MASK: u8 = 0x08;
/// Master mute.
pub const DSP_MVOL_MUTE: u8 = 0x08;
/// Master unmute.
pub const DSP_MVOL_UNMUTE: u8 = 0x00;
/// Hard-mute-on-clock-error latch, bit 5. Set at power-on: the chip stays
/// hard-muted after a clock error until the latch is cleared.
pub const HARD_SOFT_UNMUTE_MASK: u8 = 0x20;
/// Clear the latch so the chip soft-unmutes once the clocks recover.
pub const SOFT_UNMUTE_FROM_CLK_ERR: u8 = 0x00;

// ---------------------------------------------------------------------------
// SYSTEM_CONTROL_2 (0x04) fields
// ---------------------------------------------------------------------------

/// Loudness compensation enable, bit 6.
pub const LOUDNESS_EN_MASK: u8 = 0x40;
/// Enable loudness compensation.
pub const LOUDNESS_EN: u8 = 0x40;

// ---------------------------------------------------------------------------
// Volume registers (0x07-0x09) fields
// ---------------------------------------------------------------------------

/// Master volume field occupies the full register.
pub const MASTER_VOLUME_MASK: u8 = 0xFF;
/// Channel volume field occupies the full register.
pub const CHANNEL_VOLUME_MASK: u8 = 0xFF;

// ---------------------------------------------------------------------------
// I2S_CONTROL (0x15) fields
// ---------------------------------------------------------------------------

/// Serial word length field, bits 1:0.
pub const I2S_VBITS_MASK: u8 = 0x03;
/// 16-bit serial words.
pub const I2S_VBITS_16: u8 = 0x00;
/// 18-bit serial words.
pub const I2S_VBITS_18: u8 = 0x01;
/// 20-bit serial words.
pub const I2S_VBITS_20: u8 = 0x02;
/// 24-bit serial words.
pub const I2S_VBITS_24: u8 = 0x03;

/// Frame format field, bits 5:4.
pub const I2S_FMT_MASK: u8 = 0x30;
/// Right-justified frame format.
pub const I2S_FMT_RJ: u8 = 0x00;
/// Philips I2S frame format (power-on default).
pub const I2S_FMT_I2S: u8 = 0x10;
/// Left-justified frame format.
pub const I2S_FMT_LJ: u8 = 0x20;

/// Bit-clock inversion, bit 6.
pub const I2S_SCLK_INV_MASK: u8 = 0x40;
/// Sample on the normal bit-clock edge.
pub const I2S_SCLK_NOT_INVERT: u8 = 0x00;
/// Sample on the inverted bit-clock edge.
pub const I2S_SCLK_INVERT: u8 = 0x40;

/// Frame-clock (LRCLK) polarity, bit 7.
pub const I2S_LR_POLARITY_MASK: u8 = 0x80;
/// Normal frame-clock polarity.
pub const I2S_LR_POLARITY_NOT_INVERT: u8 = 0x00;
/// Inverted frame-clock polarity.
pub const I2S_LR_POLARITY_INVERT: u8 = 0x80;

// ---------------------------------------------------------------------------
// PWM_CONTROL (0x22) fields
// ---------------------------------------------------------------------------

/// All-channel standby, bit 4. Set at power-on.
pub const PWM_CONTROL_STANDBY_MASK: u8 = 0x10;
/// Exit all-channel standby.
pub const PWM_CONTROL_STANDBY_EXIT: u8 = 0x00;
/// All-channel shutdown, bit 5. Set at power-on.
pub const PWM_CONTROL_SHUTDOWN_MASK: u8 = 0x20;
/// Exit all-channel shutdown.
pub const PWM_CONTROL_SHUTDOWN_EXIT: u8 = 0x00;

// ---------------------------------------------------------------------------
// DRC_CONTROL (0x60) fields
// ---------------------------------------------------------------------------

/// DRC engine enable field, bits 3:0 (one bit per engine).
pub const DRC_ENABLE_ALL_MASK: u32 = 0x0000_000F;
/// Enable all four DRC engines.
pub const DRC_ENABLE_ALL: u32 = 0x0000_000F;

// ---------------------------------------------------------------------------
// EQ band enable fields (CHANNELn_EQ_FILTER_CONTROL_1, bits 2:0)
// ---------------------------------------------------------------------------

/// Channel 1 EQ band 0 enable, bit 0 of 0x24.
pub const CHANNEL1_EQ_EN0_MASK: u8 = 0x01;
/// Channel 1 EQ band 1 enable, bit 1 of 0x24.
pub const CHANNEL1_EQ_EN1_MASK: u8 = 0x02;
/// Channel 1 EQ band 2 enable, bit 2 of 0x24.
pub const CHANNEL1_EQ_EN2_MASK: u8 = 0x04;
/// Channel 2 EQ band 0 enable, bit 0 of 0x26.
pub const CHANNEL2_EQ_EN0_MASK: u8 = 0x01;
/// Channel 2 EQ band 1 enable, bit 1 of 0x26.
pub const CHANNEL2_EQ_EN1_MASK: u8 = 0x02;
/// Channel 2 EQ band 2 enable, bit 2 of 0x26.
pub const CHANNEL2_EQ_EN2_MASK: u8 = 0x04;

// ---------------------------------------------------------------------------
// ERROR_STATUS (0x02) flags
// ---------------------------------------------------------------------------

/// Over-temperature or under-voltage fault.
pub const ERROR_STATUS_OTF: u8 = 0x80;
/// Over-current fault.
pub const ERROR_STATUS_OCF: u8 = 0x40;
/// Short-circuit fault.
pub const ERROR_STATUS_SF: u8 = 0x20;
/// PWM DC content detected.
pub const ERROR_STATUS_PWM_DE: u8 = 0x10;
/// LRCLK error.
pub const ERROR_STATUS_LRCLKE: u8 = 0x08;
/// SCLK error.
pub const ERROR_STATUS_SCLKE: u8 = 0x04;
/// DRC coefficient checksum error.
pub const ERROR_STATUS_DRC_CE: u8 = 0x02;
/// Biquad coefficient checksum error.
pub const ERROR_STATUS_PCE: u8 = 0x01;

// ---------------------------------------------------------------------------
// ERROR_STATUS_2 (0x0A) flags
// ---------------------------------------------------------------------------

/// Short load detected.
pub const ERROR_STATUS_SLEF: u8 = 0x02;
/// Open load detected.
pub const ERROR_STATUS_OLEF: u8 = 0x01;

// ---------------------------------------------------------------------------
// ERROR_DC_STATUS (0x89) flags
// ---------------------------------------------------------------------------

/// Channel 2 p-side DC error.
pub const ERROR_STATUS_PPEC2: u8 = 0x08;
/// Channel 2 n-side DC error.
pub const ERROR_STATUS_PNEC2: u8 = 0x04;
/// Channel 1 p-side DC error.
pub const ERROR_STATUS_PPEC1: u8 = 0x02;
/// Channel 1 n-side DC error.
pub const ERROR_STATUS_PNEC1: u8 = 0x01;

/// Expected contents of [`DEVICE_ID`].
pub const DEVICE_ID_VALUE: u8 = 0x25;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn i2c_addresses_are_adjacent() {
        assert_eq!(SY24145_I2C_ADDR_HIGH, SY24145_I2C_ADDR_LOW + 1);
    }

    #[test]
    fn volume_registers_are_consecutive() {
        assert_eq!(MASTER_VOLUME, 0x07);
        assert_eq!(CHANNEL1_VOLUME, 0x08);
        assert_eq!(CHANNEL2_VOLUME, 0x09);
    }

    #[test]
    fn soft_mute_fields_do_not_overlap() {
        assert_eq!(DSP_DVOL_MUTE_LEFT_MASK & DSP_DVOL_MUTE_RIGHT_MASK, 0);
        assert_eq!(DSP_DVOL_MUTE_LEFT_MASK & DSP_MVOL_MASK, 0);
        assert_eq!(DSP_DVOL_MUTE_RIGHT_MASK & DSP_MVOL_MASK, 0);
        assert_eq!(DSP_MVOL_MASK & HARD_SOFT_UNMUTE_MASK, 0);
    }

    #[test]
    fn clock_control_fields_do_not_overlap() {
        assert_eq!(FS_RATE_CNFG_MASK & BRT_SEL_MASK, 0);
        assert_eq!(FS_RATE_CNFG_MASK & FS_CNFG_MANUAL_EN_MASK, 0);
        assert_eq!(BRT_SEL_MASK & FS_CNFG_MANUAL_EN_MASK, 0);
    }

    #[test]
    fn rate_family_codes_fit_their_field() {
        for code in [
            FS_RATE_CNFG_441_48KHZ,
            FS_RATE_CNFG_32KHZ,
            FS_RATE_CNFG_96KHZ,
        ] {
            assert_eq!(code & !FS_RATE_CNFG_MASK, 0);
        }
        assert_eq!(BRT_SEL_441KHZ & !BRT_SEL_MASK, 0);
        assert_eq!(BRT_SEL_48KHZ & !BRT_SEL_MASK, 0);
    }

    #[test]
    fn i2s_control_fields_do_not_overlap() {
        let fields = [
            I2S_VBITS_MASK,
            I2S_FMT_MASK,
            I2S_SCLK_INV_MASK,
            I2S_LR_POLARITY_MASK,
        ];
        for i in 0..fields.len() {
            for j in (i + 1)..fields.len() {
                assert_eq!(fields[i] & fields[j], 0);
            }
        }
    }

    #[test]
    fn word_length_codes_are_distinct() {
        let v = [I2S_VBITS_16, I2S_VBITS_18, I2S_VBITS_20, I2S_VBITS_24];
        for i in 0..v.len() {
            for j in (i + 1)..v.len() {
                assert_ne!(v[i], v[j]);
            }
        }
    }

    #[test]
    fn pwm_control_standby_and_shutdown_are_distinct_bits() {
        assert_eq!(PWM_CONTROL_STANDBY_MASK & PWM_CONTROL_SHUTDOWN_MASK, 0);
    }

    #[test]
    fn error_status_flags_cover_eight_distinct_bits() {
        let flags = [
            ERROR_STATUS_OTF,
            ERROR_STATUS_OCF,
            ERROR_STATUS_SF,
            ERROR_STATUS_PWM_DE,
            ERROR_STATUS_LRCLKE,
            ERROR_STATUS_SCLKE,
            ERROR_STATUS_DRC_CE,
            ERROR_STATUS_PCE,
        ];
        let mut union = 0u8;
        for f in flags {
            assert_eq!(union & f, 0, "flag 0x{f:02X} overlaps");
            union |= f;
        }
        assert_eq!(union, 0xFF);
    }

    #[test]
    fn coefficient_banks_are_contiguous() {
        assert_eq!(BQ17, BQ0 + 17);
        assert_eq!(DRC_BQN0, BQ17 + 1);
        assert_eq!(DRC_BQN15, DRC_BQN0 + 15);
        assert_eq!(SPEQ0, DRC_BQN15 + 1);
        assert_eq!(SPEQ5, SPEQ0 + 5);
        assert_eq!(CHANNEL12_LOUDNESS, SPEQ5 + 1);
    }
}
