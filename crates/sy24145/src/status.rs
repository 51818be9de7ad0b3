//! Typed decode of the chip's fault and error status registers.

use crate::registers::*;

/// Decoded ERROR_STATUS (0x02) flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorStatus {
    /// Over-temperature or under-voltage detected.
    pub over_temperature: bool,
    /// Over-current detected.
    pub over_current: bool,
    /// Short circuit detected.
    pub short_circuit: bool,
    /// PWM DC content detected.
    pub pwm_dc: bool,
    /// LRCLK error.
    pub lrclk_error: bool,
    /// SCLK error.
    pub sclk_error: bool,
    /// DRC coefficient checksum error.
    pub drc_checksum_error: bool,
    /// Biquad coefficient checksum error.
    pub bq_checksum_error: bool,
}

impl ErrorStatus {
    /// Decode a raw ERROR_STATUS byte.
    pub const fn from_bits(raw: u8) -> Self {
        Self {
            over_temperature: raw & ERROR_STATUS_OTF != 0,
            over_current: raw & ERROR_STATUS_OCF != 0,
            short_circuit: raw & ERROR_STATUS_SF != 0,
            pwm_dc: raw & ERROR_STATUS_PWM_DE != 0,
            lrclk_error: raw & ERROR_STATUS_LRCLKE != 0,
            sclk_error: raw & ERROR_STATUS_SCLKE != 0,
            drc_checksum_error: raw & ERROR_STATUS_DRC_CE != 0,
            bq_checksum_error: raw & ERROR_STATUS_PCE != 0,
        }
    }
}

/// Decoded ERROR_STATUS_2 (0x0A) flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadStatus {
    /// Short load detected.
    pub short_load: bool,
    /// Open load detected.
    pub open_load: bool,
}

impl LoadStatus {
    /// Decode a raw ERROR_STATUS_2 byte.
    pub const fn from_bits(raw: u8) -> Self {
        Self {
            short_load: raw & ERROR_STATUS_SLEF != 0,
            open_load: raw & ERROR_STATUS_OLEF != 0,
        }
    }
}

/// Decoded ERROR_DC_STATUS (0x89) flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DcStatus {
    /// Channel 1 p-side DC error.
    pub ch1_p_side: bool,
    /// Channel 1 n-side DC error.
    pub ch1_n_side: bool,
    /// Channel 2 p-side DC error.
    pub ch2_p_side: bool,
    /// Channel 2 n-side DC error.
    pub ch2_n_side: bool,
}

impl DcStatus {
    /// Decode a raw ERROR_DC_STATUS byte.
    pub const fn from_bits(raw: u8) -> Self {
        Self {
            ch1_p_side: raw & ERROR_STATUS_PPEC1 != 0,
            ch1_n_side: raw & ERROR_STATUS_PNEC1 != 0,
            ch2_p_side: raw & ERROR_STATUS_PPEC2 != 0,
            ch2_n_side: raw & ERROR_STATUS_PNEC2 != 0,
        }
    }
}

/// All three fault registers decoded together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    /// Primary error status.
    pub errors: ErrorStatus,
    /// Load fault status.
    pub load: LoadStatus,
    /// Output DC fault status.
    pub dc: DcStatus,
}

impl FaultStatus {
    /// Whether any fault flag is raised.
    pub fn any(&self) -> bool {
        self.errors != ErrorStatus::default()
            || self.load != LoadStatus::default()
            || self.dc != DcStatus::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_registers_decode_to_no_faults() {
        let status = FaultStatus {
            errors: ErrorStatus::from_bits(0),
            load: LoadStatus::from_bits(0),
            dc: DcStatus::from_bits(0),
        };
        assert!(!status.any());
    }

    #[test]
    fn each_error_bit_raises_exactly_one_flag() {
        assert!(ErrorStatus::from_bits(ERROR_STATUS_OTF).over_temperature);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_OCF).over_current);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_SF).short_circuit);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_PWM_DE).pwm_dc);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_LRCLKE).lrclk_error);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_SCLKE).sclk_error);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_DRC_CE).drc_checksum_error);
        assert!(ErrorStatus::from_bits(ERROR_STATUS_PCE).bq_checksum_error);
        assert_eq!(
            ErrorStatus::from_bits(ERROR_STATUS_OTF),
            ErrorStatus {
                over_temperature: true,
                ..ErrorStatus::default()
            }
        );
    }

    #[test]
    fn load_and_dc_bits_decode() {
        let load = LoadStatus::from_bits(ERROR_STATUS_SLEF | ERROR_STATUS_OLEF);
        assert!(load.short_load);
        assert!(load.open_load);
        let dc = DcStatus::from_bits(ERROR_STATUS_PPEC1 | ERROR_STATUS_PNEC2);
        assert!(dc.ch1_p_side);
        assert!(!dc.ch1_n_side);
        assert!(!dc.ch2_p_side);
        assert!(dc.ch2_n_side);
    }

    #[test]
    fn any_is_true_for_a_single_fault() {
        let status = FaultStatus {
            errors: ErrorStatus::from_bits(ERROR_STATUS_SCLKE),
            ..FaultStatus::default()
        };
        assert!(status.any());
    }
}
