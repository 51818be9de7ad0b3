//! Width-typed register map with access gating and power-on defaults.
//!
//! The SY24145 is effectively four register files (8/16/24/32-bit) unified by
//! one 8-bit address space. A flat map keyed by address is only sound because
//! the chip assigns every address to exactly one width class —
//! [`RegisterMap::new`] enforces that disjointness and refuses to construct a
//! map from colliding tables.
//!
//! Readability and writability are *range unions*: several closed address
//! intervals, not one contiguous block. Some addresses are readable-only
//! (status registers), so the writable union is a strict subset of the
//! readable union in places and a superset nowhere.

use crate::error::RegmapError;
use crate::registers::*;

/// Access width of a register, in bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterWidth {
    /// 1-byte register.
    W8,
    /// 2-byte register.
    W16,
    /// 3-byte register.
    W24,
    /// 4-byte register.
    W32,
}

impl RegisterWidth {
    /// Payload length of one transaction for this width.
    pub const fn bytes(self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W24 => 3,
            Self::W32 => 4,
        }
    }

    /// Largest value representable in this width.
    pub const fn max_value(self) -> u32 {
        match self {
            Self::W8 => 0xFF,
            Self::W16 => 0xFFFF,
            Self::W24 => 0x00FF_FFFF,
            Self::W32 => u32::MAX,
        }
    }
}

/// One closed interval of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    /// First address in the interval.
    pub first: u8,
    /// Last address in the interval (inclusive).
    pub last: u8,
}

impl AddressRange {
    const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    /// Whether `addr` falls inside this interval.
    pub const fn contains(&self, addr: u8) -> bool {
        self.first <= addr && addr <= self.last
    }
}

/// Readable address intervals.
///
/// PLL_STATUS/PLL_CONTROL (0x71/0x72) and the 0x73-0x77 block carry seeded
/// defaults but sit outside both unions; so does INTER_PRIVATE (0x85).
pub const READABLE_RANGES: &[AddressRange] = &[
    AddressRange::new(CLOCK_CONTROL, VOL_FTUNE),                 // 0x00-0x0B
    AddressRange::new(SOFT_RESET, PWM_DC_THRESHOLD),             // 0x0F-0x19
    AddressRange::new(SHORT_CONTROL, FAULT_OUTPUT_TIME),         // 0x1B-0x1C
    AddressRange::new(OPERATION_MODE, FAULT_SELECT),             // 0x1E-0x23
    AddressRange::new(CHANNEL1_EQ_FILTER_CONTROL_1, POSTSCALER), // 0x24-0x2D
    AddressRange::new(BQ0, CHANNEL12_LOUDNESS),                  // 0x30-0x58
    AddressRange::new(SPEQ_ATK_REL_TC_1, HARD_CLIPPER_THR),      // 0x5A-0x6C
    AddressRange::new(OSCILLATOR_TRIM_CONTROL, ANALOG_REF_TOP_CONTROL), // 0x78-0x7B
    AddressRange::new(DSP_3D_COEF, DRC_FTUNE),                   // 0x7C-0x7E
    AddressRange::new(OC_DETECT_WINDOW_WIDTH, FAULT_OVER_CURRENT_THRESHOLD), // 0x81-0x82
    AddressRange::new(ERROR_DC_STATUS, ERROR_DC_STATUS),         // 0x89
    AddressRange::new(DSP_CONTROL_3, FUNC_DEBUG),                // 0x8A-0x8B
    AddressRange::new(DRC1_ENVLP_TC_UP, PBQ_CH2_CHECKSUM),       // 0x8C-0x99
];

/// Writable address intervals.
///
/// Differences from [`READABLE_RANGES`]: DEVICE_ID, ERROR_STATUS_2,
/// ERROR_DC_STATUS, POWER_METER_CONTROL_RB2 and PWM_MUX..PWM_OUTFLIP_2 are
/// readable-only.
pub const WRITABLE_RANGES: &[AddressRange] = &[
    AddressRange::new(CLOCK_CONTROL, CLOCK_CONTROL),             // 0x00
    AddressRange::new(ERROR_STATUS, CHANNEL2_VOLUME),            // 0x02-0x09
    AddressRange::new(VOL_FTUNE, VOL_FTUNE),                     // 0x0B
    AddressRange::new(SOFT_RESET, PWM_DC_THRESHOLD),             // 0x0F-0x19
    AddressRange::new(SHORT_CONTROL, FAULT_OUTPUT_TIME),         // 0x1B-0x1C
    AddressRange::new(OPERATION_MODE, FAULT_SELECT),             // 0x1E-0x23
    AddressRange::new(CHANNEL1_EQ_FILTER_CONTROL_1, POSTSCALER), // 0x24-0x2D
    AddressRange::new(BQ0, CHANNEL12_LOUDNESS),                  // 0x30-0x58
    AddressRange::new(SPEQ_ATK_REL_TC_1, HARD_CLIPPER_THR),      // 0x5A-0x6C
    AddressRange::new(OSCILLATOR_TRIM_CONTROL, ANALOG_REF_TOP_CONTROL), // 0x78-0x7B
    AddressRange::new(DSP_3D_COEF, DRC_FTUNE),                   // 0x7C-0x7E
    AddressRange::new(OC_DETECT_WINDOW_WIDTH, FAULT_OVER_CURRENT_THRESHOLD), // 0x81-0x82
    AddressRange::new(DSP_CONTROL_3, FUNC_DEBUG),                // 0x8A-0x8B
    AddressRange::new(DRC1_ENVLP_TC_UP, POWER_METER_CONTROL_RB1), // 0x8C-0x92
    AddressRange::new(PBQ_CHECKSUM, PBQ_CH2_CHECKSUM),           // 0x97-0x99
];

/// Whether `addr` falls inside one of the readable intervals.
pub fn is_readable(addr: u8) -> bool {
    READABLE_RANGES.iter().any(|r| r.contains(addr))
}

/// Whether `addr` falls inside one of the writable intervals.
pub fn is_writable(addr: u8) -> bool {
    WRITABLE_RANGES.iter().any(|r| r.contains(addr))
}

// ---------------------------------------------------------------------------
// Power-on defaults, one table per width class
// ---------------------------------------------------------------------------

const DEFAULTS_8: &[(u8, u8)] = &[
    (CLOCK_CONTROL, 0x1A),
    (DEVICE_ID, 0x25),
    (ERROR_STATUS, 0x00),
    (SYSTEM_CONTROL_1, 0x5F),
    (SYSTEM_CONTROL_2, 0x9E),
    (SYSTEM_CONTROL_3, 0x7C),
    (SOFT_MUTE, 0x30),
    (MASTER_VOLUME, 0x00),
    (CHANNEL1_VOLUME, 0x9F),
    (CHANNEL2_VOLUME, 0x9F),
    (ERROR_STATUS_2, 0x00),
    (VOL_FTUNE, 0x00),
    (SOFT_RESET, 0x00),
    (MODULATION_LIMIT, 0x77),
    (PWM_A_CHANNEL_DELAY, 0x00),
    (PWM_B_CHANNEL_DELAY, 0x00),
    (PWM_C_CHANNEL_DELAY, 0x00),
    (PWM_D_CHANNEL_DELAY, 0x00),
    (I2S_CONTROL, 0x10),
    (DSP_CONTROL_1, 0x06),
    (MONITOR_PIN_CONFIG_1, 0x00),
    (MONITOR_PIN_CONFIG_2, 0x00),
    (PWM_DC_THRESHOLD, 0x05),
    (SHORT_CONTROL, 0xBD),
    (FAULT_OUTPUT_TIME, 0x02),
    (OPERATION_MODE, 0x05),
    (CHECKSUM_CONTROL, 0x00),
    (INPUT_MUX, 0x00),
    (DSP_CONTROL_2, 0x00),
    (PWM_CONTROL, 0x30),
    (FAULT_SELECT, 0x12),
    (CHANNEL1_EQ_FILTER_CONTROL_1, 0x00),
    (CHANNEL1_EQ_FILTER_CONTROL_2, 0x00),
    (CHANNEL2_EQ_FILTER_CONTROL_1, 0x00),
    (CHANNEL2_EQ_FILTER_CONTROL_2, 0x00),
    (SPEQ_FILTER_CONTROL_1, 0x00),
    (SPEQ_FILTER_CONTROL_2, 0x00),
    (SPEQ_FILTER_CONTROL_3, 0x00),
    (BIST_CONTROL, 0x00),
    (PLL_CONTROL, 0x00),
    (SPK_SEQUENCE_BYPASS, 0x00),
    (FUNC_TEST, 0x80),
    (TM_BY_REG, 0x00),
    (PROTECTION_SYSTEM_CONTROL, 0x1F),
    (I2C_CONTROL, 0x03),
    (OSCILLATOR_TRIM_CONTROL, 0x01),
    (DRC_FTUNE, 0x20),
    (ERROR_DC_STATUS, 0x00),
    (DSP_CONTROL_3, 0xB0),
    (FUNC_DEBUG, 0xC8),
];

const DEFAULTS_16: &[(u8, u16)] = &[
    (PRESCALER, 0x7FFF),
    (POSTSCALER, 0x7FFF),
    (AUTO_MUTE_THRESHOLD, 0x0000),
];

const DEFAULTS_24: &[(u8, u32)] = &[
    (DRC1_LMT_CFG1, 0x3CC30C),
    (DRC1_LMT_CFG2, 0x060F83),
    (DRC1_LMT_CFG3, 0x000122),
    (DRC2_LMT_CFG1, 0x3CC30C),
    (DRC2_LMT_CFG2, 0x060F83),
    (DRC2_LMT_CFG3, 0x000122),
    (DRC3_LMT_CFG1, 0x3CC30C),
    (DRC3_LMT_CFG2, 0x060F83),
    (DRC3_LMT_CFG3, 0x000122),
    (DRC4_LMT_CFG1, 0x3CC30C),
    (DRC4_LMT_CFG2, 0x060F83),
    (DRC4_LMT_CFG3, 0x000122),
    (DRC_ENVLP_TC_UP, 0x010000),
    (DRC_ENVLP_TC_DN, 0x7B0000),
    (HARD_CLIPPER_THR, 0x7FFFFF),
    (DSP_3D_COEF, 0x400000),
    (DSP_3D_MIX, 0x400000),
    (DRC1_ENVLP_TC_UP, 0x010000),
    (DRC1_ENVLP_TC_DN, 0x7B0000),
    (DRC2_ENVLP_TC_UP, 0x010000),
    (DRC2_ENVLP_TC_DN, 0x7B0000),
    (DRC3_ENVLP_TC_UP, 0x010000),
    (DRC3_ENVLP_TC_DN, 0x7B0000),
    (POWER_METER_CONTROL_RB1, 0x000000),
    (POWER_METER_CONTROL_RB2, 0x000000),
];

const DEFAULTS_32: &[(u8, u32)] = &[
    (DRC_CONTROL, 0x0100_0000),
    (PLL_STATUS, 0x0063_002D),
    (OSCILLATOR_TRIM_REGISTER1, 0x0000_1000),
    (OSCILLATOR_TRIM_REGISTER2, 0x0010_1017),
    (ANALOG_REF_TOP_CONTROL, 0x0000_0200),
    (INTER_PRIVATE, 0x0000_00F0),
    (OC_DETECT_WINDOW_WIDTH, 0x0000_0006),
    (FAULT_OVER_CURRENT_THRESHOLD, 0x0000_2006),
    (PWM_MUX, 0x0000_0000),
    (PWM_OUTFLIP_1, 0x4000_3210),
    (PWM_OUTFLIP_2, 0x1000_002F),
    (PBQ_CHECKSUM, 0x0000_0000),
    (MDRC_CHECKSUM, 0x4000_0000),
    (PBQ_CH2_CHECKSUM, 0x0000_0000),
];

// ---------------------------------------------------------------------------
// RegisterMap
// ---------------------------------------------------------------------------

/// One register entry: width class plus seeded power-on value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterEntry {
    /// Access width of the register.
    pub width: RegisterWidth,
    /// Power-on default value.
    pub default: u32,
}

/// Flat map from 8-bit address to [`RegisterEntry`], built once at device
/// attach and immutable afterwards.
#[derive(Debug)]
pub struct RegisterMap {
    slots: [Option<RegisterEntry>; 256],
}

impl RegisterMap {
    /// Build the SY24145 map from the four per-width default tables.
    ///
    /// # Errors
    ///
    /// [`RegmapError::OverlappingRegisterRanges`] if any address appears in
    /// more than one width class, [`RegmapError::DefaultExceedsWidth`] if a
    /// seeded default does not fit its register.
    pub fn new() -> Result<Self, RegmapError> {
        Self::from_tables(DEFAULTS_8, DEFAULTS_16, DEFAULTS_24, DEFAULTS_32)
    }

    fn from_tables(
        t8: &[(u8, u8)],
        t16: &[(u8, u16)],
        t24: &[(u8, u32)],
        t32: &[(u8, u32)],
    ) -> Result<Self, RegmapError> {
        let mut map = Self {
            slots: [None; 256],
        };
        for &(addr, default) in t8 {
            map.insert(addr, RegisterWidth::W8, u32::from(default))?;
        }
        for &(addr, default) in t16 {
            map.insert(addr, RegisterWidth::W16, u32::from(default))?;
        }
        for &(addr, default) in t24 {
            map.insert(addr, RegisterWidth::W24, default)?;
        }
        for &(addr, default) in t32 {
            map.insert(addr, RegisterWidth::W32, default)?;
        }
        Ok(map)
    }

    fn insert(
        &mut self,
        addr: u8,
        width: RegisterWidth,
        default: u32,
    ) -> Result<(), RegmapError> {
        if default > width.max_value() {
            return Err(RegmapError::DefaultExceedsWidth { addr });
        }
        // A u8 address always indexes the 256-slot table in bounds.
        #[allow(clippy::indexing_slicing)]
        let slot = &mut self.slots[usize::from(addr)];
        if slot.is_some() {
            return Err(RegmapError::OverlappingRegisterRanges { addr });
        }
        *slot = Some(RegisterEntry { width, default });
        Ok(())
    }

    /// Entry for `addr`, if the address belongs to any width class.
    pub fn entry(&self, addr: u8) -> Option<RegisterEntry> {
        // A u8 address always indexes the 256-slot table in bounds.
        #[allow(clippy::indexing_slicing)]
        self.slots[usize::from(addr)]
    }

    /// Width class of `addr`, or `None` for addresses with no scalar entry
    /// (gaps and coefficient block bases).
    pub fn width(&self, addr: u8) -> Option<RegisterWidth> {
        self.entry(addr).map(|e| e.width)
    }

    /// Seeded power-on value of `addr`.
    pub fn default_value(&self, addr: u8) -> Option<u32> {
        self.entry(addr).map(|e| e.default)
    }

    /// Iterate all defined registers as `(addr, entry)`, in address order.
    // Enumerating 256 slots keeps the index within u8.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (u8, RegisterEntry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(addr, slot)| slot.map(|e| (addr as u8, e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn map_construction_succeeds() {
        RegisterMap::new().expect("chip tables must be disjoint");
    }

    #[test]
    fn width_classes_resolve() {
        let map = RegisterMap::new().unwrap();
        assert_eq!(map.width(SOFT_MUTE), Some(RegisterWidth::W8));
        assert_eq!(map.width(PRESCALER), Some(RegisterWidth::W16));
        assert_eq!(map.width(DRC1_LMT_CFG1), Some(RegisterWidth::W24));
        assert_eq!(map.width(DRC_CONTROL), Some(RegisterWidth::W32));
    }

    #[test]
    fn unknown_addresses_have_no_entry() {
        let map = RegisterMap::new().unwrap();
        // Gap between VOL_FTUNE and SOFT_RESET.
        assert_eq!(map.entry(0x0C), None);
        // Coefficient block bases are not scalar registers.
        assert_eq!(map.entry(BQ0), None);
        assert_eq!(map.entry(SPEQ_ATK_REL_TC_2), None);
    }

    #[test]
    fn seeded_defaults_match_the_chip() {
        let map = RegisterMap::new().unwrap();
        assert_eq!(map.default_value(CLOCK_CONTROL), Some(0x1A));
        assert_eq!(map.default_value(DEVICE_ID), Some(0x25));
        assert_eq!(map.default_value(SOFT_MUTE), Some(0x30));
        assert_eq!(map.default_value(PWM_CONTROL), Some(0x30));
        assert_eq!(map.default_value(PRESCALER), Some(0x7FFF));
        assert_eq!(map.default_value(HARD_CLIPPER_THR), Some(0x7FFFFF));
        assert_eq!(map.default_value(DRC_CONTROL), Some(0x0100_0000));
        assert_eq!(map.default_value(PWM_OUTFLIP_1), Some(0x4000_3210));
    }

    #[test]
    fn every_default_fits_its_width() {
        let map = RegisterMap::new().unwrap();
        for (addr, entry) in map.iter() {
            assert!(
                entry.default <= entry.width.max_value(),
                "default for 0x{addr:02X} exceeds its width"
            );
        }
    }

    #[test]
    fn overlapping_width_classes_are_rejected() {
        // SOFT_MUTE already lives in the 8-bit class.
        let err = RegisterMap::from_tables(
            DEFAULTS_8,
            &[(SOFT_MUTE, 0x0000)],
            &[],
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegmapError::OverlappingRegisterRanges { addr: SOFT_MUTE }
        );
    }

    #[test]
    fn duplicate_address_within_one_class_is_rejected() {
        let err = RegisterMap::from_tables(
            &[(0x40, 0x00), (0x40, 0x01)],
            &[],
            &[],
            &[],
        )
        .unwrap_err();
        assert_eq!(err, RegmapError::OverlappingRegisterRanges { addr: 0x40 });
    }

    #[test]
    fn oversized_default_is_rejected() {
        let err =
            RegisterMap::from_tables(&[], &[], &[(0x40, 0x0100_0000)], &[])
                .unwrap_err();
        assert_eq!(err, RegmapError::DefaultExceedsWidth { addr: 0x40 });
    }

    #[test]
    fn writable_union_is_subset_of_readable_union() {
        for addr in 0..=255u8 {
            if is_writable(addr) {
                assert!(is_readable(addr), "0x{addr:02X} writable but not readable");
            }
        }
    }

    #[test]
    fn status_registers_are_readable_only() {
        for addr in [DEVICE_ID, ERROR_STATUS_2, ERROR_DC_STATUS, POWER_METER_CONTROL_RB2, PWM_MUX, PWM_OUTFLIP_1, PWM_OUTFLIP_2] {
            assert!(is_readable(addr), "0x{addr:02X} must be readable");
            assert!(!is_writable(addr), "0x{addr:02X} must not be writable");
        }
    }

    #[test]
    fn gated_off_registers_are_neither_readable_nor_writable() {
        for addr in [PLL_STATUS, PLL_CONTROL, FUNC_TEST, I2C_CONTROL, INTER_PRIVATE] {
            assert!(!is_readable(addr), "0x{addr:02X} must not be readable");
            assert!(!is_writable(addr), "0x{addr:02X} must not be writable");
        }
    }

    #[test]
    fn width_max_values() {
        assert_eq!(RegisterWidth::W8.max_value(), 0xFF);
        assert_eq!(RegisterWidth::W16.max_value(), 0xFFFF);
        assert_eq!(RegisterWidth::W24.max_value(), 0x00FF_FFFF);
        assert_eq!(RegisterWidth::W32.max_value(), u32::MAX);
    }
}
