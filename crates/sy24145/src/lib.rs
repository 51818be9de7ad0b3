//! Driver for the Silergy SY24145 class-D audio amplifier / DSP.
//!
//! The chip is controlled over I2C and exposes four register files
//! (8/16/24/32-bit) sharing one 8-bit address space, plus 12/18/20-byte DSP
//! coefficient blocks. This crate provides:
//!
//! - a width-typed register map with read/write gating and power-on
//!   defaults ([`regmap`]),
//! - a transaction layer marshaling multi-byte values MSB-first over any
//!   blocking [`embedded_hal::i2c::I2c`] implementation ([`bus`]),
//! - a device façade with the attach-time bring-up sequence, volume/mute
//!   control and stream parameter negotiation ([`device`]),
//! - the DSP coefficient block surface with its textual byte-list codec
//!   ([`coeff`]) and the per-band equalizer enable table ([`eq`]).
//!
//! The audio samples themselves travel over the I2S interface directly to
//! the chip's DSP — that path does not go through this driver.
//!
//! # Example
//!
//! ```no_run
//! use sy24145::{AmpConfig, Sy24145, SY24145_I2C_ADDR_LOW};
//!
//! fn bring_up<I>(i2c: I) -> Result<(), sy24145::Error<I::Error>>
//! where
//!     I: embedded_hal::i2c::I2c,
//! {
//!     let config = AmpConfig::default();
//!     let mut amp = Sy24145::new(i2c, SY24145_I2C_ADDR_LOW, config)
//!         .expect("register tables are disjoint");
//!     amp.apply_startup_config()?;
//!     amp.configure_stream(48_000, 24)?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `defmt`: log bus transactions and derive `defmt::Format` on public
//!   types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in driver code
#![deny(clippy::expect_used)] // no .expect() in driver code (doc examples aside)
#![deny(clippy::panic)] // no panic!() in driver code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]
// Pedantic lints suppressed for this hardware driver crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::module_name_repetitions)]

pub mod bus;
pub mod coeff;
pub mod config;
pub mod device;
pub mod eq;
pub mod error;
pub mod regmap;
pub mod registers;
pub mod status;
pub mod stream;

// Re-export the device façade and its collaborators
pub use bus::{RegisterBus, MAX_PAYLOAD_LEN, MAX_TRANSFER_LEN};
pub use coeff::{format_byte_list, parse_byte_list, CoeffBlock, CoeffBytes};
pub use config::{AmpConfig, AudioChannel};
pub use device::{BringUpReport, BringUpStep, Sy24145, BRINGUP_STEP_COUNT};
pub use error::{Error, ParseError, RegmapError};
pub use regmap::{is_readable, is_writable, RegisterMap, RegisterWidth};
pub use registers::{DEVICE_ID_VALUE, SY24145_I2C_ADDR_HIGH, SY24145_I2C_ADDR_LOW};
pub use status::{DcStatus, ErrorStatus, FaultStatus, LoadStatus};
pub use stream::{clock_config, word_length_code, ClockConfig, FrameFormat, Polarity};
