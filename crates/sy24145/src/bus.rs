//! I2C register transaction layer.
//!
//! A register read is one chained transaction: a write phase carrying the
//! address byte, immediately followed by a read phase of the payload
//! (repeated start). A register write is a single write phase of address
//! byte plus payload, most-significant byte first — the chip's wire
//! convention, independent of host byte order.
//!
//! Both operations block until the underlying transport completes, fails or
//! times out. Serialization and timeout policy belong to the `I2c`
//! implementation, not to this layer. Transport failures surface verbatim
//! as [`Error::Bus`] with no retry.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::error::Error;
use crate::regmap::RegisterWidth;

/// Largest transfer the chip accepts: address byte plus a 20-byte
/// coefficient block.
pub const MAX_TRANSFER_LEN: usize = 21;

/// Largest payload of a single transaction (excludes the address byte).
pub const MAX_PAYLOAD_LEN: usize = MAX_TRANSFER_LEN - 1;

/// Register transaction interface over a blocking I2C bus.
pub struct RegisterBus<I> {
    i2c: I,
    addr: u8,
}

impl<I: I2c> RegisterBus<I> {
    /// Wrap `i2c` targeting the device at 7-bit address `addr`.
    pub fn new(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// 7-bit device address this bus targets.
    pub fn device_address(&self) -> u8 {
        self.addr
    }

    /// Consume the bus and return the I2C peripheral.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Read `buf.len()` payload bytes from register `reg`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] for empty or oversized payloads (programming
    /// error, checked before touching the bus), [`Error::Bus`] on transport
    /// failure.
    pub fn read(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<I::Error>> {
        let len = buf.len();
        if len == 0 || len > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidWidth(len));
        }
        match self.i2c.write_read(self.addr, &[reg], buf) {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("sy24145: read reg 0x{:02x} ({} bytes)", reg, len);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sy24145: error reading reg 0x{:02x}", reg);
                Err(Error::Bus(e))
            }
        }
    }

    /// Write `payload` to register `reg`, MSB first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] for empty or oversized payloads,
    /// [`Error::Bus`] on transport failure.
    pub fn write(&mut self, reg: u8, payload: &[u8]) -> Result<(), Error<I::Error>> {
        let len = payload.len();
        if len == 0 || len > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidWidth(len));
        }
        let mut frame: Vec<u8, MAX_TRANSFER_LEN> = Vec::new();
        // Both pushes are in bounds: len <= MAX_PAYLOAD_LEN was checked above.
        let _ = frame.push(reg);
        let _ = frame.extend_from_slice(payload);
        match self.i2c.write(self.addr, &frame) {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("sy24145: wrote reg 0x{:02x} ({} bytes)", reg, len);
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sy24145: error writing reg 0x{:02x}", reg);
                Err(Error::Bus(e))
            }
        }
    }

    /// Read a scalar register of the given width, assembling the value from
    /// MSB-first wire bytes.
    pub fn read_value(
        &mut self,
        reg: u8,
        width: RegisterWidth,
    ) -> Result<u32, Error<I::Error>> {
        let mut bytes = [0u8; 4];
        let n = width.bytes();
        let (_, tail) = bytes.split_at_mut(4usize.saturating_sub(n));
        self.read(reg, tail)?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Write a scalar register of the given width, emitting the value as
    /// MSB-first wire bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] if `value` does not fit `width`.
    pub fn write_value(
        &mut self,
        reg: u8,
        width: RegisterWidth,
        value: u32,
    ) -> Result<(), Error<I::Error>> {
        if value > width.max_value() {
            return Err(Error::InvalidWidth(width.bytes()));
        }
        let bytes = value.to_be_bytes();
        let (_, tail) = bytes.split_at(4usize.saturating_sub(width.bytes()));
        self.write(reg, tail)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockI2c {
        writes: std::vec::Vec<(u8, std::vec::Vec<u8>)>,
        read_data: std::vec::Vec<u8>,
    }
    impl embedded_hal::i2c::ErrorType for MockI2c {
        type Error = core::convert::Infallible;
    }
    impl embedded_hal::i2c::I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter_mut() {
                match op {
                    embedded_hal::i2c::Operation::Write(data) => {
                        self.writes.push((address, data.to_vec()));
                    }
                    embedded_hal::i2c::Operation::Read(buf) => {
                        for (dst, src) in buf.iter_mut().zip(self.read_data.iter()) {
                            *dst = *src;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn write_frame_is_address_byte_then_payload() {
        let mut bus = RegisterBus::new(MockI2c::default(), 0x2A);
        bus.write(0x07, &[0x9F]).unwrap();
        let i2c = bus.release();
        assert_eq!(i2c.writes, vec![(0x2A, vec![0x07, 0x9F])]);
    }

    #[test]
    fn write_value_is_msb_first() {
        let mut bus = RegisterBus::new(MockI2c::default(), 0x2A);
        bus.write_value(0x5D, RegisterWidth::W24, 0x3CC30C).unwrap();
        let i2c = bus.release();
        assert_eq!(i2c.writes, vec![(0x2A, vec![0x5D, 0x3C, 0xC3, 0x0C])]);
    }

    #[test]
    fn read_value_assembles_msb_first() {
        let mut i2c = MockI2c::default();
        i2c.read_data = vec![0x01, 0x00, 0x00, 0x0F];
        let mut bus = RegisterBus::new(i2c, 0x2A);
        let v = bus.read_value(0x60, RegisterWidth::W32).unwrap();
        assert_eq!(v, 0x0100_000F);
    }

    #[test]
    fn oversized_payload_is_a_programming_error() {
        let mut bus = RegisterBus::new(MockI2c::default(), 0x2A);
        let buf = [0u8; MAX_PAYLOAD_LEN + 1];
        assert_eq!(
            bus.write(0x30, &buf),
            Err(Error::InvalidWidth(MAX_PAYLOAD_LEN + 1))
        );
        // Nothing reached the bus.
        assert!(bus.release().writes.is_empty());
    }

    #[test]
    fn empty_payload_is_a_programming_error() {
        let mut bus = RegisterBus::new(MockI2c::default(), 0x2A);
        assert_eq!(bus.write(0x30, &[]), Err(Error::InvalidWidth(0)));
        let mut buf = [0u8; 0];
        assert_eq!(bus.read(0x30, &mut buf), Err(Error::InvalidWidth(0)));
    }

    #[test]
    fn value_wider_than_register_is_rejected() {
        let mut bus = RegisterBus::new(MockI2c::default(), 0x2A);
        assert_eq!(
            bus.write_value(0x07, RegisterWidth::W8, 0x100),
            Err(Error::InvalidWidth(1))
        );
    }
}
