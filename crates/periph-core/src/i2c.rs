use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use tracing::info;

use periph_util::combine_bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum I2cError {
    #[error("unable to read register {register:#04x}: {kind}")]
    Read { register: u8, kind: ErrorKind },

    #[error("unable to write register {register:#04x}: {kind}")]
    Write { register: u8, kind: ErrorKind },
}

pub type Error = I2cError;
type Result<T, E = Error> = std::result::Result<T, E>;

/// A device at a fixed 7-bit address on an I2C bus
#[derive(Debug)]
pub struct I2cDevice<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cDevice<I2C> {
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn read_byte(&mut self, register: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_bytes(register, &mut buf)?;
        Ok(buf[0])
    }

    pub fn read_bytes(&mut self, register: u8, buf: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(self.address, &[register], buf)
            .map_err(|e| I2cError::Read {
                register,
                kind: e.kind(),
            })
    }

    /// Read `register` and the one after it one byte at a time, most significant first
    ///
    /// The register address wraps, so `0xFF` is followed by `0x00`
    pub fn read_u16_be(&mut self, register: u8) -> Result<u16> {
        let msb = self.read_byte(register)?;
        let lsb = self.read_byte(register.wrapping_add(1))?;
        Ok(combine_bytes(msb, lsb))
    }

    pub fn write_byte(&mut self, register: u8, value: u8) -> Result<()> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|e| I2cError::Write {
                register,
                kind: e.kind(),
            })
    }

    pub fn log_device(&self) {
        info!("  Address: {:#04x}", self.address);
    }
}
