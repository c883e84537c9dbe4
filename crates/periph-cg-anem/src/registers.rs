//! CG-Anem register map, two byte values are big-endian

pub const VERSION: u8 = 0x04;
pub const WHO_I_AM: u8 = 0x05;
pub const STATUS: u8 = 0x06;

pub const WIND: u8 = 0x07;
pub const COLD_RAW: u8 = 0x09;
pub const HOT_RAW: u8 = 0x0B;

pub const VIN: u8 = 0x0D;
pub const HEAT_WT: u8 = 0x0E;

pub const COLD: u8 = 0x10;
pub const HOT: u8 = 0x12;
pub const DT: u8 = 0x14;

pub const ADDRESS: u8 = 0x20;

pub const WIND_MAX: u8 = 0x21;
pub const WIND_MIN: u8 = 0x23;
pub const RESET_WIND: u8 = 0x25;

/// Value written to [`RESET_WIND`] to clear the min / max wind speed
pub const RESET_WIND_COMMAND: u8 = 0x01;

/// Registers hold tenths of the reported unit
pub const SCALE: f32 = 10.0;
