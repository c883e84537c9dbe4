//! Building blocks shared by the peripheral drivers
//!
//! - [`component`]: setup / update lifecycle and status flags
//! - [`sensor`]: shared sensor endpoints that values are published to
//! - [`i2c`]: register level access on top of `embedded_hal::i2c::I2c`

pub mod component;
pub mod i2c;
pub mod sensor;

pub use component::{Component, ComponentState, ComponentStatus, PollingComponent, setup_priority};
pub use i2c::{I2cDevice, I2cError};
pub use sensor::{DeviceClass, Sensor, SensorConfig, SensorDefaults, SensorName, StateClass};
