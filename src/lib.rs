//! Peripheral drivers driven by an explicit setup / poll loop
//!
//! Components implement [`PollingComponent`] and are handed to an [`App`], which sets them
//! up in priority order and then updates each one when its interval comes around.
//! Drivers and codecs live in their own crates and are re-exported here.

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, CgAnemSensors};
pub use config::{ConfigError, PeriphConfig};

pub use periph_cg_anem as cg_anem;
pub use periph_core::{Component, ComponentState, PollingComponent, Sensor, SensorConfig};
pub use periph_nfc as nfc;
