//! Driver for the CG-Anem hot-wire anemometer
//!
//! The sensor reports wind speed and the temperature of its cold junction over I2C.
//! [`CgAnem`] reads both on every update and publishes them to the configured sensors.
//! A set unsteady-process bit in the status register means the readings are not
//! settled yet, in which case nothing is published until the next update.

pub mod config;
pub mod registers;
pub mod status;

use std::{sync::Arc, time::Duration};

use embedded_hal::i2c::I2c;
use tracing::{debug, error, info, warn};

use periph_core::{
    Component, ComponentStatus, I2cDevice, I2cError, PollingComponent, Sensor, setup_priority,
};

pub use config::CgAnemConfig;
pub use status::{StatusFlags, StatusWarning};

/// Firmware version (×10) that added the min / max wind speed reset
const WIND_RESET_MIN_VERSION: u8 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCode {
    #[default]
    None,
    CommunicationFailed,
}

/// What was being read when a transfer failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reading {
    #[strum(to_string = "chip id")]
    ChipId,
    #[strum(to_string = "version")]
    Version,
    #[strum(to_string = "cold temp")]
    ColdTemperature,
    #[strum(to_string = "hot temp")]
    HotTemperature,
    #[strum(to_string = "temperature difference")]
    TemperatureDifference,
    #[strum(to_string = "wind speed")]
    WindSpeed,
    #[strum(to_string = "wind range")]
    WindRange,
    #[strum(to_string = "supply voltage")]
    SupplyVoltage,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CgAnemError {
    #[error("error reading {reading}: {source}")]
    Read {
        reading: Reading,
        #[source]
        source: I2cError,
    },

    #[error("unable to reset wind range: {0}")]
    Write(#[source] I2cError),

    #[error("firmware version {0:.1} does not support this, 1.0 or newer is needed")]
    Unsupported(f32),

    #[error("sensor has not been set up")]
    NotSetUp,
}

pub type Error = CgAnemError;
type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Cold junction temperature in °C
    pub temperature: f32,
    /// Wind speed in m/s
    pub wind_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindRange {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug)]
pub struct CgAnem<I2C> {
    device: I2cDevice<I2C>,
    status: ComponentStatus,
    update_interval: Duration,
    temperature_sensor: Option<Arc<Sensor>>,
    speed_sensor: Option<Arc<Sensor>>,
    error_code: ErrorCode,
    chip_id: Option<u8>,
    version_raw: Option<u8>,
}

impl<I2C: I2c> CgAnem<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            device: I2cDevice::new(i2c, address),
            status: ComponentStatus::new(),
            update_interval: config::DEFAULT_UPDATE_INTERVAL,
            temperature_sensor: None,
            speed_sensor: None,
            error_code: ErrorCode::None,
            chip_id: None,
            version_raw: None,
        }
    }

    /// Build the driver and the sensors named in `config`
    pub fn from_config(i2c: I2C, config: &CgAnemConfig) -> Self {
        let mut me = Self::new(i2c, config.address).with_update_interval(config.update_interval());

        if let Some(temperature) = &config.temperature {
            me.set_temperature_sensor(temperature.build(&config::TEMPERATURE_DEFAULTS));
        }

        if let Some(wind_speed) = &config.wind_speed {
            me.set_speed_sensor(wind_speed.build(&config::WIND_SPEED_DEFAULTS));
        }

        me
    }

    pub fn with_update_interval(mut self, update_interval: Duration) -> Self {
        self.update_interval = update_interval;
        self
    }

    pub fn set_temperature_sensor(&mut self, sensor: Arc<Sensor>) {
        self.temperature_sensor = Some(sensor);
    }

    pub fn set_speed_sensor(&mut self, sensor: Arc<Sensor>) {
        self.speed_sensor = Some(sensor);
    }

    pub fn temperature_sensor(&self) -> Option<&Arc<Sensor>> {
        self.temperature_sensor.as_ref()
    }

    pub fn speed_sensor(&self) -> Option<&Arc<Sensor>> {
        self.speed_sensor.as_ref()
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub fn chip_id(&self) -> Option<u8> {
        self.chip_id
    }

    pub fn firmware_version(&self) -> Option<f32> {
        self.version_raw.map(scale_u8)
    }

    /// Read the status register and log what it reports
    ///
    /// Sets the warning flag when the register can't be read or the process is unsteady,
    /// clears it otherwise
    pub fn read_status(&mut self) -> Option<StatusFlags> {
        let status = match self.device.read_byte(registers::STATUS) {
            Ok(raw) => StatusFlags::from_register(raw),
            Err(error) => {
                warn!("Error reading status register: {error}");
                self.status_set_warning();
                return None;
            }
        };

        for warning in status.warnings() {
            warn!("{warning}");
        }

        if status.is_unsteady() {
            warn!("Unsteady process detected");
            self.status_set_warning();
        } else {
            self.status_clear_warning();
        }

        Some(status)
    }

    /// Read the cold junction temperature and the wind speed, both or neither
    pub fn read_measurement(&mut self) -> Result<Measurement> {
        let temperature = self.read_scaled(registers::COLD, Reading::ColdTemperature)?;
        let wind_speed = self.read_scaled(registers::WIND, Reading::WindSpeed)?;

        Ok(Measurement {
            temperature,
            wind_speed,
        })
    }

    pub fn read_hot_temperature(&mut self) -> Result<f32> {
        self.read_scaled(registers::HOT, Reading::HotTemperature)
    }

    /// Hot junction minus cold junction temperature
    pub fn read_temperature_difference(&mut self) -> Result<f32> {
        self.read_scaled(registers::DT, Reading::TemperatureDifference)
    }

    /// Min and max wind speed since the last [`Self::reset_wind_range`]
    pub fn read_wind_range(&mut self) -> Result<WindRange> {
        let min = self.read_scaled(registers::WIND_MIN, Reading::WindRange)?;
        let max = self.read_scaled(registers::WIND_MAX, Reading::WindRange)?;
        Ok(WindRange { min, max })
    }

    pub fn read_supply_voltage(&mut self) -> Result<f32> {
        self.device
            .read_byte(registers::VIN)
            .map(scale_u8)
            .map_err(|source| CgAnemError::Read {
                reading: Reading::SupplyVoltage,
                source,
            })
    }

    /// Clear the min / max wind speed, needs firmware 1.0 or newer
    pub fn reset_wind_range(&mut self) -> Result<()> {
        let version = self.version_raw.ok_or(CgAnemError::NotSetUp)?;
        if version < WIND_RESET_MIN_VERSION {
            return Err(CgAnemError::Unsupported(scale_u8(version)));
        }

        self.device
            .write_byte(registers::RESET_WIND, registers::RESET_WIND_COMMAND)
            .map_err(CgAnemError::Write)
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.device.release()
    }

    fn read_identity(&mut self) -> Result<(u8, u8)> {
        let chip_id = self
            .device
            .read_byte(registers::WHO_I_AM)
            .map_err(|source| CgAnemError::Read {
                reading: Reading::ChipId,
                source,
            })?;

        info!("Id: {chip_id}");
        self.chip_id = Some(chip_id);

        let version = self
            .device
            .read_byte(registers::VERSION)
            .map_err(|source| CgAnemError::Read {
                reading: Reading::Version,
                source,
            })?;

        info!("Version: {:.1}", scale_u8(version));
        self.version_raw = Some(version);

        Ok((chip_id, version))
    }

    fn read_scaled(&mut self, register: u8, reading: Reading) -> Result<f32> {
        self.device
            .read_u16_be(register)
            .map(scale_u16)
            .map_err(|source| CgAnemError::Read { reading, source })
    }
}

impl<I2C: I2c> Component for CgAnem<I2C> {
    fn name(&self) -> &str {
        "cg_anem"
    }

    fn setup(&mut self) {
        info!("Setting up CG Anem...");

        // a sensor that was powered off comes back through setup, so clear the old failure
        if self.status.reset_failed() {
            debug!("clearing failed state before setup");
        }

        self.error_code = ErrorCode::None;
        self.status.set_state(periph_core::ComponentState::Setup);

        if let Err(error) = self.read_identity() {
            warn!("{error}");
            self.error_code = ErrorCode::CommunicationFailed;
            self.mark_failed();
            return;
        }

        self.read_status();
    }

    fn dump_config(&self) {
        info!("CG Anem:");
        self.device.log_device();

        if self.error_code == ErrorCode::CommunicationFailed {
            error!("Communication with CG Anem failed!");
        }

        info!("  Update Interval: {:.1}s", self.update_interval.as_secs_f32());

        Sensor::log("  ", "Temperature", self.temperature_sensor.as_deref());
        Sensor::log("  ", "Wind Speed", self.speed_sensor.as_deref());
    }

    fn setup_priority(&self) -> f32 {
        setup_priority::DATA
    }

    fn status(&self) -> &ComponentStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ComponentStatus {
        &mut self.status
    }
}

impl<I2C: I2c> PollingComponent for CgAnem<I2C> {
    fn update(&mut self) {
        self.read_status();

        if self.status_has_warning() {
            return;
        }

        let measurement = match self.read_measurement() {
            Ok(measurement) => measurement,
            Err(error) => {
                warn!("{error}");
                self.status_set_warning();
                return;
            }
        };

        debug!(
            "Got temperature={:.1}°C wind speed={:.1}m/s",
            measurement.temperature, measurement.wind_speed
        );

        if let Some(sensor) = &self.temperature_sensor {
            sensor.publish_state(measurement.temperature);
        }

        if let Some(sensor) = &self.speed_sensor {
            sensor.publish_state(measurement.wind_speed);
        }

        self.status_clear_warning();
    }

    fn update_interval(&self) -> Duration {
        self.update_interval
    }
}

fn scale_u8(raw: u8) -> f32 {
    f32::from(raw) / registers::SCALE
}

fn scale_u16(raw: u16) -> f32 {
    f32::from(raw) / registers::SCALE
}
