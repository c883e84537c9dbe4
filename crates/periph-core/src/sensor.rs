use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use periph_macros::new_type;
use periph_util::format::value_accuracy_to_string;

new_type!(SensorName, String);

pub type StateCallback = Arc<dyn Fn(f32) + Send + Sync>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
    WindSpeed,
    Voltage,
    Humidity,
    Pressure,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StateClass {
    Measurement,
    Total,
    TotalIncreasing,
}

/// Values a driver fills in for anything its sensor config leaves out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorDefaults {
    pub unit_of_measurement: &'static str,
    pub accuracy_decimals: i8,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
}

/// An endpoint drivers publish readings to
///
/// Shared between the driver and whoever listens to it, so state and callbacks sit behind locks
pub struct Sensor {
    name: SensorName,
    unit_of_measurement: Option<String>,
    accuracy_decimals: i8,
    device_class: Option<DeviceClass>,
    state_class: Option<StateClass>,
    state: Mutex<Option<f32>>,
    callbacks: Mutex<Vec<StateCallback>>,
}

impl Sensor {
    pub fn new(name: impl Into<SensorName>) -> Self {
        Self {
            name: name.into(),
            unit_of_measurement: None,
            accuracy_decimals: 0,
            device_class: None,
            state_class: None,
            state: Mutex::new(None),
            callbacks: Mutex::new(Vec::new()),
        }
    }

    pub fn with_unit_of_measurement(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measurement = Some(unit.into());
        self
    }

    pub fn with_accuracy_decimals(mut self, accuracy_decimals: i8) -> Self {
        self.accuracy_decimals = accuracy_decimals;
        self
    }

    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub fn with_state_class(mut self, state_class: StateClass) -> Self {
        self.state_class = Some(state_class);
        self
    }

    pub fn name(&self) -> &SensorName {
        &self.name
    }

    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.unit_of_measurement.as_deref()
    }

    pub fn accuracy_decimals(&self) -> i8 {
        self.accuracy_decimals
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        self.device_class
    }

    pub fn state_class(&self) -> Option<StateClass> {
        self.state_class
    }

    /// Last published value, `None` until the first publish
    pub fn state(&self) -> Option<f32> {
        *self.state.lock()
    }

    pub fn has_state(&self) -> bool {
        self.state.lock().is_some()
    }

    pub fn add_on_state_callback(&self, callback: impl Fn(f32) + Send + Sync + 'static) {
        self.callbacks.lock().push(Arc::new(callback));
    }

    pub fn publish_state(&self, value: f32) {
        *self.state.lock() = Some(value);

        debug!(
            "'{}': sending state {} {}",
            self.name,
            value_accuracy_to_string(value, self.accuracy_decimals),
            self.unit_of_measurement().unwrap_or_default()
        );

        // snapshot, a callback may publish to or subscribe on this sensor
        let callbacks = self.callbacks.lock().clone();
        for callback in callbacks {
            callback(value);
        }
    }

    /// Log the sensor's configuration the way `dump_config` implementations expect
    pub fn log(prefix: &str, label: &str, sensor: Option<&Self>) {
        let Some(sensor) = sensor else {
            return;
        };

        info!("{prefix}{label} '{}'", sensor.name);
        if let Some(device_class) = sensor.device_class {
            info!("{prefix}  Device Class: '{device_class}'");
        }
        if let Some(state_class) = sensor.state_class {
            info!("{prefix}  State Class: '{state_class}'");
        }
        info!(
            "{prefix}  Unit of Measurement: '{}'",
            sensor.unit_of_measurement().unwrap_or_default()
        );
        info!("{prefix}  Accuracy Decimals: {}", sensor.accuracy_decimals);
    }
}

impl fmt::Debug for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sensor")
            .field("name", &self.name)
            .field("unit_of_measurement", &self.unit_of_measurement)
            .field("accuracy_decimals", &self.accuracy_decimals)
            .field("device_class", &self.device_class)
            .field("state_class", &self.state_class)
            .field("state", &self.state())
            .field("callbacks", &self.callbacks.lock().len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub name: SensorName,

    #[serde(default)]
    pub unit_of_measurement: Option<String>,

    #[serde(default)]
    pub accuracy_decimals: Option<i8>,

    #[serde(default)]
    pub device_class: Option<DeviceClass>,

    #[serde(default)]
    pub state_class: Option<StateClass>,
}

impl SensorConfig {
    pub fn new(name: impl Into<SensorName>) -> Self {
        Self {
            name: name.into(),
            unit_of_measurement: None,
            accuracy_decimals: None,
            device_class: None,
            state_class: None,
        }
    }

    pub fn build(&self, defaults: &SensorDefaults) -> Arc<Sensor> {
        let unit = self
            .unit_of_measurement
            .clone()
            .unwrap_or_else(|| defaults.unit_of_measurement.to_string());

        let mut sensor = Sensor::new(self.name.clone())
            .with_unit_of_measurement(unit)
            .with_accuracy_decimals(self.accuracy_decimals.unwrap_or(defaults.accuracy_decimals));

        if let Some(device_class) = self.device_class.or(defaults.device_class) {
            sensor = sensor.with_device_class(device_class);
        }

        if let Some(state_class) = self.state_class.or(defaults.state_class) {
            sensor = sensor.with_state_class(state_class);
        }

        Arc::new(sensor)
    }
}
