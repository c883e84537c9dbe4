use std::time::Duration;

use serde::{Deserialize, Serialize};

use periph_core::sensor::{DeviceClass, SensorConfig, SensorDefaults, StateClass};

pub const DEFAULT_ADDRESS: u8 = 0x11;
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

pub const UNIT_CELSIUS: &str = "°C";
pub const UNIT_METER_PER_SECOND: &str = "m/s";

pub const TEMPERATURE_DEFAULTS: SensorDefaults = SensorDefaults {
    unit_of_measurement: UNIT_CELSIUS,
    accuracy_decimals: 1,
    device_class: Some(DeviceClass::Temperature),
    state_class: Some(StateClass::Measurement),
};

pub const WIND_SPEED_DEFAULTS: SensorDefaults = SensorDefaults {
    unit_of_measurement: UNIT_METER_PER_SECOND,
    accuracy_decimals: 1,
    device_class: Some(DeviceClass::WindSpeed),
    state_class: Some(StateClass::Measurement),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgAnemConfig {
    #[serde(default = "default_address")]
    pub address: u8,

    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,

    #[serde(default)]
    pub temperature: Option<SensorConfig>,

    #[serde(default)]
    pub wind_speed: Option<SensorConfig>,
}

impl Default for CgAnemConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            update_interval_ms: default_update_interval_ms(),
            temperature: None,
            wind_speed: None,
        }
    }
}

impl CgAnemConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

fn default_address() -> u8 {
    DEFAULT_ADDRESS
}

fn default_update_interval_ms() -> u64 {
    DEFAULT_UPDATE_INTERVAL.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CgAnemConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CgAnemConfig::default());
        assert_eq!(config.address, 0x11);
        assert_eq!(config.update_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "address": 18,
            "update_interval_ms": 5000,
            "temperature": { "name": "Duct Temperature" },
            "wind_speed": { "name": "Duct Air Speed", "accuracy_decimals": 2 }
        }"#;

        let config: CgAnemConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.address, 0x12);
        assert_eq!(config.update_interval(), Duration::from_secs(5));

        let temperature = config.temperature.unwrap().build(&TEMPERATURE_DEFAULTS);
        assert_eq!(temperature.unit_of_measurement(), Some("°C"));
        assert_eq!(temperature.accuracy_decimals(), 1);

        let wind_speed = config.wind_speed.unwrap().build(&WIND_SPEED_DEFAULTS);
        assert_eq!(wind_speed.unit_of_measurement(), Some("m/s"));
        assert_eq!(wind_speed.accuracy_decimals(), 2);
        assert_eq!(wind_speed.device_class(), Some(DeviceClass::WindSpeed));
    }
}
