use std::time::Duration;

use tracing::{error, info, warn};

/// Setup order, components with a higher priority are set up first
pub mod setup_priority {
    /// Buses the other components talk over (i2c, spi, uart)
    pub const BUS: f32 = 1000.0;
    pub const IO: f32 = 900.0;
    pub const HARDWARE: f32 = 800.0;
    /// Sensors and other components that produce data
    pub const DATA: f32 = 600.0;
    pub const PROCESSOR: f32 = 400.0;
    pub const AFTER_CONNECTION: f32 = 100.0;
    pub const LATE: f32 = -100.0;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ComponentState {
    #[default]
    Construction,
    Setup,
    Loop,
    Failed,
}

/// Lifecycle state plus the transient warning flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentStatus {
    state: ComponentState,
    warning: bool,
}

impl ComponentStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    pub fn set_state(&mut self, state: ComponentState) {
        self.state = state;
    }

    pub fn mark_failed(&mut self) {
        self.state = ComponentState::Failed;
    }

    pub fn is_failed(&self) -> bool {
        self.state == ComponentState::Failed
    }

    /// Move a failed component back to construction so setup can run again
    ///
    /// Returns true if the component was failed
    pub fn reset_failed(&mut self) -> bool {
        if !self.is_failed() {
            return false;
        }

        self.state = ComponentState::Construction;
        true
    }

    /// Returns true if the flag was not already set
    pub fn set_warning(&mut self) -> bool {
        !std::mem::replace(&mut self.warning, true)
    }

    /// Returns true if the flag was set
    pub fn clear_warning(&mut self) -> bool {
        std::mem::replace(&mut self.warning, false)
    }

    pub fn has_warning(&self) -> bool {
        self.warning
    }
}

pub trait Component {
    fn name(&self) -> &str;

    /// Called once before the first update, and again to recover a failed component
    fn setup(&mut self);

    fn dump_config(&self);

    fn setup_priority(&self) -> f32 {
        setup_priority::DATA
    }

    fn status(&self) -> &ComponentStatus;

    fn status_mut(&mut self) -> &mut ComponentStatus;

    fn is_failed(&self) -> bool {
        self.status().is_failed()
    }

    fn mark_failed(&mut self) {
        error!("component {} was marked as failed", self.name());
        self.status_mut().mark_failed();
    }

    fn status_set_warning(&mut self) {
        if self.status_mut().set_warning() {
            warn!("component {} set warning flag", self.name());
        }
    }

    fn status_clear_warning(&mut self) {
        if self.status_mut().clear_warning() {
            info!("component {} cleared warning flag", self.name());
        }
    }

    fn status_has_warning(&self) -> bool {
        self.status().has_warning()
    }
}

/// A component that is updated on a fixed interval
pub trait PollingComponent: Component {
    fn update(&mut self);

    fn update_interval(&self) -> Duration;
}
