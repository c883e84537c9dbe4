use std::{future::Future, sync::Arc, time::Duration};

use embedded_hal::i2c::I2c;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use periph_cg_anem::{CgAnem, CgAnemConfig};
use periph_core::{Component, ComponentState, PollingComponent, Sensor};
use periph_macros::impl_default_for;

struct Entry {
    component: Box<dyn PollingComponent>,
    next_update: Duration,
}

/// Owns the components and decides when each one runs
///
/// Time is passed in as the duration since some fixed start, so the caller owns the clock
pub struct App {
    entries: Vec<Entry>,
    is_setup: bool,
}

/// Sensors created for a CG-Anem registered from config
#[derive(Debug, Clone, Default)]
pub struct CgAnemSensors {
    pub temperature: Option<Arc<Sensor>>,
    pub wind_speed: Option<Arc<Sensor>>,
}

impl_default_for!(App);
impl App {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            is_setup: false,
        }
    }

    pub fn register(&mut self, component: impl PollingComponent + 'static) -> &mut Self {
        if self.is_setup {
            warn!(
                "registering {} after setup, it will be set up on the next setup call",
                component.name()
            );
        }

        self.entries.push(Entry {
            component: Box::new(component),
            next_update: Duration::ZERO,
        });

        self
    }

    /// Build a CG-Anem from its config, register it and hand back its sensors
    pub fn register_cg_anem<I2C>(&mut self, i2c: I2C, config: &CgAnemConfig) -> CgAnemSensors
    where
        I2C: I2c + 'static,
    {
        let anem = CgAnem::from_config(i2c, config);
        let sensors = CgAnemSensors {
            temperature: anem.temperature_sensor().cloned(),
            wind_speed: anem.speed_sensor().cloned(),
        };

        self.register(anem);
        sensors
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = &dyn PollingComponent> {
        self.entries.iter().map(|entry| entry.component.as_ref())
    }

    /// Set up every component, highest priority first, then dump their config
    ///
    /// Components that come out of setup without failing are updated on the first tick
    pub fn setup(&mut self, now: Duration) {
        self.entries.sort_by(|a, b| {
            b.component
                .setup_priority()
                .total_cmp(&a.component.setup_priority())
        });

        for entry in &mut self.entries {
            setup_entry(entry, now);
        }

        for entry in &self.entries {
            entry.component.dump_config();
        }

        self.is_setup = true;
    }

    /// Run setup again on failed components, returns how many recovered
    pub fn retry_failed(&mut self, now: Duration) -> usize {
        let mut recovered = 0;

        for entry in self.entries.iter_mut().filter(|entry| entry.component.is_failed()) {
            setup_entry(entry, now);

            if !entry.component.is_failed() {
                recovered += 1;
            }
        }

        recovered
    }

    /// Update every component that is due, returns how many were updated
    pub fn tick(&mut self, now: Duration) -> usize {
        let mut updated = 0;

        for entry in &mut self.entries {
            if entry.component.status().state() != ComponentState::Loop {
                continue;
            }

            if now < entry.next_update {
                continue;
            }

            entry.component.update();
            entry.next_update = now + entry.component.update_interval();
            updated += 1;
        }

        updated
    }

    /// When the next component is due, `None` if nothing will run
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .filter(|entry| entry.component.status().state() == ComponentState::Loop)
            .map(|entry| entry.next_update)
            .min()
    }

    /// Set up and poll on the tokio clock until `shutdown` resolves
    pub async fn run_until(&mut self, shutdown: impl Future<Output = ()>) {
        let start = Instant::now();
        self.setup(Duration::ZERO);

        tokio::pin!(shutdown);

        loop {
            let Some(deadline) = self.next_deadline() else {
                info!("no components left to poll");
                shutdown.await;
                return;
            };

            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    debug!("shutting down");
                    return;
                }

                _ = sleep_until(start + deadline) => {
                    self.tick(start.elapsed());
                }
            }
        }
    }
}

fn setup_entry(entry: &mut Entry, now: Duration) {
    let component = &mut entry.component;
    component.setup();

    if component.is_failed() {
        warn!("component {} failed to set up", component.name());
        return;
    }

    component.status_mut().set_state(ComponentState::Loop);
    entry.next_update = now;
}
