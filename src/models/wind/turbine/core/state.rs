use uom::si::{
    f64::{Power, Time, Velocity},
    power::kilowatt,
    velocity::{kilometer_per_hour, meter_per_second},
};

use super::{ConfigError, Rotation, Stage, TurbineConfig, WindSpeed, classify, instantaneous_power};

/// Everything a display needs for one wind speed.
///
/// A state is computed from scratch for every input and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineState {
    pub wind_speed: Velocity,
    pub stage: Stage,
    pub rotation: Rotation,
    /// Instantaneous power, rounded to 0.01 kW.
    pub power: Power,
}

impl TurbineState {
    /// Classifies `speed` and computes its power.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the band table does not cover `speed`.
    pub fn compute(speed: WindSpeed, config: &TurbineConfig) -> Result<Self, ConfigError> {
        let classification = classify(speed, config)?;

        Ok(Self {
            wind_speed: *speed,
            stage: classification.stage,
            rotation: classification.rotation,
            power: instantaneous_power(speed, config),
        })
    }

    #[must_use]
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed.get::<kilometer_per_hour>()
    }

    #[must_use]
    pub fn wind_speed_ms(&self) -> f64 {
        self.wind_speed.get::<meter_per_second>()
    }

    #[must_use]
    pub fn rpm(&self) -> f64 {
        self.rotation.rpm()
    }

    #[must_use]
    pub fn rotation_period(&self) -> Option<Time> {
        self.rotation.period()
    }

    #[must_use]
    pub fn power_kw(&self) -> f64 {
        self.power.get::<kilowatt>()
    }
}
