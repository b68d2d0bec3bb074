//! Wind turbine model.
//!
//! [`TurbineModel`] implements [`twine_core::Model`], mapping a wind speed to
//! a [`TurbineState`]: the operating stage, the rotor's rotation, and the
//! instantaneous power. Power curves and produced energy are available as
//! separate requests on the same model.
//!
//! The computational core lives in the internal `core` module; the functions
//! it exposes ([`classify`], [`instantaneous_power`], [`power_curve`],
//! [`energy`]) are re-exported here for callers that already hold validated
//! inputs.
//!
//! # Example
//!
//! ```
//! use turbine_models::models::wind::turbine::{Stage, TurbineConfig, TurbineModel};
//! use twine_core::Model;
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Length, Ratio, Velocity},
//!     length::meter,
//!     power::kilowatt,
//!     ratio::ratio,
//!     time::second,
//!     velocity::{kilometer_per_hour, meter_per_second},
//! };
//!
//! let kmh = Velocity::new::<kilometer_per_hour>;
//! let rpm = AngularVelocity::new::<revolution_per_minute>;
//!
//! let config = TurbineConfig::builder(
//!     Length::new::<meter>(30.0),
//!     Ratio::new::<ratio>(0.45),
//!     kmh(15.0),
//!     kmh(90.0),
//! )
//! .band(kmh(30.0), "slow", rpm(10.0))
//! .band(kmh(45.0), "medium", rpm(20.0))
//! .band(kmh(90.0), "fast", rpm(30.0))
//! .build()
//! .unwrap();
//!
//! let model = TurbineModel::new(config);
//! let state = model.call(&kmh(45.0)).unwrap();
//!
//! assert_eq!(state.stage, Stage::Operating("medium".into()));
//! assert!((state.rotation_period().unwrap().get::<second>() - 3.0).abs() < 1e-9);
//! assert!((state.power.get::<kilowatt>() - 1522.09).abs() < 1e-9);
//!
//! let curve = model.curve(Velocity::new::<meter_per_second>(30.0), 301).unwrap();
//! let marker = curve.nearest(state.wind_speed);
//! assert!((marker.power.get::<kilowatt>() - 1522.09).abs() < 0.005);
//! ```

mod core;

pub use self::core::{
    BandDocument, Classification, ConfigError, CurveSample, DEFAULT_MIN_ROTATION_PERIOD,
    InvalidInputError, PowerCurve, RatedDocument, RatedOutput, Rotation, STANDARD_AIR_DENSITY,
    Samples, Stage, StageBand, TurbineConfig, TurbineConfigBuilder, TurbineConfigDocument,
    TurbineError, TurbineState, WindSpeed, classify, energy, instantaneous_power, power_curve,
};

use twine_core::Model;
use uom::si::f64::{Energy, Time, Velocity};

use crate::support::constraint::FiniteNonNegative;

/// A single wind turbine with a fixed configuration.
///
/// The model holds no mutable state, so it can be shared freely across
/// threads and called concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineModel {
    config: TurbineConfig,
}

impl TurbineModel {
    #[must_use]
    pub fn new(config: TurbineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &TurbineConfig {
        &self.config
    }

    /// Computes the stage, rotation, and power at `speed`.
    ///
    /// # Errors
    ///
    /// Returns [`TurbineError::InvalidInput`] if `speed` is negative or not
    /// finite.
    pub fn state(&self, speed: Velocity) -> Result<TurbineState, TurbineError> {
        let speed = WindSpeed::from_quantity(speed).map_err(InvalidInputError::WindSpeed)?;
        Ok(TurbineState::compute(speed, &self.config)?)
    }

    /// Samples the power curve over `[0, domain_max]`.
    ///
    /// # Errors
    ///
    /// See [`power_curve`].
    pub fn curve(
        &self,
        domain_max: Velocity,
        sample_count: usize,
    ) -> Result<PowerCurve<'_>, InvalidInputError> {
        power_curve(&self.config, domain_max, sample_count)
    }

    /// Returns the energy produced at a steady `speed` over `duration`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] if either input is negative or not
    /// finite.
    pub fn energy(&self, speed: Velocity, duration: Time) -> Result<Energy, InvalidInputError> {
        let speed = WindSpeed::from_quantity(speed).map_err(InvalidInputError::WindSpeed)?;
        let duration = FiniteNonNegative::new(duration).map_err(InvalidInputError::Duration)?;
        Ok(energy(speed, duration, &self.config))
    }
}

impl From<TurbineConfig> for TurbineModel {
    fn from(config: TurbineConfig) -> Self {
        Self::new(config)
    }
}

impl Model for TurbineModel {
    type Input = Velocity;
    type Output = TurbineState;
    type Error = TurbineError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.state(*input)
    }
}
