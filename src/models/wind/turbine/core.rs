//! Stage classification and power computation for a single wind turbine.
//!
//! Every function here is pure: it reads an immutable [`TurbineConfig`] and
//! a validated input and returns a fresh value. Wind speeds are [`uom`]
//! quantities, so thresholds and inputs always compare in SI units no matter
//! which unit they were built from.

mod band;
mod classify;
mod config;
mod curve;
mod energy;
mod error;
mod power;
mod rotation;
mod state;
mod wind_speed;

#[cfg(test)]
pub(crate) mod test_support;

pub use band::{Stage, StageBand};
pub use classify::{Classification, classify};
pub use config::{
    BandDocument, DEFAULT_MIN_ROTATION_PERIOD, RatedDocument, RatedOutput, STANDARD_AIR_DENSITY,
    TurbineConfig, TurbineConfigBuilder, TurbineConfigDocument,
};
pub use curve::{CurveSample, PowerCurve, Samples, power_curve};
pub use energy::energy;
pub use error::{ConfigError, InvalidInputError, TurbineError};
pub use power::instantaneous_power;
pub use rotation::Rotation;
pub use state::TurbineState;
pub use wind_speed::WindSpeed;
