//! Shared fixtures for turbine tests.

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Ratio, Velocity},
    length::meter,
    ratio::ratio,
    velocity::kilometer_per_hour,
};

use super::{TurbineConfig, TurbineConfigBuilder};

pub(crate) fn kmh(value: f64) -> Velocity {
    Velocity::new::<kilometer_per_hour>(value)
}

pub(crate) fn rpm(value: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(value)
}

/// A 30 m rotor with Cp = 0.45 operating from 15 km/h up to 90 km/h.
pub(crate) fn reference_builder() -> TurbineConfigBuilder {
    TurbineConfig::builder(
        Length::new::<meter>(30.0),
        Ratio::new::<ratio>(0.45),
        kmh(15.0),
        kmh(90.0),
    )
    .band(kmh(20.0), "very-slow", rpm(5.0))
    .band(kmh(30.0), "slow", rpm(10.0))
    .band(kmh(45.0), "medium", rpm(20.0))
    .band(kmh(60.0), "fast", rpm(25.0))
    .band(kmh(90.0), "very-fast", rpm(35.0))
}

pub(crate) fn reference_config() -> TurbineConfig {
    reference_builder()
        .build()
        .expect("reference config should be valid")
}
