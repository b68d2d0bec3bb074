//! Validated turbine configuration.

mod document;

pub use document::{BandDocument, RatedDocument, TurbineConfigDocument};

use std::f64::consts::PI;

use uom::si::{
    f64::{AngularVelocity, Area, Length, MassDensity, Power, Ratio, Time, Velocity},
    mass_density::kilogram_per_cubic_meter,
    time::second,
    velocity::meter_per_second,
};

use crate::support::constraint::{FiniteNonNegative, FinitePositive, UnitIntervalLowerOpen};

use super::{ConfigError, StageBand, power::rotor_power};

/// Sea-level air density, in kg/m³.
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Shortest revolution period reported by default, in seconds.
pub const DEFAULT_MIN_ROTATION_PERIOD: f64 = 0.15;

/// Relative slack allowed when comparing a rated capacity to the cubic curve.
///
/// Absorbs the float error of converting through km/h and kW, so a capacity
/// set exactly on the curve still validates after a JSON round trip.
const RATED_CURVE_TOLERANCE: f64 = 1e-9;

/// Caps output at a generator's rated capacity.
///
/// From `speed` up to cut-off the turbine produces exactly `capacity`.
/// Below `speed` the cubic curve still applies but never exceeds `capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedOutput {
    speed: Velocity,
    capacity: Power,
}

impl RatedOutput {
    /// Constructs a rated output without validation.
    ///
    /// Values are checked when the owning [`TurbineConfig`] is built.
    #[must_use]
    pub fn new(speed: Velocity, capacity: Power) -> Self {
        Self { speed, capacity }
    }

    #[must_use]
    pub fn speed(&self) -> Velocity {
        self.speed
    }

    #[must_use]
    pub fn capacity(&self) -> Power {
        self.capacity
    }
}

/// Immutable physical constants and speed thresholds for one turbine.
///
/// A `TurbineConfig` can only be obtained through [`TurbineConfig::builder`]
/// or [`TurbineConfig::from_json_str`], both of which validate every field
/// and the stage band table.
///
/// # Example
///
/// ```
/// use turbine_models::models::wind::turbine::TurbineConfig;
/// use uom::si::{
///     angular_velocity::revolution_per_minute,
///     f64::{AngularVelocity, Length, Ratio, Velocity},
///     length::meter,
///     ratio::ratio,
///     velocity::kilometer_per_hour,
/// };
///
/// let kmh = Velocity::new::<kilometer_per_hour>;
/// let rpm = AngularVelocity::new::<revolution_per_minute>;
///
/// let config = TurbineConfig::builder(
///     Length::new::<meter>(30.0),
///     Ratio::new::<ratio>(0.45),
///     kmh(15.0),
///     kmh(90.0),
/// )
/// .band(kmh(45.0), "slow", rpm(10.0))
/// .band(kmh(90.0), "fast", rpm(30.0))
/// .build()
/// .unwrap();
///
/// assert_eq!(config.bands().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TurbineConfig {
    air_density: MassDensity,
    rotor_radius: Length,
    power_coefficient: Ratio,
    cut_in: Velocity,
    cut_off: Velocity,
    bands: Vec<StageBand>,
    rated: Option<RatedOutput>,
    min_rotation_period: Time,
}

impl TurbineConfig {
    /// Starts building a configuration from the parameters without defaults.
    #[must_use]
    pub fn builder(
        rotor_radius: Length,
        power_coefficient: Ratio,
        cut_in: Velocity,
        cut_off: Velocity,
    ) -> TurbineConfigBuilder {
        TurbineConfigBuilder {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(STANDARD_AIR_DENSITY),
            rotor_radius,
            power_coefficient,
            cut_in,
            cut_off,
            bands: Vec::new(),
            rated: None,
            min_rotation_period: Time::new::<second>(DEFAULT_MIN_ROTATION_PERIOD),
        }
    }

    #[must_use]
    pub fn air_density(&self) -> MassDensity {
        self.air_density
    }

    #[must_use]
    pub fn rotor_radius(&self) -> Length {
        self.rotor_radius
    }

    #[must_use]
    pub fn power_coefficient(&self) -> Ratio {
        self.power_coefficient
    }

    /// Returns the minimum wind speed at which the turbine produces power.
    #[must_use]
    pub fn cut_in(&self) -> Velocity {
        self.cut_in
    }

    /// Returns the wind speed at and above which the turbine shuts down.
    #[must_use]
    pub fn cut_off(&self) -> Velocity {
        self.cut_off
    }

    /// Returns the stage bands in ascending threshold order.
    #[must_use]
    pub fn bands(&self) -> &[StageBand] {
        &self.bands
    }

    #[must_use]
    pub fn rated(&self) -> Option<RatedOutput> {
        self.rated
    }

    #[must_use]
    pub fn min_rotation_period(&self) -> Time {
        self.min_rotation_period
    }

    /// Returns the area swept by the blades, `π·R²`.
    #[must_use]
    pub fn swept_area(&self) -> Area {
        self.rotor_radius * self.rotor_radius * PI
    }

    /// Returns `true` if `speed` lies in the operating range `[cut_in, cut_off)`.
    #[must_use]
    pub fn is_operating(&self, speed: Velocity) -> bool {
        speed >= self.cut_in && speed < self.cut_off
    }
}

/// Builder for [`TurbineConfig`].
///
/// Air density defaults to [`STANDARD_AIR_DENSITY`] and the minimum rotation
/// period to [`DEFAULT_MIN_ROTATION_PERIOD`].
#[derive(Debug, Clone)]
pub struct TurbineConfigBuilder {
    air_density: MassDensity,
    rotor_radius: Length,
    power_coefficient: Ratio,
    cut_in: Velocity,
    cut_off: Velocity,
    bands: Vec<StageBand>,
    rated: Option<RatedOutput>,
    min_rotation_period: Time,
}

impl TurbineConfigBuilder {
    #[must_use]
    pub fn air_density(mut self, air_density: MassDensity) -> Self {
        self.air_density = air_density;
        self
    }

    /// Appends a stage band.
    ///
    /// Bands must be added in ascending order of their upper threshold.
    #[must_use]
    pub fn band(
        mut self,
        upper: Velocity,
        label: impl Into<String>,
        rotation_rate: AngularVelocity,
    ) -> Self {
        self.bands.push(StageBand::new(upper, label, rotation_rate));
        self
    }

    /// Appends several stage bands.
    #[must_use]
    pub fn bands(mut self, bands: impl IntoIterator<Item = StageBand>) -> Self {
        self.bands.extend(bands);
        self
    }

    /// Caps output at a rated capacity from the rated speed up to cut-off.
    #[must_use]
    pub fn rated_output(mut self, speed: Velocity, capacity: Power) -> Self {
        self.rated = Some(RatedOutput::new(speed, capacity));
        self
    }

    #[must_use]
    pub fn min_rotation_period(mut self, period: Time) -> Self {
        self.min_rotation_period = period;
        self
    }

    /// Validates the parameters and band table.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any physical constant is out of range,
    /// if cut-in is not below cut-off, if the bands do not partition
    /// `[cut_in, cut_off)`, or if the rated output lies outside the
    /// operating range.
    pub fn build(self) -> Result<TurbineConfig, ConfigError> {
        let air_density = FinitePositive::new(self.air_density)
            .map_err(ConfigError::AirDensity)?
            .into_inner();
        let rotor_radius = FinitePositive::new(self.rotor_radius)
            .map_err(ConfigError::RotorRadius)?
            .into_inner();
        let power_coefficient = UnitIntervalLowerOpen::new(self.power_coefficient)
            .map_err(ConfigError::PowerCoefficient)?
            .into_inner();
        let cut_in = FiniteNonNegative::new(self.cut_in)
            .map_err(ConfigError::CutIn)?
            .into_inner();
        let cut_off = FiniteNonNegative::new(self.cut_off)
            .map_err(ConfigError::CutOff)?
            .into_inner();

        if cut_in >= cut_off {
            return Err(ConfigError::CutInNotBelowCutOff { cut_in, cut_off });
        }

        validate_bands(&self.bands, cut_in, cut_off)?;

        let min_rotation_period = FinitePositive::new(self.min_rotation_period)
            .map_err(ConfigError::MinRotationPeriod)?
            .into_inner();

        tracing::debug!(
            bands = self.bands.len(),
            cut_in_ms = cut_in.get::<meter_per_second>(),
            cut_off_ms = cut_off.get::<meter_per_second>(),
            rated = self.rated.is_some(),
            "validated turbine configuration"
        );

        let config = TurbineConfig {
            air_density,
            rotor_radius,
            power_coefficient,
            cut_in,
            cut_off,
            bands: self.bands,
            rated: self.rated,
            min_rotation_period,
        };

        if let Some(rated) = config.rated {
            validate_rated(rated, &config)?;
        }

        Ok(config)
    }
}

/// Checks that the bands partition `[cut_in, cut_off)` with no gaps or overlaps.
///
/// Each band covers `(previous upper, upper]`, so strictly ascending
/// thresholds are contiguous by construction. What remains is to reject
/// bands that no operating speed can reach and a table that stops short of
/// cut-off.
fn validate_bands(bands: &[StageBand], cut_in: Velocity, cut_off: Velocity) -> Result<(), ConfigError> {
    let Some(last) = bands.last() else {
        return Err(ConfigError::NoBands);
    };

    let mut previous: Option<Velocity> = None;
    for (index, band) in bands.iter().enumerate() {
        FiniteNonNegative::new(band.upper())
            .map_err(|source| ConfigError::BandThreshold { index, source })?;
        FinitePositive::new(band.rotation_rate())
            .map_err(|source| ConfigError::BandRotationRate { index, source })?;

        if band.label().trim().is_empty() {
            return Err(ConfigError::BandLabel { index });
        }

        if band.upper() < cut_in {
            return Err(ConfigError::UnreachableBand { index });
        }

        if let Some(previous) = previous {
            if band.upper() <= previous {
                return Err(ConfigError::BandsNotAscending { index });
            }
            if previous >= cut_off {
                return Err(ConfigError::UnreachableBand { index });
            }
        }

        previous = Some(band.upper());
    }

    if last.upper() < cut_off {
        return Err(ConfigError::BandsEndBeforeCutOff {
            last_upper: last.upper(),
            cut_off,
        });
    }

    Ok(())
}

/// Checks that the rated speed lies inside the operating range and that
/// the capacity does not exceed the cubic curve at the rated speed.
fn validate_rated(rated: RatedOutput, config: &TurbineConfig) -> Result<(), ConfigError> {
    let speed = FiniteNonNegative::new(rated.speed())
        .map_err(ConfigError::RatedSpeed)?
        .into_inner();
    let capacity = FinitePositive::new(rated.capacity())
        .map_err(ConfigError::RatedCapacity)?
        .into_inner();

    if speed <= config.cut_in() || speed >= config.cut_off() {
        return Err(ConfigError::RatedSpeedOutOfRange { speed });
    }

    let curve_at_rated = rotor_power(speed, config);
    if capacity > curve_at_rated * (1.0 + RATED_CURVE_TOLERANCE) {
        return Err(ConfigError::RatedCapacityAboveCurve {
            capacity,
            curve_at_rated,
        });
    }

    Ok(())
}
