use thiserror::Error;
use uom::si::f64::{Power, Velocity};

use crate::support::constraint::ConstraintError;

/// Errors raised while building a [`TurbineConfig`](super::TurbineConfig).
///
/// A configuration is validated once, at construction, so none of these
/// can surface from a computation on an already-built config except
/// [`ConfigError::UncoveredSpeed`], which signals a broken band table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid air density")]
    AirDensity(#[source] ConstraintError),

    #[error("invalid rotor radius")]
    RotorRadius(#[source] ConstraintError),

    #[error("invalid power coefficient")]
    PowerCoefficient(#[source] ConstraintError),

    #[error("invalid cut-in speed")]
    CutIn(#[source] ConstraintError),

    #[error("invalid cut-off speed")]
    CutOff(#[source] ConstraintError),

    /// The operating range `[cut_in, cut_off)` is empty.
    #[error("cut-in speed {cut_in:?} must be below cut-off speed {cut_off:?}")]
    CutInNotBelowCutOff { cut_in: Velocity, cut_off: Velocity },

    #[error("at least one stage band is required")]
    NoBands,

    #[error("invalid upper threshold for stage band {index}")]
    BandThreshold {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid rotation rate for stage band {index}")]
    BandRotationRate {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("stage band {index} has an empty label")]
    BandLabel { index: usize },

    /// A band's upper threshold does not exceed the previous band's, so the
    /// two would overlap.
    #[error("stage band {index} does not start above the previous band")]
    BandsNotAscending { index: usize },

    /// No speed in `[cut_in, cut_off)` can ever select this band.
    #[error("stage band {index} is unreachable within the operating range")]
    UnreachableBand { index: usize },

    /// The last band stops short of cut-off, leaving a gap.
    #[error("stage bands end at {last_upper:?}, short of cut-off speed {cut_off:?}")]
    BandsEndBeforeCutOff {
        last_upper: Velocity,
        cut_off: Velocity,
    },

    #[error("invalid rated speed")]
    RatedSpeed(#[source] ConstraintError),

    #[error("invalid rated capacity")]
    RatedCapacity(#[source] ConstraintError),

    /// The rated speed must lie strictly inside the operating range.
    #[error("rated speed {speed:?} is outside the operating range")]
    RatedSpeedOutOfRange { speed: Velocity },

    /// The capacity is higher than the cubic curve reaches at the rated
    /// speed, which would make output jump upward there.
    #[error("rated capacity {capacity:?} exceeds the power curve at rated speed ({curve_at_rated:?})")]
    RatedCapacityAboveCurve {
        capacity: Power,
        curve_at_rated: Power,
    },

    #[error("invalid minimum rotation period")]
    MinRotationPeriod(#[source] ConstraintError),

    /// No stage band covers a speed inside the operating range.
    #[error("no stage band covers wind speed {speed:?}")]
    UncoveredSpeed { speed: Velocity },

    #[error("malformed turbine configuration document")]
    Document(#[from] serde_json::Error),
}

/// Errors raised when a caller-supplied input is rejected before computation.
///
/// Inputs are never clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("invalid wind speed")]
    WindSpeed(#[source] ConstraintError),

    #[error("invalid duration")]
    Duration(#[source] ConstraintError),

    #[error("invalid power curve domain")]
    CurveDomain(#[source] ConstraintError),

    #[error("a power curve needs at least one sample")]
    NoSamples,
}

/// Any error produced by a turbine model.
#[derive(Debug, Error)]
pub enum TurbineError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
